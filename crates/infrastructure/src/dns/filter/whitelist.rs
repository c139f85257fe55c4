//! Whitelist matching.
//!
//! `is_whitelisted` strips only the leading `*` off a `*.SUFFIX` pattern,
//! leaving the dot attached to `SUFFIX`, and does a plain string-suffix
//! test against `.SUFFIX`. That dot is what makes this a true label
//! boundary match despite being implemented as a bare `ends_with`: a
//! pattern `*.example.com` matches `www.example.com` (suffix
//! `.example.com` present) but not `notexample.com` (no dot before
//! `example.com`) and not the bare domain `example.com` itself (it has no
//! leading dot to match against). See DESIGN.md for why this reading was
//! chosen over the literal `SUFFIX`-without-dot reading of §4.3.
use std::collections::HashSet;

pub fn is_whitelisted(whitelist: &HashSet<String>, name: &str) -> bool {
    if whitelist.contains(name) {
        return true;
    }
    whitelist.iter().any(|pattern| {
        pattern
            .strip_prefix('*')
            .map(|suffix| name.ends_with(suffix))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[&str]) -> HashSet<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn literal_match_wins() {
        let wl = set(&["example.com"]);
        assert!(is_whitelisted(&wl, "example.com"));
    }

    #[test]
    fn wildcard_matches_subdomain() {
        let wl = set(&["*.example.com"]);
        assert!(is_whitelisted(&wl, "www.example.com"));
    }

    #[test]
    fn wildcard_requires_a_label_boundary() {
        let wl = set(&["*.example.com"]);
        assert!(!is_whitelisted(&wl, "notexample.com"));
    }

    #[test]
    fn wildcard_does_not_cover_the_bare_parent_domain() {
        // spec.md §8 scenario 4's "Testable edge case": `*.example.com`
        // requires a leading dot before `example.com`, which the bare
        // domain itself does not have.
        let wl = set(&["*.example.com"]);
        assert!(!is_whitelisted(&wl, "example.com"));
    }

    #[test]
    fn non_matching_name_is_not_whitelisted() {
        let wl = set(&["*.example.com"]);
        assert!(!is_whitelisted(&wl, "example.org"));
    }
}
