//! Blocklist line-format parsing: hosts-file, AdBlock-filter, and
//! plain-domain-per-line, as detailed in the Filter Engine's ingestion
//! rules.

use aegis_dns_domain::domain_name::normalize;

/// Parses one line of a remote blocklist body into a normalized domain,
/// or `None` if the line is a comment, blank, or doesn't match any known
/// format.
pub fn parse_list_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    if let Some(rest) = line
        .strip_prefix("0.0.0.0")
        .or_else(|| line.strip_prefix("127.0.0.1"))
    {
        let domain = rest.split_whitespace().next()?;
        return reject_placeholder(domain).map(|d| normalize(d));
    }

    if let Some(rest) = line.strip_prefix("||") {
        let end = rest
            .find(['/', '^', '?'])
            .unwrap_or(rest.len());
        let domain = &rest[..end];
        if domain.is_empty() {
            return None;
        }
        return Some(normalize(domain));
    }

    if line.contains('.') && !line.contains(' ') && !line.contains('\t') {
        return Some(normalize(line));
    }

    None
}

fn reject_placeholder(domain: &str) -> Option<&str> {
    match domain {
        "localhost" | "0.0.0.0" | "127.0.0.1" => None,
        d => Some(d),
    }
}

/// Parses an entire blocklist body, skipping lines that don't yield a
/// domain.
pub fn parse_list_text(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines().filter_map(parse_list_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hosts_format() {
        assert_eq!(
            parse_list_line("0.0.0.0 ads.example.com"),
            Some("ads.example.com".to_string())
        );
        assert_eq!(parse_list_line("127.0.0.1 localhost"), None);
    }

    #[test]
    fn parses_adblock_format() {
        assert_eq!(
            parse_list_line("||tracker.example.com^"),
            Some("tracker.example.com".to_string())
        );
        assert_eq!(
            parse_list_line("||ads.example.com/banner?x=1"),
            Some("ads.example.com".to_string())
        );
    }

    #[test]
    fn parses_plain_domain() {
        assert_eq!(
            parse_list_line("Plain.Example.COM"),
            Some("plain.example.com".to_string())
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        assert_eq!(parse_list_line("# a comment"), None);
        assert_eq!(parse_list_line("! adblock comment"), None);
        assert_eq!(parse_list_line(""), None);
        assert_eq!(parse_list_line("   "), None);
    }

    #[test]
    fn rejects_lines_with_spaces_and_no_dot() {
        assert_eq!(parse_list_line("not a domain"), None);
        assert_eq!(parse_list_line("nodothere"), None);
    }
}
