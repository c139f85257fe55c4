/// Normalizes a domain name to the form every set key and lookup in this
/// workspace uses: lowercase, trailing dot stripped. The empty string
/// normalizes to itself and is never considered a member of any blocklist.
pub fn normalize(name: &str) -> String {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    trimmed.to_ascii_lowercase()
}

/// Yields every strict parent suffix of a normalized name, most specific
/// first, for the hierarchical suffix match in the filter engine. Given
/// `a.b.c` this yields `b.c`, then `c`. The name itself is never yielded —
/// callers check the exact name separately.
pub fn parent_suffixes(normalized: &str) -> impl Iterator<Item = &str> {
    let mut labels = normalized.char_indices().filter(|&(_, c)| c == '.');
    let mut start = 0usize;
    std::iter::from_fn(move || {
        let (idx, _) = labels.next()?;
        start = idx + 1;
        Some(&normalized[start..])
    })
}
