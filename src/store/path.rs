// src/store/path.rs

//! Dot-path helpers shared by lookup and invalidation.

/// Segments of a dot-path, in order. Always yields at least one segment;
/// empty segments (`"a..b"`) are kept as empty keys.
pub fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split('.')
}

/// Every ancestor path of `key` followed by `key` itself:
/// `"a.b.c"` yields `"a"`, `"a.b"`, `"a.b.c"`.
pub fn prefixes(key: &str) -> impl Iterator<Item = &str> {
    key.match_indices('.')
        .map(move |(i, _)| &key[..i])
        .chain(std::iter::once(key))
}

/// True if `candidate` lies strictly below `key` (`"a.b.c"` under `"a.b"`,
/// but not `"a.bc"`).
pub fn is_descendant(candidate: &str, key: &str) -> bool {
    candidate.len() > key.len()
        && candidate.starts_with(key)
        && candidate.as_bytes()[key.len()] == b'.'
}

/// Canonical sequence index: decimal digits, no sign, no leading zeros.
pub fn index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}
