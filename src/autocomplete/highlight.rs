/// Byte ranges of case-insensitive (ASCII) matches of `query` in `text`
///
/// Matches do not overlap. An empty query matches nothing.
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let haystack = text.to_ascii_lowercase();
    let needle = query.to_ascii_lowercase();

    let mut ranges = Vec::new();
    let mut offset = 0;
    while let Some(pos) = haystack[offset..].find(&needle) {
        let start = offset + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        offset = end;
    }
    ranges
}
