//! Small string helpers for session files and file names

/// Name of a file without its extension and without trailing digits
///
/// Session files are saved as `<prefix><timestamp>.<ext>`, so this recovers
/// the prefix shared by every file of a series. A name made only of digits
/// yields an empty prefix.
pub fn extract_non_digit_prefix(name: &str) -> &str {
    let stem = name.split('.').next().unwrap_or_default();
    stem.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Remove every whitespace character, not only the leading and trailing ones
pub fn trim_all_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Byte offsets of every non-overlapping occurrence of `symbol` in `text`
pub fn find_all(text: &str, symbol: &str) -> Vec<usize> {
    if symbol.is_empty() {
        return Vec::new();
    }
    text.match_indices(symbol).map(|(offset, _)| offset).collect()
}
