use std::sync::LazyLock;

use regex::Regex;

/// Matches a "line number + arrow" prefix such as `   42→`
static LINE_NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+→(.*)$").expect("line number prefix regex is valid"));

/// Strip a leading "line number + arrow" prefix from a single line
///
/// Lines without the prefix are returned unchanged.
pub fn normalize_line(line: &str) -> &str {
    match LINE_NUMBER_PREFIX.captures(line).and_then(|caps| caps.get(1)) {
        Some(rest) => rest.as_str(),
        None => line,
    }
}

/// Split raw transcript text into logical lines with line-number prefixes removed
///
/// The output has exactly one entry per physical line of the input.
///
/// # Examples
///
/// ```
/// use ai_transcript_explorer::parsers::normalize_lines;
///
/// let lines = normalize_lines("     1→> hello\nplain");
/// assert_eq!(lines, vec!["> hello", "plain"]);
/// ```
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines().map(normalize_line).collect()
}
