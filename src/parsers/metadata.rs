use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

/// Title given to every parsed transcript
pub const DEFAULT_TITLE: &str = "Coding Session Transcript";

/// Model name used when no known family is mentioned
pub const DEFAULT_MODEL: &str = "Claude";

/// Known model families: substring to look for, reported model name
const MODEL_FAMILIES: [(&str, &str); 2] = [("Opus", "Claude Opus"), ("Sonnet", "Claude Sonnet")];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD` not preceded by a digit; a trailing digit is rejected in `find_date`
static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(\d{4}-\d{2}-\d{2})").expect("date regex is valid")
});

/// Windows drive path or POSIX absolute path, at line start or after whitespace.
/// A single space continues the path only when the next chunk holds a separator.
static PROJECT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)([A-Za-z]:\\\S*(?: \S*\\\S*)*|/\S+(?: \S*/\S*)*)")
        .expect("project path regex is valid")
});

/// Document-level facts recovered from the transcript text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptMetadata {
    pub title: String,
    pub date: String,
    pub model: String,
    pub project_path: String,
}

/// Scan a transcript for its metadata
///
/// Model and project path are only looked for in the first `scan_lines`
/// normalized lines. The date comes from the first valid `YYYY-MM-DD` token
/// anywhere in `raw`, falling back to today's local date.
pub fn scan_metadata(lines: &[&str], raw: &str, scan_lines: usize) -> TranscriptMetadata {
    scan_metadata_internal(lines, raw, scan_lines, None)
}

/// Internal helper with an optional override for "today" (for testing)
pub(crate) fn scan_metadata_internal(
    lines: &[&str],
    raw: &str,
    scan_lines: usize,
    today_override: Option<NaiveDate>,
) -> TranscriptMetadata {
    let head = &lines[..lines.len().min(scan_lines)];

    let model = head
        .iter()
        .find_map(|line| {
            MODEL_FAMILIES.iter().find(|(needle, _)| line.contains(needle)).map(|(_, name)| *name)
        })
        .unwrap_or(DEFAULT_MODEL)
        .to_string();

    let project_path = head
        .iter()
        .find_map(|line| PROJECT_PATH.captures(line).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let date = find_date(raw)
        .or(today_override)
        .unwrap_or_else(|| Local::now().date_naive())
        .format(DATE_FORMAT)
        .to_string();

    TranscriptMetadata { title: DEFAULT_TITLE.to_string(), date, model, project_path }
}

/// First token shaped like `YYYY-MM-DD` that is also a real calendar date
fn find_date(raw: &str) -> Option<NaiveDate> {
    ISO_DATE
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .filter(|m| !raw[m.end()..].starts_with(|c: char| c.is_ascii_digit()))
        .find_map(|m| NaiveDate::parse_from_str(m.as_str(), DATE_FORMAT).ok())
}
