use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::ParsedConversation;
use crate::parsers::{ParserOptions, parse_transcript_with};
use crate::utils::paths::validate_file_size;

/// Read a transcript file into memory
///
/// The size check runs on the open handle, so the limit applies to the bytes
/// actually read.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file is larger than `max_bytes`
/// - The content is not valid UTF-8
pub fn read_transcript(path: &Path, max_bytes: u64) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open transcript: {}", path.display()))?;
    validate_file_size(&file, path, max_bytes)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read transcript: {}", path.display()))?;

    let text = String::from_utf8(bytes)
        .with_context(|| format!("Transcript is not valid UTF-8: {}", path.display()))?;

    debug!(path = %path.display(), bytes = text.len(), "loaded transcript");
    Ok(text)
}

/// Read and parse a transcript file in one step
///
/// # Errors
///
/// Returns an error only for I/O and decoding failures; parsing itself cannot fail.
pub fn parse_transcript_file(path: &Path, options: &ParserOptions) -> Result<ParsedConversation> {
    let text = read_transcript(path, options.max_file_size)?;
    Ok(parse_transcript_with(&text, options))
}
