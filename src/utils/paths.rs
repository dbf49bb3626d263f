use std::borrow::Cow;
use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Validates that a file's size is within `max_bytes`
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and the subsequent read.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than `max_bytes`
pub fn validate_file_size(file: &File, path: &Path, max_bytes: u64) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > max_bytes {
        bail!("File too large: {} ({} bytes, max {} bytes)", path.display(), file_size, max_bytes);
    }

    Ok(())
}

/// Rejects symlinks so directory walks cannot escape the requested tree
///
/// # Errors
///
/// Returns an error if the path metadata cannot be read or the path is a symlink.
pub fn validate_path_not_symlink(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?;

    if metadata.file_type().is_symlink() {
        bail!("Symlinks are not allowed: {}", path.display());
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use ai_transcript_explorer::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/transcripts/session.txt");
/// // Returns "~/transcripts/session.txt" if the home directory is /Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir();
    let home_str = home.as_ref().map(|h| h.to_string_lossy());
    format_path_with_tilde_internal(path, home_str.as_deref())
}

/// Internal helper for path formatting with an explicit home directory (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&str>) -> String {
    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    // Avoid double allocation when converting Cow to String
    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
