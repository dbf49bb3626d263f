use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::warn;
use walkdir::WalkDir;

use crate::utils::validate_path_not_symlink;

/// Maximum number of transcripts gathered in one run (security: prevent resource exhaustion)
pub const MAX_TRANSCRIPTS: usize = 1000;

/// File extensions treated as transcripts when walking a directory
pub const TRANSCRIPT_EXTENSIONS: [&str; 3] = ["txt", "log", "md"];

/// Expand command-line paths into a list of transcript files
///
/// Files are taken as given, whatever their extension. Directories are walked
/// recursively for files with a [`TRANSCRIPT_EXTENSIONS`] extension, in sorted
/// order. Symlinks found while walking are skipped with a warning.
///
/// # Errors
///
/// Returns an error if:
/// - A given path does not exist
/// - More than [`MAX_TRANSCRIPTS`] (1000) transcripts are found
///
/// Unreadable directory entries are logged as warnings and skipped (graceful degradation).
pub fn discover_transcripts(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut transcripts = Vec::new();

    for path in paths {
        let metadata = path
            .metadata()
            .with_context(|| format!("Transcript path not found: {}", path.display()))?;

        if metadata.is_file() {
            push_limited(&mut transcripts, path.clone())?;
            continue;
        }

        for entry in WalkDir::new(path).follow_links(false).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", path.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                if entry.path_is_symlink() {
                    warn!("Skipping symlink (not allowed): {}", entry.path().display());
                }
                continue;
            }

            if !has_transcript_extension(entry.path()) {
                continue;
            }

            if let Err(e) = validate_path_not_symlink(entry.path()) {
                warn!("Skipping transcript: {}", e);
                continue;
            }

            push_limited(&mut transcripts, entry.into_path())?;
        }
    }

    Ok(transcripts)
}

fn push_limited(transcripts: &mut Vec<PathBuf>, path: PathBuf) -> Result<()> {
    if transcripts.len() >= MAX_TRANSCRIPTS {
        bail!(
            "Resource limit exceeded: Found more than {} transcripts. Narrow the input paths.",
            MAX_TRANSCRIPTS
        );
    }
    transcripts.push(path);
    Ok(())
}

fn has_transcript_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TRANSCRIPT_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}
