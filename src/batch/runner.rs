//! Parallel parsing of many transcripts.
//!
//! # Error Handling Strategy
//!
//! Batch runs follow a **graceful degradation** approach suitable for CLI tools:
//!
//! - **File-level errors**: unreadable, oversized or non-UTF-8 transcripts are logged as
//!   warnings and reported per file, without failing the run
//! - **Failure threshold**: the run fails if more than 50% of transcripts fail to load
//! - **User feedback**: a summary event reports how many transcripts parsed and failed
//!
//! Each transcript gets its own parser, so transcripts are parsed in parallel with rayon.

use std::path::PathBuf;

use anyhow::{Result, bail};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::models::{ParsedConversation, Statistics};
use crate::parsers::ParserOptions;
use crate::utils::parse_transcript_file;

/// Outcome of parsing one transcript file
#[derive(Debug)]
pub struct TranscriptReport {
    pub path: PathBuf,
    pub result: Result<ParsedConversation>,
}

impl TranscriptReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Parse every path in parallel, returning one report per path in input order
///
/// # Errors
///
/// Returns an error if more than 50% of the transcripts fail to load. Individual
/// failures below that threshold are logged and kept in their report.
pub fn parse_many(paths: &[PathBuf], options: &ParserOptions) -> Result<Vec<TranscriptReport>> {
    let reports: Vec<TranscriptReport> = paths
        .par_iter()
        .map(|path| TranscriptReport {
            path: path.clone(),
            result: parse_transcript_file(path, options),
        })
        .collect();

    let failed = reports.iter().filter(|r| !r.is_ok()).count();
    for report in &reports {
        if let Err(e) = &report.result {
            warn!("Failed to parse transcript {}: {:#}", report.path.display(), e);
        }
    }

    if !reports.is_empty() {
        let failure_rate = failed as f64 / reports.len() as f64;
        if failure_rate > 0.5 {
            bail!(
                "Batch parsing failed: {}/{} transcripts failed to parse ({}% failure rate)",
                failed,
                reports.len(),
                (failure_rate * 100.0) as u32
            );
        }
    }

    info!("Parsed {} transcripts ({} failed)", reports.len() - failed, failed);

    Ok(reports)
}

/// Merge the statistics of every successfully parsed transcript
pub fn summarize(reports: &[TranscriptReport]) -> Statistics {
    reports.iter().filter_map(|r| r.result.as_ref().ok()).fold(
        Statistics::default(),
        |mut total, doc| {
            total.merge(&doc.statistics);
            total
        },
    )
}
