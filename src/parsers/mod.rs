//! Plain-text transcript parsing.
//!
//! A transcript goes through two strictly sequential stages:
//!
//! 1. [`normalizer`] strips `  12→` line-number prefixes, keeping one entry per line.
//! 2. [`transcript`] runs a single forward pass over the normalized lines, classifying
//!    each one with [`classifier`] and building sections, messages, code blocks and
//!    file-change records. [`metadata`] recovers title, date, model and project path.
//!
//! # Error Handling Strategy
//!
//! Parsing is infallible. Every line falls through to a discard case when nothing
//! matches, so malformed text produces less structure rather than an error:
//!
//! - **Tool output with no tool message open**: dropped
//! - **Unterminated code fence**: buffered code is dropped at end of input
//! - **Sections without messages**: dropped unless [`ParserOptions::keep_empty_sections`]
//!
//! These drops are reported as `tracing` debug events. I/O failures belong to the
//! loader in [`crate::utils::files`], which returns `anyhow::Result`.

pub mod classifier;
pub mod metadata;
pub mod normalizer;
pub mod options;
pub mod tools;
pub mod transcript;

pub use classifier::{LineKind, classify_line};
pub use metadata::{TranscriptMetadata, scan_metadata};
pub use normalizer::{normalize_line, normalize_lines};
pub use options::ParserOptions;
pub use tools::{Tool, ToolCall, parse_tool_call};
pub use transcript::{TranscriptParser, derive_title, parse_transcript, parse_transcript_with};
