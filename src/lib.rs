//! AI Transcript Explorer - Turn coding-assistant session transcripts into structured documents
//!
//! This library parses the plain-text transcript of an interactive coding-assistant
//! session (prompts, replies, tool invocations and their output, fenced code and
//! narration) into a typed document. It supports:
//!
//! - Stripping `  12→` line-number prefixes from copied transcripts
//! - Splitting the conversation into topical sections on major user prompts
//! - Classifying messages as user, assistant, tool, git or thinking
//! - Capturing fenced code blocks and file-touch records from tool invocations
//! - Aggregating statistics: per-kind counts, touched files, code blocks and emoji
//! - Parsing directories of transcripts in parallel
//!
//! # Example
//!
//! ```
//! use ai_transcript_explorer::parse_transcript;
//!
//! let doc = parse_transcript("> Why does the build fail on CI?\n● Bash(cargo build)\n");
//! assert_eq!(doc.sections[0].title, "Why does the build fail on");
//! assert_eq!(doc.statistics.tool_calls, 1);
//! ```

pub mod batch;
pub mod cli;
pub mod models;
pub mod parsers;
pub mod stats;
pub mod utils;

// Re-export commonly used types
pub use models::{ParsedConversation, Section, Statistics};
pub use parsers::{ParserOptions, parse_transcript, parse_transcript_with};
pub use utils::{format_path_with_tilde, parse_transcript_file, read_transcript};
