//! Data models for parsed coding-assistant transcripts.
//!
//! This module defines the document produced by the transcript parser:
//!
//! - [`ParsedConversation`] - Top-level document with metadata, sections and statistics
//! - [`Section`] - Topical group of messages, code blocks and file changes
//! - [`Message`] - One utterance or event, classified by [`MessageKind`]
//! - [`CodeBlock`] - Fenced code captured verbatim
//! - [`FileChange`] - Target of a tool invocation, classified by [`ChangeType`]
//! - [`Statistics`] - Aggregate counters over the whole document
//!
//! All models serialize with serde using camelCase keys, which is the shape
//! renderers consume.

pub mod conversation;
pub mod statistics;

pub use conversation::{
    ChangeType, CodeBlock, FileChange, Message, MessageKind, ParsedConversation,
    SESSION_START_TITLE, Section,
};
pub use statistics::Statistics;
