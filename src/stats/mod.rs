//! Statistics aggregation over parsed transcripts.
//!
//! - [`compute_statistics`] - Per-kind message counts, distinct touched files,
//!   code-block totals and emoji frequencies for one document
//! - [`emoji`] - Static emoji codepoint table and scanner

pub mod aggregate;
pub mod emoji;

pub use aggregate::compute_statistics;
pub use emoji::{count_emojis, is_emoji};
