pub mod discovery;
pub mod runner;

pub use discovery::discover_transcripts;
pub use runner::{TranscriptReport, parse_many, summarize};
