pub mod files;
pub mod paths;

pub use files::{parse_transcript_file, read_transcript};
pub use paths::{format_path_with_tilde, validate_file_size, validate_path_not_symlink};
