/// Maximum transcript size accepted by the file loader: 10MB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Number of leading lines searched for model and project path
pub const DEFAULT_METADATA_SCAN_LINES: usize = 20;

/// Tunables for transcript parsing and loading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Close the open message when a code fence opens, so no message straddles a code block
    pub flush_message_at_fence: bool,
    /// Keep sections that hold code blocks or file changes but no messages
    pub keep_empty_sections: bool,
    pub metadata_scan_lines: usize,
    pub max_file_size: u64,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            flush_message_at_fence: true,
            keep_empty_sections: false,
            metadata_scan_lines: DEFAULT_METADATA_SCAN_LINES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}
