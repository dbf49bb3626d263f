//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for transcript text
pub struct TranscriptBuilder {
    lines: Vec<String>,
    numbered: bool,
}

impl TranscriptBuilder {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self { lines: Vec::new(), numbered: false }
    }

    /// Add a raw line verbatim
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add a user prompt (`> text`); extra lines follow unprefixed
    pub fn prompt(mut self, text: &str) -> Self {
        let mut parts = text.lines();
        if let Some(first) = parts.next() {
            self.lines.push(format!("> {}", first));
        }
        self.lines.extend(parts.map(str::to_string));
        self
    }

    /// Add an assistant reply (`● text`)
    pub fn reply(mut self, text: &str) -> Self {
        self.lines.push(format!("● {}", text));
        self
    }

    /// Add a tool invocation (`● Tool(argument)`)
    pub fn tool(mut self, name: &str, argument: &str) -> Self {
        self.lines.push(format!("● {}({})", name, argument));
        self
    }

    /// Add a tool result line (`  ⎿  text`)
    pub fn result(mut self, text: &str) -> Self {
        self.lines.push(format!("  ⎿  {}", text));
        self
    }

    /// Add an indented continuation line
    pub fn continuation(mut self, text: &str) -> Self {
        self.lines.push(format!("  {}", text));
        self
    }

    /// Add a fenced code block
    pub fn code(mut self, language: &str, body: &str) -> Self {
        self.lines.push(format!("```{}", language));
        self.lines.extend(body.lines().map(str::to_string));
        self.lines.push("```".to_string());
        self
    }

    /// Add a blank line
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Prefix every line with `     N→` as copied transcripts do
    pub fn numbered(mut self) -> Self {
        self.numbered = true;
        self
    }

    /// Render the transcript text
    pub fn build(&self) -> String {
        let mut text = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if self.numbered {
                text.push_str(&format!("{:>6}→", i + 1));
            }
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl Default for TranscriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a temporary directory of transcript files
pub struct TranscriptDirBuilder {
    temp_dir: TempDir,
}

impl TranscriptDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a transcript file (relative path, parent dirs created)
    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.with_bytes(name, content.as_bytes())
    }

    /// Write raw bytes, e.g. to create undecodable files
    pub fn with_bytes(self, name: &str, content: &[u8]) -> Self {
        let path = self.temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, content).expect("Failed to write transcript");
        self
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for TranscriptDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A realistic session: banner, two topics, tools, git, code and emoji
pub fn realistic_transcript() -> String {
    TranscriptBuilder::new()
        .line("╭───────────────────────────────────────────────────╮")
        .line("│ ✻ Welcome to the assistant!                       │")
        .line("│   cwd: /Users/alice/work/payments-api             │")
        .line("╰───────────────────────────────────────────────────╯")
        .line(" Model: Sonnet 4 · Session started 2025-02-14")
        .blank()
        .prompt("Why is the refund endpoint returning 500 errors in staging?")
        .blank()
        .reply("Let me look at the refund handler first. 🔍")
        .tool("Read", "src/handlers/refund.rs")
        .result("Read 120 lines (ctrl+r to expand)")
        .tool("Grep", "RefundError")
        .result("Found 4 files")
        .reply("The handler unwraps a missing currency field:")
        .code("rust", "let currency = req.currency.unwrap();")
        .tool("Edit", "src/handlers/refund.rs")
        .result("Updated src/handlers/refund.rs with 3 additions")
        .reply("Fixed ✅")
        .prompt("great, thanks")
        .reply("You're welcome! 🎉")
        .prompt("Can you commit this and open a pull request for review?")
        .tool("Bash", "git add -A && git commit -m \"Handle missing currency\"")
        .result("[main 1a2b3c4] Handle missing currency")
        .tool("Bash", "cargo test")
        .result("test result: ok. 42 passed")
        .line("<thinking>")
        .continuation("Need to push before opening the PR")
        .tool("Read", "src/handlers/refund.rs")
        .reply("Committed and tests pass 🎉")
        .build()
}
