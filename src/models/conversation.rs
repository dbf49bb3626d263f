use serde::{Deserialize, Serialize};

use crate::models::Statistics;

/// Title given to the section that exists before any topic-changing prompt
pub const SESSION_START_TITLE: &str = "Session Start";

/// Kind of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Assistant,
    Tool,
    Git,
    Thinking,
    System,
}

/// A single utterance or event in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub kind: MessageKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_git_action: Option<bool>,
}

impl Message {
    pub fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self { kind, content: content.into(), tool_name: None, file_name: None, is_git_action: None }
    }

    /// Append a continuation line, separated from the existing content by a newline
    pub fn append_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }

    /// Tool and git messages are the only ones that accept tool-result lines
    pub fn accepts_tool_output(&self) -> bool {
        matches!(self.kind, MessageKind::Tool | MessageKind::Git)
    }
}

/// A fenced code block captured from the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub language: String,
    pub code: String,
}

/// How a tool invocation touched its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Read,
    Update,
    Create,
    Search,
}

/// Record of a tool invocation that named a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChange {
    pub file_name: String,
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub details: String,
}

/// A topical group of consecutive messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub messages: Vec<Message>,
    pub code_blocks: Vec<CodeBlock>,
    pub file_changes: Vec<FileChange>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            messages: Vec::new(),
            code_blocks: Vec::new(),
            file_changes: Vec::new(),
        }
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    /// True if the section holds anything besides its title
    pub fn has_content(&self) -> bool {
        self.has_messages() || !self.code_blocks.is_empty() || !self.file_changes.is_empty()
    }
}

/// Structured result of parsing one transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConversation {
    pub title: String,
    pub date: String,
    pub model: String,
    pub project_path: String,
    pub sections: Vec<Section>,
    pub statistics: Statistics,
}

impl ParsedConversation {
    /// Iterate every message across all sections, in transcript order
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.sections.iter().flat_map(|s| s.messages.iter())
    }
}
