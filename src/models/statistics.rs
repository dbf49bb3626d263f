use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate counters for a parsed transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    pub thinking_messages: usize,
    pub tool_calls: usize,
    pub git_operations: usize,
    /// Distinct file names referenced by tool messages
    pub files_modified: usize,
    pub code_blocks: usize,
    pub emojis: BTreeMap<String, usize>,
}

impl Statistics {
    /// Fold another transcript's counters into this one
    ///
    /// `files_modified` is summed, so a file touched in two transcripts counts twice.
    pub fn merge(&mut self, other: &Statistics) {
        self.total_messages += other.total_messages;
        self.user_messages += other.user_messages;
        self.assistant_messages += other.assistant_messages;
        self.thinking_messages += other.thinking_messages;
        self.tool_calls += other.tool_calls;
        self.git_operations += other.git_operations;
        self.files_modified += other.files_modified;
        self.code_blocks += other.code_blocks;
        for (emoji, count) in &other.emojis {
            *self.emojis.entry(emoji.clone()).or_insert(0) += count;
        }
    }

    /// Most frequent emoji first; ties keep codepoint order
    pub fn top_emojis(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.emojis.iter().map(|(e, c)| (e.as_str(), *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}
