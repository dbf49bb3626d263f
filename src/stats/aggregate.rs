use std::collections::HashSet;

use crate::models::{MessageKind, Section, Statistics};
use crate::stats::emoji::count_emojis;

/// Compute document statistics over parsed sections
///
/// Counts messages per kind, distinct file names of `tool` messages, code
/// blocks, and emoji occurrences in every message's content. Absent data
/// yields zero counts.
pub fn compute_statistics(sections: &[Section]) -> Statistics {
    let mut stats = Statistics::default();
    let mut files: HashSet<&str> = HashSet::new();

    for section in sections {
        stats.code_blocks += section.code_blocks.len();

        for message in &section.messages {
            stats.total_messages += 1;
            match message.kind {
                MessageKind::User => stats.user_messages += 1,
                MessageKind::Assistant => stats.assistant_messages += 1,
                MessageKind::Thinking => stats.thinking_messages += 1,
                MessageKind::Tool => {
                    stats.tool_calls += 1;
                    if let Some(file) = message.file_name.as_deref()
                        && !file.is_empty()
                    {
                        files.insert(file);
                    }
                }
                MessageKind::Git => stats.git_operations += 1,
                MessageKind::System => {}
            }
            count_emojis(&message.content, &mut stats.emojis);
        }
    }

    stats.files_modified = files.len();
    stats
}
