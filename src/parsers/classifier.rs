//! Priority-ordered line classification.
//!
//! Every normalized transcript line maps to exactly one [`LineKind`]. The rules are
//! evaluated in a fixed order and the first match wins:
//!
//! 1. `> ` user prompt
//! 2. bullet + known tool + `(`: tool invocation
//! 3. any other bullet line: assistant reply
//! 4. `<thinking>`, `[thinking]` or `thinking:` marker
//! 5. tool-result line containing `⎿`
//! 6. code fence
//! 7. code body (only inside a fence)
//! 8. indented continuation
//!
//! Anything else is [`LineKind::Discard`].

use std::sync::LazyLock;

use regex::Regex;

use crate::parsers::tools::{ToolCall, parse_tool_call};

/// Marker that opens a user prompt
pub const PROMPT_MARKER: &str = "> ";

/// Bullet glyphs that open assistant and tool lines
pub const BULLETS: [char; 2] = ['●', '⏺'];

/// Glyph that prefixes tool output
pub const TOOL_RESULT_GLYPH: char = '⎿';

pub const CODE_FENCE: &str = "```";

const DEFAULT_CODE_LANGUAGE: &str = "text";

static THINKING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:<thinking>|\[thinking\]|thinking:)")
        .expect("thinking marker regex is valid")
});

/// Category of a single transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Text after the prompt marker
    UserPrompt(&'a str),
    ToolCall(ToolCall<'a>),
    /// Text after the bullet, leading whitespace removed
    Assistant(&'a str),
    Thinking,
    ToolResult,
    /// Language tag of the fence line, defaulted to `text`
    CodeFence(&'a str),
    CodeBody,
    Continuation,
    Discard,
}

/// Classify one normalized line
///
/// `in_code_block` only affects whether an unmatched line is code body. Higher
/// priority rules still apply inside a fence.
pub fn classify_line(line: &str, in_code_block: bool) -> LineKind<'_> {
    if let Some(prompt) = line.strip_prefix(PROMPT_MARKER) {
        return LineKind::UserPrompt(prompt);
    }

    if let Some(after_bullet) = strip_bullet(line) {
        return match parse_tool_call(after_bullet) {
            Some(call) => LineKind::ToolCall(call),
            None => LineKind::Assistant(after_bullet.trim_start()),
        };
    }

    if THINKING_MARKER.is_match(line) {
        return LineKind::Thinking;
    }

    if line.contains(TOOL_RESULT_GLYPH) {
        return LineKind::ToolResult;
    }

    let trimmed = line.trim();
    if let Some(tag) = trimmed.strip_prefix(CODE_FENCE) {
        let tag = tag.trim_start_matches('`').trim();
        return LineKind::CodeFence(if tag.is_empty() { DEFAULT_CODE_LANGUAGE } else { tag });
    }

    if in_code_block {
        return LineKind::CodeBody;
    }

    if line.starts_with("  ") && !trimmed.is_empty() {
        return LineKind::Continuation;
    }

    LineKind::Discard
}

/// True for lines that end a multi-line prompt: another prompt, or any bullet line
pub fn is_turn_marker(line: &str) -> bool {
    line.starts_with(PROMPT_MARKER) || strip_bullet(line).is_some()
}

fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLETS)
}
