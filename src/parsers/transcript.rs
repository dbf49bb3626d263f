use std::mem;

use tracing::{debug, trace};

use crate::models::{
    CodeBlock, FileChange, Message, MessageKind, ParsedConversation, SESSION_START_TITLE, Section,
};
use crate::parsers::classifier::{LineKind, classify_line, is_turn_marker};
use crate::parsers::metadata::scan_metadata;
use crate::parsers::normalizer::normalize_lines;
use crate::parsers::options::ParserOptions;
use crate::parsers::tools::ToolCall;
use crate::stats::compute_statistics;

/// Prompts longer than this start a new section
const MAJOR_PROMPT_CHARS: usize = 50;

const TITLE_WORDS: usize = 6;
const TITLE_MAX_CHARS: usize = 50;
const TITLE_KEEP_CHARS: usize = 47;
const TITLE_ELLIPSIS: &str = "...";
const FALLBACK_TITLE: &str = "Conversation";

/// Parse a transcript with default options
///
/// Parsing never fails: unrecognized lines are discarded, so malformed input
/// only yields less structure.
///
/// # Examples
///
/// ```
/// use ai_transcript_explorer::parse_transcript;
///
/// let doc = parse_transcript("> Fix the login bug\n● Read(src/login.rs)\n");
/// assert_eq!(doc.sections.len(), 1);
/// assert_eq!(doc.statistics.files_modified, 1);
/// ```
pub fn parse_transcript(text: &str) -> ParsedConversation {
    parse_transcript_with(text, &ParserOptions::default())
}

/// Parse a transcript with explicit options
pub fn parse_transcript_with(text: &str, options: &ParserOptions) -> ParsedConversation {
    TranscriptParser::new(options.clone()).parse(text)
}

/// Single-pass state machine turning normalized lines into sections
///
/// One parser handles one transcript; [`TranscriptParser::parse`] consumes it.
pub struct TranscriptParser {
    options: ParserOptions,
    sections: Vec<Section>,
    current_section: Section,
    current_message: Option<Message>,
    in_code_block: bool,
    code_buffer: String,
    code_language: String,
}

impl TranscriptParser {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            sections: Vec::new(),
            current_section: Section::new(SESSION_START_TITLE),
            current_message: None,
            in_code_block: false,
            code_buffer: String::new(),
            code_language: String::new(),
        }
    }

    pub fn parse(mut self, text: &str) -> ParsedConversation {
        let lines = normalize_lines(text);
        let metadata = scan_metadata(&lines, text, self.options.metadata_scan_lines);

        let mut cursor = 0;
        while cursor < lines.len() {
            cursor = self.process_line(&lines, cursor);
        }

        let sections = self.finish();
        let statistics = compute_statistics(&sections);

        ParsedConversation {
            title: metadata.title,
            date: metadata.date,
            model: metadata.model,
            project_path: metadata.project_path,
            sections,
            statistics,
        }
    }

    /// Handle the line at `cursor` and return the position of the next unread line
    fn process_line(&mut self, lines: &[&str], cursor: usize) -> usize {
        let line = lines[cursor];

        match classify_line(line, self.in_code_block) {
            LineKind::UserPrompt(_) => {
                let (prompt, next) = absorb_prompt(lines, cursor);
                self.start_user_prompt(prompt);
                return next;
            }
            LineKind::ToolCall(call) => self.start_tool_call(line, call),
            LineKind::Assistant(text) => {
                self.open_message(Message::new(MessageKind::Assistant, text))
            }
            LineKind::Thinking => self.open_message(Message::new(MessageKind::Thinking, line)),
            LineKind::ToolResult => match self.current_message.as_mut() {
                Some(message) if message.accepts_tool_output() => message.append_line(line),
                _ => {
                    trace!(line = cursor + 1, "dropping tool result without an open tool message")
                }
            },
            LineKind::CodeFence(language) => self.toggle_code_block(language),
            LineKind::CodeBody => {
                self.code_buffer.push_str(line);
                self.code_buffer.push('\n');
            }
            LineKind::Continuation => {
                if let Some(message) = self.current_message.as_mut() {
                    message.append_line(line);
                }
            }
            LineKind::Discard => {}
        }

        cursor + 1
    }

    fn start_user_prompt(&mut self, prompt: String) {
        self.flush_message();

        if is_major_prompt(&prompt) {
            let title = derive_title(&prompt);
            if self.current_section.has_messages() {
                let finished = mem::replace(&mut self.current_section, Section::new(title));
                self.push_section(finished);
            } else {
                // Nothing to close yet; the section so far becomes this topic
                self.current_section.title = title;
            }
        }

        self.current_message = Some(Message::new(MessageKind::User, prompt));
    }

    fn start_tool_call(&mut self, line: &str, call: ToolCall<'_>) {
        let is_git = call.is_git_action();
        let file_name = (!call.argument.is_empty()).then(|| call.argument.to_string());

        if let Some(file_name) = &file_name {
            self.current_section.file_changes.push(FileChange {
                file_name: file_name.clone(),
                change_type: call.tool.change_type(),
                details: line.to_string(),
            });
        }

        let kind = if is_git { MessageKind::Git } else { MessageKind::Tool };
        let mut message = Message::new(kind, line);
        message.tool_name = Some(call.tool.name().to_string());
        message.file_name = file_name;
        message.is_git_action = Some(is_git);
        self.open_message(message);
    }

    fn toggle_code_block(&mut self, language: &str) {
        if self.in_code_block {
            let code = self.code_buffer.trim().to_string();
            self.code_buffer.clear();
            self.current_section
                .code_blocks
                .push(CodeBlock { language: mem::take(&mut self.code_language), code });
            self.in_code_block = false;
        } else {
            if self.options.flush_message_at_fence {
                self.flush_message();
            }
            self.code_language = language.to_string();
            self.in_code_block = true;
        }
    }

    /// Close the open message (if any) and make `message` the open one
    fn open_message(&mut self, message: Message) {
        self.flush_message();
        self.current_message = Some(message);
    }

    fn flush_message(&mut self) {
        if let Some(message) = self.current_message.take() {
            self.current_section.messages.push(message);
        }
    }

    fn push_section(&mut self, section: Section) {
        let keep = section.has_messages()
            || (self.options.keep_empty_sections && section.has_content());
        if keep {
            self.sections.push(section);
        } else {
            debug!(
                title = %section.title,
                code_blocks = section.code_blocks.len(),
                file_changes = section.file_changes.len(),
                "discarding section without messages"
            );
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.flush_message();

        if self.in_code_block {
            debug!(
                bytes = self.code_buffer.len(),
                language = %self.code_language,
                "unterminated code fence, dropping buffered code"
            );
        }

        let last = mem::replace(&mut self.current_section, Section::new(SESSION_START_TITLE));
        self.push_section(last);
        self.sections
    }
}

/// Collect a prompt starting at `start` plus every following line up to the next turn marker
///
/// Blank lines are skipped. Returns the trimmed prompt text and the index of the
/// first line not consumed.
pub fn absorb_prompt(lines: &[&str], start: usize) -> (String, usize) {
    let first = lines[start].strip_prefix("> ").unwrap_or(lines[start]);
    let mut text = first.to_string();

    let mut cursor = start + 1;
    while cursor < lines.len() && !is_turn_marker(lines[cursor]) {
        let line = lines[cursor];
        if !line.trim().is_empty() {
            text.push('\n');
            text.push_str(line);
        }
        cursor += 1;
    }

    (text.trim().to_string(), cursor)
}

/// A prompt that is long or asks a question opens a new topic
pub fn is_major_prompt(prompt: &str) -> bool {
    prompt.chars().count() > MAJOR_PROMPT_CHARS || prompt.contains('?')
}

/// Section title from the first six words of a prompt
///
/// Titles longer than 50 characters are cut to 47 and suffixed with `...`.
///
/// # Examples
///
/// ```
/// use ai_transcript_explorer::parsers::derive_title;
///
/// assert_eq!(derive_title("How do   I add\nlogging to the parser?"), "How do I add logging to");
/// assert_eq!(derive_title("   "), "Conversation");
/// ```
pub fn derive_title(prompt: &str) -> String {
    let title = prompt.split_whitespace().take(TITLE_WORDS).collect::<Vec<_>>().join(" ");

    if title.is_empty() {
        return FALLBACK_TITLE.to_string();
    }

    if title.chars().count() > TITLE_MAX_CHARS {
        let mut truncated: String = title.chars().take(TITLE_KEEP_CHARS).collect();
        truncated.push_str(TITLE_ELLIPSIS);
        return truncated;
    }

    title
}
