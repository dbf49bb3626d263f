use std::sync::LazyLock;

use regex::Regex;

use crate::models::ChangeType;

/// `git` as a standalone word inside a shell command
static GIT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bgit\b").expect("git word regex is valid"));

/// Tools the parser recognizes after a bullet marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Read,
    Write,
    Edit,
    MultiEdit,
    Update,
    Bash,
    Grep,
    Glob,
    Ls,
    Search,
    Task,
    WebFetch,
    WebSearch,
    NotebookRead,
    NotebookEdit,
    TodoWrite,
    ExitPlanMode,
}

impl Tool {
    pub const ALL: [Tool; 17] = [
        Tool::Read,
        Tool::Write,
        Tool::Edit,
        Tool::MultiEdit,
        Tool::Update,
        Tool::Bash,
        Tool::Grep,
        Tool::Glob,
        Tool::Ls,
        Tool::Search,
        Tool::Task,
        Tool::WebFetch,
        Tool::WebSearch,
        Tool::NotebookRead,
        Tool::NotebookEdit,
        Tool::TodoWrite,
        Tool::ExitPlanMode,
    ];

    /// Name as it appears in the transcript
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Read => "Read",
            Tool::Write => "Write",
            Tool::Edit => "Edit",
            Tool::MultiEdit => "MultiEdit",
            Tool::Update => "Update",
            Tool::Bash => "Bash",
            Tool::Grep => "Grep",
            Tool::Glob => "Glob",
            Tool::Ls => "LS",
            Tool::Search => "Search",
            Tool::Task => "Task",
            Tool::WebFetch => "WebFetch",
            Tool::WebSearch => "WebSearch",
            Tool::NotebookRead => "NotebookRead",
            Tool::NotebookEdit => "NotebookEdit",
            Tool::TodoWrite => "TodoWrite",
            Tool::ExitPlanMode => "ExitPlanMode",
        }
    }

    /// How an invocation of this tool touches its target
    pub fn change_type(&self) -> ChangeType {
        match self {
            Tool::Write | Tool::Edit | Tool::MultiEdit | Tool::Update | Tool::NotebookEdit => {
                ChangeType::Update
            }
            Tool::Grep | Tool::Glob | Tool::Search | Tool::WebSearch => ChangeType::Search,
            _ => ChangeType::Read,
        }
    }
}

/// A recognized tool invocation line, split into tool and argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCall<'a> {
    pub tool: Tool,
    /// Parenthesized argument, trimmed; may be empty
    pub argument: &'a str,
}

impl ToolCall<'_> {
    /// Shell invocations mentioning `git` are git actions
    pub fn is_git_action(&self) -> bool {
        self.tool == Tool::Bash && GIT_WORD.is_match(self.argument)
    }
}

/// Parse the text following a bullet marker as `Name(argument)`
///
/// The name must be one of [`Tool::ALL`] and be immediately followed by `(`.
/// A single trailing `)` is removed from the argument.
pub fn parse_tool_call(after_bullet: &str) -> Option<ToolCall<'_>> {
    let rest = after_bullet.trim_start();
    Tool::ALL.iter().find_map(|tool| {
        let args = rest.strip_prefix(tool.name())?.strip_prefix('(')?;
        let args = args.trim_end();
        let argument = args.strip_suffix(')').unwrap_or(args).trim();
        Some(ToolCall { tool: *tool, argument })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_read() {
        let call = parse_tool_call(" Read(src/auth.go)").unwrap();
        assert_eq!(call.tool, Tool::Read);
        assert_eq!(call.argument, "src/auth.go");
        assert!(!call.is_git_action());
    }

    #[test]
    fn test_parse_empty_argument() {
        let call = parse_tool_call(" TodoWrite()").unwrap();
        assert_eq!(call.tool, Tool::TodoWrite);
        assert_eq!(call.argument, "");
    }

    #[test]
    fn test_parse_unclosed_parenthesis() {
        let call = parse_tool_call(" Bash(cargo test --all").unwrap();
        assert_eq!(call.argument, "cargo test --all");
    }

    #[test]
    fn test_nested_parentheses_keep_inner() {
        let call = parse_tool_call(" Bash(echo (hi))").unwrap();
        assert_eq!(call.argument, "echo (hi)");
    }

    #[test]
    fn test_unknown_tool_is_not_a_call() {
        assert!(parse_tool_call(" Summarize(notes.md)").is_none());
        assert!(parse_tool_call(" I will Read(src/lib.rs) next").is_none());
    }

    #[test]
    fn test_name_must_be_followed_by_parenthesis() {
        assert!(parse_tool_call(" Read the file first").is_none());
        assert!(parse_tool_call(" Read (src/lib.rs)").is_none());
    }

    #[test]
    fn test_similar_names_resolve_exactly() {
        assert_eq!(parse_tool_call("MultiEdit(a.rs)").unwrap().tool, Tool::MultiEdit);
        assert_eq!(parse_tool_call("NotebookEdit(a.ipynb)").unwrap().tool, Tool::NotebookEdit);
        assert_eq!(parse_tool_call("LS(src)").unwrap().tool, Tool::Ls);
    }

    #[test]
    fn test_change_types() {
        assert_eq!(Tool::Edit.change_type(), ChangeType::Update);
        assert_eq!(Tool::Write.change_type(), ChangeType::Update);
        assert_eq!(Tool::Grep.change_type(), ChangeType::Search);
        assert_eq!(Tool::Glob.change_type(), ChangeType::Search);
        assert_eq!(Tool::Read.change_type(), ChangeType::Read);
        assert_eq!(Tool::Bash.change_type(), ChangeType::Read);
        assert_eq!(Tool::Task.change_type(), ChangeType::Read);
    }

    #[test]
    fn test_git_action_detection() {
        assert!(parse_tool_call("Bash(git status)").unwrap().is_git_action());
        assert!(parse_tool_call("Bash(cd repo && git commit -m 'x')").unwrap().is_git_action());
        assert!(!parse_tool_call("Bash(cat .gitignore)").unwrap().is_git_action());
        assert!(!parse_tool_call("Bash(digit)").unwrap().is_git_action());
        // Only the shell tool produces git actions
        assert!(!parse_tool_call("Grep(git)").unwrap().is_git_action());
    }
}
