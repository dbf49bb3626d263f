use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::batch::{discover_transcripts, parse_many, summarize};
use crate::models::{ParsedConversation, Statistics};
use crate::parsers::ParserOptions;
use crate::parsers::options::DEFAULT_MAX_FILE_SIZE;
use crate::utils::{format_path_with_tilde, parse_transcript_file};

const TOP_EMOJI_LIMIT: usize = 5;

#[derive(Parser)]
#[command(name = "ai-transcript-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Turn coding-assistant session transcripts into structured documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a transcript and write the structured document as JSON
    Parse {
        /// Transcript file to read
        input: PathBuf,
        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
        #[command(flatten)]
        parse_args: ParseArgs,
    },
    /// Show statistics for transcript files or directories of transcripts
    Stats {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[command(flatten)]
        parse_args: ParseArgs,
    },
    /// List the sections of a transcript
    Sections {
        input: PathBuf,
        #[command(flatten)]
        parse_args: ParseArgs,
    },
}

/// Flags shared by every command that parses transcripts
#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    /// Keep sections that hold code blocks or file changes but no messages
    #[arg(long)]
    pub keep_empty_sections: bool,
    /// Let an open message continue across code fences
    #[arg(long)]
    pub no_fence_flush: bool,
    /// Largest transcript accepted, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: u64,
}

impl ParseArgs {
    pub fn to_options(&self) -> ParserOptions {
        ParserOptions {
            flush_message_at_fence: !self.no_fence_flush,
            keep_empty_sections: self.keep_empty_sections,
            max_file_size: self.max_file_size,
            ..ParserOptions::default()
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Parse { input, output, pretty, parse_args }) => {
            parse_command(input, output.as_deref(), *pretty, &parse_args.to_options())?;
        }
        Some(Commands::Stats { paths, parse_args }) => {
            show_stats(paths, &parse_args.to_options())?;
        }
        Some(Commands::Sections { input, parse_args }) => {
            show_sections(input, &parse_args.to_options())?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn parse_command(
    input: &Path,
    output: Option<&Path>,
    pretty: bool,
    options: &ParserOptions,
) -> Result<()> {
    let doc = parse_transcript_file(input, options)?;

    let json = if pretty { serde_json::to_string_pretty(&doc) } else { serde_json::to_string(&doc) };
    let json = json.context("Failed to serialize parsed transcript")?;

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!("Wrote {} sections to {}", doc.sections.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn show_stats(paths: &[PathBuf], options: &ParserOptions) -> Result<()> {
    let transcripts = discover_transcripts(paths)?;
    let reports = parse_many(&transcripts, options)?;
    let parsed = reports.iter().filter(|r| r.is_ok()).count();
    let totals = summarize(&reports);

    println!("Transcript Statistics");
    println!("================================");
    println!("Transcripts: {} ({} failed)", parsed, reports.len() - parsed);

    if let [report] = reports.as_slice()
        && let Ok(doc) = &report.result
    {
        print_document_header(&report.path, doc);
    }

    print_statistics(&totals);

    Ok(())
}

fn print_document_header(path: &Path, doc: &ParsedConversation) {
    println!("Source: {}", format_path_with_tilde(path));
    println!("Model: {}", doc.model);
    println!("Date: {}", doc.date);
    if !doc.project_path.is_empty() {
        println!("Project: {}", doc.project_path);
    }
    println!("Sections: {}", doc.sections.len());
}

fn print_statistics(stats: &Statistics) {
    println!("Total messages: {}", stats.total_messages);
    println!("  User prompts: {}", stats.user_messages);
    println!("  Assistant replies: {}", stats.assistant_messages);
    println!("  Thinking: {}", stats.thinking_messages);
    println!("  Tool calls: {}", stats.tool_calls);
    println!("  Git operations: {}", stats.git_operations);
    println!("Files touched: {}", stats.files_modified);
    println!("Code blocks: {}", stats.code_blocks);

    let top = stats.top_emojis(TOP_EMOJI_LIMIT);
    if top.is_empty() {
        println!("Top emoji: none");
    } else {
        let listed: Vec<String> = top.iter().map(|(e, c)| format!("{} x{}", e, c)).collect();
        println!("Top emoji: {}", listed.join(", "));
    }
}

fn show_sections(input: &Path, options: &ParserOptions) -> Result<()> {
    let doc = parse_transcript_file(input, options)?;

    if doc.sections.is_empty() {
        println!("No sections found in {}", format_path_with_tilde(input));
        return Ok(());
    }

    for (i, section) in doc.sections.iter().enumerate() {
        println!(
            "{:>3}. {} ({} messages, {} code blocks, {} file changes)",
            i + 1,
            section.title,
            section.messages.len(),
            section.code_blocks.len(),
            section.file_changes.len()
        );
    }

    Ok(())
}
