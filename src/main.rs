use anyhow::Result;

fn main() -> Result<()> {
    ai_transcript_explorer::cli::run()
}
