pub mod commands;

use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use commands::{Cli, Commands, ParseArgs};

/// Log level used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber; `RUST_LOG` overrides the default filter
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed (e.g. by an embedding program)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

/// Entry point for the command-line binary
pub fn run() -> Result<()> {
    init_logging();
    commands::run()
}
