//! Knights CLI - Command-line interface
//!
//! Commands:
//! - play: Run a move file and write the final state
//! - check: Validate a move file without playing it

mod check_cmd;
mod play_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "knights")]
#[command(about = "Knights board game simulator")]
struct Cli {
    /// Log every move (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a move file and write the final state as JSON
    Play(play_cmd::PlayArgs),
    /// Parse a move file and report what it contains
    Check(check_cmd::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play_cmd::run(args),
        Commands::Check(args) => check_cmd::run(args),
    }
}

/// Install the tracing subscriber, honouring RUST_LOG when set
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
