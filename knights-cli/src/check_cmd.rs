//! Check command - validate a move file without playing it

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use knights_core::command;

#[derive(Args)]
pub struct CheckArgs {
    /// Move file
    #[arg(long, value_name = "FILE", default_value = "moves.txt")]
    pub moves: PathBuf,
}

/// Parse the file up to GAME-END and report the totals
pub fn run(args: CheckArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.moves)
        .with_context(|| format!("Failed to read moves: {}", args.moves.display()))?;

    let summary = command::check(&content)
        .with_context(|| format!("Invalid move file: {}", args.moves.display()))?;

    if summary.starts == 0 {
        tracing::warn!("{} has no GAME-START", args.moves.display());
    }
    if summary.ends == 0 {
        tracing::warn!("{} has no GAME-END", args.moves.display());
    }

    println!(
        "{}: {} moves, {} GAME-START, {} GAME-END",
        args.moves.display(),
        summary.moves,
        summary.starts,
        summary.ends
    );

    Ok(())
}
