//! Play command - run a move file against a seed
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_seed(), play_moves(), report_results()
//! - Level 3: seed source selection, snapshot output
//! - Level 4: configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use knights_core::{play, GameReport, Seed};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Knight seed file, one `R00` record per line
    #[arg(long, value_name = "FILE", requires = "items", conflicts_with = "seed")]
    pub knights: Option<PathBuf>,

    /// Item seed file, one `A2022` record per line
    #[arg(long, value_name = "FILE", requires = "knights", conflicts_with = "seed")]
    pub items: Option<PathBuf>,

    /// JSON seed file (instead of --knights/--items)
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Move file
    #[arg(long, value_name = "FILE", default_value = "moves.txt")]
    pub moves: PathBuf,

    /// Where to write the final state
    #[arg(long, value_name = "FILE", default_value = "final_state.json")]
    pub output: PathBuf,

    /// Print the final state to stdout instead of writing --output
    #[arg(long)]
    pub stdout: bool,
}

/// Where the starting positions come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// Built-in classic layout
    Standard,
    Text { knights: PathBuf, items: PathBuf },
    Json(PathBuf),
}

/// Resolved settings for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayConfig {
    pub seed: SeedSource,
    pub moves: PathBuf,
    /// `None` prints to stdout
    pub output: Option<PathBuf>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            seed: SeedSource::Standard,
            moves: PathBuf::from("moves.txt"),
            output: Some(PathBuf::from("final_state.json")),
        }
    }
}

impl From<PlayArgs> for PlayConfig {
    fn from(args: PlayArgs) -> Self {
        let seed = match (args.seed, args.knights, args.items) {
            (Some(path), _, _) => SeedSource::Json(path),
            (None, Some(knights), Some(items)) => SeedSource::Text { knights, items },
            _ => SeedSource::Standard,
        };
        Self {
            seed,
            moves: args.moves,
            output: (!args.stdout).then_some(args.output),
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// This function reads like a table of contents:
/// 1. Load the seed
/// 2. Play the move file
/// 3. Report the final state
pub fn run(args: PlayArgs) -> Result<()> {
    let config = PlayConfig::from(args);

    let seed = load_seed(&config.seed)?;

    tracing::info!(
        "Playing {} with {} knights and {} items",
        config.moves.display(),
        seed.knights.len(),
        seed.items.len()
    );

    let report = play_moves(seed, &config)?;

    report_results(&report, &config)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load starting positions from the configured source
fn load_seed(source: &SeedSource) -> Result<Seed> {
    match source {
        SeedSource::Standard => {
            tracing::debug!("Using the standard layout");
            Ok(Seed::standard())
        }
        SeedSource::Text { knights, items } => Seed::load_text(knights, items).with_context(|| {
            format!(
                "Failed to load seed from {} and {}",
                knights.display(),
                items.display()
            )
        }),
        SeedSource::Json(path) => Seed::load_json(path)
            .with_context(|| format!("Failed to load seed: {}", path.display())),
    }
}

/// Play the move file to completion
fn play_moves(seed: Seed, config: &PlayConfig) -> Result<GameReport> {
    let content = std::fs::read_to_string(&config.moves)
        .with_context(|| format!("Failed to read moves: {}", config.moves.display()))?;

    play(seed, &content).with_context(|| format!("Failed to play {}", config.moves.display()))
}

/// Write or print the final state and log the tallies
fn report_results(report: &GameReport, config: &PlayConfig) -> Result<()> {
    let stats = report.stats;
    tracing::info!(
        "{} moves applied, {} ignored, {} fights, {} drownings",
        stats.moves,
        stats.ignored,
        stats.fights,
        stats.drownings
    );

    match &config.output {
        Some(path) => {
            report
                .snapshot
                .save(path)
                .with_context(|| format!("Failed to write final state: {}", path.display()))?;
            tracing::info!("Saved final state to {}", path.display());
        }
        None => print_snapshot(report)?,
    }

    Ok(())
}

// ============================================================================
// LEVEL 3 - OUTPUT
// ============================================================================

fn print_snapshot(report: &GameReport) -> Result<()> {
    let json = report.snapshot.to_json_pretty()?;
    println!("{}", json);
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
