//! Error types for seed loading, command parsing and game driving
//!
//! The move engine itself never fails; every error here comes from input.

use std::path::PathBuf;

use crate::grid::Tile;

/// Expected shape of a move command, quoted in parse errors
pub const MOVE_PATTERN: &str = "(Knight char):(Cardinal direction) e.g. R:S";

/// A command-stream line that is neither a sentinel nor a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{}the command {text:?} does not fit the expected format -> {pattern}",
    .line.map(|l| format!("line {l}: ")).unwrap_or_default()
)]
pub struct CommandError {
    /// 1-based line number, `None` when parsed outside a stream
    pub line: Option<usize>,
    /// Offending text, as read
    pub text: String,
    pub pattern: &'static str,
}

impl CommandError {
    /// Error for a line of a command stream
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            ..Self::unnumbered(text)
        }
    }

    /// Error for a lone command string
    pub fn unnumbered(text: impl Into<String>) -> Self {
        Self {
            line: None,
            text: text.into(),
            pattern: MOVE_PATTERN,
        }
    }
}

/// Errors while loading or validating seed data
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: {message} in {text:?}")]
    Malformed {
        line: usize,
        text: String,
        message: &'static str,
    },

    #[error("{entity} starts off the board at {tile}")]
    OffBoard { entity: char, tile: Tile },

    #[error("{0} appears more than once in the seed")]
    Duplicate(char),

    #[error("knights {first} and {second} both start on {tile}")]
    SharedStart { first: char, second: char, tile: Tile },
}

/// Errors raised by the game driver
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("snapshot requested before GAME-START")]
    NotStarted,
}
