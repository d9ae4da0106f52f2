//! Command stream parsing
//!
//! A stream is a sequence of lines, each `GAME-START`, `GAME-END` or a move
//! such as `R:S`. Blank lines are skipped; anything else is an error.

use std::str::FromStr;

use crate::entities::KnightId;
use crate::error::CommandError;
use crate::grid::Direction;

pub const GAME_START: &str = "GAME-START";
pub const GAME_END: &str = "GAME-END";

/// One parsed command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    End,
    Move { knight: KnightId, direction: Direction },
}

impl Command {
    /// Parse trimmed command text; `None` when it fits no known form
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            GAME_START => return Some(Command::Start),
            GAME_END => return Some(Command::End),
            _ => {}
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(k), Some(':'), Some(d), None) => Some(Command::Move {
                knight: KnightId::from_char(k)?,
                direction: Direction::from_char(d)?,
            }),
            _ => None,
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s.trim()).ok_or_else(|| CommandError::unnumbered(s))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Start => f.write_str(GAME_START),
            Command::End => f.write_str(GAME_END),
            Command::Move { knight, direction } => {
                write!(f, "{}:{}", knight.as_char(), direction.as_char())
            }
        }
    }
}

/// Lazily parse a command stream into `(line number, command)` pairs.
///
/// Parsing is on demand, so lines after the point where the caller stops
/// reading are never checked.
pub fn commands(content: &str) -> impl Iterator<Item = Result<(usize, Command), CommandError>> + '_ {
    content
        .lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, text)| !text.is_empty())
        .map(|(line, text)| {
            Command::parse(text)
                .map(|cmd| (line, cmd))
                .ok_or_else(|| CommandError::new(line, text))
        })
}

/// Totals produced by [`check`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub starts: usize,
    pub ends: usize,
    pub moves: usize,
}

/// Parse the stream up to and including the first GAME-END without playing
/// it, failing on the first bad line. Later lines are not read, as in play.
pub fn check(content: &str) -> Result<StreamSummary, CommandError> {
    let mut summary = StreamSummary::default();
    for parsed in commands(content) {
        match parsed?.1 {
            Command::Start => summary.starts += 1,
            Command::End => {
                summary.ends += 1;
                break;
            }
            Command::Move { .. } => summary.moves += 1,
        }
    }
    Ok(summary)
}
