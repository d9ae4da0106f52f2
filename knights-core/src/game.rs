//! Game driver - feeds a command stream into the move engine
//!
//! Commands are applied strictly one at a time. `GAME-START` (re)builds the
//! board from the seed, `GAME-END` snapshots it and stops reading.

use crate::board::Board;
use crate::command::{commands, Command};
use crate::engine::{apply_move, MoveOutcome};
use crate::error::{GameError, SeedError};
use crate::seed::Seed;
use crate::snapshot::Snapshot;

/// Counters kept while a game runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameStats {
    /// Moves that changed the board
    pub moves: usize,
    /// Moves for unknown, dead or drowned knights, or sent before GAME-START
    pub ignored: usize,
    pub fights: usize,
    pub drownings: usize,
}

impl GameStats {
    fn record(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::UnknownKnight | MoveOutcome::NotLive(_) => self.ignored += 1,
            MoveOutcome::Drowned { .. } => {
                self.moves += 1;
                self.drownings += 1;
            }
            MoveOutcome::Moved { fight, .. } => {
                self.moves += 1;
                if fight.is_some() {
                    self.fights += 1;
                }
            }
        }
    }
}

/// Result of feeding one command to the game
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Continue,
    /// GAME-END reached; no further commands should be read
    Finished(Snapshot),
}

/// Final report of a played stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameReport {
    pub snapshot: Snapshot,
    pub stats: GameStats,
    /// False when the stream ran out before GAME-END
    pub ended: bool,
}

/// One game instance; owns the board exclusively
#[derive(Clone, Debug)]
pub struct Game {
    seed: Seed,
    board: Option<Board>,
    stats: GameStats,
}

impl Game {
    /// Start a game for `seed`, rejecting seeds that fail [`Seed::validate`]
    pub fn new(seed: Seed) -> Result<Self, SeedError> {
        seed.validate()?;
        Ok(Self {
            seed,
            board: None,
            stats: GameStats::default(),
        })
    }

    /// Board of the running game, `None` before GAME-START
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn is_started(&self) -> bool {
        self.board.is_some()
    }

    /// Apply a single command
    pub fn apply(&mut self, command: Command) -> Result<Step, GameError> {
        match command {
            Command::Start => {
                if self.board.is_some() {
                    tracing::warn!("GAME-START while a game is running, resetting the board");
                }
                self.board = Some(Board::from_seed(&self.seed));
                self.stats = GameStats::default();
                tracing::info!("Game started");
                Ok(Step::Continue)
            }
            Command::End => {
                let snapshot = self.snapshot()?;
                tracing::info!("Game finished");
                Ok(Step::Finished(snapshot))
            }
            Command::Move { knight, direction } => {
                let Some(board) = self.board.as_mut() else {
                    tracing::warn!("Ignoring {} before GAME-START", command);
                    self.stats.ignored += 1;
                    return Ok(Step::Continue);
                };
                let outcome = apply_move(board, knight, direction);
                if outcome.is_ignored() {
                    tracing::debug!("{} ignored: {:?}", command, outcome);
                }
                self.stats.record(&outcome);
                Ok(Step::Continue)
            }
        }
    }

    /// Snapshot of the current board
    pub fn snapshot(&self) -> Result<Snapshot, GameError> {
        self.board
            .as_ref()
            .map(Snapshot::from_board)
            .ok_or(GameError::NotStarted)
    }
}

/// Play a whole command stream and return the final state.
///
/// Fails up front on an invalid seed and stops at the first malformed line. Lines after GAME-END are not read. A
/// stream that ends without GAME-END is snapshotted as it stands.
pub fn play(seed: Seed, content: &str) -> Result<GameReport, GameError> {
    let mut game = Game::new(seed)?;

    for parsed in commands(content) {
        let (line, command) = parsed?;
        if let Step::Finished(snapshot) = game.apply(command)? {
            tracing::debug!("GAME-END on line {}", line);
            return Ok(GameReport {
                snapshot,
                stats: game.stats(),
                ended: true,
            });
        }
    }

    let snapshot = game.snapshot()?;
    tracing::warn!("Command stream ended without GAME-END");
    Ok(GameReport {
        snapshot,
        stats: game.stats(),
        ended: false,
    })
}
