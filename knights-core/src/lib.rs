//! Knights Core - Board game engine
//!
//! This crate provides the core game logic for the knights board game:
//! - Grid geometry (8x8 tiles, cardinal directions)
//! - Knights, items and their lifecycle
//! - Board arena with spatial lookup
//! - Combat resolution and the single-step move engine
//! - Seed loading, command parsing, the game driver and final snapshots

pub mod grid;
pub mod entities;
pub mod board;
pub mod combat;
pub mod engine;
pub mod command;
pub mod seed;
pub mod snapshot;
pub mod game;
pub mod error;

// Re-exports for convenient access
pub use grid::{Tile, Direction, DIRECTIONS, BOARD_SIZE};
pub use entities::{BoardEntity, Item, ItemKind, Knight, KnightId, KnightStatus, ITEM_PRIORITY};
pub use board::Board;
pub use combat::{resolve, CombatOutcome};
pub use engine::{apply_move, MoveOutcome};
pub use command::{Command, StreamSummary};
pub use seed::{ItemSeed, KnightSeed, Seed};
pub use snapshot::{ItemState, KnightState, Snapshot};
pub use game::{play, Game, GameReport, GameStats, Step};
pub use error::{CommandError, GameError, SeedError};
