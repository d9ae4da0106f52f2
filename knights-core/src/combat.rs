//! Combat resolution between an attacking and a defending knight
//!
//! The attacker adds a fixed bonus for surprise, so with integer base scores
//! and modifiers the two sides can never tie.

use crate::board::Board;
use crate::entities::{Item, ItemKind, Knight, KnightId, KnightStatus};

/// Bonus added to every attack score
pub const SURPRISE_BONUS: f32 = 0.5;

/// Result of a single fight
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CombatOutcome {
    pub attacker: KnightId,
    pub defender: KnightId,
    pub winner: KnightId,
    pub loser: KnightId,
    pub attack_score: f32,
    pub defence_score: f32,
}

impl CombatOutcome {
    pub fn attacker_won(&self) -> bool {
        self.winner == self.attacker
    }
}

/// Attack score of a knight striking first
pub fn attack_score(knight: &Knight, item: Option<&Item>) -> f32 {
    let modifier = item.map_or(0, |i| i.attack_modifier);
    f32::from(knight.attack()) + SURPRISE_BONUS + f32::from(modifier)
}

/// Defence score of a knight holding its tile
pub fn defence_score(knight: &Knight, item: Option<&Item>) -> f32 {
    let modifier = item.map_or(0, |i| i.defence_modifier);
    f32::from(knight.defence()) + f32::from(modifier)
}

/// Decide a fight. Pure: reads the two knights and their items, mutates nothing.
pub fn resolve(
    attacker: &Knight,
    attacker_item: Option<&Item>,
    defender: &Knight,
    defender_item: Option<&Item>,
) -> CombatOutcome {
    let attack = attack_score(attacker, attacker_item);
    let defence = defence_score(defender, defender_item);

    let (winner, loser) = if attack > defence {
        (attacker.id, defender.id)
    } else {
        (defender.id, attacker.id)
    };

    CombatOutcome {
        attacker: attacker.id,
        defender: defender.id,
        winner,
        loser,
        attack_score: attack,
        defence_score: defence,
    }
}

/// Kill the loser of `outcome`. Its item, if any, is left on the tile it died on.
pub(crate) fn apply_outcome(board: &mut Board, outcome: &CombatOutcome) -> Option<ItemKind> {
    let loser = board.knight_mut(outcome.loser)?;
    loser.status = KnightStatus::Dead;
    let death_tile = loser.position?;
    board.drop_item(outcome.loser, death_tile)
}
