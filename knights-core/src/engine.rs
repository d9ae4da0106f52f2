//! Move engine - applies one single-step move to the board
//!
//! Order of a move:
//! 1. liveness gate
//! 2. target tile
//! 3. boundary check (drowning ends the move)
//! 4. item pickup
//! 5. position commit
//! 6. fight with a LIVE occupant
//! 7. held item follows the surviving knight
//!
//! Pickup happens before the fight and the position is committed before the
//! fight, so a knight fights with a freshly picked-up item and dies on the
//! contested tile.

use crate::board::Board;
use crate::combat::{self, CombatOutcome};
use crate::entities::{ItemKind, KnightId, KnightStatus};
use crate::grid::{Direction, Tile};

/// What a single move did to the board
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Knight not present in the seed
    UnknownKnight,
    /// Knight already DEAD or DROWNED
    NotLive(KnightStatus),
    /// Knight stepped off the board from `from`, leaving any item there
    Drowned {
        from: Tile,
        dropped: Option<ItemKind>,
    },
    /// Knight reached `to`, possibly picking up an item and fighting
    Moved {
        to: Tile,
        picked_up: Option<ItemKind>,
        fight: Option<CombatOutcome>,
    },
}

impl MoveOutcome {
    /// True when the board was left untouched
    pub fn is_ignored(&self) -> bool {
        matches!(self, MoveOutcome::UnknownKnight | MoveOutcome::NotLive(_))
    }
}

/// Move `knight` one tile in `direction`
pub fn apply_move(board: &mut Board, knight: KnightId, direction: Direction) -> MoveOutcome {
    let Some(mover) = board.knight(knight) else {
        return MoveOutcome::UnknownKnight;
    };
    let from = match (mover.status, mover.position) {
        (KnightStatus::Live, Some(tile)) => tile,
        (status, _) => return MoveOutcome::NotLive(status),
    };

    let Some(target) = from.step(direction).filter(Tile::is_valid) else {
        let dropped = drown(board, knight, from);
        tracing::debug!(knight = %knight.as_char(), %from, "knight drowned");
        return MoveOutcome::Drowned { from, dropped };
    };

    let picked_up = pick_up(board, knight, target);

    if let Some(k) = board.knight_mut(knight) {
        k.position = Some(target);
    }

    let fight = fight(board, knight, target);

    follow_holder(board, knight, target);

    tracing::debug!(
        knight = %knight.as_char(),
        %target,
        picked_up = ?picked_up,
        fight = ?fight.map(|f| f.winner),
        "knight moved"
    );

    MoveOutcome::Moved {
        to: target,
        picked_up,
        fight,
    }
}

// ============================================================================
// STEPS
// ============================================================================

/// Drop the item on the last valid tile and take the knight off the board
fn drown(board: &mut Board, knight: KnightId, from: Tile) -> Option<ItemKind> {
    let dropped = board.drop_item(knight, from);
    if let Some(k) = board.knight_mut(knight) {
        k.status = KnightStatus::Drowned;
        k.position = None;
    }
    dropped
}

/// Equip the best unequipped item on `target` if the knight's hands are free
fn pick_up(board: &mut Board, knight: KnightId, target: Tile) -> Option<ItemKind> {
    if board.knight(knight)?.item.is_some() {
        return None;
    }
    let kind = board.best_item_at(target)?;
    board.equip(knight, kind).then_some(kind)
}

/// Attack any other LIVE knight on `target`; the mover always attacks
fn fight(board: &mut Board, knight: KnightId, target: Tile) -> Option<CombatOutcome> {
    let defender_id = board.live_knight_at(target, knight)?;
    let attacker = board.knight(knight)?;
    let defender = board.knight(defender_id)?;

    let outcome = combat::resolve(
        attacker,
        board.held_item(attacker),
        defender,
        board.held_item(defender),
    );
    combat::apply_outcome(board, &outcome);
    Some(outcome)
}

/// Keep a surviving holder's item on its tile
fn follow_holder(board: &mut Board, knight: KnightId, target: Tile) {
    let held = board
        .knight(knight)
        .filter(|k| k.is_live())
        .and_then(|k| k.item);
    if let Some(item) = held.and_then(|kind| board.item_mut(kind)) {
        item.position = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{ItemSeed, KnightSeed, Seed};

    fn board_with(knights: &[(KnightId, i8, i8)], items: &[(ItemKind, i8, i8)]) -> Board {
        let seed = Seed {
            knights: knights
                .iter()
                .map(|&(id, row, col)| KnightSeed { id, row, col })
                .collect(),
            items: items
                .iter()
                .map(|&(id, row, col)| {
                    let (attack, defence) = id.default_modifiers();
                    ItemSeed { id, attack, defence, row, col }
                })
                .collect(),
        };
        Board::from_seed(&seed)
    }

    #[test]
    fn test_simple_move() {
        let mut board = board_with(&[(KnightId::Red, 3, 3)], &[]);
        let outcome = apply_move(&mut board, KnightId::Red, Direction::South);
        assert_eq!(
            outcome,
            MoveOutcome::Moved { to: Tile::new(4, 3), picked_up: None, fight: None }
        );
        assert_eq!(board.knight(KnightId::Red).unwrap().position, Some(Tile::new(4, 3)));
    }

    #[test]
    fn test_every_edge_drowns() {
        let cases = [
            (Tile::new(0, 3), Direction::North),
            (Tile::new(7, 3), Direction::South),
            (Tile::new(3, 0), Direction::West),
            (Tile::new(3, 7), Direction::East),
        ];
        for (start, dir) in cases {
            let mut board = board_with(&[(KnightId::Blue, start.row, start.col)], &[]);
            let outcome = apply_move(&mut board, KnightId::Blue, dir);
            assert_eq!(outcome, MoveOutcome::Drowned { from: start, dropped: None });

            let knight = board.knight(KnightId::Blue).unwrap();
            assert_eq!(knight.status, KnightStatus::Drowned);
            assert_eq!(knight.position, None);
            assert_eq!(board.attack_of(knight), 0);
            assert_eq!(board.defence_of(knight), 0);
        }
    }

    #[test]
    fn test_step_past_coordinate_range_drowns() {
        let mut board = board_with(&[(KnightId::Green, i8::MAX, 0)], &[]);
        let outcome = apply_move(&mut board, KnightId::Green, Direction::South);
        assert_eq!(outcome, MoveOutcome::Drowned { from: Tile::new(i8::MAX, 0), dropped: None });
        assert_eq!(board.knight(KnightId::Green).unwrap().status, KnightStatus::Drowned);
    }

    #[test]
    fn test_drowning_leaves_item_on_last_tile() {
        let mut board = board_with(&[(KnightId::Red, 1, 0)], &[(ItemKind::Dagger, 0, 0)]);
        apply_move(&mut board, KnightId::Red, Direction::North);
        let outcome = apply_move(&mut board, KnightId::Red, Direction::North);
        assert_eq!(
            outcome,
            MoveOutcome::Drowned { from: Tile::new(0, 0), dropped: Some(ItemKind::Dagger) }
        );

        let knight = board.knight(KnightId::Red).unwrap();
        assert_eq!(knight.item, None);
        let dagger = board.item(ItemKind::Dagger).unwrap();
        assert!(!dagger.equipped);
        assert_eq!(dagger.position, Tile::new(0, 0));
    }

    #[test]
    fn test_terminal_knights_do_not_move() {
        let mut board = board_with(&[(KnightId::Red, 0, 0)], &[]);
        apply_move(&mut board, KnightId::Red, Direction::North);
        let before = board.clone();

        let outcome = apply_move(&mut board, KnightId::Red, Direction::South);
        assert_eq!(outcome, MoveOutcome::NotLive(KnightStatus::Drowned));
        assert!(outcome.is_ignored());
        assert_eq!(board, before);
    }

    #[test]
    fn test_unknown_knight_is_ignored() {
        let mut board = board_with(&[(KnightId::Red, 0, 0)], &[]);
        let before = board.clone();
        assert_eq!(
            apply_move(&mut board, KnightId::Green, Direction::East),
            MoveOutcome::UnknownKnight
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_pickup_prefers_axe() {
        let mut board = board_with(
            &[(KnightId::Red, 2, 1)],
            &[(ItemKind::Helmet, 2, 2), (ItemKind::MagicStaff, 2, 2), (ItemKind::Axe, 2, 2)],
        );
        let outcome = apply_move(&mut board, KnightId::Red, Direction::East);
        assert!(matches!(outcome, MoveOutcome::Moved { picked_up: Some(ItemKind::Axe), .. }));
        assert!(board.item(ItemKind::Axe).unwrap().equipped);
        assert!(!board.item(ItemKind::Helmet).unwrap().equipped);
        assert!(!board.item(ItemKind::MagicStaff).unwrap().equipped);
    }

    #[test]
    fn test_holder_ignores_other_items() {
        let mut board = board_with(
            &[(KnightId::Red, 0, 0)],
            &[(ItemKind::Dagger, 0, 1), (ItemKind::Axe, 0, 2)],
        );
        apply_move(&mut board, KnightId::Red, Direction::East);
        let outcome = apply_move(&mut board, KnightId::Red, Direction::East);
        assert!(matches!(outcome, MoveOutcome::Moved { picked_up: None, .. }));

        let knight = board.knight(KnightId::Red).unwrap();
        assert_eq!(knight.item, Some(ItemKind::Dagger));
        assert_eq!(board.item(ItemKind::Dagger).unwrap().position, Tile::new(0, 2));
        let axe = board.item(ItemKind::Axe).unwrap();
        assert!(!axe.equipped);
        assert_eq!(axe.position, Tile::new(0, 2));
    }

    #[test]
    fn test_item_follows_holder() {
        let mut board = board_with(&[(KnightId::Green, 5, 3)], &[(ItemKind::MagicStaff, 5, 2)]);
        apply_move(&mut board, KnightId::Green, Direction::West);
        apply_move(&mut board, KnightId::Green, Direction::North);
        apply_move(&mut board, KnightId::Green, Direction::North);
        let staff = board.item(ItemKind::MagicStaff).unwrap();
        assert!(staff.equipped);
        assert_eq!(staff.position, Tile::new(3, 2));
    }

    #[test]
    fn test_pickup_before_fight() {
        let mut board = board_with(
            &[(KnightId::Red, 4, 5), (KnightId::Blue, 4, 6)],
            &[(ItemKind::Dagger, 4, 6), (ItemKind::Helmet, 5, 6)],
        );
        // Blue fetches the Helmet and returns to the Dagger tile, ignoring it
        apply_move(&mut board, KnightId::Blue, Direction::South);
        apply_move(&mut board, KnightId::Blue, Direction::North);
        assert!(!board.item(ItemKind::Dagger).unwrap().equipped);

        // Unarmed, Red would lose 1.5 vs 2. With the Dagger it wins 2.5 vs 2.
        let outcome = apply_move(&mut board, KnightId::Red, Direction::East);
        let MoveOutcome::Moved { picked_up, fight: Some(fight), .. } = outcome else {
            panic!("expected a fight, got {outcome:?}");
        };
        assert_eq!(picked_up, Some(ItemKind::Dagger));
        assert_eq!(fight.attack_score, 2.5);
        assert_eq!(fight.defence_score, 2.0);
        assert!(fight.attacker_won());
        assert_eq!(board.knight(KnightId::Blue).unwrap().status, KnightStatus::Dead);
    }

    #[test]
    fn test_loser_drops_item_on_death_tile() {
        let mut board = board_with(
            &[(KnightId::Red, 3, 3), (KnightId::Yellow, 3, 5)],
            &[(ItemKind::MagicStaff, 3, 4), (ItemKind::Helmet, 4, 5)],
        );
        // Yellow takes the Helmet, then Red takes the Staff and attacks Yellow.
        apply_move(&mut board, KnightId::Yellow, Direction::South);
        apply_move(&mut board, KnightId::Yellow, Direction::North);
        apply_move(&mut board, KnightId::Red, Direction::East);
        // Staff: 1 + 0.5 + 1 = 2.5 vs Helmet: 1 + 1 = 2 -> attacker wins
        let outcome = apply_move(&mut board, KnightId::Red, Direction::East);
        let MoveOutcome::Moved { fight: Some(fight), .. } = outcome else {
            panic!("expected a fight, got {outcome:?}");
        };
        assert_eq!(fight.winner, KnightId::Red);

        let yellow = board.knight(KnightId::Yellow).unwrap();
        assert_eq!(yellow.status, KnightStatus::Dead);
        assert_eq!(yellow.position, Some(Tile::new(3, 5)));
        assert_eq!(yellow.item, None);
        let helmet = board.item(ItemKind::Helmet).unwrap();
        assert!(!helmet.equipped);
        assert_eq!(helmet.position, Tile::new(3, 5));
    }

    #[test]
    fn test_staff_dropped_on_death_tile() {
        let mut board = board_with(
            &[(KnightId::Red, 0, 0), (KnightId::Blue, 0, 2)],
            &[(ItemKind::MagicStaff, 0, 1), (ItemKind::Axe, 1, 2)],
        );
        apply_move(&mut board, KnightId::Red, Direction::East);
        apply_move(&mut board, KnightId::Blue, Direction::South);
        apply_move(&mut board, KnightId::Blue, Direction::North);
        // Blue (Axe, 3.5) attacks Red (Staff, defence 2): Blue wins
        apply_move(&mut board, KnightId::Blue, Direction::West);
        let red = board.knight(KnightId::Red).unwrap();
        assert_eq!(red.status, KnightStatus::Dead);
        assert_eq!(red.position, Some(Tile::new(0, 1)));

        // The staff lies on the death tile and Blue, already armed, does not take it
        let staff = board.item(ItemKind::MagicStaff).unwrap();
        assert!(!staff.equipped);
        assert_eq!(staff.position, Tile::new(0, 1));
        let blue = board.knight(KnightId::Blue).unwrap();
        assert_eq!(blue.item, Some(ItemKind::Axe));
        assert_eq!(board.item(ItemKind::Axe).unwrap().position, Tile::new(0, 1));
    }

    #[test]
    fn test_unarmed_attacker_loses_to_helmet() {
        let mut board = board_with(
            &[(KnightId::Green, 6, 6), (KnightId::Yellow, 5, 5)],
            &[(ItemKind::Helmet, 5, 6)],
        );
        // Yellow picks up the Helmet on (5,6)
        apply_move(&mut board, KnightId::Yellow, Direction::East);
        // Green attacks: 1.5 vs 2 -> Green dies on (5,6)
        let outcome = apply_move(&mut board, KnightId::Green, Direction::North);
        let MoveOutcome::Moved { fight: Some(fight), .. } = outcome else {
            panic!("expected a fight, got {outcome:?}");
        };
        assert_eq!(fight.loser, KnightId::Green);

        let green = board.knight(KnightId::Green).unwrap();
        assert_eq!(green.status, KnightStatus::Dead);
        assert_eq!(green.position, Some(Tile::new(5, 6)));
        let yellow = board.knight(KnightId::Yellow).unwrap();
        assert!(yellow.is_live());
        assert_eq!(board.item(ItemKind::Helmet).unwrap().position, Tile::new(5, 6));
    }

    #[test]
    fn test_dead_knight_is_not_attacked() {
        let mut board = board_with(
            &[(KnightId::Red, 2, 0), (KnightId::Blue, 2, 1), (KnightId::Green, 2, 3)],
            &[],
        );
        // Red kills Blue on (2,1), then steps away
        apply_move(&mut board, KnightId::Red, Direction::East);
        apply_move(&mut board, KnightId::Red, Direction::East);
        apply_move(&mut board, KnightId::Red, Direction::South);
        apply_move(&mut board, KnightId::Green, Direction::West);
        let outcome = apply_move(&mut board, KnightId::Green, Direction::West);
        assert!(matches!(outcome, MoveOutcome::Moved { fight: None, .. }));
        assert!(board.knight(KnightId::Green).unwrap().is_live());
    }
}
