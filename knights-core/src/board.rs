//! Board - arena of knights and items with spatial lookup
//!
//! Entities are addressed by identity (R/B/G/Y, A/D/H/M), never by list index.
//! Spatial queries scan the eight arena slots.

use crate::entities::{BoardEntity, Item, ItemKind, Knight, KnightId};
use crate::grid::Tile;
use crate::seed::Seed;

/// All knights and items of one game
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    knights: [Option<Knight>; 4],
    items: [Option<Item>; 4],
}

impl Board {
    /// Populate a fresh board from seed data. Expects a seed that passed
    /// [`Seed::validate`]; a repeated identity overwrites the earlier record.
    pub fn from_seed(seed: &Seed) -> Self {
        let mut board = Self::default();
        for k in &seed.knights {
            board.knights[k.id.index()] = Some(Knight::new(k.id, k.tile()));
        }
        for i in &seed.items {
            board.items[i.id.index()] = Some(Item::new(i.id, i.attack, i.defence, i.tile()));
        }
        board
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn knight(&self, id: KnightId) -> Option<&Knight> {
        self.knights[id.index()].as_ref()
    }

    pub fn knight_mut(&mut self, id: KnightId) -> Option<&mut Knight> {
        self.knights[id.index()].as_mut()
    }

    pub fn item(&self, kind: ItemKind) -> Option<&Item> {
        self.items[kind.index()].as_ref()
    }

    pub fn item_mut(&mut self, kind: ItemKind) -> Option<&mut Item> {
        self.items[kind.index()].as_mut()
    }

    /// Iterate seeded knights in R, B, G, Y order
    pub fn knights(&self) -> impl Iterator<Item = &Knight> + '_ {
        self.knights.iter().flatten()
    }

    /// Iterate seeded items in A, D, H, M order
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().flatten()
    }

    /// Item held by `knight`, if any
    pub fn held_item(&self, knight: &Knight) -> Option<&Item> {
        knight.item.and_then(|kind| self.item(kind))
    }

    /// Effective attack: base plus held item, 0 once out of the game
    pub fn attack_of(&self, knight: &Knight) -> u8 {
        if !knight.is_live() {
            return 0;
        }
        knight.attack() + self.held_item(knight).map_or(0, |i| i.attack_modifier)
    }

    /// Effective defence: base plus held item, 0 once out of the game
    pub fn defence_of(&self, knight: &Knight) -> u8 {
        if !knight.is_live() {
            return 0;
        }
        knight.defence() + self.held_item(knight).map_or(0, |i| i.defence_modifier)
    }

    // ========================================================================
    // SPATIAL QUERIES
    // ========================================================================

    /// Every knight and item whose position equals `tile`
    pub fn entities_at(&self, tile: Tile) -> Vec<BoardEntity<'_>> {
        let knights = self
            .knights()
            .filter(|k| k.position == Some(tile))
            .map(BoardEntity::Knight);
        let items = self
            .items()
            .filter(|i| i.position == tile)
            .map(BoardEntity::Item);
        knights.chain(items).collect()
    }

    /// Best unequipped item on `tile` by pickup priority
    pub fn best_item_at(&self, tile: Tile) -> Option<ItemKind> {
        self.items()
            .filter(|i| !i.equipped && i.position == tile)
            .min_by_key(|i| i.kind.priority())
            .map(|i| i.kind)
    }

    /// LIVE knight on `tile` other than `excluding`
    pub fn live_knight_at(&self, tile: Tile, excluding: KnightId) -> Option<KnightId> {
        self.knights()
            .find(|k| k.id != excluding && k.is_live() && k.position == Some(tile))
            .map(|k| k.id)
    }

    // ========================================================================
    // MUTATION HELPERS
    // ========================================================================

    /// Hand `kind` to `knight`. The item must be unequipped and the knight empty-handed.
    pub(crate) fn equip(&mut self, knight: KnightId, kind: ItemKind) -> bool {
        let ready = matches!(self.knight(knight), Some(k) if k.item.is_none())
            && matches!(self.item(kind), Some(i) if !i.equipped);
        if !ready {
            return false;
        }
        if let Some(item) = self.item_mut(kind) {
            item.equipped = true;
        }
        if let Some(k) = self.knight_mut(knight) {
            k.item = Some(kind);
        }
        true
    }

    /// Take the knight's item away and leave it on `tile`
    pub(crate) fn drop_item(&mut self, knight: KnightId, tile: Tile) -> Option<ItemKind> {
        let kind = self.knight_mut(knight)?.item.take()?;
        if let Some(item) = self.item_mut(kind) {
            item.equipped = false;
            item.position = tile;
        }
        Some(kind)
    }
}
