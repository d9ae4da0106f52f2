//! Final-state snapshot and its JSON form
//!
//! ```json
//! {
//!   "red": [[0, 1], "LIVE", "axe", 3, 1],
//!   "blue": [null, "DROWNED", null, 0, 0],
//!   "magic_staff": [[5, 2], false]
//! }
//! ```

use std::path::Path;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::board::Board;
use crate::entities::{ItemKind, KnightId, KnightStatus};
use crate::grid::Tile;

/// Key order of items in the JSON document
const ITEM_ORDER: [ItemKind; 4] = [
    ItemKind::MagicStaff,
    ItemKind::Helmet,
    ItemKind::Dagger,
    ItemKind::Axe,
];

/// Final state of one knight
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnightState {
    pub id: KnightId,
    pub position: Option<Tile>,
    pub status: KnightStatus,
    pub item: Option<ItemKind>,
    pub attack: u8,
    pub defence: u8,
}

impl Serialize for KnightState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (
            self.position.map(Tile::to_pair),
            self.status,
            self.item.map(ItemKind::name),
            self.attack,
            self.defence,
        )
            .serialize(serializer)
    }
}

/// Final state of one item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemState {
    pub kind: ItemKind,
    pub position: Tile,
    pub equipped: bool,
}

impl Serialize for ItemState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.position.to_pair(), self.equipped).serialize(serializer)
    }
}

/// Everything reported at GAME-END
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub knights: Vec<KnightState>,
    pub items: Vec<ItemState>,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        let knights = board
            .knights()
            .map(|k| KnightState {
                id: k.id,
                position: k.position,
                status: k.status,
                item: k.item,
                attack: board.attack_of(k),
                defence: board.defence_of(k),
            })
            .collect();

        let items = ITEM_ORDER
            .iter()
            .filter_map(|&kind| board.item(kind))
            .map(|i| ItemState {
                kind: i.kind,
                position: i.position,
                equipped: i.equipped,
            })
            .collect();

        Self { knights, items }
    }

    pub fn knight(&self, id: KnightId) -> Option<&KnightState> {
        self.knights.iter().find(|k| k.id == id)
    }

    pub fn item(&self, kind: ItemKind) -> Option<&ItemState> {
        self.items.iter().find(|i| i.kind == kind)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the pretty JSON document to `path`
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = self.to_json_pretty()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.knights.len() + self.items.len()))?;
        for k in &self.knights {
            map.serialize_entry(k.id.name(), k)?;
        }
        for i in &self.items {
            map.serialize_entry(i.kind.name(), i)?;
        }
        map.end()
    }
}
