//! Knight and item definitions

use serde::{Deserialize, Serialize};

use crate::grid::Tile;

/// Base attack score of every knight
pub const BASE_ATTACK: u8 = 1;

/// Base defence score of every knight
pub const BASE_DEFENCE: u8 = 1;

/// Knight identity, also the index into the board's knight arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnightId {
    #[serde(rename = "R")]
    Red = 0,
    #[serde(rename = "B")]
    Blue = 1,
    #[serde(rename = "G")]
    Green = 2,
    #[serde(rename = "Y")]
    Yellow = 3,
}

impl KnightId {
    pub const ALL: [KnightId; 4] = [
        KnightId::Red,
        KnightId::Blue,
        KnightId::Green,
        KnightId::Yellow,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'R' => Some(KnightId::Red),
            'B' => Some(KnightId::Blue),
            'G' => Some(KnightId::Green),
            'Y' => Some(KnightId::Yellow),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            KnightId::Red => 'R',
            KnightId::Blue => 'B',
            KnightId::Green => 'G',
            KnightId::Yellow => 'Y',
        }
    }

    /// Lowercase colour name used as the snapshot key
    pub fn name(self) -> &'static str {
        match self {
            KnightId::Red => "red",
            KnightId::Blue => "blue",
            KnightId::Green => "green",
            KnightId::Yellow => "yellow",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Item identity, also the index into the board's item arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    #[serde(rename = "A")]
    Axe = 0,
    #[serde(rename = "D")]
    Dagger = 1,
    #[serde(rename = "H")]
    Helmet = 2,
    #[serde(rename = "M")]
    MagicStaff = 3,
}

/// Pickup preference when several unequipped items share a tile, best first
pub const ITEM_PRIORITY: [ItemKind; 4] = [
    ItemKind::Axe,
    ItemKind::MagicStaff,
    ItemKind::Dagger,
    ItemKind::Helmet,
];

impl ItemKind {
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Axe,
        ItemKind::Dagger,
        ItemKind::Helmet,
        ItemKind::MagicStaff,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(ItemKind::Axe),
            'D' => Some(ItemKind::Dagger),
            'H' => Some(ItemKind::Helmet),
            'M' => Some(ItemKind::MagicStaff),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            ItemKind::Axe => 'A',
            ItemKind::Dagger => 'D',
            ItemKind::Helmet => 'H',
            ItemKind::MagicStaff => 'M',
        }
    }

    /// Snake-case name used as the snapshot key
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Axe => "axe",
            ItemKind::Dagger => "dagger",
            ItemKind::Helmet => "helmet",
            ItemKind::MagicStaff => "magic_staff",
        }
    }

    /// Standard (attack, defence) modifiers
    pub fn default_modifiers(self) -> (u8, u8) {
        match self {
            ItemKind::Axe => (2, 0),
            ItemKind::Dagger => (1, 0),
            ItemKind::Helmet => (0, 1),
            ItemKind::MagicStaff => (1, 1),
        }
    }

    /// Position in [`ITEM_PRIORITY`], lower is better
    pub fn priority(self) -> usize {
        ITEM_PRIORITY
            .iter()
            .position(|&kind| kind == self)
            .unwrap_or(ITEM_PRIORITY.len())
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Knight lifecycle state. DEAD and DROWNED are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KnightStatus {
    Live,
    Dead,
    Drowned,
}

impl KnightStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            KnightStatus::Live => "LIVE",
            KnightStatus::Dead => "DEAD",
            KnightStatus::Drowned => "DROWNED",
        }
    }
}

/// A knight on (or formerly on) the board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Knight {
    pub id: KnightId,
    /// `None` once drowned
    pub position: Option<Tile>,
    pub status: KnightStatus,
    /// Held item, owned exclusively while equipped
    pub item: Option<ItemKind>,
}

impl Knight {
    pub fn new(id: KnightId, position: Tile) -> Self {
        Self {
            id,
            position: Some(position),
            status: KnightStatus::Live,
            item: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.status == KnightStatus::Live
    }

    /// Base attack, 0 once the knight is out of the game
    pub fn attack(&self) -> u8 {
        if self.is_live() { BASE_ATTACK } else { 0 }
    }

    /// Base defence, 0 once the knight is out of the game
    pub fn defence(&self) -> u8 {
        if self.is_live() { BASE_DEFENCE } else { 0 }
    }
}

/// An item lying on a tile or carried by a knight
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub attack_modifier: u8,
    pub defence_modifier: u8,
    /// Spawn tile, last drop tile, or the holder's tile
    pub position: Tile,
    pub equipped: bool,
}

impl Item {
    pub fn new(kind: ItemKind, attack_modifier: u8, defence_modifier: u8, position: Tile) -> Self {
        Self {
            kind,
            attack_modifier,
            defence_modifier,
            position,
            equipped: false,
        }
    }

    /// Item with its standard modifiers
    pub fn standard(kind: ItemKind, position: Tile) -> Self {
        let (attack, defence) = kind.default_modifiers();
        Self::new(kind, attack, defence, position)
    }
}

/// Any board occupant, borrowed from the board arena
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardEntity<'a> {
    Knight(&'a Knight),
    Item(&'a Item),
}

impl BoardEntity<'_> {
    /// Single-character identity tag
    pub fn identity(&self) -> char {
        match self {
            BoardEntity::Knight(k) => k.id.as_char(),
            BoardEntity::Item(i) => i.kind.as_char(),
        }
    }

    pub fn position(&self) -> Option<Tile> {
        match self {
            BoardEntity::Knight(k) => k.position,
            BoardEntity::Item(i) => Some(i.position),
        }
    }

    /// Knight status, `None` for items which have no liveness
    pub fn status(&self) -> Option<KnightStatus> {
        match self {
            BoardEntity::Knight(k) => Some(k.status),
            BoardEntity::Item(_) => None,
        }
    }
}
