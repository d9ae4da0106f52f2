//! Seed - starting positions of knights and items

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::{ItemKind, KnightId};
use crate::error::SeedError;
use crate::grid::Tile;

/// Starting record for one knight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnightSeed {
    pub id: KnightId,
    pub row: i8,
    pub col: i8,
}

impl KnightSeed {
    pub fn tile(&self) -> Tile {
        Tile::new(self.row, self.col)
    }
}

/// Starting record for one item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSeed {
    pub id: ItemKind,
    pub attack: u8,
    pub defence: u8,
    pub row: i8,
    pub col: i8,
}

impl ItemSeed {
    pub fn tile(&self) -> Tile {
        Tile::new(self.row, self.col)
    }
}

/// Everything needed to (re-)populate a board at GAME-START
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub knights: Vec<KnightSeed>,
    pub items: Vec<ItemSeed>,
}

impl Seed {
    /// The classic layout: knights in the corners, items on the inner square
    pub fn standard() -> Self {
        let knight = |id, row, col| KnightSeed { id, row, col };
        let item = |id: ItemKind, row, col| {
            let (attack, defence) = id.default_modifiers();
            ItemSeed { id, attack, defence, row, col }
        };

        Self {
            knights: vec![
                knight(KnightId::Red, 0, 0),
                knight(KnightId::Blue, 7, 0),
                knight(KnightId::Green, 7, 7),
                knight(KnightId::Yellow, 0, 7),
            ],
            items: vec![
                item(ItemKind::Axe, 2, 2),
                item(ItemKind::Dagger, 2, 5),
                item(ItemKind::MagicStaff, 5, 2),
                item(ItemKind::Helmet, 5, 5),
            ],
        }
    }

    /// Load from the two line-oriented text files (`R00`, `A2022`)
    pub fn load_text(knights_path: &Path, items_path: &Path) -> Result<Self, SeedError> {
        let knights = parse_knights(&read(knights_path)?)?;
        let items = parse_items(&read(items_path)?)?;
        let seed = Self { knights, items };
        seed.validate()?;
        Ok(seed)
    }

    /// Load a JSON seed document
    pub fn load_json(path: &Path) -> Result<Self, SeedError> {
        let seed: Seed = serde_json::from_str(&read(path)?)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Check identities are unique, start tiles are on the board, and no two
    /// knights share a start tile
    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen_knights = [false; 4];
        for (i, k) in self.knights.iter().enumerate() {
            if std::mem::replace(&mut seen_knights[k.id.index()], true) {
                return Err(SeedError::Duplicate(k.id.as_char()));
            }
            if !k.tile().is_valid() {
                return Err(SeedError::OffBoard { entity: k.id.as_char(), tile: k.tile() });
            }
            if let Some(other) = self.knights[..i].iter().find(|o| o.tile() == k.tile()) {
                return Err(SeedError::SharedStart {
                    first: other.id.as_char(),
                    second: k.id.as_char(),
                    tile: k.tile(),
                });
            }
        }

        let mut seen_items = [false; 4];
        for item in &self.items {
            if std::mem::replace(&mut seen_items[item.id.index()], true) {
                return Err(SeedError::Duplicate(item.id.as_char()));
            }
            if !item.tile().is_valid() {
                return Err(SeedError::OffBoard { entity: item.id.as_char(), tile: item.tile() });
            }
        }

        Ok(())
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parse knight records, one `<id><row><col>` per line
pub fn parse_knights(content: &str) -> Result<Vec<KnightSeed>, SeedError> {
    records(content)
        .map(|(line, text)| -> Result<KnightSeed, SeedError> {
            let fields = fixed_fields::<3>(line, text)?;
            let id = KnightId::from_char(fields[0])
                .ok_or_else(|| malformed(line, text, "unknown knight identity"))?;
            Ok(KnightSeed {
                id,
                row: digit(line, text, fields[1])? as i8,
                col: digit(line, text, fields[2])? as i8,
            })
        })
        .collect()
}

/// Parse item records, one `<id><attack><defence><row><col>` per line
pub fn parse_items(content: &str) -> Result<Vec<ItemSeed>, SeedError> {
    records(content)
        .map(|(line, text)| -> Result<ItemSeed, SeedError> {
            let fields = fixed_fields::<5>(line, text)?;
            let id = ItemKind::from_char(fields[0])
                .ok_or_else(|| malformed(line, text, "unknown item identity"))?;
            Ok(ItemSeed {
                id,
                attack: digit(line, text, fields[1])?,
                defence: digit(line, text, fields[2])?,
                row: digit(line, text, fields[3])? as i8,
                col: digit(line, text, fields[4])? as i8,
            })
        })
        .collect()
}

fn read(path: &Path) -> Result<String, SeedError> {
    std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-blank trimmed lines with 1-based line numbers
fn records(content: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
}

fn fixed_fields<const N: usize>(line: usize, text: &str) -> Result<[char; N], SeedError> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .try_into()
        .map_err(|_| malformed(line, text, "wrong record length"))
}

fn digit(line: usize, text: &str, c: char) -> Result<u8, SeedError> {
    c.to_digit(10)
        .map(|d| d as u8)
        .ok_or_else(|| malformed(line, text, "expected a digit"))
}

fn malformed(line: usize, text: &str, message: &'static str) -> SeedError {
    SeedError::Malformed {
        line,
        text: text.to_string(),
        message,
    }
}
