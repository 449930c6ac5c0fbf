//! Items - simple consumable bookkeeping
//!
//! Nothing here touches combat math; items only restore health through the
//! owning character's stat bundle.

use serde::{Deserialize, Serialize};

/// What an item does when used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    /// One-shot item that restores health and is consumed
    Consumable { restores_health: i32 },
}

/// An inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub kind: ItemKind,
}

impl Item {
    /// A consumable that restores the given amount of health.
    pub fn healing(name: impl Into<String>, restores_health: i32) -> Self {
        Item {
            name: name.into(),
            kind: ItemKind::Consumable { restores_health },
        }
    }

    /// Common drop: restores 25 health.
    pub fn minor_healing_potion() -> Self {
        Item::healing("Minor Healing Potion", 25)
    }

    /// Common drop: restores 25 health.
    pub fn healing_potion() -> Self {
        Item::healing("Healing Potion", 25)
    }

    /// Common drop: restores 10 health.
    pub fn simple_bandage() -> Self {
        Item::healing("Simple Bandage", 10)
    }
}
