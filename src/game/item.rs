//! # Item Records
//!
//! The immutable item record shared by every generator.

use crate::{Attribute, ItemType, Rarity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A generated (or hand-built) item.
///
/// Items are created by the [`ItemGenerator`](crate::ItemGenerator) or built
/// directly for fixtures, and are never mutated once placed in an inventory.
///
/// # Examples
///
/// ```
/// use loot_forge::{Attribute, Item, ItemType, Rarity};
///
/// let sword = Item::new("Excalibur", ItemType::Sword, Rarity::Legendary)
///     .with_attribute(Attribute::Damage, 20);
/// assert_eq!(sword.to_string(), "Excalibur (legendary sword)");
/// assert_eq!(sword.attribute(Attribute::Damage), Some(20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name composed at generation time
    pub name: String,
    /// Item category
    pub item_type: ItemType,
    /// Rarity tier
    pub rarity: Rarity,
    /// Attribute values keyed by name
    #[serde(default)]
    pub attributes: BTreeMap<Attribute, u32>,
}

impl Item {
    /// Creates an item with no attributes.
    pub fn new(name: impl Into<String>, item_type: ItemType, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            item_type,
            rarity,
            attributes: BTreeMap::new(),
        }
    }

    /// Returns the item with an attribute set to `value`.
    pub fn with_attribute(mut self, attribute: Attribute, value: u32) -> Self {
        self.attributes.insert(attribute, value);
        self
    }

    /// Gets the value of an attribute, if the item has it.
    pub fn attribute(&self, attribute: Attribute) -> Option<u32> {
        self.attributes.get(&attribute).copied()
    }

    /// Lists every attribute in raw form, e.g. `"Critical: 7"`.
    pub fn stat_lines(&self) -> Vec<String> {
        self.attributes
            .iter()
            .map(|(attribute, value)| format!("{}: {}", attribute.label(), value))
            .collect()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.name, self.rarity, self.item_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let shield = Item::new("Dragon Shield", ItemType::Shield, Rarity::Rare);
        assert_eq!(shield.name, "Dragon Shield");
        assert!(shield.attributes.is_empty());
        assert_eq!(shield.to_string(), "Dragon Shield (rare shield)");
    }

    #[test]
    fn test_stat_lines() {
        let axe = Item::new("Demon Axe", ItemType::Axe, Rarity::Common)
            .with_attribute(Attribute::Critical, 7)
            .with_attribute(Attribute::Damage, 4);

        assert_eq!(axe.stat_lines(), vec!["Damage: 4", "Critical: 7"]);
        assert_eq!(axe.attribute(Attribute::Weight), None);
    }

    #[test]
    fn test_item_serialization() {
        let ring = Item::new("Mystic Ring", ItemType::Ring, Rarity::Legendary)
            .with_attribute(Attribute::Luck, 18);

        let json = serde_json::to_string(&ring).unwrap();
        assert!(json.contains("\"item_type\":\"ring\""));
        assert!(json.contains("\"luck\":18"));

        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ring);
    }
}
