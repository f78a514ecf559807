//! # Game Module
//!
//! Core item data model and inventory management.
//!
//! This module contains the fundamental building blocks of the forge:
//! - The closed item type, rarity and attribute vocabularies
//! - The immutable [`Item`] record
//! - The fixed-capacity [`Inventory`] that coordinates the generators

pub mod inventory;
pub mod item;

pub use inventory::*;
pub use item::*;

use crate::LootError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of an item.
///
/// Every known type carries a fixed list of three attributes and a drawing
/// recipe. `Unknown` stands in for a type the tables do not cover; it is
/// never produced by random generation.
///
/// # Examples
///
/// ```
/// use loot_forge::{Attribute, ItemType};
///
/// let sword: ItemType = "Sword".parse().unwrap();
/// assert_eq!(sword, ItemType::Sword);
/// assert_eq!(sword.title(), "Sword");
/// assert_eq!(sword.attributes(), &[Attribute::Damage, Attribute::Speed, Attribute::Critical]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Sword,
    Shield,
    Potion,
    Staff,
    Scroll,
    Bow,
    Ring,
    Amulet,
    Axe,
    Wand,
    /// A type outside the known tables
    #[serde(other)]
    Unknown,
}

impl ItemType {
    /// All known item types, in table order.
    pub const ALL: [ItemType; 10] = [
        ItemType::Sword,
        ItemType::Shield,
        ItemType::Potion,
        ItemType::Staff,
        ItemType::Scroll,
        ItemType::Bow,
        ItemType::Ring,
        ItemType::Amulet,
        ItemType::Axe,
        ItemType::Wand,
    ];

    /// Picks one of the known types uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Lowercase name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Sword => "sword",
            ItemType::Shield => "shield",
            ItemType::Potion => "potion",
            ItemType::Staff => "staff",
            ItemType::Scroll => "scroll",
            ItemType::Bow => "bow",
            ItemType::Ring => "ring",
            ItemType::Amulet => "amulet",
            ItemType::Axe => "axe",
            ItemType::Wand => "wand",
            ItemType::Unknown => "unknown",
        }
    }

    /// Title-cased name of the type, as used in generated item names.
    pub fn title(self) -> &'static str {
        match self {
            ItemType::Sword => "Sword",
            ItemType::Shield => "Shield",
            ItemType::Potion => "Potion",
            ItemType::Staff => "Staff",
            ItemType::Scroll => "Scroll",
            ItemType::Bow => "Bow",
            ItemType::Ring => "Ring",
            ItemType::Amulet => "Amulet",
            ItemType::Axe => "Axe",
            ItemType::Wand => "Wand",
            ItemType::Unknown => "Unknown",
        }
    }

    /// The fixed attribute names rolled for items of this type.
    ///
    /// Unknown types have no attributes.
    pub fn attributes(self) -> &'static [Attribute] {
        use Attribute::*;

        match self {
            ItemType::Sword => &[Damage, Speed, Critical],
            ItemType::Shield => &[Defense, Block, Reflection],
            ItemType::Potion => &[Healing, Duration, Potency],
            ItemType::Staff => &[Magic, Mana, Element],
            ItemType::Scroll => &[Spell, Duration, Area],
            ItemType::Bow => &[Range, Accuracy, Damage],
            ItemType::Ring => &[Magic, Protection, Luck],
            ItemType::Amulet => &[Magic, Wisdom, Resistance],
            ItemType::Axe => &[Damage, Weight, Critical],
            ItemType::Wand => &[Magic, Precision, Power],
            ItemType::Unknown => &[],
        }
    }

    /// Returns true for the ten types covered by the tables.
    pub fn is_known(self) -> bool {
        self != ItemType::Unknown
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = LootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| LootError::UnknownItemType(s.to_string()))
    }
}

/// Rarity tier of an item.
///
/// Drives the probability weighting, the attribute scalar and the icon
/// palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
    /// A tier outside the known tables
    #[serde(other)]
    Unknown,
}

impl Rarity {
    /// All known rarity tiers, from most to least common.
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Rare, Rarity::Legendary];

    /// Sum of all rarity weights.
    pub const TOTAL_WEIGHT: u32 = 100;

    /// Relative drop weight of this tier out of [`Rarity::TOTAL_WEIGHT`].
    pub fn weight(self) -> u32 {
        match self {
            Rarity::Common => 60,
            Rarity::Rare => 30,
            Rarity::Legendary => 10,
            Rarity::Unknown => 0,
        }
    }

    /// Multiplier applied to every base attribute roll.
    pub fn scalar(self) -> f64 {
        match self {
            Rarity::Common | Rarity::Unknown => 1.0,
            Rarity::Rare => 1.5,
            Rarity::Legendary => 2.0,
        }
    }

    /// Draws a tier from the weighted 60/30/10 distribution.
    ///
    /// # Examples
    ///
    /// ```
    /// use loot_forge::Rarity;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// assert!(Rarity::ALL.contains(&Rarity::roll(&mut rng)));
    /// ```
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut roll = rng.gen_range(0..Self::TOTAL_WEIGHT);
        for rarity in Self::ALL {
            if roll < rarity.weight() {
                return rarity;
            }
            roll -= rarity.weight();
        }
        Rarity::Common
    }

    /// Lowercase name of the tier.
    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
            Rarity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named integer stat.
///
/// The full vocabulary used by generation. Only a handful of these are
/// narrated by the description generator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Damage,
    Speed,
    Critical,
    Defense,
    Block,
    Reflection,
    Healing,
    Duration,
    Potency,
    Magic,
    Mana,
    Element,
    Spell,
    Area,
    Range,
    Accuracy,
    Protection,
    Luck,
    Wisdom,
    Resistance,
    Weight,
    Precision,
    Power,
}

impl Attribute {
    /// Lowercase name of the attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Damage => "damage",
            Attribute::Speed => "speed",
            Attribute::Critical => "critical",
            Attribute::Defense => "defense",
            Attribute::Block => "block",
            Attribute::Reflection => "reflection",
            Attribute::Healing => "healing",
            Attribute::Duration => "duration",
            Attribute::Potency => "potency",
            Attribute::Magic => "magic",
            Attribute::Mana => "mana",
            Attribute::Element => "element",
            Attribute::Spell => "spell",
            Attribute::Area => "area",
            Attribute::Range => "range",
            Attribute::Accuracy => "accuracy",
            Attribute::Protection => "protection",
            Attribute::Luck => "luck",
            Attribute::Wisdom => "wisdom",
            Attribute::Resistance => "resistance",
            Attribute::Weight => "weight",
            Attribute::Precision => "precision",
            Attribute::Power => "power",
        }
    }

    /// Title-cased label for stat listings.
    pub fn label(self) -> String {
        crate::generation::utils::title_case(self.as_str())
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_every_known_type_has_three_distinct_attributes() {
        for kind in ItemType::ALL {
            let attributes = kind.attributes();
            assert_eq!(attributes.len(), 3, "{kind} should have three attributes");
            let unique: HashSet<_> = attributes.iter().collect();
            assert_eq!(unique.len(), 3);
        }
        assert!(ItemType::Unknown.attributes().is_empty());
    }

    #[test]
    fn test_item_type_parsing() {
        assert_eq!("axe".parse::<ItemType>().unwrap(), ItemType::Axe);
        assert_eq!(" WAND ".parse::<ItemType>().unwrap(), ItemType::Wand);
        assert!(matches!(
            "halberd".parse::<ItemType>(),
            Err(LootError::UnknownItemType(name)) if name == "halberd"
        ));
        assert!("unknown".parse::<ItemType>().is_err());
    }

    #[test]
    fn test_item_type_names() {
        for kind in ItemType::ALL {
            assert_eq!(kind.title().to_lowercase(), kind.as_str());
            assert_eq!(kind.to_string(), kind.as_str());
            assert!(kind.is_known());
        }
        assert!(!ItemType::Unknown.is_known());
    }

    #[test]
    fn test_random_type_covers_all_known_types() {
        let mut rng = StdRng::seed_from_u64(3);
        let seen: HashSet<_> = (0..500).map(|_| ItemType::random(&mut rng)).collect();
        assert_eq!(seen.len(), ItemType::ALL.len());
        assert!(!seen.contains(&ItemType::Unknown));
    }

    #[test]
    fn test_rarity_weights_and_scalars() {
        let total: u32 = Rarity::ALL.iter().map(|r| r.weight()).sum();
        assert_eq!(total, Rarity::TOTAL_WEIGHT);
        assert_eq!(Rarity::Common.scalar(), 1.0);
        assert_eq!(Rarity::Rare.scalar(), 1.5);
        assert_eq!(Rarity::Legendary.scalar(), 2.0);
    }

    #[test]
    fn test_attribute_labels() {
        assert_eq!(Attribute::Damage.label(), "Damage");
        assert_eq!(Attribute::Resistance.label(), "Resistance");
        assert_eq!(Attribute::Luck.to_string(), "luck");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ItemType::Shield).unwrap(), "\"shield\"");
        assert_eq!(serde_json::to_string(&Rarity::Legendary).unwrap(), "\"legendary\"");
        let parsed: ItemType = serde_json::from_str("\"halberd\"").unwrap();
        assert_eq!(parsed, ItemType::Unknown);
        let parsed: Rarity = serde_json::from_str("\"mythic\"").unwrap();
        assert_eq!(parsed, Rarity::Unknown);
    }
}
