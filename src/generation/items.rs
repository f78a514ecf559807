//! # Item Generation
//!
//! Rolls item types, rarities, names and rarity-scaled attributes.

use crate::{
    config, Attribute, GenerationConfig, Generator, Item, ItemType, LootError, LootResult,
    Rarity,
};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::BTreeMap;

/// Name prefixes, drawn uniformly.
pub const NAME_PREFIXES: [&str; 8] = [
    "Ancient", "Mystic", "Divine", "Cursed", "Blessed", "Dragon", "Demon", "Angel",
];

/// Name suffixes, drawn uniformly when a suffix is rolled.
pub const NAME_SUFFIXES: [&str; 6] = [
    "of Power",
    "of Wisdom",
    "of the Beast",
    "of Light",
    "of Darkness",
    "of Time",
];

/// Inclusive range of the unscaled attribute roll.
pub const BASE_ATTRIBUTE_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// Generator for item records with balanced, rarity-scaled attributes.
#[derive(Debug, Clone)]
pub struct ItemGenerator {
    /// Probability that a generated name carries a suffix
    pub suffix_chance: f64,
}

impl ItemGenerator {
    /// Creates a generator with the default suffix chance.
    pub fn new() -> Self {
        Self {
            suffix_chance: config::DEFAULT_SUFFIX_CHANCE,
        }
    }

    /// Creates a generator using the settings of a generation config.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            suffix_chance: config.suffix_chance.clamp(0.0, 1.0),
        }
    }

    /// Generates an item of the given type, or of a random known type.
    ///
    /// # Examples
    ///
    /// ```
    /// use loot_forge::{Attribute, ItemGenerator, ItemType};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(9);
    /// let potion = ItemGenerator::new().generate_item(Some(ItemType::Potion), &mut rng);
    /// assert_eq!(potion.item_type, ItemType::Potion);
    /// assert!(potion.attribute(Attribute::Healing).is_some());
    /// ```
    pub fn generate_item<R: Rng + ?Sized>(&self, item_type: Option<ItemType>, rng: &mut R) -> Item {
        let item_type = item_type.unwrap_or_else(|| ItemType::random(rng));
        let rarity = Rarity::roll(rng);
        let name = self.roll_name(item_type, rng);
        let attributes = Self::roll_attributes(item_type, rarity, rng);

        let item = Item {
            name,
            item_type,
            rarity,
            attributes,
        };
        debug!("Generated {} with {} attributes", item, item.attributes.len());
        item
    }

    /// Composes `<prefix> <Type> [<suffix>]`.
    fn roll_name<R: Rng + ?Sized>(&self, item_type: ItemType, rng: &mut R) -> String {
        let prefix = NAME_PREFIXES[rng.gen_range(0..NAME_PREFIXES.len())];
        let suffix = if rng.gen_bool(self.suffix_chance) {
            NAME_SUFFIXES[rng.gen_range(0..NAME_SUFFIXES.len())]
        } else {
            ""
        };

        format!("{} {} {}", prefix, item_type.title(), suffix).trim().to_string()
    }

    /// Rolls every attribute of the type, scaled by the rarity.
    fn roll_attributes<R: Rng + ?Sized>(
        item_type: ItemType,
        rarity: Rarity,
        rng: &mut R,
    ) -> BTreeMap<Attribute, u32> {
        item_type
            .attributes()
            .iter()
            .map(|&attribute| {
                let base = rng.gen_range(BASE_ATTRIBUTE_RANGE);
                (attribute, scale_attribute(base, rarity))
            })
            .collect()
    }
}

impl Default for ItemGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the rarity scalar to a base roll, rounding half to even.
pub fn scale_attribute(base: u32, rarity: Rarity) -> u32 {
    (base as f64 * rarity.scalar()).round_ties_even() as u32
}

/// The inclusive range every attribute of the given rarity falls in.
pub fn attribute_bounds(rarity: Rarity) -> (u32, u32) {
    (
        scale_attribute(*BASE_ATTRIBUTE_RANGE.start(), rarity),
        scale_attribute(*BASE_ATTRIBUTE_RANGE.end(), rarity),
    )
}

impl Generator<Item> for ItemGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> LootResult<Item> {
        let item = Self::from_config(config).generate_item(None, rng);
        self.validate(&item, config)?;
        Ok(item)
    }

    fn validate(&self, content: &Item, _config: &GenerationConfig) -> LootResult<()> {
        let expected = content.item_type.attributes();
        if content.attributes.len() != expected.len()
            || !expected.iter().all(|a| content.attributes.contains_key(a))
        {
            return Err(LootError::GenerationFailed(format!(
                "{} has attributes {:?}, expected {:?}",
                content.name,
                content.attributes.keys().collect::<Vec<_>>(),
                expected
            )));
        }

        let (low, high) = attribute_bounds(content.rarity);
        if let Some((attribute, value)) = content
            .attributes
            .iter()
            .find(|(_, value)| !(low..=high).contains(*value))
        {
            return Err(LootError::GenerationFailed(format!(
                "{} has {} = {}, outside {}..={} for {} items",
                content.name, attribute, value, low, high, content.rarity
            )));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "ItemGenerator"
    }
}
