//! # Description Generation
//!
//! Narrative item descriptions built from rarity templates and a curated
//! set of attribute phrases.

use crate::{Attribute, Item, ItemType, Rarity};
use rand::Rng;

/// Number of narrative templates available per rarity tier.
pub const TEMPLATES_PER_RARITY: usize = 2;

/// Attributes that get a sentence in descriptions.
///
/// Deliberately smaller than the generation vocabulary: other attributes are
/// only ever shown as raw stats.
pub const NARRATED_ATTRIBUTES: [Attribute; 5] = [
    Attribute::Damage,
    Attribute::Speed,
    Attribute::Defense,
    Attribute::Healing,
    Attribute::Magic,
];

/// Generator for narrative item descriptions.
#[derive(Debug, Clone, Default)]
pub struct DescriptionGenerator;

impl DescriptionGenerator {
    /// Creates a new description generator.
    pub fn new() -> Self {
        Self
    }

    /// Describes an item using a randomly chosen template for its rarity.
    pub fn generate<R: Rng + ?Sized>(&self, item: &Item, rng: &mut R) -> String {
        let variant = rng.gen_range(0..TEMPLATES_PER_RARITY);
        self.describe_with(item, variant)
    }

    /// Describes an item using a specific template for its rarity.
    ///
    /// `variant` wraps around the number of templates per rarity.
    ///
    /// # Examples
    ///
    /// ```
    /// use loot_forge::{Attribute, DescriptionGenerator, Item, ItemType, Rarity};
    ///
    /// let sword = Item::new("Excalibur", ItemType::Sword, Rarity::Common)
    ///     .with_attribute(Attribute::Damage, 5);
    /// assert_eq!(
    ///     DescriptionGenerator::new().describe_with(&sword, 0),
    ///     "A reliable sword of good make. It deals 5 points of damage. It serves its purpose well."
    /// );
    /// ```
    pub fn describe_with(&self, item: &Item, variant: usize) -> String {
        let block = self.attribute_block(item);
        narrative(
            item.rarity,
            variant % TEMPLATES_PER_RARITY,
            item.item_type,
            &block,
        )
    }

    /// Joins the narrated attribute phrases, or returns an empty string when
    /// the item has none of them.
    pub fn attribute_block(&self, item: &Item) -> String {
        let phrases: Vec<String> = item
            .attributes
            .iter()
            .filter_map(|(&attribute, &value)| narrate(attribute, value))
            .collect();

        if phrases.is_empty() {
            String::new()
        } else {
            format!("{}.", phrases.join(". "))
        }
    }
}

/// Sentence for a narrated attribute, or `None` for raw-only attributes.
pub fn narrate(attribute: Attribute, value: u32) -> Option<String> {
    let phrase = match attribute {
        Attribute::Damage => format!("It deals {} points of damage", value),
        Attribute::Speed => format!("It strikes with {} speed", value),
        Attribute::Defense => format!("It provides {} points of protection", value),
        Attribute::Healing => format!("It restores {} health points", value),
        Attribute::Magic => format!("It channels {} magical power", value),
        _ => return None,
    };
    Some(phrase)
}

fn narrative(rarity: Rarity, variant: usize, item_type: ItemType, block: &str) -> String {
    match (rarity, variant) {
        (Rarity::Legendary, 0) => format!(
            "A legendary {} of immense power. {} This artifact has been wielded by ancient heroes and kings.",
            item_type, block
        ),
        (Rarity::Legendary, _) => format!(
            "An extraordinary {} that radiates pure energy. {} Legends say it was forged by the gods themselves.",
            item_type, block
        ),
        (Rarity::Rare, 0) => format!(
            "A remarkable {} of exceptional quality. {} Such items are highly sought after by collectors.",
            item_type, block
        ),
        (Rarity::Rare, _) => format!(
            "An impressive {} with unique properties. {} Its craftsmanship is truly remarkable.",
            item_type, block
        ),
        (Rarity::Common | Rarity::Unknown, 0) => format!(
            "A reliable {} of good make. {} It serves its purpose well.",
            item_type, block
        ),
        (Rarity::Common | Rarity::Unknown, _) => format!(
            "A solid {} of standard quality. {} A trustworthy companion in any adventure.",
            item_type, block
        ),
    }
}
