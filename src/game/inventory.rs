//! # Inventory Module
//!
//! Fixed-capacity, ordered item storage with a single selection.
//!
//! The [`Inventory`] owns every item placed in it and coordinates the
//! item, description and visual generators. It also owns the seeded random
//! source, so every random draw made on its behalf is reproducible from the
//! configured seed.

use crate::generation::utils::create_rng;
use crate::{
    config, DescriptionGenerator, GenerationConfig, Item, ItemGenerator, ItemType, LootResult,
    VisualGenerator,
};
use image::RgbaImage;
use log::{debug, warn};
use rand::rngs::StdRng;
use serde::Serialize;

/// Description returned when there is nothing selected to describe.
pub const NO_ITEM_SELECTED: &str = "No item selected.";

/// Item types generated by [`Inventory::populate_sample`], row by row:
/// weapons, defensive items, consumables, then a mixed row.
pub const SAMPLE_LOADOUT: [ItemType; 24] = [
    ItemType::Sword,
    ItemType::Axe,
    ItemType::Bow,
    ItemType::Staff,
    ItemType::Wand,
    ItemType::Sword,
    ItemType::Shield,
    ItemType::Shield,
    ItemType::Ring,
    ItemType::Amulet,
    ItemType::Ring,
    ItemType::Amulet,
    ItemType::Potion,
    ItemType::Scroll,
    ItemType::Potion,
    ItemType::Scroll,
    ItemType::Potion,
    ItemType::Scroll,
    ItemType::Staff,
    ItemType::Wand,
    ItemType::Bow,
    ItemType::Axe,
    ItemType::Sword,
    ItemType::Shield,
];

/// Read-only snapshot of the inventory for display layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryView<'a> {
    /// Every slot, in order
    pub slots: &'a [Option<Item>],
    /// Currently selected slot index
    pub selected: Option<usize>,
}

/// A fixed number of ordered item slots plus the generators that fill and
/// present them.
///
/// # Examples
///
/// ```
/// use loot_forge::{Inventory, Item, ItemType, Rarity, NO_ITEM_SELECTED};
///
/// let mut inventory = Inventory::new(2);
/// assert_eq!(inventory.describe_selected(), NO_ITEM_SELECTED);
///
/// assert!(inventory.add(Item::new("Excalibur", ItemType::Sword, Rarity::Legendary)));
/// assert!(inventory.add(Item::new("Dragon Shield", ItemType::Shield, Rarity::Rare)));
/// assert!(!inventory.add(Item::new("Spare", ItemType::Axe, Rarity::Common)));
///
/// assert!(inventory.select(1));
/// assert!(!inventory.select(2));
/// assert_eq!(inventory.selected_index(), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Inventory {
    slots: Vec<Option<Item>>,
    selected: Option<usize>,
    config: GenerationConfig,
    rng: StdRng,
    item_generator: ItemGenerator,
    description_generator: DescriptionGenerator,
    visual_generator: VisualGenerator,
}

impl Inventory {
    /// Creates an empty inventory with `capacity` slots and the default seed.
    pub fn new(capacity: usize) -> Self {
        let config = GenerationConfig {
            inventory_capacity: capacity,
            ..GenerationConfig::default()
        };
        Self::build(config)
    }

    /// Creates an empty inventory from a validated configuration.
    pub fn with_config(config: GenerationConfig) -> LootResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GenerationConfig) -> Self {
        Self {
            slots: vec![None; config.inventory_capacity],
            selected: None,
            rng: create_rng(&config),
            item_generator: ItemGenerator::from_config(&config),
            description_generator: DescriptionGenerator::new(),
            visual_generator: VisualGenerator::new(),
            config,
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// All slots, in order.
    pub fn slots(&self) -> &[Option<Item>] {
        &self.slots
    }

    /// Gets the item in a slot, if the slot exists and is occupied.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Gets the item in the selected slot.
    pub fn selected_item(&self) -> Option<&Item> {
        self.selected.and_then(|index| self.get(index))
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Snapshot of the slots and selection.
    pub fn view(&self) -> InventoryView<'_> {
        InventoryView {
            slots: &self.slots,
            selected: self.selected,
        }
    }

    /// Places an item in the first empty slot.
    ///
    /// Returns false, leaving the inventory untouched, when every slot is
    /// taken.
    pub fn add(&mut self, item: Item) -> bool {
        match self.slots.iter().position(|slot| slot.is_none()) {
            Some(index) => {
                debug!("Stored {} in slot {}", item, index);
                self.slots[index] = Some(item);
                true
            }
            None => {
                warn!("Inventory full, {} was not stored", item);
                false
            }
        }
    }

    /// Selects a slot by index.
    ///
    /// Out-of-range indices, negative ones included, are rejected and keep
    /// the previous selection.
    pub fn select(&mut self, index: isize) -> bool {
        match usize::try_from(index) {
            Ok(index) if index < self.capacity() => {
                self.selected = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Generates a new item without storing it.
    pub fn generate_random(&mut self, item_type: Option<ItemType>) -> Item {
        self.item_generator.generate_item(item_type, &mut self.rng)
    }

    /// Describes the selected item, or returns [`NO_ITEM_SELECTED`].
    pub fn describe_selected(&mut self) -> String {
        let Some(item) = self.selected.and_then(|index| self.slots.get(index)?.as_ref()) else {
            return NO_ITEM_SELECTED.to_string();
        };
        self.description_generator.generate(item, &mut self.rng)
    }

    /// Renders an icon for an item, at the configured size unless one is given.
    ///
    /// Returns `None` when there is no item to render.
    pub fn render_visual(&self, item: Option<&Item>, size: Option<(u32, u32)>) -> Option<RgbaImage> {
        let item = item?;
        let size = size.unwrap_or(self.config.icon_size);
        Some(self.visual_generator.generate(item, size))
    }

    /// Generates and stores the sample loadout, returning how many items
    /// found a slot.
    pub fn populate_sample(&mut self) -> usize {
        let mut stored = 0;
        for item_type in SAMPLE_LOADOUT {
            let item = self.generate_random(Some(item_type));
            if self.add(item) {
                stored += 1;
            }
        }
        stored
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(config::DEFAULT_INVENTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attribute, LootError, Rarity};

    fn fixture(name: &str) -> Item {
        Item::new(name, ItemType::Sword, Rarity::Common).with_attribute(Attribute::Damage, 4)
    }

    #[test]
    fn test_new_inventory_is_empty() {
        let inventory = Inventory::new(3);
        assert_eq!(inventory.capacity(), 3);
        assert_eq!(inventory.len(), 0);
        assert!(inventory.is_empty());
        assert!(!inventory.is_full());
        assert_eq!(inventory.selected_index(), None);
        assert!(inventory.slots().iter().all(Option::is_none));
        assert_eq!(Inventory::default().capacity(), 10);
    }

    #[test]
    fn test_add_fills_first_empty_slot() {
        let mut inventory = Inventory::new(3);
        assert!(inventory.add(fixture("A")));
        assert!(inventory.add(fixture("B")));
        assert_eq!(inventory.get(0).unwrap().name, "A");
        assert_eq!(inventory.get(1).unwrap().name, "B");
        assert!(inventory.get(2).is_none());
        assert!(inventory.get(7).is_none());
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_add_to_full_inventory() {
        let mut inventory = Inventory::new(2);
        assert!(inventory.add(fixture("A")));
        assert!(inventory.add(fixture("B")));
        assert!(inventory.is_full());

        assert!(!inventory.add(fixture("C")));
        assert_eq!(inventory.get(0).unwrap().name, "A");
        assert_eq!(inventory.get(1).unwrap().name, "B");
        assert_eq!(inventory.len(), 2);
    }

    #[test]
    fn test_zero_capacity_inventory() {
        let mut inventory = Inventory::new(0);
        assert!(!inventory.add(fixture("A")));
        assert!(!inventory.select(0));
    }

    #[test]
    fn test_select_bounds() {
        let mut inventory = Inventory::new(4);
        assert!(inventory.select(2));
        assert!(!inventory.select(-1));
        assert!(!inventory.select(4));
        assert!(!inventory.select(isize::MIN));
        assert_eq!(inventory.selected_index(), Some(2));
        assert!(inventory.select(0));
        assert!(inventory.select(3));
        assert_eq!(inventory.selected_index(), Some(3));
    }

    #[test]
    fn test_describe_selected() {
        let mut inventory = Inventory::new(3);
        assert_eq!(inventory.describe_selected(), NO_ITEM_SELECTED);

        inventory.add(fixture("A"));
        assert!(inventory.select(1));
        assert_eq!(inventory.describe_selected(), "No item selected.");
        assert!(inventory.selected_item().is_none());

        assert!(inventory.select(0));
        let description = inventory.describe_selected();
        assert!(description.contains("sword"));
        assert!(description.contains("It deals 4 points of damage."));
    }

    #[test]
    fn test_generate_random_does_not_store() {
        let mut inventory = Inventory::new(3);
        let item = inventory.generate_random(Some(ItemType::Amulet));
        assert_eq!(item.item_type, ItemType::Amulet);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_same_seed_same_items() {
        let mut a = Inventory::with_config(GenerationConfig::new(5)).unwrap();
        let mut b = Inventory::with_config(GenerationConfig::new(5)).unwrap();
        for _ in 0..10 {
            assert_eq!(a.generate_random(None), b.generate_random(None));
        }
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = GenerationConfig {
            suffix_chance: -0.1,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            Inventory::with_config(config),
            Err(LootError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_render_visual() {
        let inventory = Inventory::new(1);
        let item = fixture("A");

        assert!(inventory.render_visual(None, None).is_none());
        let icon = inventory.render_visual(Some(&item), None).unwrap();
        assert_eq!(icon.dimensions(), (64, 64));
        let detail = inventory
            .render_visual(Some(&item), Some(config::DETAIL_ICON_SIZE))
            .unwrap();
        assert_eq!(detail.dimensions(), (100, 100));
    }

    #[test]
    fn test_populate_sample() {
        let mut inventory = Inventory::new(config::SAMPLE_GRID_CAPACITY);
        assert_eq!(inventory.populate_sample(), SAMPLE_LOADOUT.len());
        assert_eq!(inventory.len(), 24);
        for (index, item_type) in SAMPLE_LOADOUT.iter().enumerate() {
            assert_eq!(inventory.get(index).unwrap().item_type, *item_type);
        }

        let mut small = Inventory::new(5);
        assert_eq!(small.populate_sample(), 5);
        assert!(small.is_full());
    }

    #[test]
    fn test_view_serialization() {
        let mut inventory = Inventory::new(2);
        inventory.add(fixture("A"));
        inventory.select(0);

        let json = serde_json::to_value(inventory.view()).unwrap();
        assert_eq!(json["selected"], 0);
        assert_eq!(json["slots"][0]["name"], "A");
        assert!(json["slots"][1].is_null());
    }
}
