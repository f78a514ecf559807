//! # Loot Forge
//!
//! Procedural item generation with balanced stats, narrative descriptions and
//! rarity-aware icons.
//!
//! ## Architecture Overview
//!
//! The crate is split into a small data model and three independent
//! generators, tied together by an inventory:
//!
//! - **Game**: item records, the closed type/rarity/attribute enums and the
//!   fixed-capacity [`Inventory`] coordinator
//! - **Generation**: seeded item stat generation and narrative descriptions
//! - **Rendering**: deterministic icon rasterisation into RGBA buffers
//!
//! All randomness flows through an explicitly injected, seedable
//! [`rand::rngs::StdRng`]. Rendering never consumes randomness, so the same
//! item always produces the same icon.
//!
//! ```
//! use loot_forge::{Inventory, ItemType};
//!
//! let mut inventory = Inventory::new(4);
//! let sword = inventory.generate_random(Some(ItemType::Sword));
//! assert!(inventory.add(sword));
//! assert!(inventory.select(0));
//! assert!(inventory.describe_selected().contains("sword"));
//! ```

pub mod game;
pub mod generation;
pub mod rendering;

pub use game::*;
pub use generation::*;
pub use rendering::*;

/// Core error type for the item forge.
#[derive(thiserror::Error, Debug)]
pub enum LootError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Image encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A string did not name one of the known item types
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    /// Generated content failed validation
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the crate.
pub type LootResult<T> = Result<T, LootError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration constants.
pub mod config {
    /// Default number of inventory slots
    pub const DEFAULT_INVENTORY_CAPACITY: usize = 10;

    /// Slot count of the 5x6 inventory grid used for the sample loadout
    pub const SAMPLE_GRID_CAPACITY: usize = 30;

    /// Default icon width and height in pixels
    pub const DEFAULT_ICON_SIZE: (u32, u32) = (64, 64);

    /// Icon size used for the detail view of a selected item
    pub const DETAIL_ICON_SIZE: (u32, u32) = (100, 100);

    /// Probability that a generated name carries a suffix
    pub const DEFAULT_SUFFIX_CHANCE: f64 = 0.5;
}
