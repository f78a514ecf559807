//! # Generation Module
//!
//! Procedural content generation for item stats and item descriptions.
//!
//! Every generator takes its randomness from an explicitly passed
//! [`StdRng`], so a fixed seed always reproduces the same items and text.

pub mod descriptions;
pub mod items;

pub use descriptions::*;
pub use items::*;

use crate::{config, LootError, LootResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural generation.
///
/// Controls the random seed, name composition and the defaults used by the
/// inventory when it creates and renders items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Probability that a generated name carries a suffix (0.0 to 1.0)
    pub suffix_chance: f64,
    /// Number of inventory slots
    pub inventory_capacity: usize,
    /// Icon size used when no explicit size is requested
    pub icon_size: (u32, u32),
}

impl GenerationConfig {
    /// Creates a default generation configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use loot_forge::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.seed, 12345);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            suffix_chance: config::DEFAULT_SUFFIX_CHANCE,
            inventory_capacity: config::DEFAULT_INVENTORY_CAPACITY,
            icon_size: config::DEFAULT_ICON_SIZE,
        }
    }

    /// Creates a configuration for testing with a small inventory.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            inventory_capacity: 5,
            ..Self::new(seed)
        }
    }

    /// Checks that every value is within its allowed range.
    pub fn validate(&self) -> LootResult<()> {
        if !(0.0..=1.0).contains(&self.suffix_chance) {
            return Err(LootError::InvalidConfig(format!(
                "suffix_chance must be within 0.0..=1.0, got {}",
                self.suffix_chance
            )));
        }

        if self.icon_size.0 == 0 || self.icon_size.1 == 0 {
            return Err(LootError::InvalidConfig(format!(
                "icon_size must be non-zero, got {}x{}",
                self.icon_size.0, self.icon_size.1
            )));
        }

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for procedural generators.
///
/// Generators produce content from a configuration and a random number
/// generator, and can check content they (or anyone else) produced.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> LootResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> LootResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Capitalises the first character of a word.
    pub fn title_case(word: &str) -> String {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
