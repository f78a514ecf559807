//! Statistical and property tests for item generation.

use loot_forge::{
    attribute_bounds, generation::utils::create_rng, GenerationConfig, ItemGenerator, ItemType,
    Rarity,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

#[test]
fn test_rarity_distribution_matches_weights() {
    let draws = 10_000;
    let generator = ItemGenerator::new();
    let mut rng = create_rng(&GenerationConfig::new(2024));
    let mut counts: HashMap<Rarity, usize> = HashMap::new();

    for _ in 0..draws {
        let item = generator.generate_item(None, &mut rng);
        *counts.entry(item.rarity).or_default() += 1;
    }

    for (rarity, expected) in [
        (Rarity::Common, 0.60),
        (Rarity::Rare, 0.30),
        (Rarity::Legendary, 0.10),
    ] {
        let observed = counts.get(&rarity).copied().unwrap_or(0) as f64 / draws as f64;
        assert!(
            (observed - expected).abs() < 0.03,
            "{rarity}: observed {observed:.3}, expected {expected:.2}"
        );
    }
    assert!(!counts.contains_key(&Rarity::Unknown));
}

#[test]
fn test_random_types_are_roughly_uniform() {
    let draws = 10_000;
    let generator = ItemGenerator::new();
    let mut rng = StdRng::seed_from_u64(99);
    let mut counts: HashMap<ItemType, usize> = HashMap::new();

    for _ in 0..draws {
        *counts
            .entry(generator.generate_item(None, &mut rng).item_type)
            .or_default() += 1;
    }

    assert_eq!(counts.len(), ItemType::ALL.len());
    for kind in ItemType::ALL {
        let share = counts[&kind] as f64 / draws as f64;
        assert!((share - 0.1).abs() < 0.03, "{kind}: {share:.3}");
    }
}

proptest! {
    #[test]
    fn prop_attribute_values_within_rarity_bounds(seed in any::<u64>(), index in 0usize..10) {
        let kind = ItemType::ALL[index];
        let mut rng = StdRng::seed_from_u64(seed);
        let item = ItemGenerator::new().generate_item(Some(kind), &mut rng);

        let (low, high) = attribute_bounds(item.rarity);
        prop_assert_eq!(item.attributes.len(), 3);
        for value in item.attributes.values() {
            prop_assert!(*value >= low && *value <= high);
        }
    }

    #[test]
    fn prop_names_are_trimmed_and_typed(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let item = ItemGenerator::new().generate_item(None, &mut rng);

        prop_assert_eq!(item.name.trim(), item.name.as_str());
        prop_assert!(item.name.contains(item.item_type.title()));
        let words = item.name.split(' ').count();
        prop_assert!(words == 2 || words >= 4);
    }
}
