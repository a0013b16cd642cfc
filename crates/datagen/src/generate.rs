//! Synthetic dataset generation
//!
//! One pass over every (fabric, category) pair in the taxonomy, sampling N
//! records per pair. No checkpointing: an interrupted run restarts from
//! scratch.

use crate::brands::brand_name;
use crate::errors::{DatagenError, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use stitchprice_core::{CostBreakdown, Taxonomy};
use tracing::debug;

/// Style descriptors prefixed to 30% of product-type strings
pub const STYLE_DESCRIPTORS: [&str; 7] = [
    "Classic",
    "Modern",
    "Traditional",
    "Contemporary",
    "Vintage",
    "Casual",
    "Formal",
];

/// Probability of prefixing a style descriptor
const STYLE_PROBABILITY: f64 = 0.3;

/// One generated dataset row
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRecord {
    /// Product category, optionally prefixed with a style descriptor
    pub product_type: String,
    /// `"<brand name> (<tier>)"`
    pub brand: String,
    /// Fabric key
    pub fabric: String,
    /// The seven cost fields
    pub costs: CostBreakdown,
}

/// Generate `entries_per_pair` records for every (fabric, category) pair
pub fn generate_dataset<R: Rng + ?Sized>(
    rng: &mut R,
    taxonomy: &Taxonomy,
    entries_per_pair: usize,
) -> Result<Vec<DatasetRecord>> {
    let tier_dist = WeightedIndex::new(taxonomy.tier_weights())
        .map_err(|err| DatagenError::InvalidWeights(err.to_string()))?;

    let mut records = Vec::new();
    for (fabric, categories) in &taxonomy.fabric_categories {
        for category in categories {
            for _ in 0..entries_per_pair {
                let tier = &taxonomy.brand_tiers[tier_dist.sample(rng)];
                let brand = brand_name(rng, &tier.name);

                let product_type = if rng.gen_bool(STYLE_PROBABILITY) {
                    let style = STYLE_DESCRIPTORS[rng.gen_range(0..STYLE_DESCRIPTORS.len())];
                    format!("{style} {category}")
                } else {
                    category.clone()
                };

                let costs = CostBreakdown::sample(rng, taxonomy, fabric, category, tier)?;

                records.push(DatasetRecord {
                    product_type,
                    brand: format!("{brand} ({})", tier.name),
                    fabric: fabric.clone(),
                    costs,
                });
            }
            debug!(fabric, category, total = records.len(), "pair complete");
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;
    use stitchprice_core::BrandTier;

    fn single_pair_taxonomy() -> Taxonomy {
        let mut taxonomy = Taxonomy::builtin();
        taxonomy.fabric_categories = BTreeMap::from([(
            "wool".to_string(),
            vec!["Scarf".to_string()],
        )]);
        taxonomy
    }

    #[test]
    fn one_entry_per_pair_yields_one_row() {
        let taxonomy = single_pair_taxonomy();
        let mut rng = StdRng::seed_from_u64(42);
        let records = generate_dataset(&mut rng, &taxonomy, 1).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fabric, "wool");
        assert!(records[0].product_type.contains("Scarf"));
    }

    #[test]
    fn record_count_covers_every_pair() {
        let taxonomy = Taxonomy::builtin();
        let pairs: usize = taxonomy
            .fabric_categories
            .values()
            .map(|categories| categories.len())
            .sum();
        let mut rng = StdRng::seed_from_u64(1);
        let records = generate_dataset(&mut rng, &taxonomy, 2).unwrap();
        assert_eq!(records.len(), pairs * 2);
    }

    #[test]
    fn every_record_is_additive() {
        let taxonomy = Taxonomy::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let records = generate_dataset(&mut rng, &taxonomy, 3).unwrap();
        for record in &records {
            assert!(
                (record.costs.selling_price - record.costs.component_sum()).abs() < 0.01,
                "{record:?}"
            );
        }
    }

    #[test]
    fn brand_carries_tier_suffix() {
        let taxonomy = Taxonomy::builtin();
        let mut rng = StdRng::seed_from_u64(5);
        let records = generate_dataset(&mut rng, &taxonomy, 2).unwrap();
        let tiers = ["(budget)", "(mid_range)", "(premium)", "(luxury)"];
        for record in &records {
            assert!(
                tiers.iter().any(|suffix| record.brand.ends_with(suffix)),
                "{}",
                record.brand
            );
        }
    }

    #[test]
    fn product_type_is_category_or_styled_category() {
        let taxonomy = single_pair_taxonomy();
        let mut rng = StdRng::seed_from_u64(19);
        let records = generate_dataset(&mut rng, &taxonomy, 200).unwrap();
        let mut styled = 0usize;
        for record in &records {
            if record.product_type == "Scarf" {
                continue;
            }
            let (style, rest) = record
                .product_type
                .split_once(' ')
                .expect("styled name has two tokens");
            assert!(STYLE_DESCRIPTORS.contains(&style), "{style}");
            assert_eq!(rest, "Scarf");
            styled += 1;
        }
        // ~30% of 200; generous bounds to keep the test stable
        assert!(styled > 20 && styled < 120, "styled = {styled}");
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let taxonomy = Taxonomy::builtin();
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = generate_dataset(&mut rng1, &taxonomy, 2).unwrap();
        let b = generate_dataset(&mut rng2, &taxonomy, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_weights_are_rejected() {
        let mut taxonomy = Taxonomy::builtin();
        taxonomy.brand_tiers = vec![BrandTier {
            name: "budget".to_string(),
            cost_multiplier: 1.0,
            margin_multiplier: 1.0,
            brand_value_multiplier: 1.0,
            weight: 0.0,
        }];
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_dataset(&mut rng, &taxonomy, 1),
            Err(DatagenError::InvalidWeights(_))
        ));
    }
}
