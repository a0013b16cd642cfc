//! Static garment taxonomy: fabrics, product categories, and brand tiers
//!
//! The taxonomy is plain data rather than code so that tests (and any future
//! market) can swap in an alternate table without touching the cost formulas.
//! The built-in tables mirror the reference dataset the price model was
//! trained against.

use crate::errors::{PricingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A brand tier with its pricing multipliers and market sampling weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandTier {
    /// Tier key, e.g. `budget` or `luxury`
    pub name: String,
    /// Multiplier applied to raw fabric cost
    pub cost_multiplier: f64,
    /// Multiplier applied to the retailer margin
    pub margin_multiplier: f64,
    /// Multiplier applied to the brand-value component
    pub brand_value_multiplier: f64,
    /// Relative sampling weight when drawing a tier for a synthetic record
    pub weight: f64,
}

/// Complete garment taxonomy
///
/// Maps are `BTreeMap` so iteration order is stable across runs; the record
/// order of a seeded generation run depends on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Fabric type -> allowed product categories
    pub fabric_categories: BTreeMap<String, Vec<String>>,
    /// Fabric type -> base cost per unit
    pub base_fabric_costs: BTreeMap<String, f64>,
    /// Product category -> manufacturing complexity multiplier
    pub product_complexity: BTreeMap<String, f64>,
    /// Brand tiers in ascending order of positioning
    pub brand_tiers: Vec<BrandTier>,
}

impl Taxonomy {
    /// The built-in reference taxonomy
    pub fn builtin() -> Self {
        let fabric_categories: BTreeMap<String, Vec<String>> = [
            (
                "cotton",
                vec![
                    "Formal Shirt",
                    "T-shirt",
                    "Pants",
                    "Saree",
                    "Dhoti",
                    "Kurta",
                    "Shorts",
                    "Salwar Suit",
                    "Dress",
                    "Blouse",
                ],
            ),
            (
                "silk",
                vec![
                    "Saree", "Dhoti", "Lehenga", "Sherwani", "Blouse", "Dupatta", "Kurta",
                    "Scarf",
                ],
            ),
            (
                "wool",
                vec![
                    "Sweater", "Coat", "Scarf", "Shawl", "Cardigan", "Gloves", "Hat", "Socks",
                ],
            ),
            (
                "linen",
                vec!["Kurta", "Dress", "Shirt", "Pants", "Skirt", "Blouse", "Jacket"],
            ),
            (
                "leather",
                vec!["Jacket", "Pants", "Skirt", "Vest", "Gloves", "Bag"],
            ),
            (
                "denim",
                vec!["Jeans", "Jacket", "Shirt", "Skirt", "Shorts", "Overall"],
            ),
            (
                "fleece",
                vec!["Jacket", "Hoodie", "Sweatshirt", "Pants", "Blanket", "Scarf"],
            ),
        ]
        .into_iter()
        .map(|(fabric, categories)| {
            (
                fabric.to_string(),
                categories.into_iter().map(String::from).collect(),
            )
        })
        .collect();

        let base_fabric_costs: BTreeMap<String, f64> = [
            ("cotton", 200.0),
            ("silk", 500.0),
            ("wool", 400.0),
            ("linen", 300.0),
            ("leather", 1000.0),
            ("denim", 250.0),
            ("fleece", 150.0),
        ]
        .into_iter()
        .map(|(fabric, cost)| (fabric.to_string(), cost))
        .collect();

        let product_complexity: BTreeMap<String, f64> = [
            ("Shirt", 1.0),
            ("T-shirt", 0.8),
            ("Pants", 1.2),
            ("Saree", 1.5),
            ("Dhoti", 0.7),
            ("Kurta", 1.3),
            ("Shorts", 0.9),
            ("Salwar Suit", 1.8),
            ("Dress", 1.4),
            ("Blouse", 1.1),
            ("Lehenga", 2.0),
            ("Sherwani", 2.2),
            ("Dupatta", 0.6),
            ("Scarf", 0.5),
            ("Sweater", 1.6),
            ("Coat", 2.5),
            ("Shawl", 1.0),
            ("Cardigan", 1.7),
            ("Gloves", 0.8),
            ("Hat", 0.7),
            ("Socks", 0.4),
            ("Skirt", 1.1),
            ("Jacket", 2.0),
            ("Vest", 1.0),
            ("Bag", 1.5),
            ("Jeans", 1.3),
            ("Overall", 1.9),
            ("Hoodie", 1.2),
            ("Sweatshirt", 1.1),
            ("Blanket", 1.0),
        ]
        .into_iter()
        .map(|(category, factor)| (category.to_string(), factor))
        .collect();

        // Weights skew toward cheaper tiers to mimic the market distribution.
        let brand_tiers = vec![
            BrandTier {
                name: "budget".to_string(),
                cost_multiplier: 1.0,
                margin_multiplier: 1.0,
                brand_value_multiplier: 1.0,
                weight: 0.4,
            },
            BrandTier {
                name: "mid_range".to_string(),
                cost_multiplier: 1.5,
                margin_multiplier: 1.8,
                brand_value_multiplier: 2.5,
                weight: 0.3,
            },
            BrandTier {
                name: "premium".to_string(),
                cost_multiplier: 2.5,
                margin_multiplier: 3.0,
                brand_value_multiplier: 5.0,
                weight: 0.2,
            },
            BrandTier {
                name: "luxury".to_string(),
                cost_multiplier: 5.0,
                margin_multiplier: 6.0,
                brand_value_multiplier: 10.0,
                weight: 0.1,
            },
        ];

        Self {
            fabric_categories,
            base_fabric_costs,
            product_complexity,
            brand_tiers,
        }
    }

    /// Base cost per unit for a fabric
    pub fn base_cost(&self, fabric: &str) -> Result<f64> {
        self.base_fabric_costs
            .get(fabric)
            .copied()
            .ok_or_else(|| PricingError::UnknownFabric(fabric.to_string()))
    }

    /// Complexity multiplier for a product category; unknown categories
    /// default to 1.0
    pub fn complexity(&self, category: &str) -> f64 {
        self.product_complexity.get(category).copied().unwrap_or(1.0)
    }

    /// Fabric names in stable (sorted) order
    pub fn fabric_names(&self) -> Vec<String> {
        self.fabric_categories.keys().cloned().collect()
    }

    /// Brand tier names in tier order
    pub fn tier_names(&self) -> Vec<String> {
        self.brand_tiers.iter().map(|t| t.name.clone()).collect()
    }

    /// Sampling weights in tier order
    pub fn tier_weights(&self) -> Vec<f64> {
        self.brand_tiers.iter().map(|t| t.weight).collect()
    }

    /// Look up a brand tier by name
    pub fn tier(&self, name: &str) -> Result<&BrandTier> {
        self.brand_tiers
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| PricingError::UnknownCategory {
                value: name.to_string(),
                expected: self.tier_names().join(", "),
            })
    }
}
