//! The two cost algorithms
//!
//! The generator samples a full randomized breakdown; the predictor derives
//! components from a known selling price with fixed ratios. The two are
//! deliberately divergent: the fixed ratios approximate the randomized
//! formula well enough for inference-time feature reconstruction, and the
//! trained model expects features derived exactly this way. Do not unify
//! them.

use crate::errors::Result;
use crate::taxonomy::{BrandTier, Taxonomy};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed share of selling price attributed to raw fabric
pub const FABRIC_RATIO: f64 = 0.35;
/// Fixed share attributed to manufacturing and labour
pub const MANUFACTURING_RATIO: f64 = 0.25;
/// Fixed share attributed to transportation
pub const TRANSPORT_RATIO: f64 = 0.05;
/// Fixed share attributed to tax
pub const TAX_RATIO: f64 = 0.10;
/// Fixed share attributed to brand value
pub const BRAND_VALUE_RATIO: f64 = 0.25;

/// Round to 2 decimal places (monetary values)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A full synthetic cost breakdown, as emitted by the dataset generator
///
/// Invariant: `selling_price` equals the sum of the six other fields to the
/// cent. Totals are computed from the already-rounded components so the
/// invariant survives rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub fabric_raw_cost: f64,
    pub manufacturing_and_labour: f64,
    pub transportation: f64,
    pub tax: f64,
    pub brand_value: f64,
    pub retailer_margin: f64,
    pub selling_price: f64,
}

impl CostBreakdown {
    /// Sample a randomized breakdown for one garment
    ///
    /// Jitter ranges are part of the data contract: U(0.9,1.1) on fabric,
    /// U(0.6,0.8) on manufacturing, U(0.08,0.12) on transport, U(0.10,0.15)
    /// on tax, U(0.4,0.6) on brand value, U(0.7,1.0) on margin.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        taxonomy: &Taxonomy,
        fabric: &str,
        category: &str,
        tier: &BrandTier,
    ) -> Result<Self> {
        let complexity = taxonomy.complexity(category);
        let base = taxonomy.base_cost(fabric)? * complexity;

        let fabric_cost = round2(base * tier.cost_multiplier * rng.gen_range(0.9..=1.1));
        let manufacturing = round2(fabric_cost * rng.gen_range(0.6..=0.8) * complexity);
        let transport = round2(fabric_cost * rng.gen_range(0.08..=0.12));
        let tax = round2((fabric_cost + manufacturing) * rng.gen_range(0.10..=0.15));
        let brand_value =
            round2(fabric_cost * rng.gen_range(0.4..=0.6) * tier.brand_value_multiplier);

        let total_cost = fabric_cost + manufacturing + transport + tax + brand_value;
        let margin = round2(total_cost * rng.gen_range(0.7..=1.0) * tier.margin_multiplier);
        let selling_price = round2(total_cost + margin);

        Ok(Self {
            fabric_raw_cost: fabric_cost,
            manufacturing_and_labour: manufacturing,
            transportation: transport,
            tax,
            brand_value,
            retailer_margin: margin,
            selling_price,
        })
    }

    /// Sum of all components excluding the selling price
    pub fn component_sum(&self) -> f64 {
        self.fabric_raw_cost
            + self.manufacturing_and_labour
            + self.transportation
            + self.tax
            + self.brand_value
            + self.retailer_margin
    }
}

/// The five cost components the predictor derives from a selling price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostComponents {
    pub fabric: f64,
    pub manufacturing: f64,
    pub transport: f64,
    pub tax: f64,
    pub brand_value: f64,
}

impl CostComponents {
    /// Derive components from a selling price using the fixed ratios
    ///
    /// The ratios sum to 1.0, so the components sum back to the input.
    pub fn from_selling_price(selling_price: f64) -> Self {
        Self {
            fabric: selling_price * FABRIC_RATIO,
            manufacturing: selling_price * MANUFACTURING_RATIO,
            transport: selling_price * TRANSPORT_RATIO,
            tax: selling_price * TAX_RATIO,
            brand_value: selling_price * BRAND_VALUE_RATIO,
        }
    }

    pub fn total(&self) -> f64 {
        self.fabric + self.manufacturing + self.transport + self.tax + self.brand_value
    }

    /// Components with their display labels, in reporting order
    pub fn labeled(&self) -> [(&'static str, f64); 5] {
        [
            ("Fabric", self.fabric),
            ("Manufacturing", self.manufacturing),
            ("Transport", self.transport),
            ("Tax", self.tax),
            ("Brand Value", self.brand_value),
        ]
    }
}
