//! Feature vector assembly for the price model
//!
//! The model was fitted against exactly this column order; changing it
//! silently invalidates every trained artifact.

use crate::costs::CostComponents;

/// Number of columns the model and scaler were fitted with
pub const FEATURE_COUNT: usize = 8;

/// Number of buckets for the product-type code
pub const PRODUCT_CODE_BUCKETS: u64 = 100;

/// An ordered feature vector:
/// `[fabric_cost, manuf_cost, transport_cost, tax, brand_value,
///   fabric_code, brand_tier_code, product_code]`
pub type FeatureVector = [f64; FEATURE_COUNT];

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over a byte slice
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Numeric code for a product-type string: a content hash of the first
/// whitespace-delimited token, reduced to `[0, 100)`.
///
/// Uses FNV-1a rather than the platform string hasher so the code is stable
/// across processes and platforms.
pub fn product_code(product_type: &str) -> u64 {
    let token = product_type.split_whitespace().next().unwrap_or("");
    fnv1a(token.as_bytes()) % PRODUCT_CODE_BUCKETS
}

/// Assemble the model's feature vector in its fixed column order
pub fn assemble(
    components: &CostComponents,
    fabric_code: usize,
    brand_tier_code: usize,
    product_code: u64,
) -> FeatureVector {
    [
        components.fabric,
        components.manufacturing,
        components.transport,
        components.tax,
        components.brand_value,
        fabric_code as f64,
        brand_tier_code as f64,
        product_code as f64,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_code_is_deterministic() {
        assert_eq!(product_code("Formal Shirt"), product_code("Formal Shirt"));
        assert_eq!(product_code("Formal Shirt"), product_code("Formal Coat"));
    }

    #[test]
    fn product_code_uses_first_token_only() {
        assert_eq!(product_code("Classic Kurta"), product_code("Classic"));
        assert_ne!(product_code("Classic Kurta"), product_code("Kurta"));
    }

    #[test]
    fn product_code_stays_in_range() {
        for name in ["Shirt", "Salwar Suit", "Jeans", "", "   ", "Lehenga"] {
            assert!(product_code(name) < PRODUCT_CODE_BUCKETS, "{name:?}");
        }
    }

    #[test]
    fn assemble_preserves_column_order() {
        let components = CostComponents::from_selling_price(1000.0);
        let features = assemble(&components, 3, 1, 42);
        assert_eq!(
            features,
            [350.0, 250.0, 50.0, 100.0, 250.0, 3.0, 1.0, 42.0]
        );
    }
}
