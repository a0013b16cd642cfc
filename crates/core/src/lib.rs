//! Garment cost modeling core
//!
//! Shared library for the two stitchprice pipelines: the synthetic dataset
//! generator and the interactive selling-price predictor. The two pipelines
//! never call each other; they share only the taxonomy tables and the data
//! contracts defined here.
//!
//! Modules:
//! - `taxonomy`: fabric/category/tier tables as static configuration
//! - `costs`: the randomized breakdown formula and the fixed-ratio derivation
//! - `encoder`: deterministic label encoding over sorted vocabularies
//! - `features`: the fixed 8-column feature vector and product-type code
//! - `bundle`: the serialized model/scaler/vocabulary artifact package
//! - `predictor`: bundle loading and the prediction pipeline
//! - `errors`: error types shared across the crate

pub mod bundle;
pub mod costs;
pub mod encoder;
pub mod errors;
pub mod features;
pub mod predictor;
pub mod taxonomy;

pub use bundle::{ArtifactBundle, LinearModel, StandardScaler};
pub use costs::{round2, CostBreakdown, CostComponents};
pub use encoder::LabelEncoder;
pub use errors::{PricingError, Result};
pub use features::{product_code, FeatureVector, FEATURE_COUNT};
pub use predictor::{CostPredictor, Prediction, PredictionRequest};
pub use taxonomy::{BrandTier, Taxonomy};

/// Crate version string for logs and artifacts
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
