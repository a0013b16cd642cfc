//! Model artifact bundle
//!
//! The bundle is produced once by the external training pipeline and loaded
//! once per predictor session. It carries exactly four fields: the fitted
//! regression model, the fitted feature scaler, and the two categorical
//! vocabularies needed to rebuild the encoders at load time.

use crate::errors::{PricingError, Result};
use crate::features::{FeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// A fitted linear regression model with a single-vector inference call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Predict a single scalar from one feature vector
    pub fn predict(&self, features: &FeatureVector) -> Result<f64> {
        if self.coefficients.len() != FEATURE_COUNT {
            return Err(PricingError::DimensionMismatch {
                expected: FEATURE_COUNT,
                actual: self.coefficients.len(),
            });
        }
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(c, x)| c * x)
            .sum();
        Ok(dot + self.intercept)
    }
}

/// A fitted per-column standardizing scaler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl StandardScaler {
    /// Apply the fitted transform to one feature vector
    ///
    /// Zero-variance columns pass through centered, matching the behavior
    /// of the training pipeline's scaler.
    pub fn transform(&self, features: &FeatureVector) -> Result<FeatureVector> {
        if self.mean.len() != FEATURE_COUNT || self.std.len() != FEATURE_COUNT {
            return Err(PricingError::DimensionMismatch {
                expected: FEATURE_COUNT,
                actual: self.mean.len().min(self.std.len()),
            });
        }
        let mut scaled = [0.0; FEATURE_COUNT];
        for (i, value) in features.iter().enumerate() {
            let centered = value - self.mean[i];
            scaled[i] = if self.std[i] == 0.0 {
                centered
            } else {
                centered / self.std[i]
            };
        }
        Ok(scaled)
    }
}

/// The serialized artifact package consumed by the predictor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    pub model: LinearModel,
    pub scaler: StandardScaler,
    pub fabric_types: Vec<String>,
    pub brand_tiers: Vec<String>,
}

impl ArtifactBundle {
    /// Load a bundle from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let bundle: Self = serde_json::from_str(&content)?;
        bundle.validate()?;
        info!(
            path = %path.display(),
            fabrics = bundle.fabric_types.len(),
            tiers = bundle.brand_tiers.len(),
            "loaded artifact bundle"
        );
        Ok(bundle)
    }

    /// Write a bundle to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Structural validation: feature dimensions and non-empty vocabularies
    pub fn validate(&self) -> Result<()> {
        if self.model.coefficients.len() != FEATURE_COUNT {
            return Err(PricingError::MalformedBundle(format!(
                "model expects {} coefficients, found {}",
                FEATURE_COUNT,
                self.model.coefficients.len()
            )));
        }
        if self.scaler.mean.len() != FEATURE_COUNT || self.scaler.std.len() != FEATURE_COUNT {
            return Err(PricingError::MalformedBundle(format!(
                "scaler expects {} columns, found mean={} std={}",
                FEATURE_COUNT,
                self.scaler.mean.len(),
                self.scaler.std.len()
            )));
        }
        if self.fabric_types.is_empty() {
            return Err(PricingError::MalformedBundle(
                "fabric vocabulary is empty".to_string(),
            ));
        }
        if self.brand_tiers.is_empty() {
            return Err(PricingError::MalformedBundle(
                "brand tier vocabulary is empty".to_string(),
            ));
        }
        Ok(())
    }
}
