//! The selling-price predictor
//!
//! Loads the artifact bundle once, rebuilds the categorical encoders from
//! its vocabularies, and serves predictions from in-memory state for the
//! rest of the session.

use crate::bundle::{ArtifactBundle, LinearModel, StandardScaler};
use crate::costs::CostComponents;
use crate::encoder::LabelEncoder;
use crate::errors::{PricingError, Result};
use crate::features;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One prediction request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub fabric: String,
    pub brand_tier: String,
    pub product_type: String,
    pub selling_price: f64,
}

/// Prediction result: the model's price plus the derived components that
/// were fed to it (not the model's internal reasoning)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_price: f64,
    pub cost_components: CostComponents,
}

/// A predictor session built from one artifact bundle
#[derive(Debug, Clone)]
pub struct CostPredictor {
    model: LinearModel,
    scaler: StandardScaler,
    fabric_encoder: LabelEncoder,
    brand_encoder: LabelEncoder,
    fabric_types: Vec<String>,
    brand_tiers: Vec<String>,
}

impl CostPredictor {
    /// Build a predictor from a validated bundle, fitting both encoders
    /// over the bundle's vocabularies
    pub fn from_bundle(bundle: ArtifactBundle) -> Result<Self> {
        bundle.validate()?;
        let fabric_encoder = LabelEncoder::fit(bundle.fabric_types.iter().cloned());
        let brand_encoder = LabelEncoder::fit(bundle.brand_tiers.iter().cloned());
        Ok(Self {
            model: bundle.model,
            scaler: bundle.scaler,
            fabric_encoder,
            brand_encoder,
            fabric_types: bundle.fabric_types,
            brand_tiers: bundle.brand_tiers,
        })
    }

    /// Load a bundle from disk and build a predictor from it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bundle(ArtifactBundle::load(path)?)
    }

    /// Fabric vocabulary as loaded from the bundle
    pub fn fabric_types(&self) -> &[String] {
        &self.fabric_types
    }

    /// Brand tier vocabulary as loaded from the bundle
    pub fn brand_tiers(&self) -> &[String] {
        &self.brand_tiers
    }

    /// Predict a selling price for one request
    ///
    /// Any failure in the pipeline (encoding, scaling, inference) is
    /// normalized into a single `Prediction` error carrying the original
    /// message, so the interactive loop can report it and re-prompt.
    pub fn predict(&self, request: &PredictionRequest) -> Result<Prediction> {
        self.run_pipeline(request)
            .map_err(|err| PricingError::Prediction(err.to_string()))
    }

    fn run_pipeline(&self, request: &PredictionRequest) -> Result<Prediction> {
        let components = CostComponents::from_selling_price(request.selling_price);
        let fabric_code = self.fabric_encoder.transform(&request.fabric)?;
        let brand_code = self.brand_encoder.transform(&request.brand_tier)?;
        let product_code = features::product_code(&request.product_type);

        let vector = features::assemble(&components, fabric_code, brand_code, product_code);
        let scaled = self.scaler.transform(&vector)?;
        let predicted_price = self.model.predict(&scaled)?;

        debug!(
            fabric = %request.fabric,
            tier = %request.brand_tier,
            product_code,
            predicted_price,
            "prediction complete"
        );

        Ok(Prediction {
            predicted_price,
            cost_components: components,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{ArtifactBundle, LinearModel, StandardScaler};
    use crate::features::FEATURE_COUNT;

    fn identity_bundle() -> ArtifactBundle {
        ArtifactBundle {
            model: LinearModel {
                // sums the five cost columns, ignores the categorical codes
                coefficients: vec![1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
                intercept: 0.0,
            },
            scaler: StandardScaler {
                mean: vec![0.0; FEATURE_COUNT],
                std: vec![1.0; FEATURE_COUNT],
            },
            fabric_types: vec!["cotton".into(), "silk".into(), "wool".into()],
            brand_tiers: vec![
                "budget".into(),
                "mid_range".into(),
                "premium".into(),
                "luxury".into(),
            ],
        }
    }

    fn request(fabric: &str, price: f64) -> PredictionRequest {
        PredictionRequest {
            fabric: fabric.to_string(),
            brand_tier: "budget".to_string(),
            product_type: "Formal Shirt".to_string(),
            selling_price: price,
        }
    }

    #[test]
    fn identity_model_echoes_the_selling_price() {
        let predictor = CostPredictor::from_bundle(identity_bundle()).unwrap();
        let prediction = predictor.predict(&request("cotton", 1000.0)).unwrap();
        assert!((prediction.predicted_price - 1000.0).abs() < 1e-9);
        assert_eq!(prediction.cost_components.fabric, 350.0);
        assert_eq!(prediction.cost_components.brand_value, 250.0);
    }

    #[test]
    fn components_echo_the_fixed_ratio_derivation() {
        let predictor = CostPredictor::from_bundle(identity_bundle()).unwrap();
        let prediction = predictor.predict(&request("wool", 480.0)).unwrap();
        let total = prediction.cost_components.total();
        assert!((total - 480.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_fabric_is_a_prediction_error() {
        let predictor = CostPredictor::from_bundle(identity_bundle()).unwrap();
        let err = predictor.predict(&request("velvet", 100.0)).unwrap_err();
        match err {
            PricingError::Prediction(message) => {
                assert!(message.contains("velvet"), "{message}");
            }
            other => panic!("expected Prediction error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_tier_is_a_prediction_error() {
        let predictor = CostPredictor::from_bundle(identity_bundle()).unwrap();
        let mut req = request("cotton", 100.0);
        req.brand_tier = "ultra".to_string();
        assert!(matches!(
            predictor.predict(&req),
            Err(PricingError::Prediction(_))
        ));
    }

    #[test]
    fn predictions_are_stable_across_calls() {
        let predictor = CostPredictor::from_bundle(identity_bundle()).unwrap();
        let req = request("silk", 2500.0);
        let a = predictor.predict(&req).unwrap();
        let b = predictor.predict(&req).unwrap();
        assert_eq!(a.predicted_price, b.predicted_price);
    }

    #[test]
    fn malformed_bundle_is_rejected_at_build_time() {
        let mut bundle = identity_bundle();
        bundle.brand_tiers.clear();
        assert!(matches!(
            CostPredictor::from_bundle(bundle),
            Err(PricingError::MalformedBundle(_))
        ));
    }
}
