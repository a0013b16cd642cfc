//! Deterministic label encoding for categorical features
//!
//! Codes are assigned by sorted vocabulary order, never insertion or hash
//! order, so a model trained against one encoding stays valid when the
//! encoder is rebuilt in another process.

use crate::errors::{PricingError, Result};

/// A categorical encoder fitted over a fixed vocabulary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Fit an encoder: sort the distinct vocabulary values and assign codes
    /// `0..k-1` in that order
    pub fn fit<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = vocabulary.into_iter().map(Into::into).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Encode a value; unseen values are an explicit error, never a default
    pub fn transform(&self, value: &str) -> Result<usize> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(value))
            .map_err(|_| PricingError::UnknownCategory {
                value: value.to_string(),
                expected: self.classes.join(", "),
            })
    }

    /// The fitted vocabulary in code order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
