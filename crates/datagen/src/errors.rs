//! Error types for the dataset generator

use stitchprice_core::PricingError;
use thiserror::Error;

/// Errors returned by the generator and its exporters
#[derive(Debug, Error)]
pub enum DatagenError {
    /// Cost formula or taxonomy lookup failure
    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Brand tier sampling weights could not form a distribution
    #[error("invalid tier weights: {0}")]
    InvalidWeights(String),

    /// CSV export failure
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// XLSX export failure
    #[error("XLSX export error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, DatagenError>;
