//! stitchprice dataset generator
//!
//! Produces a synthetic tabular dataset of garment cost breakdowns for use
//! as training data, and exports it as CSV and XLSX with identical content.

pub mod brands;
pub mod errors;
pub mod export;
pub mod generate;

pub use brands::brand_name;
pub use errors::DatagenError;
pub use export::{CsvExporter, XlsxExporter, COLUMNS, CSV_FILE, XLSX_FILE};
pub use generate::{generate_dataset, DatasetRecord, STYLE_DESCRIPTORS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
