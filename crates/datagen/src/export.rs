//! Dataset exporters
//!
//! Both exporters write the same tabular content, one row per record, with
//! the same column order. Monetary cells are written with two decimals in
//! the CSV and as raw numbers in the spreadsheet.

use crate::errors::Result;
use crate::generate::DatasetRecord;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

/// Default delimited-text output path
pub const CSV_FILE: &str = "textile_production_cost_dataset.csv";

/// Default spreadsheet output path
pub const XLSX_FILE: &str = "textile_production_cost_dataset.xlsx";

/// Column headers, in output order
pub const COLUMNS: [&str; 10] = [
    "Product_type",
    "Brand",
    "fabric",
    "fabric_raw_cost",
    "manufacturing_and_labour",
    "transportation",
    "tax",
    "brand_value",
    "retailer_margin",
    "selling_price",
];

pub struct CsvExporter;

impl CsvExporter {
    pub fn export<P: AsRef<Path>>(records: &[DatasetRecord], path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(COLUMNS)?;
        for record in records {
            writer.write_record([
                record.product_type.clone(),
                record.brand.clone(),
                record.fabric.clone(),
                format!("{:.2}", record.costs.fabric_raw_cost),
                format!("{:.2}", record.costs.manufacturing_and_labour),
                format!("{:.2}", record.costs.transportation),
                format!("{:.2}", record.costs.tax),
                format!("{:.2}", record.costs.brand_value),
                format!("{:.2}", record.costs.retailer_margin),
                format!("{:.2}", record.costs.selling_price),
            ])?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = records.len(), "wrote CSV dataset");
        Ok(())
    }
}

pub struct XlsxExporter;

impl XlsxExporter {
    pub fn export<P: AsRef<Path>>(records: &[DatasetRecord], path: P) -> Result<()> {
        let path = path.as_ref();
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, header) in COLUMNS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }

        for (i, record) in records.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet.write_string(row, 0, record.product_type.as_str())?;
            worksheet.write_string(row, 1, record.brand.as_str())?;
            worksheet.write_string(row, 2, record.fabric.as_str())?;
            worksheet.write_number(row, 3, record.costs.fabric_raw_cost)?;
            worksheet.write_number(row, 4, record.costs.manufacturing_and_labour)?;
            worksheet.write_number(row, 5, record.costs.transportation)?;
            worksheet.write_number(row, 6, record.costs.tax)?;
            worksheet.write_number(row, 7, record.costs.brand_value)?;
            worksheet.write_number(row, 8, record.costs.retailer_margin)?;
            worksheet.write_number(row, 9, record.costs.selling_price)?;
        }

        workbook.save(path)?;

        info!(path = %path.display(), rows = records.len(), "wrote XLSX dataset");
        Ok(())
    }
}
