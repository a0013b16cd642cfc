//! stitchprice dataset generator CLI
//!
//! One-pass synthetic dataset generation over the built-in garment taxonomy.

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use stitchprice_core::Taxonomy;
use stitchprice_datagen::{generate_dataset, CsvExporter, XlsxExporter, CSV_FILE, XLSX_FILE};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "stitch-datagen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synthetic garment cost dataset generator", long_about = None)]
struct Args {
    /// Records to generate per (fabric, category) pair
    #[arg(short, long, default_value = "3000")]
    entries: usize,

    /// Output directory for the dataset files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("stitchprice dataset generator v{}", env!("CARGO_PKG_VERSION"));

    let taxonomy = Taxonomy::builtin();
    let pairs: usize = taxonomy
        .fabric_categories
        .values()
        .map(|categories| categories.len())
        .sum();

    info!(
        "Generating {} entries for each of {} (fabric, category) pairs (seed: {})",
        args.entries, pairs, args.seed
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let records = generate_dataset(&mut rng, &taxonomy, args.entries)
        .context("Dataset generation failed")?;

    info!("Generated {} records", records.len());

    std::fs::create_dir_all(&args.output)
        .context("Failed to create output directory")?;

    let csv_path = args.output.join(CSV_FILE);
    CsvExporter::export(&records, &csv_path).context("Failed to write CSV dataset")?;

    let xlsx_path = args.output.join(XLSX_FILE);
    XlsxExporter::export(&records, &xlsx_path).context("Failed to write XLSX dataset")?;

    info!("Files saved as:");
    info!("  {}", csv_path.display());
    info!("  {}", xlsx_path.display());

    Ok(())
}
