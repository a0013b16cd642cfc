//! stitchprice interactive predictor CLI
//!
//! Loads the model artifact bundle once at startup (fatal on failure, there
//! is no fallback model), then prompts for garment attributes in a loop.
//! Invalid input re-prompts; prediction errors are reported and the loop
//! continues.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use stitchprice_core::{CostPredictor, PredictionRequest};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "stitch-predict")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Garment selling-price predictor", long_about = None)]
struct Args {
    /// Path to the model artifact bundle
    #[arg(short, long, default_value = "textile_predictor.json")]
    bundle: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    println!("\n=== Fashion Cost Predictor ===");

    let predictor = CostPredictor::load(&args.bundle)
        .with_context(|| format!("Failed to load artifact bundle from {}", args.bundle.display()))?;
    info!("predictor session ready");

    loop {
        println!("\nAvailable Fabric Types: {}", predictor.fabric_types().join(", "));
        println!("Available Brand Tiers: {}", predictor.brand_tiers().join(", "));

        let request = PredictionRequest {
            fabric: prompt_choice("Enter fabric type: ", predictor.fabric_types())?,
            brand_tier: prompt_choice("Enter brand tier: ", predictor.brand_tiers())?,
            product_type: prompt_text("Enter product type (e.g., 'Formal Shirt'): ")?,
            selling_price: prompt_price("Enter selling price (₹): ")?,
        };

        match predictor.predict(&request) {
            Ok(prediction) => {
                println!("\n{:=^50}", " COST BREAKDOWN ");
                println!("\nPredicted Selling Price: ₹{:.2}", prediction.predicted_price);
                println!("\nCost Components:");
                for (name, value) in prediction.cost_components.labeled() {
                    println!("- {name}: ₹{value:.2}");
                }
                println!("\n{}", "=".repeat(50));
            }
            Err(err) => println!("\nError: {err}"),
        }

        if !prompt_yes("\nPredict another product? (y/n): ")? {
            println!("Exiting predictor...");
            break;
        }
    }

    Ok(())
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt until the input matches one of `options`, case-insensitively.
/// Returns the canonical (vocabulary) spelling.
fn prompt_choice(prompt: &str, options: &[String]) -> Result<String> {
    loop {
        let input = read_line(prompt)?;
        match match_choice(&input, options) {
            Some(choice) => return Ok(choice),
            None => println!(
                "Invalid input: must be one of: {}\nPlease try again.",
                options.join(", ")
            ),
        }
    }
}

/// Prompt until a non-empty free-text value is entered
fn prompt_text(prompt: &str) -> Result<String> {
    loop {
        let input = read_line(prompt)?;
        if !input.is_empty() {
            return Ok(input);
        }
        println!("Invalid input: value cannot be empty.\nPlease try again.");
    }
}

/// Prompt until a positive numeric price is entered
fn prompt_price(prompt: &str) -> Result<f64> {
    loop {
        let input = read_line(prompt)?;
        match parse_price(&input) {
            Some(price) => return Ok(price),
            None => println!("Invalid input: enter a positive number.\nPlease try again."),
        }
    }
}

fn prompt_yes(prompt: &str) -> Result<bool> {
    let input = read_line(prompt)?;
    Ok(matches!(input.to_lowercase().as_str(), "y" | "yes"))
}

fn match_choice(input: &str, options: &[String]) -> Option<String> {
    let lowered = input.to_lowercase();
    options
        .iter()
        .find(|option| option.to_lowercase() == lowered)
        .cloned()
}

fn parse_price(input: &str) -> Option<f64> {
    input
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<String> {
        vec!["cotton".to_string(), "silk".to_string(), "wool".to_string()]
    }

    #[test]
    fn choice_matching_is_case_insensitive() {
        let options = vocabulary();
        assert_eq!(match_choice("COTTON", &options), Some("cotton".to_string()));
        assert_eq!(match_choice("Silk", &options), Some("silk".to_string()));
        assert_eq!(match_choice("velvet", &options), None);
        assert_eq!(match_choice("", &options), None);
    }

    #[test]
    fn price_parsing_requires_positive_numbers() {
        assert_eq!(parse_price("1000"), Some(1000.0));
        assert_eq!(parse_price("99.95"), Some(99.95));
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-5"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("abc"), None);
    }
}
