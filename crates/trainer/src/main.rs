//! Supplycast CLI
//!
//! Trains a supplier forecast from an order-history CSV and prints
//! the predicted supplier for a month and product category.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use supplycast_trainer::{predict_from_csv, ForestConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "supplycast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Predict the most likely supplier for a month and product category", long_about = None)]
struct Args {
    /// Order history CSV with Order Date, Category, and Supplier columns
    #[arg(short, long)]
    input: PathBuf,

    /// Calendar month to predict for (1-12)
    #[arg(short, long)]
    month: u32,

    /// Product category to predict for
    #[arg(short, long)]
    category: String,

    /// Number of trees in the forest
    #[arg(long, default_value = "100")]
    trees: usize,

    /// Maximum tree depth
    #[arg(long, default_value = "8")]
    max_depth: usize,

    /// Minimum samples per leaf
    #[arg(long, default_value = "1")]
    min_samples_leaf: usize,

    /// Random seed for bootstrap sampling
    #[arg(long, default_value = "42")]
    seed: i64,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
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

    info!("Supplycast v{}", env!("CARGO_PKG_VERSION"));
    info!("Loading order history from: {}", args.input.display());

    let config = ForestConfig {
        num_trees: args.trees,
        max_depth: args.max_depth,
        min_samples_leaf: args.min_samples_leaf,
        seed: args.seed,
    };

    info!("Training configuration:");
    info!("  Trees: {}", config.num_trees);
    info!("  Max depth: {}", config.max_depth);
    info!("  Min samples per leaf: {}", config.min_samples_leaf);
    info!("  Seed: {}", config.seed);

    let supplier = predict_from_csv(&args.input, args.month, &args.category, config)
        .context("Prediction failed")?;

    println!(
        "Predicted supplier for {} in month {}: {}",
        args.category, args.month, supplier
    );

    Ok(())
}
