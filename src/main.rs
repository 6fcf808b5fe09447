//! # Market Data Extractor
//!
//! Command-line entry point: loads a saved exchange response, extracts it into
//! an ordered column-to-value map and prints the map as a JSON object.

use anyhow::Context;
use clap::Parser;
use market_data_extractor::utils::logger::setup_logger;
use market_data_extractor::*;
use std::path::PathBuf;
use tracing::{error, info};

/// Extract exchange market-data JSON responses into column/value maps
#[derive(Debug, Parser)]
#[command(name = "market-data-extractor", version)]
struct Cli {
    /// Response layout: last-trading-day, previous-trading-day or crypto-pair
    #[arg(short, long)]
    shape: ResponseShape,

    /// Indent the printed JSON
    #[arg(long)]
    pretty: bool,

    /// Saved response file
    file: PathBuf,
}

fn main() {
    setup_logger();

    if let Err(e) = run(Cli::parse()) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    info!("Market Data Extractor v{}", VERSION);
    info!("Loading {} response from {}", cli.shape, cli.file.display());

    let market_data = load_response(cli.shape, &cli.file).with_context(|| {
        format!(
            "failed to extract {} response from {}",
            cli.shape,
            cli.file.display()
        )
    })?;
    info!("Extracted {} fields", market_data.len());

    let output = if cli.pretty {
        serde_json::to_string_pretty(&market_data)?
    } else {
        serde_json::to_string(&market_data)?
    };
    println!("{}", output);

    Ok(())
}
