//! Satellite lifespan report binary
//!
//! Loads the configured catalog, evaluates one query and prints the resulting
//! dashboard view as pretty JSON.
//!
//! # Usage
//!
//! ```bash
//! # Default dashboard query
//! SATLIFE_CATALOG=data/satcat.tsv cargo run --bin satlife-report --features cli
//!
//! # Query read from a JSON file
//! cargo run --bin satlife-report --features cli -- query.json
//! ```
//!
//! # Environment Variables
//!
//! - `SATLIFE_CATALOG`: Catalog TSV path (overrides `satlife.toml`)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use anyhow::{Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use satlife_rust::config::EngineConfig;
use satlife_rust::preprocessing::CatalogPipeline;
use satlife_rust::services::ViewEngine;
use satlife_rust::transformations::FilterCriteria;

fn main() -> Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig::from_default_location()?.with_env_overrides();

    let criteria = match env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read query file: {}", path))?;
            FilterCriteria::from_json(&json)?
        }
        None => FilterCriteria::default(),
    };

    info!("Loading catalog from {}", config.data.catalog_path.display());
    let catalog = CatalogPipeline::with_settings(config.derive.clone())
        .load(&config.data.catalog_path)?;
    info!(
        "Loaded {} payload records ({} dropped)",
        catalog.dataset.len(),
        catalog.report.dropped()
    );

    let view = ViewEngine::from_config(&config).compute(&catalog.dataset, &criteria);
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}
