use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::config::DeriveSettings;
use crate::core::domain::CanonicalDataset;
use crate::parsing::tsv_parser;
use crate::preprocessing::deriver::{DeriveReport, RecordDeriver};
use crate::time::{self, Timestamp};

/// Result of loading a catalog file into the canonical dataset.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub dataset: CanonicalDataset,
    pub report: DeriveReport,
    /// Rows that could not be decoded at all.
    pub unreadable_rows: usize,
    /// SHA-256 of the source bytes, hex encoded.
    pub checksum: String,
}

impl LoadedCatalog {
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            records: self.dataset.len(),
            active: self.dataset.active_count(),
            decades: self.dataset.decades(),
            reference_time: self.dataset.reference_time().to_string(),
            checksum: self.checksum.clone(),
            report: self.report.clone(),
        }
    }
}

/// Serializable summary of a loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub records: usize,
    pub active: usize,
    pub decades: Vec<i32>,
    pub reference_time: String,
    pub checksum: String,
    pub report: DeriveReport,
}

/// Load pipeline: read the catalog, derive canonical records, freeze the dataset.
#[derive(Debug, Clone, Default)]
pub struct CatalogPipeline {
    deriver: RecordDeriver,
}

impl CatalogPipeline {
    /// Create a pipeline with default derivation rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with custom derivation rules
    pub fn with_settings(settings: DeriveSettings) -> Self {
        Self {
            deriver: RecordDeriver::with_settings(settings),
        }
    }

    /// Load a catalog file using the current time as the reference instant.
    pub fn load(&self, path: &Path) -> Result<LoadedCatalog> {
        self.load_at(path, time::now())
    }

    /// Load a catalog file against an explicit reference instant.
    pub fn load_at(&self, path: &Path, now: Timestamp) -> Result<LoadedCatalog> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let loaded = self
            .load_bytes_at(&bytes, now)
            .with_context(|| format!("Failed to load catalog file: {}", path.display()))?;

        log::info!(
            "Loaded catalog {}: {} rows, {} payload records retained ({} non-payload, {} without launch date, {} out of lifespan bounds)",
            path.display(),
            loaded.report.rows_seen,
            loaded.report.retained,
            loaded.report.not_payload,
            loaded.report.missing_launch_date,
            loaded.report.lifespan_out_of_bounds,
        );

        Ok(loaded)
    }

    /// Build the dataset from catalog bytes held in memory.
    pub fn load_bytes_at(&self, bytes: &[u8], now: Timestamp) -> Result<LoadedCatalog> {
        let checksum = hex::encode(Sha256::digest(bytes));

        let parsed = tsv_parser::parse_catalog_reader(bytes).context("Failed to parse catalog")?;
        if parsed.skipped_rows > 0 {
            log::warn!("{} catalog rows could not be decoded", parsed.skipped_rows);
        }

        let output = self.deriver.derive_batch(&parsed.records, now);

        Ok(LoadedCatalog {
            dataset: CanonicalDataset::new(output.records, now),
            report: output.report,
            unreadable_rows: parsed.skipped_rows,
            checksum,
        })
    }
}
