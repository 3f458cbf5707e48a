//! Satellite lifespan analysis engine.
//!
//! Normalizes a raw satellite catalog (GCAT-style TSV) into canonical payload
//! records and answers dashboard queries over them: a lifespan density
//! ridgeline per launch decade, active vs decommissioned counts, the orbit
//! groups where retired payloads accumulate, and summary statistics.
//!
//! # Modules
//!
//! - [`parsing`]: TSV catalog reader
//! - [`time`]: vague catalog date normalization and lifespan arithmetic
//! - [`preprocessing`]: record derivation and the load pipeline
//! - [`transformations`]: filter criteria and the filter engine
//! - [`services`]: aggregations, density estimation and view assembly
//! - [`api`]: serializable chart specifications and control descriptors
//! - [`config`]: TOML configuration
//!
//! # Example
//!
//! ```no_run
//! use satlife_rust::preprocessing::CatalogPipeline;
//! use satlife_rust::services::compute_view;
//! use satlife_rust::transformations::FilterCriteria;
//!
//! let catalog = CatalogPipeline::new().load("data/satcat.tsv".as_ref())?;
//! let view = compute_view(&catalog.dataset, &FilterCriteria::default());
//! println!("{} payloads in view", view.total_text);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod preprocessing;
pub mod services;
pub mod time;
pub mod transformations;

#[cfg(feature = "python")]
pub mod python;

pub use error::{EngineError, EngineResult};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Satellite lifespan engine exposed to the dashboard.
#[cfg(feature = "python")]
#[pymodule]
fn satlife_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_functions(m)
}
