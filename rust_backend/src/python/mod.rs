//! Python bindings for the satellite lifespan engine.
//!
//! The dashboard process loads the catalog once with [`load_catalog`] and then
//! calls [`compute_view`] on every widget interaction. All structured values
//! cross the boundary as JSON strings.
//!
//! # Python API
//!
//! All functions are available in the `satlife_rust` Python module after installation.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use pyo3::prelude::*;

use crate::api::FilterOptions;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::preprocessing::{CatalogPipeline, LoadedCatalog};
use crate::services::ViewEngine;
use crate::transformations::FilterCriteria;

struct LoadedState {
    catalog: Arc<LoadedCatalog>,
    engine: ViewEngine,
}

/// Catalog shared by every call of the process. Replaced wholesale on reload.
static STATE: Lazy<RwLock<Option<LoadedState>>> = Lazy::new(|| RwLock::new(None));

fn runtime_error(msg: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(msg.to_string())
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| runtime_error(format!("Failed to serialize: {}", e)))
}

/// Load and canonicalize a catalog, replacing any previously loaded one.
///
/// Without a path the configured catalog (`satlife.toml` or `SATLIFE_CATALOG`)
/// is used. Returns the dataset summary as JSON.
#[pyfunction]
#[pyo3(signature = (path=None))]
pub fn load_catalog(path: Option<PathBuf>) -> PyResult<String> {
    let config = EngineConfig::from_default_location()
        .map_err(runtime_error)?
        .with_env_overrides();
    let path = path.unwrap_or_else(|| config.data.catalog_path.clone());

    let catalog = CatalogPipeline::with_settings(config.derive.clone())
        .load(&path)
        .map_err(|e| runtime_error(EngineError::Load(format!("{:#}", e))))?;
    let info = to_json(&catalog.info())?;

    let mut state = STATE
        .write()
        .map_err(|_| runtime_error("Catalog state lock poisoned"))?;
    *state = Some(LoadedState {
        catalog: Arc::new(catalog),
        engine: ViewEngine::from_config(&config),
    });

    Ok(info)
}

/// Compute the dashboard view for one JSON query against the loaded catalog.
#[pyfunction]
pub fn compute_view(criteria_json: &str) -> PyResult<String> {
    let criteria = FilterCriteria::from_json(criteria_json).map_err(runtime_error)?;

    let state = STATE
        .read()
        .map_err(|_| runtime_error("Catalog state lock poisoned"))?;
    let loaded = state
        .as_ref()
        .ok_or_else(|| runtime_error("No catalog loaded. Call load_catalog() first."))?;

    let view = loaded.engine.compute(&loaded.catalog.dataset, &criteria);
    to_json(&view)
}

/// Descriptors of the dashboard's filter controls as JSON.
#[pyfunction]
pub fn filter_options() -> PyResult<String> {
    to_json(&FilterOptions::dashboard())
}

/// Summary of the loaded catalog as JSON.
#[pyfunction]
pub fn dataset_info() -> PyResult<String> {
    let state = STATE
        .read()
        .map_err(|_| runtime_error("Catalog state lock poisoned"))?;
    let loaded = state
        .as_ref()
        .ok_or_else(|| runtime_error("No catalog loaded. Call load_catalog() first."))?;
    to_json(&loaded.catalog.info())
}

/// Register all Python-facing functions with the module.
pub fn register_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(load_catalog, m)?)?;
    m.add_function(wrap_pyfunction!(compute_view, m)?)?;
    m.add_function(wrap_pyfunction!(filter_options, m)?)?;
    m.add_function(wrap_pyfunction!(dataset_info, m)?)?;
    Ok(())
}
