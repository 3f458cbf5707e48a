//! Turns one filter query into the complete dashboard view model.

use crate::api::charts::{orbit_chart, status_chart};
use crate::api::controls::description_for;
use crate::api::types::{Chart, DashboardView};
use crate::config::{EngineConfig, OrbitSettings, RidgeSettings};
use crate::core::domain::CanonicalDataset;
use crate::services::aggregations::{build_orbit_by_decade, build_status_by_decade};
use crate::services::density::DensityRidgeBuilder;
use crate::services::summary::SummaryStats;
use crate::transformations::filtering::{FilterCriteria, FilterEngine, FilteredView};

/// Stateless query evaluator over a canonical dataset.
///
/// Every call recomputes the view from scratch; identical inputs give
/// identical outputs.
#[derive(Debug, Clone, Default)]
pub struct ViewEngine {
    ridge: DensityRidgeBuilder,
    orbit: OrbitSettings,
}

impl ViewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(ridge: RidgeSettings, orbit: OrbitSettings) -> Self {
        Self {
            ridge: DensityRidgeBuilder::with_settings(ridge),
            orbit,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_settings(config.ridge.clone(), config.orbit.clone())
    }

    pub fn compute(&self, dataset: &CanonicalDataset, criteria: &FilterCriteria) -> DashboardView {
        let view = FilterEngine::apply(dataset, criteria);
        self.compute_filtered(&view, criteria)
    }

    /// Build the view model from an already filtered view.
    pub fn compute_filtered(&self, view: &FilteredView<'_>, criteria: &FilterCriteria) -> DashboardView {
        let description_text = description_for(&criteria.active_view).to_string();

        if view.is_empty() {
            log::debug!("Query matched no records, returning empty view");
            let stats = SummaryStats::empty();
            return DashboardView {
                ridge_chart: Chart::empty(),
                status_bar_chart: Chart::empty(),
                orbit_bar_chart: Chart::empty(),
                total_text: stats.total,
                active_text: stats.active,
                avg_lifespan_text: stats.avg_lifespan,
                avg_mass_text: stats.avg_mass,
                description_text,
            };
        }

        let ridge_chart = self.ridge.build(view);
        let status_bar_chart = status_chart(&build_status_by_decade(view));
        let orbit_bar_chart = orbit_chart(&build_orbit_by_decade(view, self.orbit.top_groups));
        let stats = SummaryStats::compute(view);

        DashboardView {
            ridge_chart,
            status_bar_chart,
            orbit_bar_chart,
            total_text: stats.total,
            active_text: stats.active,
            avg_lifespan_text: stats.avg_lifespan,
            avg_mass_text: stats.avg_mass,
            description_text,
        }
    }
}

/// Compute the dashboard view with default analysis settings.
pub fn compute_view(dataset: &CanonicalDataset, criteria: &FilterCriteria) -> DashboardView {
    ViewEngine::new().compute(dataset, criteria)
}

/// Compute the dashboard view with the analysis settings of `config`.
pub fn compute_view_with(
    dataset: &CanonicalDataset,
    criteria: &FilterCriteria,
    config: &EngineConfig,
) -> DashboardView {
    ViewEngine::from_config(config).compute(dataset, criteria)
}
