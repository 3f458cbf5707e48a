//! Analysis services.
//!
//! This module contains the analysis layer that sits between the filtered
//! dataset and the dashboard view model. Services aggregate records, estimate
//! lifespan densities and assemble the complete view for one query.

pub mod aggregations;
pub mod density;
pub mod summary;
pub mod view;

pub use aggregations::{
    build_orbit_by_decade, build_status_by_decade, OrbitDecadeCount, OrbitSeries, StatusDecadeRow,
};
pub use density::{DensityRidgeBuilder, GaussianKde, RIDGE_PALETTE};
pub use summary::SummaryStats;
pub use view::{compute_view, compute_view_with, ViewEngine};
