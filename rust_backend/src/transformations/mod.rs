//! Query-time filtering of the canonical dataset.
//!
//! A [`FilterCriteria`] carries one dashboard interaction: launch decade range,
//! mass range, orbit selector, status selector and the chart tab being viewed.
//! [`FilterEngine::apply`] narrows the canonical dataset to a borrowed
//! [`FilteredView`] without copying or mutating records.
//!
//! # Example
//!
//! ```no_run
//! use satlife_rust::transformations::{FilterCriteria, FilterEngine, StatusSelector};
//! # fn example(dataset: &satlife_rust::core::CanonicalDataset) {
//! let criteria = FilterCriteria {
//!     status_selector: StatusSelector::Active,
//!     ..FilterCriteria::default()
//! };
//! let view = FilterEngine::apply(dataset, &criteria);
//! println!("{} active payloads", view.len());
//! # }
//! ```

pub mod filtering;

pub use filtering::{
    ActiveView, FilterCriteria, FilterEngine, FilteredView, InclusiveRange, OrbitSelector,
    StatusSelector,
};
