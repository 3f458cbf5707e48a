//! # API Module
//!
//! Serializable view-model types handed to the dashboard layer. The engine
//! produces chart *specifications* (series, colors, titles); rendering them is
//! the caller's job.
//!
//! - [`types`]: chart specifications, the empty sentinel and the dashboard view model
//! - [`charts`]: conversion of aggregation tables into bar chart specifications
//! - [`controls`]: descriptors for the filter widgets and static descriptions

pub mod charts;
pub mod controls;
pub mod types;

pub use controls::{description_for, FilterOptions, SelectOption, SliderSpec};
pub use types::*;
