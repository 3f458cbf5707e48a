//! Core domain models for the satellite catalog.
//!
//! This module defines the fundamental data structures used throughout the engine:
//! raw catalog rows as read from the source file, the derived canonical records,
//! the coarse orbit grouping and the immutable dataset shared by all queries.

pub mod domain;

pub use domain::{CanonicalDataset, CanonicalRecord, OrbitGroup, RawRecord};
