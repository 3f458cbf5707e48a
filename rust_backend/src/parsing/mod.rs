//! Parsers for the space-object catalog.
//!
//! The catalog is distributed as a tab-separated file with a header row. Only
//! the handful of columns the engine needs are extracted; everything else in the
//! row is ignored.
//!
//! # Example
//!
//! ```no_run
//! use satlife_rust::parsing::tsv_parser::parse_catalog_tsv;
//! use std::path::Path;
//!
//! let parsed = parse_catalog_tsv(Path::new("satcat.tsv"))
//!     .expect("Failed to parse catalog");
//! println!("Read {} rows", parsed.records.len());
//! ```

pub mod tsv_parser;


pub use tsv_parser::{parse_catalog_reader, parse_catalog_str, parse_catalog_tsv, TsvParseResult};
