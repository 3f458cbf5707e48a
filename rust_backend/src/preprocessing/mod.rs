pub mod deriver;
pub mod pipeline;

pub use deriver::{derive_all, derive_all_at, DeriveOutput, DeriveReport, DropReason, RecordDeriver};
pub use pipeline::{CatalogPipeline, DatasetInfo, LoadedCatalog};
