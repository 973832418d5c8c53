pub mod api;
pub mod cli;
pub mod dataset;
pub mod discovery;
pub mod error;
pub mod export;
pub mod extraction;
pub mod types;

pub use api::{ExtractOptions, Extractor};
pub use cli::report::TextReport;
pub use dataset::{Dataset, DatasetLoader, DicomLoader};
pub use discovery::discover_files;
pub use error::{DicomSheetError, Result};
pub use export::{write_csv, write_xlsx};
pub use types::*;
