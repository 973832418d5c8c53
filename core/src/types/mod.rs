//! Core type definitions for the extracted metadata table
//!
//! - [`MetadataField`]: the eight DICOM attributes read from every file
//! - [`FileRecord`]: one row per attempted file
//! - [`RecordSet`]: ordered rows in discovery order
//! - [`ScanSummary`]: outcome counts over a record set

mod field;
mod record;
mod summary;

pub use field::{MetadataField, ALL_FIELDS};
pub use record::{FileRecord, RecordSet};
pub use summary::ScanSummary;
