//! Tabular export of a [`RecordSet`](crate::types::RecordSet)
//!
//! Both writers share the same column layout: the file path, the eight
//! metadata fields, the average intensity and the load error. Absent values
//! become empty cells.

mod csv;
mod xlsx;

pub use self::csv::{write_csv, write_csv_to};
pub use self::xlsx::write_xlsx;

use crate::types::{FileRecord, MetadataField, ALL_FIELDS};

pub const FILE_COLUMN: &str = "File";
pub const INTENSITY_COLUMN: &str = "AverageIntensity";
pub const LOAD_ERROR_COLUMN: &str = "LoadError";

/// A single non-empty cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// Column headers in output order
pub fn column_names() -> Vec<&'static str> {
    std::iter::once(FILE_COLUMN)
        .chain(ALL_FIELDS.iter().map(|f| f.keyword()))
        .chain([INTENSITY_COLUMN, LOAD_ERROR_COLUMN])
        .collect()
}

/// Cells of one record, aligned with [`column_names`]
pub fn row_cells(record: &FileRecord) -> Vec<Option<Cell>> {
    let mut cells = Vec::with_capacity(ALL_FIELDS.len() + 3);
    cells.push(Some(Cell::Text(record.source_path.display().to_string())));

    for field in ALL_FIELDS {
        let cell = match field {
            MetadataField::Rows => record.rows.map(|v| Cell::Number(f64::from(v))),
            MetadataField::Columns => record.columns.map(|v| Cell::Number(f64::from(v))),
            f => record.field_text(f).map(Cell::Text),
        };
        cells.push(cell);
    }

    cells.push(record.average_intensity.map(Cell::Number));
    cells.push(record.load_error.clone().map(Cell::Text));
    cells
}
