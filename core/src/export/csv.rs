use super::{column_names, row_cells};
use crate::error::Result;
use crate::types::RecordSet;
use std::io::Write;
use std::path::Path;

/// Writes the record set as comma-separated rows with a header line
pub fn write_csv(records: &RecordSet, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(records, file)
}

/// Writes the record set as CSV into any writer
pub fn write_csv_to<W: Write>(records: &RecordSet, writer: W) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(column_names())?;

    for record in records {
        let row: Vec<String> = row_cells(record)
            .into_iter()
            .map(|cell| cell.map(|c| c.render()).unwrap_or_default())
            .collect();
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
