use super::{column_names, row_cells, Cell};
use crate::error::Result;
use crate::types::RecordSet;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

const SHEET_NAME: &str = "DICOM";

/// Writes the record set as a single-sheet workbook
///
/// Dimensions and intensity are stored as numbers, everything else as text.
pub fn write_xlsx(records: &RecordSet, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in column_names().into_iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, name, &header_format)?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, cell) in row_cells(record).into_iter().enumerate() {
            match cell {
                Some(Cell::Text(text)) => {
                    worksheet.write_string(row, col as u16, text)?;
                }
                Some(Cell::Number(n)) => {
                    worksheet.write_number(row, col as u16, n)?;
                }
                None => {}
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}
