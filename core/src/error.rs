use std::path::PathBuf;
use thiserror::Error;

/// Result type for dicomsheet operations
pub type Result<T> = std::result::Result<T, DicomSheetError>;

/// Error types for dicomsheet operations
#[derive(Error, Debug)]
pub enum DicomSheetError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Scan root exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Scan root could not be enumerated at all
    #[error("Cannot traverse {path}: {reason}")]
    Traversal { path: PathBuf, reason: String },

    /// Pixel data present but not decodable
    #[error("Pixel data error: {0}")]
    PixelDataError(String),

    /// CSV export error
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Spreadsheet export error
    #[error("XLSX error: {0}")]
    XlsxError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for DicomSheetError {
    fn from(e: dicom_object::ReadError) -> Self {
        DicomSheetError::DicomError(format!("{}", e))
    }
}

impl From<dicom_pixeldata::Error> for DicomSheetError {
    fn from(e: dicom_pixeldata::Error) -> Self {
        DicomSheetError::PixelDataError(format!("{}", e))
    }
}

impl From<csv::Error> for DicomSheetError {
    fn from(e: csv::Error) -> Self {
        DicomSheetError::CsvError(format!("{}", e))
    }
}

impl From<rust_xlsxwriter::XlsxError> for DicomSheetError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        DicomSheetError::XlsxError(format!("{}", e))
    }
}
