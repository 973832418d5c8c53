pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for dicomsheet
#[derive(Parser, Debug)]
#[command(name = "dicomsheet")]
#[command(about = "Extract DICOM metadata from a folder into CSV and XLSX tables")]
#[command(version)]
pub struct Cli {
    /// Directory scanned recursively for DICOM files
    #[arg(value_name = "DIRECTORY", default_value = "dicoms")]
    pub directory: PathBuf,

    /// CSV output path
    #[arg(long, value_name = "PATH", default_value = "dicom_results.csv")]
    pub csv: PathBuf,

    /// XLSX output path
    #[arg(long, value_name = "PATH", default_value = "dicom_results.xlsx")]
    pub xlsx: PathBuf,

    /// Skip the CSV export
    #[arg(long)]
    pub no_csv: bool,

    /// Skip the XLSX export
    #[arg(long)]
    pub no_xlsx: bool,

    /// Do not decode pixel data or compute average intensity
    #[arg(long)]
    pub no_intensity: bool,

    /// Create the directory if it is missing, then exit
    #[arg(long)]
    pub create_dir: bool,

    /// Summary format printed to stdout
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Rows shown in the text summary
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub preview: usize,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
