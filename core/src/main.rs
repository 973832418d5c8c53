use clap::Parser;
use dicomsheet_core::cli::{Cli, OutputFormat};
use dicomsheet_core::{write_csv, write_xlsx, ExtractOptions, Extractor, RecordSet, TextReport};
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if cli.create_dir && !cli.directory.exists() {
        if let Err(e) = std::fs::create_dir_all(&cli.directory) {
            eprintln!(
                "Error: Failed to create {}: {}",
                cli.directory.display(),
                e
            );
            process::exit(1);
        }
        println!("Created working folder: {}", cli.directory.display());
        println!("Place your DICOM files there and run again.");
        return;
    }

    let extractor = Extractor::dicom_with_options(ExtractOptions {
        compute_intensity: !cli.no_intensity,
    });

    let records = match extractor.scan(&cli.directory) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to scan directory: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut failed_exports = 0;

    if !cli.no_csv {
        match write_csv(&records, &cli.csv) {
            Ok(()) => info!("CSV saved to {}", cli.csv.display()),
            Err(e) => {
                error!("Failed to write {}: {}", cli.csv.display(), e);
                failed_exports += 1;
            }
        }
    }

    if !cli.no_xlsx {
        match write_xlsx(&records, &cli.xlsx) {
            Ok(()) => info!("XLSX saved to {}", cli.xlsx.display()),
            Err(e) => {
                error!("Failed to write {}: {}", cli.xlsx.display(), e);
                failed_exports += 1;
            }
        }
    }

    output_records(&records, cli.format, cli.preview);

    if failed_exports > 0 {
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn output_records(records: &RecordSet, format: OutputFormat, preview: usize) {
    match format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(records, preview));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(records) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
