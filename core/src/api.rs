use crate::dataset::{Dataset, DatasetLoader, DicomLoader};
use crate::discovery::discover_files;
use crate::error::Result;
use crate::extraction::average_intensity;
use crate::types::{FileRecord, RecordSet, ALL_FIELDS};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Options controlling what the extractor computes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Decode pixel data and compute the average intensity
    pub compute_intensity: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            compute_intensity: true,
        }
    }
}

/// Builds one [`FileRecord`] per discovered file
///
/// Per-file failures never abort a scan: a file that cannot be loaded becomes
/// a record with `load_error` set, and a missing field or unreadable pixel
/// data only blanks the affected value.
///
/// # Example
///
/// ```no_run
/// use dicomsheet_core::Extractor;
/// use std::path::Path;
///
/// let records = Extractor::dicom().scan(Path::new("dicoms")).unwrap();
/// for record in &records {
///     println!("{} {:?}", record.source_path.display(), record.modality);
/// }
/// ```
pub struct Extractor<L> {
    loader: L,
    options: ExtractOptions,
}

impl Extractor<DicomLoader> {
    /// Extractor over DICOM files with default options
    pub fn dicom() -> Self {
        Self::dicom_with_options(ExtractOptions::default())
    }

    /// Extractor over DICOM files
    ///
    /// When intensity is disabled, files are only read up to Pixel Data.
    pub fn dicom_with_options(options: ExtractOptions) -> Self {
        let loader = if options.compute_intensity {
            DicomLoader::new()
        } else {
            DicomLoader::without_pixel_data()
        };
        Self::with_options(loader, options)
    }
}

impl<L: DatasetLoader> Extractor<L> {
    pub fn new(loader: L) -> Self {
        Self::with_options(loader, ExtractOptions::default())
    }

    pub fn with_options(loader: L, options: ExtractOptions) -> Self {
        Self { loader, options }
    }

    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// Scans `root` recursively and extracts every regular file
    ///
    /// # Errors
    ///
    /// Only fails when the root itself cannot be enumerated.
    pub fn scan(&self, root: &Path) -> Result<RecordSet> {
        info!("Processing directory: {}", root.display());
        let files = discover_files(root)?;
        info!("Found {} candidate files", files.len());

        let records = self.extract_paths(files);
        let loaded = records.iter().filter(|r| r.is_loaded()).count();
        info!(
            "Loaded {} of {} files as DICOM datasets",
            loaded,
            records.len()
        );

        Ok(records)
    }

    /// Extracts each path in order
    pub fn extract_paths<I>(&self, paths: I) -> RecordSet
    where
        I: IntoIterator<Item = PathBuf>,
    {
        paths
            .into_iter()
            .map(|path| self.extract_file(&path))
            .collect()
    }

    /// Extracts a single file, never failing
    ///
    /// The dataset is dropped before returning.
    pub fn extract_file(&self, path: &Path) -> FileRecord {
        let dataset = match self.loader.load(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                return FileRecord::failed(path, e.to_string());
            }
        };

        let mut record = FileRecord::new(path);
        for field in ALL_FIELDS {
            if field.is_numeric() {
                record.set_dimension(field, dataset.unsigned(field.tag()));
            } else {
                record.set_text(field, dataset.text(field.tag()));
            }
        }

        if self.options.compute_intensity {
            record.average_intensity = self.intensity(path, &dataset);
        }

        debug!("Processed: {}", path.display());
        record
    }

    fn intensity(&self, path: &Path, dataset: &L::Dataset) -> Option<f64> {
        match dataset.pixel_samples() {
            Ok(Some(samples)) => average_intensity(&samples),
            Ok(None) => {
                debug!("No pixel data in {}", path.display());
                None
            }
            Err(e) => {
                warn!("Unreadable pixel data in {}: {}", path.display(), e);
                None
            }
        }
    }
}
