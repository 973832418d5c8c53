//! Dataset loading seam
//!
//! The extractor only needs "read field F, yielding `Some` or `None`" and
//! "give me the pixel samples". [`Dataset`] captures that capability and
//! [`DatasetLoader`] turns a path into a dataset or a load error, so the
//! aggregation logic can run against a fake loader in tests.

use crate::error::Result;
use crate::extraction::tags::{get_string_value, get_u16_value, COLUMNS, ROWS};
use dicom_core::Tag;
use dicom_dictionary_std::tags::PIXEL_DATA;
use dicom_object::{open_file, DefaultDicomObject, OpenFileOptions};
use dicom_pixeldata::{ConvertOptions, ModalityLutOption, PixelDecoder};
use std::path::Path;

/// Tolerant read access to a loaded dataset
pub trait Dataset {
    /// Reads a field as trimmed text, `None` when absent or unreadable
    fn text(&self, tag: Tag) -> Option<String>;

    /// Reads a field as an unsigned 16-bit integer, `None` when absent or unreadable
    fn unsigned(&self, tag: Tag) -> Option<u16>;

    /// Returns every pixel sample widened to `f64`
    ///
    /// `Ok(None)` when the dataset carries no pixel data or declares an empty
    /// image. `Err` when pixel data is present but cannot be decoded.
    fn pixel_samples(&self) -> Result<Option<Vec<f64>>>;
}

/// Parses a file into a [`Dataset`] or fails with a load error
pub trait DatasetLoader {
    type Dataset: Dataset;

    fn load(&self, path: &Path) -> Result<Self::Dataset>;
}

/// Loader for DICOM Part 10 files
#[derive(Debug, Clone, Copy)]
pub struct DicomLoader {
    read_pixel_data: bool,
}

impl DicomLoader {
    /// Loader reading whole files, pixel data included
    pub fn new() -> Self {
        Self {
            read_pixel_data: true,
        }
    }

    /// Loader that stops reading before Pixel Data
    ///
    /// Datasets produced this way never report pixel samples.
    pub fn without_pixel_data() -> Self {
        Self {
            read_pixel_data: false,
        }
    }

    pub fn reads_pixel_data(&self) -> bool {
        self.read_pixel_data
    }
}

impl Default for DicomLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader for DicomLoader {
    type Dataset = DefaultDicomObject;

    fn load(&self, path: &Path) -> Result<DefaultDicomObject> {
        let dcm = if self.read_pixel_data {
            open_file(path)?
        } else {
            OpenFileOptions::new().read_until(PIXEL_DATA).open_file(path)?
        };
        Ok(dcm)
    }
}

impl Dataset for DefaultDicomObject {
    fn text(&self, tag: Tag) -> Option<String> {
        get_string_value(self, tag)
    }

    fn unsigned(&self, tag: Tag) -> Option<u16> {
        get_u16_value(self, tag)
    }

    fn pixel_samples(&self) -> Result<Option<Vec<f64>>> {
        if self.element(PIXEL_DATA).is_err() {
            return Ok(None);
        }
        if get_u16_value(self, ROWS) == Some(0) || get_u16_value(self, COLUMNS) == Some(0) {
            return Ok(None);
        }

        let decoded = self.decode_pixel_data()?;
        // native sample values: no rescale slope/intercept, no windowing
        let options = ConvertOptions::new().with_modality_lut(ModalityLutOption::None);
        let samples = decoded.to_vec_with_options::<f64>(&options)?;

        if samples.is_empty() {
            Ok(None)
        } else {
            Ok(Some(samples))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DicomSheetError;
    use crate::extraction::tags::{MODALITY, PATIENT_ID};
    use dicom_core::value::PrimitiveValue;
    use dicom_core::{DataElement, VR};
    use dicom_dictionary_std::{tags, uids};
    use dicom_object::{FileMetaTableBuilder, InMemDicomObject};
    use std::fs;
    use tempfile::TempDir;

    fn write_image(path: &Path, rows: u16, columns: u16, pixels: Option<Vec<u16>>) {
        let mut obj = InMemDicomObject::from_element_iter([
            DataElement::new(PATIENT_ID, VR::LO, PrimitiveValue::from("P-17")),
            DataElement::new(MODALITY, VR::CS, PrimitiveValue::from("MR")),
            DataElement::new(ROWS, VR::US, PrimitiveValue::from(rows)),
            DataElement::new(COLUMNS, VR::US, PrimitiveValue::from(columns)),
        ]);
        if let Some(pixels) = pixels {
            for (tag, value) in [
                (tags::SAMPLES_PER_PIXEL, 1_u16),
                (tags::BITS_ALLOCATED, 16),
                (tags::BITS_STORED, 16),
                (tags::HIGH_BIT, 15),
                (tags::PIXEL_REPRESENTATION, 0),
            ] {
                obj.put(DataElement::new(tag, VR::US, PrimitiveValue::from(value)));
            }
            obj.put(DataElement::new(
                tags::PHOTOMETRIC_INTERPRETATION,
                VR::CS,
                PrimitiveValue::from("MONOCHROME2"),
            ));
            obj.put(DataElement::new(
                PIXEL_DATA,
                VR::OW,
                PrimitiveValue::U16(pixels.into()),
            ));
        }

        let file = obj
            .with_meta(
                FileMetaTableBuilder::new()
                    .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                    .media_storage_sop_class_uid(uids::MR_IMAGE_STORAGE)
                    .media_storage_sop_instance_uid("1.2.826.0.1.3680043.8.498.1"),
            )
            .unwrap();
        file.write_to_file(path).unwrap();
    }

    #[test]
    fn test_load_garbage_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"not a dicom file at all").unwrap();

        let result = DicomLoader::new().load(&path);
        assert!(matches!(result, Err(DicomSheetError::DicomError(_))));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(DicomLoader::new().load(&dir.path().join("absent.dcm")).is_err());
    }

    #[test]
    fn test_load_reads_fields_and_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("image.dcm");
        write_image(&path, 2, 2, Some(vec![10, 20, 30, 40]));

        let dcm = DicomLoader::new().load(&path).unwrap();
        assert_eq!(dcm.text(PATIENT_ID).as_deref(), Some("P-17"));
        assert_eq!(dcm.text(MODALITY).as_deref(), Some("MR"));
        assert_eq!(dcm.unsigned(ROWS), Some(2));
        assert_eq!(
            dcm.pixel_samples().unwrap(),
            Some(vec![10.0, 20.0, 30.0, 40.0])
        );
    }

    #[test]
    fn test_pixel_samples_absent_without_pixel_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("header_only.dcm");
        write_image(&path, 2, 2, None);

        let dcm = DicomLoader::new().load(&path).unwrap();
        assert_eq!(dcm.pixel_samples().unwrap(), None);
    }

    #[test]
    fn test_loader_without_pixel_data_skips_samples() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("image.dcm");
        write_image(&path, 2, 2, Some(vec![1, 2, 3, 4]));

        let loader = DicomLoader::without_pixel_data();
        assert!(!loader.reads_pixel_data());

        let dcm = loader.load(&path).unwrap();
        assert_eq!(dcm.unsigned(COLUMNS), Some(2));
        assert_eq!(dcm.pixel_samples().unwrap(), None);
    }

    #[test]
    fn test_pixel_samples_absent_for_empty_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.dcm");
        write_image(&path, 0, 0, Some(vec![]));

        let dcm = DicomLoader::new().load(&path).unwrap();
        assert_eq!(dcm.pixel_samples().unwrap(), None);
    }
}
