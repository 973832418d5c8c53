use crate::types::MetadataField;
use std::path::{Path, PathBuf};

/// One output row per attempted input file
///
/// Every metadata field is independently optional. When the file could not
/// be loaded at all, `load_error` carries the reason and every other field
/// is `None`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct FileRecord {
    /// Path of the file that was attempted
    pub source_path: PathBuf,

    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub study_instance_uid: Option<String>,
    pub study_description: Option<String>,
    pub study_date: Option<String>,
    pub modality: Option<String>,

    /// Number of rows in image
    pub rows: Option<u16>,

    /// Number of columns in image
    pub columns: Option<u16>,

    /// Mean of all pixel sample values
    pub average_intensity: Option<f64>,

    /// Set when the file could not be parsed as a dataset
    pub load_error: Option<String>,
}

impl FileRecord {
    /// Creates an empty record for a file, every field absent
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            ..Default::default()
        }
    }

    /// Creates the record of a file that failed to load
    pub fn failed(source_path: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        Self {
            load_error: Some(error.into()),
            ..Self::new(source_path)
        }
    }

    /// Path of the attempted file
    pub fn path(&self) -> &Path {
        &self.source_path
    }

    /// Whether the file was loaded as a dataset
    pub fn is_loaded(&self) -> bool {
        self.load_error.is_none()
    }

    /// Stores a text value into the slot of a text field
    ///
    /// Numeric fields are ignored here; use [`FileRecord::set_dimension`].
    pub fn set_text(&mut self, field: MetadataField, value: Option<String>) {
        match field {
            MetadataField::PatientId => self.patient_id = value,
            MetadataField::PatientName => self.patient_name = value,
            MetadataField::StudyInstanceUid => self.study_instance_uid = value,
            MetadataField::StudyDescription => self.study_description = value,
            MetadataField::StudyDate => self.study_date = value,
            MetadataField::Modality => self.modality = value,
            MetadataField::Rows | MetadataField::Columns => {}
        }
    }

    /// Stores an image dimension into `rows` or `columns`
    pub fn set_dimension(&mut self, field: MetadataField, value: Option<u16>) {
        match field {
            MetadataField::Rows => self.rows = value,
            MetadataField::Columns => self.columns = value,
            _ => {}
        }
    }

    /// Renders a field as a cell value, `None` when absent
    pub fn field_text(&self, field: MetadataField) -> Option<String> {
        match field {
            MetadataField::PatientId => self.patient_id.clone(),
            MetadataField::PatientName => self.patient_name.clone(),
            MetadataField::StudyInstanceUid => self.study_instance_uid.clone(),
            MetadataField::StudyDescription => self.study_description.clone(),
            MetadataField::StudyDate => self.study_date.clone(),
            MetadataField::Modality => self.modality.clone(),
            MetadataField::Rows => self.rows.map(|v| v.to_string()),
            MetadataField::Columns => self.columns.map(|v| v.to_string()),
        }
    }
}

/// Ordered sequence of records, in discovery order
///
/// No deduplication is performed: several files may share identifiers.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct RecordSet {
    records: Vec<FileRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end of the set
    pub fn push(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<FileRecord> {
        self.records
    }
}

impl FromIterator<FileRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = FileRecord;
    type IntoIter = std::vec::IntoIter<FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
