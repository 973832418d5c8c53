use crate::extraction::tags::{
    COLUMNS, MODALITY, PATIENT_ID, PATIENT_NAME, ROWS, STUDY_DATE, STUDY_DESCRIPTION,
    STUDY_INSTANCE_UID,
};
use dicom_core::Tag;
use std::fmt;

/// The fixed metadata schema read from every loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum MetadataField {
    PatientId,
    PatientName,
    StudyInstanceUid,
    StudyDescription,
    StudyDate,
    Modality,
    Rows,
    Columns,
}

/// All schema fields, in output column order
pub const ALL_FIELDS: [MetadataField; 8] = [
    MetadataField::PatientId,
    MetadataField::PatientName,
    MetadataField::StudyInstanceUid,
    MetadataField::StudyDescription,
    MetadataField::StudyDate,
    MetadataField::Modality,
    MetadataField::Rows,
    MetadataField::Columns,
];

impl MetadataField {
    /// DICOM tag holding this field
    pub fn tag(&self) -> Tag {
        match self {
            MetadataField::PatientId => PATIENT_ID,
            MetadataField::PatientName => PATIENT_NAME,
            MetadataField::StudyInstanceUid => STUDY_INSTANCE_UID,
            MetadataField::StudyDescription => STUDY_DESCRIPTION,
            MetadataField::StudyDate => STUDY_DATE,
            MetadataField::Modality => MODALITY,
            MetadataField::Rows => ROWS,
            MetadataField::Columns => COLUMNS,
        }
    }

    /// DICOM keyword, also used as the export column header
    pub fn keyword(&self) -> &'static str {
        match self {
            MetadataField::PatientId => "PatientID",
            MetadataField::PatientName => "PatientName",
            MetadataField::StudyInstanceUid => "StudyInstanceUID",
            MetadataField::StudyDescription => "StudyDescription",
            MetadataField::StudyDate => "StudyDate",
            MetadataField::Modality => "Modality",
            MetadataField::Rows => "Rows",
            MetadataField::Columns => "Columns",
        }
    }

    /// Whether the field holds an image dimension rather than text
    pub fn is_numeric(&self) -> bool {
        matches!(self, MetadataField::Rows | MetadataField::Columns)
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tags_are_distinct() {
        let tags: HashSet<Tag> = ALL_FIELDS.iter().map(|f| f.tag()).collect();
        assert_eq!(tags.len(), ALL_FIELDS.len());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(MetadataField::PatientId.to_string(), "PatientID");
        assert_eq!(
            MetadataField::StudyInstanceUid.keyword(),
            "StudyInstanceUID"
        );
        assert_eq!(MetadataField::Rows.tag(), Tag(0x0028, 0x0010));
    }

    #[test]
    fn test_numeric_fields() {
        let numeric: Vec<_> = ALL_FIELDS.iter().filter(|f| f.is_numeric()).collect();
        assert_eq!(numeric, vec![&MetadataField::Rows, &MetadataField::Columns]);
    }
}
