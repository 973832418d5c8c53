use crate::types::RecordSet;

/// Counts describing the outcome of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ScanSummary {
    /// Files attempted
    pub total: usize,
    /// Files loaded as datasets
    pub loaded: usize,
    /// Files that failed to load
    pub failed: usize,
    /// Loaded files with a computed average intensity
    pub with_intensity: usize,
}

impl ScanSummary {
    pub fn from_records(records: &RecordSet) -> Self {
        records.iter().fold(Self::default(), |mut acc, record| {
            acc.total += 1;
            if record.is_loaded() {
                acc.loaded += 1;
            } else {
                acc.failed += 1;
            }
            if record.average_intensity.is_some() {
                acc.with_intensity += 1;
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileRecord;

    #[test]
    fn test_summary_counts() {
        let mut with_pixels = FileRecord::new("a.dcm");
        with_pixels.average_intensity = Some(12.5);

        let records: RecordSet = vec![
            with_pixels,
            FileRecord::new("b.dcm"),
            FileRecord::failed("c.txt", "not DICOM"),
        ]
        .into_iter()
        .collect();

        let summary = ScanSummary::from_records(&records);
        assert_eq!(
            summary,
            ScanSummary {
                total: 3,
                loaded: 2,
                failed: 1,
                with_intensity: 1,
            }
        );
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(
            ScanSummary::from_records(&RecordSet::new()),
            ScanSummary::default()
        );
    }
}
