use crate::types::{RecordSet, ScanSummary};
use std::fmt;

/// Text report formatter for a scan
pub struct TextReport<'a> {
    records: &'a RecordSet,
    preview: usize,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report showing at most `preview` rows
    pub fn new(records: &'a RecordSet, preview: usize) -> Self {
        Self { records, preview }
    }
}

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = ScanSummary::from_records(self.records);

        writeln!(f, "DICOM Scan Summary")?;
        writeln!(f, "==================")?;
        writeln!(f)?;
        writeln!(f, "Files:          {}", summary.total)?;
        writeln!(f, "Loaded:         {}", summary.loaded)?;
        writeln!(f, "Failed:         {}", summary.failed)?;
        writeln!(f, "With Intensity: {}", summary.with_intensity)?;

        if self.records.is_empty() || self.preview == 0 {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "First {} Rows", self.preview.min(self.records.len()))?;
        writeln!(f, "------------")?;
        for record in self.records.iter().take(self.preview) {
            writeln!(f, "{}", record.source_path.display())?;
            if let Some(err) = &record.load_error {
                writeln!(f, "  Load Error: {}", err)?;
                continue;
            }
            writeln!(
                f,
                "  Patient:    {} ({})",
                or_dash(record.patient_name.as_deref()),
                or_dash(record.patient_id.as_deref())
            )?;
            writeln!(
                f,
                "  Study:      {} {}",
                or_dash(record.study_date.as_deref()),
                or_dash(record.study_description.as_deref())
            )?;
            writeln!(f, "  Modality:   {}", or_dash(record.modality.as_deref()))?;
            match (record.rows, record.columns) {
                (Some(r), Some(c)) => writeln!(f, "  Size:       {}x{}", r, c)?,
                _ => writeln!(f, "  Size:       -")?,
            }
            match record.average_intensity {
                Some(mean) => writeln!(f, "  Intensity:  {:.2}", mean)?,
                None => writeln!(f, "  Intensity:  -")?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileRecord;

    fn sample() -> RecordSet {
        let mut ok = FileRecord::new("dicoms/a.dcm");
        ok.patient_id = Some("P001".to_string());
        ok.patient_name = Some("Doe^Jane".to_string());
        ok.modality = Some("CT".to_string());
        ok.rows = Some(512);
        ok.columns = Some(512);
        ok.average_intensity = Some(25.0);

        vec![ok, FileRecord::failed("dicoms/b.txt", "DICOM error: eof")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_text_report_format() {
        let records = sample();
        let output = TextReport::new(&records, 5).to_string();

        assert!(output.contains("DICOM Scan Summary"));
        assert!(output.contains("Files:          2"));
        assert!(output.contains("Loaded:         1"));
        assert!(output.contains("Failed:         1"));
        assert!(output.contains("First 2 Rows"));
        assert!(output.contains("  Patient:    Doe^Jane (P001)"));
        assert!(output.contains("  Size:       512x512"));
        assert!(output.contains("  Intensity:  25.00"));
        assert!(output.contains("  Load Error: DICOM error: eof"));
    }

    #[test]
    fn test_text_report_preview_limit() {
        let records = sample();
        let output = TextReport::new(&records, 1).to_string();

        assert!(output.contains("dicoms/a.dcm"));
        assert!(!output.contains("dicoms/b.txt"));

        let summary_only = TextReport::new(&records, 0).to_string();
        assert!(!summary_only.contains("Rows"));
    }
}
