//! CSV sink for the shooting summary table

use super::summary::SummaryRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
pub enum WriterError {
    Io(std::io::Error),
}

impl From<std::io::Error> for WriterError {
    fn from(err: std::io::Error) -> Self {
        WriterError::Io(err)
    }
}

impl std::fmt::Display for WriterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriterError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for WriterError {}

pub struct SummaryCsvWriter {
    writer: BufWriter<File>,
}

impl SummaryCsvWriter {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, WriterError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        log::info!("📝 Writing shooting summary to: {}", path.display());

        Ok(Self { writer: BufWriter::new(file) })
    }

    /// Write the header plus one line per row, FG% with one decimal. No
    /// trailing totals line: the Overall row already is the total.
    pub fn write_summary(&mut self, rows: &[SummaryRow]) -> Result<(), WriterError> {
        writeln!(self.writer, "Zone,Att,Made,FG%")?;
        for row in rows {
            writeln!(self.writer, "{},{},{},{:.1}", row.zone, row.attempts, row.made, row.fg_pct)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart_core::summary::{ZONE_MID_RANGE, ZONE_PAINT_NON_RA, ZONE_RESTRICTED_AREA};

    fn sample_rows() -> Vec<SummaryRow> {
        vec![
            SummaryRow { zone: "Overall", attempts: 3, made: 2, fg_pct: 66.7 },
            SummaryRow { zone: "3PT", attempts: 1, made: 1, fg_pct: 100.0 },
            SummaryRow { zone: "2PT", attempts: 2, made: 1, fg_pct: 50.0 },
            SummaryRow { zone: ZONE_RESTRICTED_AREA, attempts: 1, made: 1, fg_pct: 100.0 },
            SummaryRow { zone: ZONE_PAINT_NON_RA, attempts: 0, made: 0, fg_pct: 0.0 },
            SummaryRow { zone: ZONE_MID_RANGE, attempts: 1, made: 0, fg_pct: 0.0 },
        ]
    }

    #[test]
    fn test_write_summary_exact_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.csv");

        let mut writer = SummaryCsvWriter::create(&path).unwrap();
        writer.write_summary(&sample_rows()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let expected = "Zone,Att,Made,FG%\n\
                        Overall,3,2,66.7\n\
                        3PT,1,1,100.0\n\
                        2PT,2,1,50.0\n\
                        Restricted Area,1,1,100.0\n\
                        In The Paint (Non-RA),0,0,0.0\n\
                        Mid-Range,1,0,0.0\n";
        assert_eq!(written, expected);
    }

    #[test]
    fn test_create_makes_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/summary.csv");

        let mut writer = SummaryCsvWriter::create(&path).unwrap();
        writer.write_summary(&[]).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Zone,Att,Made,FG%\n", "empty input still writes the header");
    }
}
