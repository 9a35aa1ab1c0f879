use crate::core::export::{self, OutputFormat};
use crate::domain::model::HolidayRow;
use crate::utils::error::Result;
use std::fs;
use std::io::{self, BufWriter};
use std::path::Path;

/// Where the generated rows go: a local file or standard output.
#[derive(Debug, Clone)]
pub struct LocalOutput {
    path: Option<String>,
    format: OutputFormat,
}

impl LocalOutput {
    pub fn new(path: Option<String>, format: OutputFormat) -> Self {
        Self { path, format }
    }

    pub fn describe(&self) -> &str {
        self.path.as_deref().unwrap_or("<stdout>")
    }

    pub fn write(&self, rows: &[HolidayRow]) -> Result<()> {
        match &self.path {
            Some(path) => {
                let full_path = Path::new(path);
                if let Some(parent) = full_path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                let file = fs::File::create(full_path)?;
                export::write_rows(BufWriter::new(file), rows, self.format)
            }
            None => export::write_rows(io::stdout().lock(), rows, self.format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out/holidays.csv");
        let output = LocalOutput::new(Some(path.to_string_lossy().into_owned()), OutputFormat::Csv);

        let rows = vec![HolidayRow {
            country: "PK".to_string(),
            ds: NaiveDate::from_ymd_opt(2024, 3, 23).unwrap(),
            holiday: "Pakistan Day".to_string(),
        }];
        output.write(&rows).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "country,ds,holiday\nPK,2024-03-23,Pakistan Day\n");
    }
}
