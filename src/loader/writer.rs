//! Export of processed tables to CSV or parquet, chosen by file extension.

use crate::error::{HurdatError, Result};
use polars::prelude::{CsvWriter, DataFrame, ParquetWriter, SerWriter};
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(OutputFormat::Csv),
            "parquet" | "pq" => Some(OutputFormat::Parquet),
            _ => None,
        }
    }
}

/// Write a frame to `path`, creating parent directories as needed
pub fn write_frame(df: &mut DataFrame, path: &Path) -> Result<()> {
    let format = OutputFormat::from_path(path).ok_or_else(|| HurdatError::UnsupportedOutput {
        path: path.to_path_buf(),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    match format {
        OutputFormat::Csv => {
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        OutputFormat::Parquet => {
            ParquetWriter::new(file).finish(df)?;
        }
    }

    info!("Wrote {} rows to {}", df.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a/b.csv")), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_path(Path::new("b.PARQUET")), Some(OutputFormat::Parquet));
        assert_eq!(OutputFormat::from_path(Path::new("b.json")), None);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_write_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("tracks.csv");
        let mut df = df!("entity_code" => ["AL012016"], "max_wind" => [40]).unwrap();

        write_frame(&mut df, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("entity_code,max_wind"));
        assert!(contents.contains("AL012016,40"));
    }

    #[test]
    fn test_unsupported_extension() {
        let temp_dir = TempDir::new().unwrap();
        let mut df = df!("a" => [1]).unwrap();
        let result = write_frame(&mut df, &temp_dir.path().join("tracks.json"));
        assert!(matches!(result, Err(HurdatError::UnsupportedOutput { .. })));
    }
}
