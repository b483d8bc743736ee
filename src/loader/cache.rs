//! On-disk parquet cache for processed tables.

use crate::error::Result;
use polars::prelude::{DataFrame, ParquetReader, ParquetWriter, SerReader};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FrameCache {
    path: PathBuf,
}

impl FrameCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn read(&self) -> Result<DataFrame> {
        let file = File::open(&self.path)?;
        let df = ParquetReader::new(file).finish()?;
        debug!("Read {} cached rows from {}", df.height(), self.path.display());
        Ok(df)
    }

    /// Write the frame, creating the cache directory if needed
    pub fn write(&self, df: &mut DataFrame) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        ParquetWriter::new(file).finish(df)?;
        debug!("Cached {} rows at {}", df.height(), self.path.display());
        Ok(())
    }
}
