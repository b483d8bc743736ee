//! Configuration management and validation.
//!
//! Provides configuration structures for the HURDAT2 and ERSST loaders:
//! where to download from, where to cache, and whether a cached table may
//! be reused.

use crate::constants::{
    CACHE_DIR_NAME, DEFAULT_HURDAT_FILE, ERSST_BASE_URL, ERSST_CACHE_FILENAME,
    HURDAT_BASE_URL, HURDAT_CACHE_STEM,
};
use crate::error::{HurdatError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default cache directory under the user cache directory, or `./cache`
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join(CACHE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("cache"))
}

/// Configuration for loading the HURDAT2 best-track table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HurdatConfig {
    /// Directory URL holding the HURDAT2 releases
    pub base_url: String,

    /// Release file name within `base_url`
    pub file_name: String,

    /// Directory for the cached parquet table
    pub cache_dir: PathBuf,

    /// Reuse the cached table when present
    pub use_cache: bool,
}

impl Default for HurdatConfig {
    fn default() -> Self {
        Self {
            base_url: HURDAT_BASE_URL.to_string(),
            file_name: DEFAULT_HURDAT_FILE.to_string(),
            cache_dir: default_cache_dir(),
            use_cache: true,
        }
    }
}

impl HurdatConfig {
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: PathBuf) -> Self {
        self.cache_dir = cache_dir;
        self
    }

    /// Always download and rebuild, overwriting any cached table
    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }

    pub fn source_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.file_name)
    }

    /// Cached table for this release, e.g. `hurdat2-1851-2016-apr2017.parquet`
    pub fn cache_path(&self) -> PathBuf {
        let stem = Path::new(&self.file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(HURDAT_CACHE_STEM);
        self.cache_dir.join(format!("{}.parquet", stem))
    }

    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.base_url)?;
        if self.file_name.trim().is_empty() {
            return Err(HurdatError::configuration("HURDAT2 file name is empty"));
        }
        Ok(())
    }
}

/// Configuration for loading ERSST sea surface temperature grids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErsstConfig {
    /// Directory URL holding the ERSST v5 ASCII year files
    pub base_url: String,

    /// Directory for the cached parquet table
    pub cache_dir: PathBuf,

    /// Reuse the cached table when present (request parameters are then ignored)
    pub use_cache: bool,
}

impl Default for ErsstConfig {
    fn default() -> Self {
        Self {
            base_url: ERSST_BASE_URL.to_string(),
            cache_dir: default_cache_dir(),
            use_cache: true,
        }
    }
}

impl ErsstConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_cache_dir(mut self, cache_dir: PathBuf) -> Self {
        self.cache_dir = cache_dir;
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }

    pub fn year_url(&self, year: i32) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            crate::constants::ersst_file_name(year)
        )
    }

    pub fn cache_path(&self) -> PathBuf {
        self.cache_dir.join(ERSST_CACHE_FILENAME)
    }

    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.base_url)
    }

    /// Check an inclusive year range before downloading anything
    pub fn validate_years(&self, year_start: i32, year_end: i32) -> Result<()> {
        if year_start > year_end {
            return Err(HurdatError::configuration(format!(
                "ERSST start year {} is after end year {}",
                year_start, year_end
            )));
        }
        Ok(())
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    if base_url.starts_with("http://") || base_url.starts_with("https://") {
        Ok(())
    } else {
        Err(HurdatError::configuration(format!(
            "base URL must be http(s): '{}'",
            base_url
        )))
    }
}
