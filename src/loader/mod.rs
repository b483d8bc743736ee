//! Dataset loaders with download and parquet caching.
//!
//! Wraps the pure parsers with the I/O they need: fetch the source text,
//! parse it off the async runtime, cache the resulting table as parquet
//! and serve the cache on later runs.

pub mod cache;
pub mod fetch;
pub mod writer;

use self::{cache::FrameCache, fetch::Fetcher};

use crate::config::{ErsstConfig, HurdatConfig};
use crate::error::{HurdatError, Result};
use crate::ersst::{self, BoundingBox, SstGrid};
use crate::models::ProcessingStats;
use crate::parser;
use crate::table::TrackTable;

use indicatif::{ProgressBar, ProgressStyle};
use polars::prelude::DataFrame;
use std::path::Path;
use std::time::Instant;
use tokio::task;
use tracing::{info, warn};

/// Loader for the HURDAT2 best-track table
#[derive(Debug)]
pub struct HurdatLoader {
    config: HurdatConfig,
    fetcher: Fetcher,
    cache: FrameCache,
}

impl HurdatLoader {
    pub fn new(config: HurdatConfig) -> Result<Self> {
        config.validate()?;
        let cache = FrameCache::new(config.cache_path());
        Ok(Self {
            config,
            fetcher: Fetcher::new(),
            cache,
        })
    }

    /// Load the merged track table from cache, or download and build it
    pub async fn load(&self) -> Result<(DataFrame, ProcessingStats)> {
        let start_time = Instant::now();

        if self.config.use_cache && self.cache.exists() {
            info!("Reading cached HURDAT2 from {}", self.cache.path().display());
            let cache = self.cache.clone();
            let df = run_blocking(move || cache.read()).await?;
            return Ok(finish(df, true, &self.cache, start_time));
        }

        let url = self.config.source_url();
        info!("Downloading HURDAT2 file - {}", self.config.file_name);
        let text = self.fetcher.fetch_text(&url).await?;

        info!("Processing HURDAT2");
        let cache = self.cache.clone();
        let df = run_blocking(move || {
            let lines = fetch::split_lines(&text);
            let mut df = parser::parse(&lines)?.to_dataframe()?;
            cache.write(&mut df)?;
            Ok(df)
        })
        .await?;

        info!("HURDAT2 complete");
        Ok(finish(df, false, &self.cache, start_time))
    }
}

/// Read a local text file as lines, without the trailing blank line
pub async fn read_lines_from_file(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(HurdatError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = tokio::fs::read_to_string(path).await?;
    Ok(fetch::split_lines(&text))
}

/// Parse a HURDAT2 file already on disk
pub async fn parse_local_file(path: &Path) -> Result<TrackTable> {
    let lines = read_lines_from_file(path).await?;
    info!("Parsing {} lines from {}", lines.len(), path.display());
    run_blocking(move || parser::parse(&lines)).await
}

/// Loader for ERSST sea surface temperature grids
#[derive(Debug)]
pub struct ErsstLoader {
    config: ErsstConfig,
    fetcher: Fetcher,
    cache: FrameCache,
}

impl ErsstLoader {
    pub fn new(config: ErsstConfig) -> Result<Self> {
        config.validate()?;
        let cache = FrameCache::new(config.cache_path());
        Ok(Self {
            config,
            fetcher: Fetcher::new(),
            cache,
        })
    }

    /// Load grids for an inclusive year range, cropped to an optional box.
    ///
    /// A cache hit returns the cached table as-is; the requested years and
    /// box are not checked against it.
    pub async fn load(
        &self,
        year_start: i32,
        year_end: i32,
        bounding_box: Option<BoundingBox>,
    ) -> Result<(DataFrame, ProcessingStats)> {
        let start_time = Instant::now();

        if self.config.use_cache && self.cache.exists() {
            warn!(
                "Reading cached ERSST from {}; requested years and bounding box are ignored",
                self.cache.path().display()
            );
            let cache = self.cache.clone();
            let df = run_blocking(move || cache.read()).await?;
            return Ok(finish(df, true, &self.cache, start_time));
        }

        self.config.validate_years(year_start, year_end)?;

        let years: Vec<i32> = (year_start..=year_end).collect();
        let progress_bar = ProgressBar::new(years.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let mut downloads = Vec::with_capacity(years.len());
        for year in years {
            progress_bar.set_message(format!("Downloading year {}", year));
            let text = self.fetcher.fetch_text(&self.config.year_url(year)).await?;
            downloads.push((year, text));
            progress_bar.inc(1);
        }
        progress_bar.finish_with_message("Downloads complete");

        info!("Processing ERSST data");
        let cache = self.cache.clone();
        let df = run_blocking(move || {
            let mut rows = Vec::new();
            for (year, text) in &downloads {
                rows.extend(ersst::parse_year(text, *year)?);
            }
            let mut df = SstGrid::new(rows, bounding_box.as_ref()).to_dataframe()?;
            cache.write(&mut df)?;
            Ok(df)
        })
        .await?;

        info!("ERSST complete");
        Ok(finish(df, false, &self.cache, start_time))
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| HurdatError::TaskFailed {
            reason: e.to_string(),
        })?
}

fn finish(
    df: DataFrame,
    from_cache: bool,
    cache: &FrameCache,
    start_time: Instant,
) -> (DataFrame, ProcessingStats) {
    let stats = ProcessingStats {
        total_rows: df.height(),
        total_columns: df.width(),
        from_cache,
        cache_path: cache.path().to_path_buf(),
        processing_time_ms: start_time.elapsed().as_millis(),
    };
    (df, stats)
}
