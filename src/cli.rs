//! Command-line interface components.

use crate::ersst::BoundingBox;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hurdat-processor")]
#[command(about = "Convert NHC HURDAT2 best-track data and ERSST grids into analysis-ready tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download (or read from cache) the HURDAT2 track table
    Hurdat {
        /// HURDAT2 release file name on the NHC server
        #[arg(long)]
        file: Option<String>,

        /// Directory for the cached parquet table
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Ignore and overwrite any cached table
        #[arg(long)]
        no_cache: bool,

        /// Export the table (.csv or .parquet)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a local HURDAT2 text file
    Parse {
        /// Path to the HURDAT2 file
        #[arg(value_name = "HURDAT_FILE")]
        input: PathBuf,

        /// Export the table (.csv or .parquet)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Download (or read from cache) ERSST sea surface temperatures
    Ersst {
        /// First year to download
        #[arg(long)]
        start: i32,

        /// Last year to download (inclusive)
        #[arg(long)]
        end: i32,

        /// Crop to top_lat,left_lon,bottom_lat,right_lon (longitude 0-358 eastward)
        #[arg(long, allow_hyphen_values = true)]
        bbox: Option<BoundingBox>,

        /// Directory for the cached parquet table
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Ignore and overwrite any cached table
        #[arg(long)]
        no_cache: bool,

        /// Export the table (.csv or .parquet)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Args {
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hurdat_processor={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Command execution
pub mod commands {
    use super::{Args, Command};
    use crate::config::{ErsstConfig, HurdatConfig};
    use crate::loader::{self, ErsstLoader, HurdatLoader, writer::write_frame};
    use crate::models::ProcessingStats;
    use anyhow::{Context, Result};
    use colored::*;
    use polars::prelude::DataFrame;
    use std::path::Path;

    pub async fn run(args: Args) -> Result<()> {
        let Some(command) = args.command else {
            return Ok(());
        };

        match command {
            Command::Hurdat {
                file,
                cache_dir,
                no_cache,
                output,
            } => {
                let mut config = HurdatConfig::default();
                if let Some(file) = file {
                    config = config.with_file_name(file);
                }
                if let Some(cache_dir) = cache_dir {
                    config = config.with_cache_dir(cache_dir);
                }
                if no_cache {
                    config = config.without_cache();
                }

                let loader = HurdatLoader::new(config)?;
                let (mut df, stats) = loader.load().await.context("Failed to load HURDAT2")?;
                report_hurdat(&df, &stats)?;
                export(&mut df, output.as_deref())
            }
            Command::Parse { input, output } => {
                let table = loader::parse_local_file(&input)
                    .await
                    .with_context(|| format!("Failed to parse {}", input.display()))?;
                let mut df = table.to_dataframe()?;

                println!("{}", "HURDAT2 parsed".bright_green().bold());
                println!(
                    "  {} {}",
                    "Track records:".bright_cyan(),
                    table.len().to_string().bright_white().bold()
                );
                println!(
                    "  {} {}",
                    "Storms:".bright_cyan(),
                    table.aggregates().len().to_string().bright_white().bold()
                );
                export(&mut df, output.as_deref())
            }
            Command::Ersst {
                start,
                end,
                bbox,
                cache_dir,
                no_cache,
                output,
            } => {
                let mut config = ErsstConfig::default();
                if let Some(cache_dir) = cache_dir {
                    config = config.with_cache_dir(cache_dir);
                }
                if no_cache {
                    config = config.without_cache();
                }

                let loader = ErsstLoader::new(config)?;
                let (mut df, stats) = loader
                    .load(start, end, bbox)
                    .await
                    .context("Failed to load ERSST")?;
                report_stats("ERSST", &stats);
                export(&mut df, output.as_deref())
            }
        }
    }

    fn report_hurdat(df: &DataFrame, stats: &ProcessingStats) -> Result<()> {
        report_stats("HURDAT2", stats);

        let storms = df
            .column("entity_code")?
            .as_materialized_series()
            .n_unique()?;

        println!(
            "  {} {}",
            "Storms:".bright_cyan(),
            storms.to_string().bright_white().bold()
        );
        if let Some((name, code, wind)) = strongest_storm(df)? {
            println!(
                "  {} {} ({}) {} kt",
                "Strongest storm:".bright_cyan(),
                name.bright_white().bold(),
                code,
                wind.to_string().bright_white()
            );
        }
        Ok(())
    }

    /// Name, code and peak wind of the storm with the highest aggregate wind
    fn strongest_storm(df: &DataFrame) -> Result<Option<(String, String, i32)>> {
        let winds = df.column("agg_max_wind")?.as_materialized_series().i32()?;
        let names = df.column("entity_name")?.as_materialized_series().str()?;
        let codes = df.column("entity_code")?.as_materialized_series().str()?;

        let strongest = winds
            .into_iter()
            .zip(names.into_iter().zip(codes.into_iter()))
            .filter_map(|(wind, (name, code))| Some((wind?, name?, code?)))
            .max_by_key(|(wind, _, _)| *wind)
            .map(|(wind, name, code)| (name.to_string(), code.to_string(), wind));

        Ok(strongest)
    }

    fn report_stats(label: &str, stats: &ProcessingStats) {
        let source = if stats.from_cache { "cache" } else { "download" };
        println!(
            "\n{} {}",
            format!("{} Summary", label).bright_green().bold(),
            format!("(from {})", source).bright_black()
        );
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
        println!(
            "  {} {} x {}",
            "Rows x columns:".bright_cyan(),
            stats.total_rows.to_string().bright_white().bold(),
            stats.total_columns.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Cache:".bright_cyan(),
            stats.cache_path.display()
        );
    }

    fn export(df: &mut DataFrame, output: Option<&Path>) -> Result<()> {
        if let Some(path) = output {
            write_frame(df, path).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("  {} {}", "Output:".bright_cyan(), path.display());
        }
        Ok(())
    }
}
