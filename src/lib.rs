//! HURDAT Processor Library
//!
//! A Rust library for turning NOAA hurricane and ocean data into
//! analysis-ready tables.
//!
//! This library provides tools for:
//! - Parsing the HURDAT2 best-track text format into typed track records
//! - Deriving storm status rank, wind category and per-storm peak values
//! - Rendering the merged track table as a Polars DataFrame
//! - Parsing ERSST v5 sea surface temperature grids with region cropping
//! - Downloading source files and caching processed tables as Parquet

pub mod cli;
pub mod config;
pub mod constants;
pub mod ersst;
pub mod error;
pub mod header;
pub mod loader;
pub mod models;
pub mod parser;
pub mod schema;
pub mod table;

// Re-export commonly used types
pub use error::{HurdatError, Result};
pub use models::{EntityAggregate, StormStatus, TrackRecord};
pub use parser::parse;
pub use table::{TrackRow, TrackTable};
