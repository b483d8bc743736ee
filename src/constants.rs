//! Application constants for the HURDAT processor
//!
//! Source locations, format layout constants, sentinel values and
//! classification tables shared by the parsers and loaders.

// =============================================================================
// Source Locations
// =============================================================================

/// NHC directory holding the HURDAT2 best-track releases
pub const HURDAT_BASE_URL: &str = "http://www.nhc.noaa.gov/data/hurdat";

/// HURDAT2 release fetched when none is specified
pub const DEFAULT_HURDAT_FILE: &str = "hurdat2-1851-2016-apr2017.txt";

/// NCEI directory holding the ERSST v5 ASCII year files
pub const ERSST_BASE_URL: &str = "https://www1.ncdc.noaa.gov/pub/data/cmb/ersst/v5/ascii";

/// Application directory name under the user cache directory
pub const CACHE_DIR_NAME: &str = "hurdat-processor";

/// Cached HURDAT2 table stem when the release name has none
pub const HURDAT_CACHE_STEM: &str = "hurdat2";

/// Cached ERSST table filename
pub const ERSST_CACHE_FILENAME: &str = "ersst.parquet";

/// ERSST year file name for a given year
pub fn ersst_file_name(year: i32) -> String {
    format!("ersst.v5.{}.asc", year)
}

// =============================================================================
// HURDAT2 Layout
// =============================================================================

/// Comma-separated field count that identifies a storm header line
pub const HEADER_FIELD_COUNT: usize = 4;

/// Comma-separated field count of a data line, including the trailing empty field
pub const DATA_FIELD_COUNT: usize = 21;

/// Concatenated `YYYYMMDD` + `HHMM` timestamp format
pub const HURDAT_DATETIME_FORMAT: &str = "%Y%m%d%H%M";

/// Placeholder values meaning "not recorded"
pub const MISSING_SENTINELS: &[i32] = &[-99, -999];

/// Saffir-Simpson category thresholds on maximum sustained wind (knots)
pub const CATEGORY_THRESHOLDS: &[(i32, u8)] = &[(137, 5), (113, 4), (96, 3), (83, 2), (64, 1)];

// =============================================================================
// ERSST Grid Layout
// =============================================================================

/// Southernmost latitude band in the grid
pub const ERSST_LAT_START: i32 = -88;

/// Grid spacing in degrees for both axes
pub const ERSST_GRID_STEP: i32 = 2;

/// Latitude bands per line (-88..=88)
pub const ERSST_LAT_COUNT: usize = 89;

/// Longitude lines per month (0..=358)
pub const ERSST_LON_COUNT: usize = 180;

/// Months in a full year file
pub const ERSST_MONTHS: usize = 12;

/// Missing value marker in ERSST files
pub const ERSST_MISSING_VALUE: i32 = -9999;

/// ERSST stores hundredths of a degree Celsius
pub const ERSST_SCALE: f64 = 100.0;
