//! Scenario tests for the HURDAT2 track parser
//!
//! Exercises the complete parse using small hand-written HURDAT2 extracts.

pub mod error_handling;

/// Blank wind radii block: twelve sentinel values and the trailing comma
pub const NO_RADII: &str =
    "-999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,";

/// The three ALBERTO (2016) observations used across tests
pub fn alberto_lines() -> Vec<String> {
    vec![
        "AL012016,            ALBERTO,     3,".to_string(),
        format!("20160606, 1800,  , TD, 25.4N,  80.1W,  30, 1006, {}", NO_RADII),
        format!("20160607, 0000,  , TD, 25.6N,  80.3W,  35, 1005, {}", NO_RADII),
        format!("20160607, 0600,  , TS, 25.8N,  80.6W,  40, 1004, {}", NO_RADII),
    ]
}

/// A data line with a given status, wind and pressure
pub fn observation(status: &str, wind: i32, pressure: i32) -> String {
    format!(
        "20160901, 1200,  , {}, 20.0N,  60.0W, {:>3}, {:>4}, {}",
        status, wind, pressure, NO_RADII
    )
}
