//! ERSST v5 ASCII grid parsing.
//!
//! Each year file holds twelve monthly 2° grids. A grid is 180 lines, one
//! per longitude (0..=358 eastward), each carrying 89 whitespace-separated
//! values for latitudes -88..=88. Values are hundredths of a degree
//! Celsius with -9999 marking land or missing data.

use crate::constants::{
    ERSST_GRID_STEP, ERSST_LAT_COUNT, ERSST_LAT_START, ERSST_LON_COUNT, ERSST_MISSING_VALUE,
    ERSST_MONTHS, ERSST_SCALE,
};
use crate::error::{HurdatError, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// One longitude line of one month's grid
#[derive(Debug, Clone, PartialEq)]
pub struct SstRow {
    pub year: i32,
    pub month: u32,
    pub lon: i32,
    /// Temperature in °C per latitude band, south to north
    pub values: Vec<Option<f64>>,
}

/// Latitude bands covered by a full grid line
pub fn latitudes() -> Vec<i32> {
    (0..ERSST_LAT_COUNT as i32)
        .map(|i| ERSST_LAT_START + i * ERSST_GRID_STEP)
        .collect()
}

/// Parse one year file into rows ordered by month then longitude
pub fn parse_year(text: &str, year: i32) -> Result<Vec<SstRow>> {
    let expected_lines = ERSST_LON_COUNT * ERSST_MONTHS;
    let mut rows = Vec::with_capacity(expected_lines);

    for (index, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let malformed = |reason: String| HurdatError::MalformedGrid {
            year,
            line: index + 1,
            reason,
        };

        if tokens.len() != ERSST_LAT_COUNT {
            return Err(malformed(format!(
                "expected {} values, found {}",
                ERSST_LAT_COUNT,
                tokens.len()
            )));
        }
        if rows.len() == expected_lines {
            return Err(malformed(format!(
                "more than {} grid lines",
                expected_lines
            )));
        }

        let values = tokens
            .iter()
            .map(|token| {
                token
                    .parse::<i32>()
                    .map(scale_value)
                    .map_err(|_| malformed(format!("invalid value '{}'", token)))
            })
            .collect::<Result<Vec<_>>>()?;

        let position = rows.len();
        rows.push(SstRow {
            year,
            month: (position / ERSST_LON_COUNT) as u32 + 1,
            lon: (position % ERSST_LON_COUNT) as i32 * ERSST_GRID_STEP,
            values,
        });
    }

    if rows.len() != expected_lines {
        return Err(HurdatError::MalformedGrid {
            year,
            line: text.lines().count(),
            reason: format!(
                "expected {} grid lines, found {}",
                expected_lines,
                rows.len()
            ),
        });
    }

    debug!("Parsed {} ERSST grid lines for {}", rows.len(), year);
    Ok(rows)
}

fn scale_value(raw: i32) -> Option<f64> {
    if raw == ERSST_MISSING_VALUE {
        None
    } else {
        Some(raw as f64 / ERSST_SCALE)
    }
}

/// Region of interest given as top-left and bottom-right (lat, lon) corners.
///
/// Longitude runs 0..=358 eastward, so a box around the North Atlantic is
/// roughly `(70, 250)` to `(0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub top_left: (i32, i32),
    pub bottom_right: (i32, i32),
}

impl BoundingBox {
    pub fn contains_lat(&self, lat: i32) -> bool {
        lat <= self.top_left.0 && lat >= self.bottom_right.0
    }

    pub fn contains_lon(&self, lon: i32) -> bool {
        lon >= self.top_left.1 && lon <= self.bottom_right.1
    }
}

impl FromStr for BoundingBox {
    type Err = String;

    /// Parse `top_lat,left_lon,bottom_lat,right_lon`
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid bounding box '{}': {}", s, e))?;

        match parts.as_slice() {
            [top, left, bottom, right] => {
                if bottom > top || left > right {
                    return Err(format!(
                        "invalid bounding box '{}': corners are out of order",
                        s
                    ));
                }
                Ok(BoundingBox {
                    top_left: (*top, *left),
                    bottom_right: (*bottom, *right),
                })
            }
            _ => Err(format!(
                "invalid bounding box '{}': expected top_lat,left_lon,bottom_lat,right_lon",
                s
            )),
        }
    }
}

/// Sea surface temperatures for a set of years, optionally cropped
#[derive(Debug, Clone, PartialEq)]
pub struct SstGrid {
    latitudes: Vec<i32>,
    rows: Vec<SstRow>,
}

impl SstGrid {
    /// Build a grid from parsed rows, keeping only what the box covers
    pub fn new(rows: Vec<SstRow>, bounding_box: Option<&BoundingBox>) -> Self {
        let all_latitudes = latitudes();

        let Some(bbox) = bounding_box else {
            return Self {
                latitudes: all_latitudes,
                rows,
            };
        };

        let keep: Vec<usize> = all_latitudes
            .iter()
            .enumerate()
            .filter(|(_, lat)| bbox.contains_lat(**lat))
            .map(|(i, _)| i)
            .collect();

        let rows = rows
            .into_iter()
            .filter(|row| bbox.contains_lon(row.lon))
            .map(|row| SstRow {
                values: keep.iter().map(|&i| row.values[i]).collect(),
                ..row
            })
            .collect();

        Self {
            latitudes: keep.iter().map(|&i| all_latitudes[i]).collect(),
            rows,
        }
    }

    pub fn latitudes(&self) -> &[i32] {
        &self.latitudes
    }

    pub fn rows(&self) -> &[SstRow] {
        &self.rows
    }

    /// One column per latitude band, then `year`, `month`, `lon`
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = self
            .latitudes
            .iter()
            .enumerate()
            .map(|(i, lat)| {
                let values: Vec<Option<f64>> = self.rows.iter().map(|row| row.values[i]).collect();
                Column::new(lat.to_string().into(), values)
            })
            .collect();

        let years: Vec<i32> = self.rows.iter().map(|row| row.year).collect();
        let months: Vec<i32> = self.rows.iter().map(|row| row.month as i32).collect();
        let lons: Vec<i32> = self.rows.iter().map(|row| row.lon).collect();
        columns.push(Column::new("year".into(), years));
        columns.push(Column::new("month".into(), months));
        columns.push(Column::new("lon".into(), lons));

        DataFrame::new(columns)
    }
}
