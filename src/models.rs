//! Core data structures for HURDAT processing.
//!
//! Defines storm status codes, wind radius layout, the per-observation
//! track record, per-storm aggregates and processing statistics.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::CATEGORY_THRESHOLDS;

/// Storm classification codes in ascending severity; the discriminant is the rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StormStatus {
    /// Disturbance
    Db = 0,
    /// Tropical wave
    Wv = 1,
    /// Low
    Lo = 2,
    /// Extratropical cyclone
    Ex = 3,
    /// Subtropical depression
    Sd = 4,
    /// Subtropical storm
    Ss = 5,
    /// Tropical depression
    Td = 6,
    /// Tropical storm
    Ts = 7,
    /// Hurricane
    Hu = 8,
}

impl StormStatus {
    /// Severity ordering; a status's rank is its index here
    pub const ORDERED: [StormStatus; 9] = [
        StormStatus::Db,
        StormStatus::Wv,
        StormStatus::Lo,
        StormStatus::Ex,
        StormStatus::Sd,
        StormStatus::Ss,
        StormStatus::Td,
        StormStatus::Ts,
        StormStatus::Hu,
    ];

    /// Look up a status from its two-letter code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ORDERED.into_iter().find(|status| status.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            StormStatus::Db => "DB",
            StormStatus::Wv => "WV",
            StormStatus::Lo => "LO",
            StormStatus::Ex => "EX",
            StormStatus::Sd => "SD",
            StormStatus::Ss => "SS",
            StormStatus::Td => "TD",
            StormStatus::Ts => "TS",
            StormStatus::Hu => "HU",
        }
    }

    /// Ordinal position in the severity ordering
    pub fn rank(&self) -> i32 {
        *self as i32
    }
}

/// Compass hemisphere suffix on a HURDAT2 coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::South | Hemisphere::West => -1.0,
            Hemisphere::North | Hemisphere::East => 1.0,
        }
    }
}

/// Wind speed thresholds for which quadrant radii are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindSpeed {
    Kt34,
    Kt50,
    Kt64,
}

impl WindSpeed {
    pub const ALL: [WindSpeed; 3] = [WindSpeed::Kt34, WindSpeed::Kt50, WindSpeed::Kt64];

    pub fn knots(&self) -> u32 {
        match self {
            WindSpeed::Kt34 => 34,
            WindSpeed::Kt50 => 50,
            WindSpeed::Kt64 => 64,
        }
    }

    fn index(&self) -> usize {
        match self {
            WindSpeed::Kt34 => 0,
            WindSpeed::Kt50 => 1,
            WindSpeed::Kt64 => 2,
        }
    }
}

/// Compass quadrants in HURDAT2 field order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Ne,
    Se,
    Sw,
    Nw,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::Ne, Quadrant::Se, Quadrant::Sw, Quadrant::Nw];

    pub fn suffix(&self) -> &'static str {
        match self {
            Quadrant::Ne => "ne",
            Quadrant::Se => "se",
            Quadrant::Sw => "sw",
            Quadrant::Nw => "nw",
        }
    }

    fn index(&self) -> usize {
        match self {
            Quadrant::Ne => 0,
            Quadrant::Se => 1,
            Quadrant::Sw => 2,
            Quadrant::Nw => 3,
        }
    }
}

/// Quadrant wind radii (nautical miles) for the three speed thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindRadii {
    values: [[Option<i32>; 4]; 3],
}

impl WindRadii {
    /// Build from the twelve values in field order (34kt NE..NW, 50kt, 64kt)
    pub fn from_field_order(values: [Option<i32>; 12]) -> Self {
        let mut radii = Self::default();
        for (i, value) in values.into_iter().enumerate() {
            radii.values[i / 4][i % 4] = value;
        }
        radii
    }

    pub fn get(&self, speed: WindSpeed, quadrant: Quadrant) -> Option<i32> {
        self.values[speed.index()][quadrant.index()]
    }

    fn set(&mut self, speed: WindSpeed, quadrant: Quadrant, value: Option<i32>) {
        self.values[speed.index()][quadrant.index()] = value;
    }

    /// Largest radius across the four quadrants of one speed threshold
    pub fn max_across_quadrants(&self, speed: WindSpeed) -> Option<i32> {
        self.values[speed.index()].iter().flatten().copied().max()
    }

    /// Element-wise maximum, skipping missing values
    pub fn merge_max(&self, other: &WindRadii) -> WindRadii {
        let mut merged = *self;
        for speed in WindSpeed::ALL {
            for quadrant in Quadrant::ALL {
                let value = max_present(self.get(speed, quadrant), other.get(speed, quadrant));
                merged.set(speed, quadrant, value);
            }
        }
        merged
    }
}

/// Saffir-Simpson category for a maximum sustained wind in knots
pub fn wind_category(max_wind: Option<i32>) -> Option<u8> {
    let wind = max_wind?;
    CATEGORY_THRESHOLDS
        .iter()
        .find(|(threshold, _)| wind >= *threshold)
        .map(|(_, category)| *category)
}

pub(crate) fn max_present<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

pub(crate) fn min_present<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// One best-track observation attributed to its storm
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub entity_code: String,
    pub entity_name: String,
    pub record_identifier: String,
    pub status: StormStatus,
    pub latitude: f64,
    pub longitude: f64,
    pub max_wind: Option<i32>,
    pub min_pressure: Option<i32>,
    pub wind_radii: WindRadii,
    pub timestamp: NaiveDateTime,
}

impl TrackRecord {
    pub fn status_code(&self) -> &'static str {
        self.status.code()
    }

    pub fn status_rank(&self) -> i32 {
        self.status.rank()
    }

    pub fn status_category(&self) -> Option<u8> {
        wind_category(self.max_wind)
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }
}

/// Peak values over every observation of one storm
#[derive(Debug, Clone, PartialEq)]
pub struct EntityAggregate {
    pub entity_code: String,
    pub max_wind: Option<i32>,
    pub wind_radii: WindRadii,
    pub min_pressure: Option<i32>,
    pub status_category: Option<u8>,
}

impl EntityAggregate {
    /// Largest aggregate radius across the four quadrants of a speed threshold
    pub fn max_wind_total(&self, speed: WindSpeed) -> Option<i32> {
        self.wind_radii.max_across_quadrants(speed)
    }
}

/// Processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub total_rows: usize,
    pub total_columns: usize,
    pub from_cache: bool,
    pub cache_path: PathBuf,
    pub processing_time_ms: u128,
}
