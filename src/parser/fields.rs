//! Field parsing utilities for HURDAT2 observation lines
//!
//! Each helper interprets one already-trimmed field. Failures are reported
//! as [`FieldError`] and converted to a line-level error by the caller, which
//! knows the line number and raw content.

use crate::constants::{HURDAT_DATETIME_FORMAT, MISSING_SENTINELS};
use crate::error::HurdatError;
use crate::models::{Hemisphere, StormStatus};
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("invalid date/time '{date}' '{time}' (expected YYYYMMDD and HHMM)")]
    DateTime { date: String, time: String },

    #[error("invalid coordinate '{0}'")]
    Coordinate(String),

    #[error("invalid hemisphere '{hemisphere}' in coordinate '{value}'")]
    Hemisphere { value: String, hemisphere: char },

    #[error("invalid numeric value '{value}' for {field}")]
    Numeric { field: &'static str, value: String },

    #[error("unknown status code '{0}'")]
    UnknownStatus(String),
}

impl FieldError {
    /// Attach line context, keeping unknown status codes distinct
    pub fn at_line(self, line: usize, content: &str) -> HurdatError {
        match self {
            FieldError::UnknownStatus(code) => HurdatError::UnknownStatusCode {
                line,
                code,
                content: content.to_string(),
            },
            other => HurdatError::malformed(line, content, other.to_string()),
        }
    }
}

pub type FieldResult<T> = std::result::Result<T, FieldError>;

/// Parse the `YYYYMMDD` and `HHMM` fields into a single timestamp
pub fn parse_timestamp(date: &str, time: &str) -> FieldResult<NaiveDateTime> {
    let invalid = || FieldError::DateTime {
        date: date.to_string(),
        time: time.to_string(),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if date.len() != 8 || time.len() != 4 || !all_digits(date) || !all_digits(time) {
        return Err(invalid());
    }

    NaiveDateTime::parse_from_str(&format!("{}{}", date, time), HURDAT_DATETIME_FORMAT)
        .map_err(|_| invalid())
}

/// Map a status code onto its severity ordering
pub fn parse_status(code: &str) -> FieldResult<StormStatus> {
    StormStatus::from_code(code).ok_or_else(|| FieldError::UnknownStatus(code.to_string()))
}

/// Convert `"<magnitude><hemisphere>"` to signed decimal degrees
pub fn parse_coordinate(value: &str) -> FieldResult<f64> {
    let hemisphere_char = value
        .chars()
        .last()
        .ok_or_else(|| FieldError::Coordinate(value.to_string()))?;

    let hemisphere =
        Hemisphere::from_char(hemisphere_char).ok_or_else(|| FieldError::Hemisphere {
            value: value.to_string(),
            hemisphere: hemisphere_char,
        })?;

    let magnitude = value[..value.len() - hemisphere_char.len_utf8()].trim();
    if !is_unsigned_decimal(magnitude) {
        return Err(FieldError::Coordinate(value.to_string()));
    }
    let magnitude = magnitude
        .parse::<f64>()
        .map_err(|_| FieldError::Coordinate(value.to_string()))?;

    Ok(magnitude * hemisphere.sign())
}

/// Digits with at most one decimal point; no sign, exponent or words
fn is_unsigned_decimal(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_digit())
        && text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && text.bytes().filter(|&b| b == b'.').count() <= 1
}

/// Parse a wind or pressure measurement; sentinels and blanks are missing
pub fn parse_measurement(field: &'static str, value: &str) -> FieldResult<Option<i32>> {
    if value.is_empty() {
        return Ok(None);
    }

    let parsed = value.parse::<i32>().map_err(|_| FieldError::Numeric {
        field,
        value: value.to_string(),
    })?;

    if MISSING_SENTINELS.contains(&parsed) {
        Ok(None)
    } else {
        Ok(Some(parsed))
    }
}
