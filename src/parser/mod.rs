//! HURDAT2 track parser.
//!
//! Turns the lines of a HURDAT2 file into an immutable [`TrackTable`]:
//! every observation line is attributed to the storm header above it,
//! decoded positionally, and joined with the aggregate of its storm.
//!
//! The parse is all-or-nothing. The first malformed line aborts it with
//! the line number and raw content; no partial table is produced.

pub mod aggregate;
pub mod fields;

#[cfg(test)]
pub mod tests;

use self::aggregate::aggregate_by_entity;
use self::fields::{FieldResult, parse_coordinate, parse_measurement, parse_status, parse_timestamp};

use crate::constants::DATA_FIELD_COUNT;
use crate::error::{HurdatError, Result};
use crate::header::{RawLine, StormHeader};
use crate::models::{TrackRecord, WindRadii};
use crate::table::TrackTable;

use tracing::{debug, warn};

/// Names of the twelve wind radius fields, in field order, for error messages
const WIND_FIELD_NAMES: [&str; 12] = [
    "wind_34kt_ne",
    "wind_34kt_se",
    "wind_34kt_sw",
    "wind_34kt_nw",
    "wind_50kt_ne",
    "wind_50kt_se",
    "wind_50kt_sw",
    "wind_50kt_nw",
    "wind_64kt_ne",
    "wind_64kt_se",
    "wind_64kt_sw",
    "wind_64kt_nw",
];

/// Scan accumulator threaded through the fold over input lines
#[derive(Debug, Default)]
struct ScanState {
    current: Option<OpenStorm>,
    records: Vec<TrackRecord>,
}

/// The storm whose observations are currently being read
#[derive(Debug)]
struct OpenStorm {
    header: StormHeader,
    header_line: usize,
    observed: usize,
}

impl ScanState {
    fn step(mut self, line_number: usize, line: &str) -> Result<Self> {
        match RawLine::classify(line, line_number)? {
            RawLine::Header(header) => {
                self.close_storm();
                self.current = Some(OpenStorm {
                    header,
                    header_line: line_number,
                    observed: 0,
                });
            }
            RawLine::Data(fields) => {
                let storm = self.current.as_mut().ok_or_else(|| {
                    HurdatError::malformed(line_number, line, "data line before any storm header")
                })?;
                let record = decode_record(&storm.header, &fields, line_number, line)?;
                storm.observed += 1;
                self.records.push(record);
            }
        }
        Ok(self)
    }

    /// Compare the finished storm's observation count with its header
    fn close_storm(&mut self) {
        if let Some(storm) = self.current.take() {
            if storm.observed != storm.header.record_count {
                warn!(
                    "Storm {} (line {}) declares {} records but {} followed",
                    storm.header.code,
                    storm.header_line,
                    storm.header.record_count,
                    storm.observed
                );
            }
        }
    }
}

/// Parse HURDAT2 lines into the merged track table
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<TrackTable> {
    if lines.is_empty() {
        return Err(HurdatError::EmptyInput);
    }

    let mut state = lines
        .iter()
        .enumerate()
        .try_fold(ScanState::default(), |state, (index, line)| {
            state.step(index + 1, line.as_ref())
        })?;
    state.close_storm();

    let (aggregates, record_index) = aggregate_by_entity(&state.records);

    debug!(
        "Parsed {} track records for {} storms from {} lines",
        state.records.len(),
        aggregates.len(),
        lines.len()
    );

    Ok(TrackTable::new(state.records, aggregates, record_index))
}

/// Decode the trimmed fields of one observation line
fn decode_record(
    header: &StormHeader,
    fields: &[&str],
    line_number: usize,
    line: &str,
) -> Result<TrackRecord> {
    if fields.len() != DATA_FIELD_COUNT {
        return Err(HurdatError::malformed(
            line_number,
            line,
            format!("expected {} fields, found {}", DATA_FIELD_COUNT, fields.len()),
        ));
    }
    if !fields[DATA_FIELD_COUNT - 1].is_empty() {
        return Err(HurdatError::malformed(
            line_number,
            line,
            "line does not end with a trailing comma",
        ));
    }

    decode_fields(header, fields).map_err(|e| e.at_line(line_number, line))
}

fn decode_fields(header: &StormHeader, fields: &[&str]) -> FieldResult<TrackRecord> {
    let timestamp = parse_timestamp(fields[0], fields[1])?;
    let status = parse_status(fields[3])?;
    let latitude = parse_coordinate(fields[4])?;
    let longitude = parse_coordinate(fields[5])?;
    let max_wind = parse_measurement("max_wind", fields[6])?;
    let min_pressure = parse_measurement("min_pressure", fields[7])?;

    let mut radii = [None; 12];
    for (slot, (name, value)) in radii
        .iter_mut()
        .zip(WIND_FIELD_NAMES.iter().zip(&fields[8..20]))
    {
        *slot = parse_measurement(name, value)?;
    }

    Ok(TrackRecord {
        entity_code: header.code.clone(),
        entity_name: header.name.clone(),
        record_identifier: fields[2].to_string(),
        status,
        latitude,
        longitude,
        max_wind,
        min_pressure,
        wind_radii: WindRadii::from_field_order(radii),
        timestamp,
    })
}
