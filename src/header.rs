//! HURDAT2 line classification and storm header parsing.
//!
//! A HURDAT2 file interleaves storm header lines with the observation
//! lines that belong to them. The layout tells the two apart purely by
//! comma-separated field count: four fields is a header, anything else
//! is an observation.

use crate::constants::HEADER_FIELD_COUNT;
use crate::error::{HurdatError, Result};

/// Storm identity taken from a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StormHeader {
    pub code: String,
    pub name: String,
    pub record_count: usize,
}

/// One classified input line
#[derive(Debug, Clone, PartialEq)]
pub enum RawLine<'a> {
    Header(StormHeader),
    Data(Vec<&'a str>),
}

impl<'a> RawLine<'a> {
    /// Classify a line by field count and trim its fields
    pub fn classify(line: &'a str, line_number: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();

        if fields.len() == HEADER_FIELD_COUNT {
            parse_header(&fields, line, line_number).map(RawLine::Header)
        } else {
            Ok(RawLine::Data(fields))
        }
    }
}

fn parse_header(fields: &[&str], line: &str, line_number: usize) -> Result<StormHeader> {
    let code = fields[0];
    if code.is_empty() {
        return Err(HurdatError::malformed(
            line_number,
            line,
            "header line has an empty storm code",
        ));
    }

    let record_count = fields[2].parse::<usize>().map_err(|_| {
        HurdatError::malformed(
            line_number,
            line,
            format!("invalid header record count '{}'", fields[2]),
        )
    })?;

    Ok(StormHeader {
        code: code.to_string(),
        name: fields[1].to_string(),
        record_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line_classification() {
        let line = "AL012016,            ALBERTO,     3,";
        match RawLine::classify(line, 1).unwrap() {
            RawLine::Header(header) => {
                assert_eq!(header.code, "AL012016");
                assert_eq!(header.name, "ALBERTO");
                assert_eq!(header.record_count, 3);
            }
            other => panic!("Expected header, got {:?}", other),
        }
    }

    #[test]
    fn test_data_line_fields_are_trimmed() {
        let line = "20160606, 1800,  , TD, 25.4N,  80.1W,  30, 1006,";
        match RawLine::classify(line, 2).unwrap() {
            RawLine::Data(fields) => {
                assert_eq!(fields.len(), 9);
                assert_eq!(fields[0], "20160606");
                assert_eq!(fields[2], "");
                assert_eq!(fields[5], "80.1W");
                assert_eq!(fields[8], "");
            }
            other => panic!("Expected data line, got {:?}", other),
        }
    }

    #[test]
    fn test_classification_ignores_content() {
        // Four fields is a header even when the content looks like data
        let line = "20160606, 1800, TD, 25.4N";
        assert!(matches!(RawLine::classify(line, 1), Err(HurdatError::MalformedRecord { .. })));

        let line = "20160606, 1800, 12,";
        assert!(matches!(RawLine::classify(line, 1).unwrap(), RawLine::Header(_)));
    }

    #[test]
    fn test_header_with_invalid_count() {
        let err = RawLine::classify("AL012016, ALBERTO, three,", 4).unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert!(err.to_string().contains("three"));
    }
}
