//! Error handling tests for the track parser

use super::{NO_RADII, alberto_lines, observation};
use crate::error::HurdatError;
use crate::parser::parse;

fn with_line_replaced(index: usize, line: String) -> Vec<String> {
    let mut lines = alberto_lines();
    lines[index] = line;
    lines
}

#[test]
fn test_empty_input() {
    let lines: Vec<String> = Vec::new();
    assert!(matches!(parse(&lines), Err(HurdatError::EmptyInput)));
}

#[test]
fn test_data_line_before_header() {
    let lines = vec![
        observation("TD", 30, 1006),
        "AL012016,            ALBERTO,     1,".to_string(),
    ];

    match parse(&lines).unwrap_err() {
        HurdatError::MalformedRecord { line, content, .. } => {
            assert_eq!(line, 1);
            assert_eq!(content, lines[0]);
        }
        other => panic!("Expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_unknown_status_code() {
    let lines = with_line_replaced(2, observation("XX", 35, 1005));

    match parse(&lines).unwrap_err() {
        HurdatError::UnknownStatusCode { line, code, content } => {
            assert_eq!(line, 3);
            assert_eq!(code, "XX");
            assert_eq!(content, lines[2]);
        }
        other => panic!("Expected UnknownStatusCode, got {:?}", other),
    }
}

#[test]
fn test_field_count_mismatch() {
    // Missing one wind radius value
    let short = "20160607, 0000,  , TD, 25.6N,  80.3W,  35, 1005, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,";
    let lines = with_line_replaced(2, short.to_string());

    let err = parse(&lines).unwrap_err();
    assert!(matches!(err, HurdatError::MalformedRecord { line: 3, .. }));
    assert!(err.to_string().contains("expected 21 fields, found 20"));
}

#[test]
fn test_missing_trailing_comma() {
    let line = format!("20160607, 0000,  , TD, 25.6N,  80.3W,  35, 1005, {} 5", NO_RADII);
    let lines = with_line_replaced(2, line);

    assert!(matches!(
        parse(&lines),
        Err(HurdatError::MalformedRecord { line: 3, .. })
    ));
}

#[test]
fn test_unparseable_date() {
    let line = format!("20161306, 0000,  , TD, 25.6N,  80.3W,  35, 1005, {}", NO_RADII);
    let lines = with_line_replaced(1, line);

    let err = parse(&lines).unwrap_err();
    assert!(matches!(err, HurdatError::MalformedRecord { line: 2, .. }));
    assert!(err.to_string().contains("20161306"));
}

#[test]
fn test_invalid_hemisphere() {
    let line = format!("20160607, 0000,  , TD, 25.6Q,  80.3W,  35, 1005, {}", NO_RADII);
    let lines = with_line_replaced(3, line);

    let err = parse(&lines).unwrap_err();
    assert!(matches!(err, HurdatError::MalformedRecord { line: 4, .. }));
    assert!(err.to_string().contains("25.6Q"));
}

#[test]
fn test_non_numeric_measurement() {
    let line = format!("20160607, 0000,  , TD, 25.6N,  80.3W,  3O, 1005, {}", NO_RADII);
    let lines = with_line_replaced(1, line);

    let err = parse(&lines).unwrap_err();
    assert!(err.to_string().contains("max_wind"));
}

#[test]
fn test_blank_line_is_malformed_data() {
    let mut lines = alberto_lines();
    lines.insert(2, String::new());

    assert!(matches!(
        parse(&lines),
        Err(HurdatError::MalformedRecord { line: 3, .. })
    ));
}

#[test]
fn test_first_error_aborts_whole_parse() {
    let mut lines = alberto_lines();
    lines[1] = observation("XX", 30, 1006);
    lines[3] = observation("ZZ", 30, 1006);

    match parse(&lines).unwrap_err() {
        HurdatError::UnknownStatusCode { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected UnknownStatusCode, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_coordinate_magnitude() {
    let line = format!("20160607, 0000,  , TD, 25.6N,  NaNW,  35, 1005, {}", NO_RADII);
    let lines = with_line_replaced(2, line);

    let err = parse(&lines).unwrap_err();
    assert!(matches!(err, HurdatError::MalformedRecord { line: 3, .. }));
    assert!(err.to_string().contains("NaNW"));
}
