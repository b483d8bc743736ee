//! Integration tests for the HURDAT2 parser using a sample file
//!
//! The sample holds two 2016 storms: ALBERTO (tropical storm, no wind
//! radii) and an abridged MATTHEW (major hurricane with full radii).

use hurdat_processor::loader::{parse_local_file, read_lines_from_file, writer::write_frame};
use hurdat_processor::models::WindSpeed;
use hurdat_processor::schema::TRACK_COLUMNS;
use hurdat_processor::HurdatError;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE_PATH: &str = "tests/data/hurdat2_sample.txt";

#[tokio::test]
async fn test_parse_sample_file() {
    let table = parse_local_file(Path::new(SAMPLE_PATH)).await.unwrap();

    assert_eq!(table.len(), 7);
    assert_eq!(table.aggregates().len(), 2);

    let alberto = table.aggregate_for("AL012016").unwrap();
    assert_eq!(alberto.max_wind, Some(40));
    assert_eq!(alberto.min_pressure, Some(1004));
    assert_eq!(alberto.status_category, None);

    let matthew = table.aggregate_for("AL142016").unwrap();
    assert_eq!(matthew.max_wind, Some(130));
    assert_eq!(matthew.min_pressure, Some(934));
    assert_eq!(matthew.status_category, Some(4));
    assert_eq!(matthew.max_wind_total(WindSpeed::Kt34), Some(240));
    assert_eq!(matthew.max_wind_total(WindSpeed::Kt50), Some(100));
    assert_eq!(matthew.max_wind_total(WindSpeed::Kt64), Some(50));
}

#[tokio::test]
async fn test_sample_record_details() {
    let table = parse_local_file(Path::new(SAMPLE_PATH)).await.unwrap();

    let landfall = &table.records()[3];
    assert_eq!(landfall.entity_name, "MATTHEW");
    assert_eq!(landfall.record_identifier, "L");
    assert_eq!(landfall.status_code(), "HU");
    assert_eq!(landfall.status_rank(), 8);
    assert_eq!(landfall.status_category(), Some(4));
    assert_eq!(landfall.latitude, 18.4);
    assert_eq!(landfall.longitude, -74.3);

    let extratropical = &table.records()[6];
    assert_eq!(extratropical.status_rank(), 3);
    assert_eq!(extratropical.status_category(), Some(1));
    assert_eq!(extratropical.month(), 10);
}

#[tokio::test]
async fn test_sample_dataframe_column_order() {
    let table = parse_local_file(Path::new(SAMPLE_PATH)).await.unwrap();
    let df = table.to_dataframe().unwrap();

    let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
    let expected: Vec<&str> = TRACK_COLUMNS.iter().map(|c| c.name).collect();
    assert_eq!(names, expected);
    assert_eq!(names[0], "entity_code");
    assert_eq!(names[20], "timestamp");
    assert_eq!(names[42], "agg_maxwind_64kt_tot");
    assert_eq!(df.height(), 7);
}

#[tokio::test]
async fn test_sample_csv_export() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("tracks.csv");

    let table = parse_local_file(Path::new(SAMPLE_PATH)).await.unwrap();
    let mut df = table.to_dataframe().unwrap();
    write_frame(&mut df, &output).unwrap();

    let contents = std::fs::read_to_string(&output).unwrap();
    let mut lines = contents.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("entity_code,entity_name,record_identifier,status_code"));
    assert!(header.ends_with("agg_maxwind_50kt_tot,agg_maxwind_64kt_tot"));
    assert_eq!(lines.count(), 7);
}

#[tokio::test]
async fn test_missing_file() {
    let result = parse_local_file(Path::new("tests/data/does_not_exist.txt")).await;
    assert!(matches!(result, Err(HurdatError::FileNotFound { .. })));
}

#[tokio::test]
async fn test_malformed_file_reports_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.txt");
    let contents = std::fs::read_to_string(SAMPLE_PATH)
        .unwrap()
        .replacen("TS, 25.8N", "XX, 25.8N", 1);
    std::fs::write(&path, contents).unwrap();

    match parse_local_file(&path).await.unwrap_err() {
        HurdatError::UnknownStatusCode { line, code, .. } => {
            assert_eq!(line, 4);
            assert_eq!(code, "XX");
        }
        other => panic!("Expected UnknownStatusCode, got {:?}", other),
    }
}

#[tokio::test]
async fn test_read_lines_from_file() {
    let lines = read_lines_from_file(Path::new(SAMPLE_PATH)).await.unwrap();
    assert_eq!(lines.len(), 9);
    assert!(lines[0].starts_with("AL012016"));
    assert!(lines[4].starts_with("AL142016"));
}
