//! Output schema for the merged track table.
//!
//! Every output column is listed once, in output order, with the role that
//! says where its values come from. The DataFrame builder walks this table;
//! nothing downstream infers a column's meaning from its name.

use crate::models::{Quadrant, WindSpeed};
use crate::table::{TrackRow, TrackTable};
use polars::prelude::*;

/// Record fields copied from the input line (after decoding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseField {
    EntityCode,
    EntityName,
    RecordIdentifier,
    StatusCode,
    Latitude,
    Longitude,
    MaxWind,
    MinPressure,
}

/// Columns computed from a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedField {
    Timestamp,
    Year,
    Month,
    StatusRank,
    StatusCategory,
}

/// Scalar per-storm aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateField {
    MaxWind,
    MinPressure,
    StatusCategory,
}

/// Where a column's values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Base(BaseField),
    Wind(WindSpeed, Quadrant),
    Derived(DerivedField),
    Aggregate(AggregateField),
    AggregateWind(WindSpeed, Quadrant),
    WindTotal(WindSpeed),
}

impl ColumnRole {
    pub fn dtype(&self) -> DataType {
        match self {
            ColumnRole::Base(BaseField::Latitude | BaseField::Longitude) => DataType::Float64,
            ColumnRole::Base(
                BaseField::EntityCode
                | BaseField::EntityName
                | BaseField::RecordIdentifier
                | BaseField::StatusCode,
            ) => DataType::String,
            ColumnRole::Derived(DerivedField::Timestamp) => {
                DataType::Datetime(TimeUnit::Milliseconds, None)
            }
            _ => DataType::Int32,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub role: ColumnRole,
}

const fn column(name: &'static str, role: ColumnRole) -> ColumnSpec {
    ColumnSpec { name, role }
}

use self::AggregateField as A;
use self::BaseField as B;
use self::ColumnRole as R;
use self::DerivedField as D;
use crate::models::Quadrant::{Ne, Nw, Se, Sw};
use crate::models::WindSpeed::{Kt34, Kt50, Kt64};

/// Output columns in order
pub const TRACK_COLUMNS: [ColumnSpec; 43] = [
    column("entity_code", R::Base(B::EntityCode)),
    column("entity_name", R::Base(B::EntityName)),
    column("record_identifier", R::Base(B::RecordIdentifier)),
    column("status_code", R::Base(B::StatusCode)),
    column("latitude", R::Base(B::Latitude)),
    column("longitude", R::Base(B::Longitude)),
    column("max_wind", R::Base(B::MaxWind)),
    column("min_pressure", R::Base(B::MinPressure)),
    column("wind_34kt_ne", R::Wind(Kt34, Ne)),
    column("wind_34kt_se", R::Wind(Kt34, Se)),
    column("wind_34kt_sw", R::Wind(Kt34, Sw)),
    column("wind_34kt_nw", R::Wind(Kt34, Nw)),
    column("wind_50kt_ne", R::Wind(Kt50, Ne)),
    column("wind_50kt_se", R::Wind(Kt50, Se)),
    column("wind_50kt_sw", R::Wind(Kt50, Sw)),
    column("wind_50kt_nw", R::Wind(Kt50, Nw)),
    column("wind_64kt_ne", R::Wind(Kt64, Ne)),
    column("wind_64kt_se", R::Wind(Kt64, Se)),
    column("wind_64kt_sw", R::Wind(Kt64, Sw)),
    column("wind_64kt_nw", R::Wind(Kt64, Nw)),
    column("timestamp", R::Derived(D::Timestamp)),
    column("year", R::Derived(D::Year)),
    column("month", R::Derived(D::Month)),
    column("status_rank", R::Derived(D::StatusRank)),
    column("status_category", R::Derived(D::StatusCategory)),
    column("agg_max_wind", R::Aggregate(A::MaxWind)),
    column("agg_wind_34kt_ne", R::AggregateWind(Kt34, Ne)),
    column("agg_wind_34kt_se", R::AggregateWind(Kt34, Se)),
    column("agg_wind_34kt_sw", R::AggregateWind(Kt34, Sw)),
    column("agg_wind_34kt_nw", R::AggregateWind(Kt34, Nw)),
    column("agg_wind_50kt_ne", R::AggregateWind(Kt50, Ne)),
    column("agg_wind_50kt_se", R::AggregateWind(Kt50, Se)),
    column("agg_wind_50kt_sw", R::AggregateWind(Kt50, Sw)),
    column("agg_wind_50kt_nw", R::AggregateWind(Kt50, Nw)),
    column("agg_wind_64kt_ne", R::AggregateWind(Kt64, Ne)),
    column("agg_wind_64kt_se", R::AggregateWind(Kt64, Se)),
    column("agg_wind_64kt_sw", R::AggregateWind(Kt64, Sw)),
    column("agg_wind_64kt_nw", R::AggregateWind(Kt64, Nw)),
    column("agg_min_pressure", R::Aggregate(A::MinPressure)),
    column("agg_status_category", R::Aggregate(A::StatusCategory)),
    column("agg_maxwind_34kt_tot", R::WindTotal(Kt34)),
    column("agg_maxwind_50kt_tot", R::WindTotal(Kt50)),
    column("agg_maxwind_64kt_tot", R::WindTotal(Kt64)),
];

/// Polars schema of the merged track table
pub fn track_schema() -> Schema {
    TRACK_COLUMNS
        .iter()
        .map(|spec| (PlSmallStr::from_static(spec.name), spec.role.dtype()))
        .collect()
}

/// Build the merged DataFrame by walking the column table once
pub fn build_dataframe(table: &TrackTable) -> PolarsResult<DataFrame> {
    let columns = TRACK_COLUMNS
        .iter()
        .map(|spec| build_column(spec, table))
        .collect::<PolarsResult<Vec<Column>>>()?;

    DataFrame::new(columns)
}

fn build_column(spec: &ColumnSpec, table: &TrackTable) -> PolarsResult<Column> {
    let name = PlSmallStr::from_static(spec.name);

    let series = match spec.role {
        R::Base(field) => match field {
            B::EntityCode => strings(name, table, |r| r.record.entity_code.as_str()),
            B::EntityName => strings(name, table, |r| r.record.entity_name.as_str()),
            B::RecordIdentifier => strings(name, table, |r| r.record.record_identifier.as_str()),
            B::StatusCode => strings(name, table, |r| r.record.status_code()),
            B::Latitude => floats(name, table, |r| r.record.latitude),
            B::Longitude => floats(name, table, |r| r.record.longitude),
            B::MaxWind => ints(name, table, |r| r.record.max_wind),
            B::MinPressure => ints(name, table, |r| r.record.min_pressure),
        },
        R::Wind(speed, quadrant) => {
            ints(name, table, |r| r.record.wind_radii.get(speed, quadrant))
        }
        R::Derived(field) => match field {
            D::Timestamp => {
                let millis: Vec<i64> = table
                    .rows()
                    .map(|r| r.record.timestamp.and_utc().timestamp_millis())
                    .collect();
                Series::new(name, millis).cast(&spec.role.dtype())?
            }
            D::Year => ints(name, table, |r| Some(r.record.year())),
            D::Month => ints(name, table, |r| Some(r.record.month() as i32)),
            D::StatusRank => ints(name, table, |r| Some(r.record.status_rank())),
            D::StatusCategory => ints(name, table, |r| r.record.status_category().map(i32::from)),
        },
        R::Aggregate(field) => match field {
            A::MaxWind => ints(name, table, |r| r.aggregate.max_wind),
            A::MinPressure => ints(name, table, |r| r.aggregate.min_pressure),
            A::StatusCategory => {
                ints(name, table, |r| r.aggregate.status_category.map(i32::from))
            }
        },
        R::AggregateWind(speed, quadrant) => {
            ints(name, table, |r| r.aggregate.wind_radii.get(speed, quadrant))
        }
        R::WindTotal(speed) => ints(name, table, |r| r.aggregate.max_wind_total(speed)),
    };

    Ok(series.into())
}

fn strings<'a, F>(name: PlSmallStr, table: &'a TrackTable, value: F) -> Series
where
    F: Fn(TrackRow<'a>) -> &'a str,
{
    let values: Vec<&str> = table.rows().map(value).collect();
    Series::new(name, values)
}

fn floats<F>(name: PlSmallStr, table: &TrackTable, value: F) -> Series
where
    F: Fn(TrackRow<'_>) -> f64,
{
    let values: Vec<f64> = table.rows().map(value).collect();
    Series::new(name, values)
}

fn ints<F>(name: PlSmallStr, table: &TrackTable, value: F) -> Series
where
    F: Fn(TrackRow<'_>) -> Option<i32>,
{
    let values: Vec<Option<i32>> = table.rows().map(value).collect();
    Series::new(name, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_wind_column_names_match_roles() {
        for spec in TRACK_COLUMNS.iter() {
            match spec.role {
                R::Wind(speed, quadrant) => assert_eq!(
                    spec.name,
                    format!("wind_{}kt_{}", speed.knots(), quadrant.suffix())
                ),
                R::AggregateWind(speed, quadrant) => assert_eq!(
                    spec.name,
                    format!("agg_wind_{}kt_{}", speed.knots(), quadrant.suffix())
                ),
                R::WindTotal(speed) => {
                    assert_eq!(spec.name, format!("agg_maxwind_{}kt_tot", speed.knots()))
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_column_names_are_unique() {
        let mut names: Vec<&str> = TRACK_COLUMNS.iter().map(|spec| spec.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TRACK_COLUMNS.len());
    }

    #[test]
    fn test_dataframe_matches_schema() {
        let lines = [
            "AL012016,            ALBERTO,     1,",
            "20160606, 1800,  , TD, 25.4N,  80.1W,  30, 1006, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,",
        ];
        let df = parse(&lines).unwrap().to_dataframe().unwrap();

        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 43);
        let schema = df.schema();
        assert_eq!(schema.len(), TRACK_COLUMNS.len());
        for (spec, (name, dtype)) in TRACK_COLUMNS.iter().zip(schema.iter()) {
            assert_eq!(name.as_str(), spec.name);
            assert_eq!(dtype, &spec.role.dtype());
        }
        assert_eq!(track_schema().len(), TRACK_COLUMNS.len());
    }

    #[test]
    fn test_missing_values_become_nulls() {
        let lines = [
            "AL012016,            ALBERTO,     1,",
            "20160606, 1800,  , TD, 25.4N,  80.1W,  30, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999, -999,",
        ];
        let df = parse(&lines).unwrap().to_dataframe().unwrap();

        assert_eq!(df.column("min_pressure").unwrap().null_count(), 1);
        assert_eq!(df.column("wind_64kt_nw").unwrap().null_count(), 1);
        assert_eq!(df.column("status_category").unwrap().null_count(), 1);
        assert_eq!(df.column("agg_maxwind_34kt_tot").unwrap().null_count(), 1);
        assert_eq!(df.column("max_wind").unwrap().null_count(), 0);
    }
}
