//! Immutable merged track table.
//!
//! Holds the track records, the per-storm aggregates and the join between
//! them. Storage is reference counted so clones are cheap snapshots; there
//! is no API for mutating a table after the parser builds it.

use crate::models::{EntityAggregate, TrackRecord};
use crate::schema;
use polars::prelude::{DataFrame, PolarsResult};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackTable {
    records: Arc<[TrackRecord]>,
    aggregates: Arc<[EntityAggregate]>,
    record_aggregate: Arc<[usize]>,
}

/// One record joined with its storm's aggregate
#[derive(Debug, Clone, Copy)]
pub struct TrackRow<'a> {
    pub record: &'a TrackRecord,
    pub aggregate: &'a EntityAggregate,
}

impl TrackTable {
    pub(crate) fn new(
        records: Vec<TrackRecord>,
        aggregates: Vec<EntityAggregate>,
        record_aggregate: Vec<usize>,
    ) -> Self {
        debug_assert_eq!(records.len(), record_aggregate.len());
        Self {
            records: records.into(),
            aggregates: aggregates.into(),
            record_aggregate: record_aggregate.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TrackRecord] {
        &self.records
    }

    /// Storm aggregates in order of first appearance
    pub fn aggregates(&self) -> &[EntityAggregate] {
        &self.aggregates
    }

    pub fn aggregate_for(&self, entity_code: &str) -> Option<&EntityAggregate> {
        self.aggregates
            .iter()
            .find(|aggregate| aggregate.entity_code == entity_code)
    }

    pub fn row(&self, index: usize) -> Option<TrackRow<'_>> {
        let record = self.records.get(index)?;
        let aggregate = &self.aggregates[self.record_aggregate[index]];
        Some(TrackRow { record, aggregate })
    }

    /// Rows in input order
    pub fn rows(&self) -> impl Iterator<Item = TrackRow<'_>> + '_ {
        self.records
            .iter()
            .zip(self.record_aggregate.iter())
            .map(|(record, &position)| TrackRow {
                record,
                aggregate: &self.aggregates[position],
            })
    }

    /// Render the table as a DataFrame in output column order
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        schema::build_dataframe(self)
    }
}
