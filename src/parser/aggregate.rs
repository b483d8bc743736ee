//! Per-storm aggregation.
//!
//! Groups track records by storm code in order of first appearance and
//! folds each group into an [`EntityAggregate`].

use crate::models::{EntityAggregate, TrackRecord, WindRadii, max_present, min_present};
use std::collections::HashMap;

/// Aggregates in first-appearance order plus each record's aggregate index
pub fn aggregate_by_entity(records: &[TrackRecord]) -> (Vec<EntityAggregate>, Vec<usize>) {
    let mut aggregates: Vec<EntityAggregate> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut record_index = Vec::with_capacity(records.len());

    for record in records {
        let position = *positions
            .entry(record.entity_code.as_str())
            .or_insert_with(|| {
                aggregates.push(EntityAggregate {
                    entity_code: record.entity_code.clone(),
                    max_wind: None,
                    wind_radii: WindRadii::default(),
                    min_pressure: None,
                    status_category: None,
                });
                aggregates.len() - 1
            });

        absorb(&mut aggregates[position], record);
        record_index.push(position);
    }

    (aggregates, record_index)
}

fn absorb(aggregate: &mut EntityAggregate, record: &TrackRecord) {
    aggregate.max_wind = max_present(aggregate.max_wind, record.max_wind);
    aggregate.min_pressure = min_present(aggregate.min_pressure, record.min_pressure);
    aggregate.status_category = max_present(aggregate.status_category, record.status_category());
    aggregate.wind_radii = aggregate.wind_radii.merge_max(&record.wind_radii);
}
