//! Per-region disaster sums, broadcast back onto every province.

use std::collections::BTreeMap;

use crate::{DisasterCounts, PlaceRecord, RegionAggregate};

/// Sums the disaster counts of every place per region.
///
/// Only the per-place `disasters` column is read, so the result does not
/// depend on any earlier broadcast.
#[must_use]
pub fn region_totals(places: &[PlaceRecord]) -> Vec<RegionAggregate> {
    let mut by_region: BTreeMap<&str, RegionAggregate> = BTreeMap::new();

    for place in places {
        let aggregate = by_region
            .entry(place.region.as_str())
            .or_insert_with(|| RegionAggregate {
                region: place.region.clone(),
                island_group: place.island_group,
                place_count: 0,
                counts: DisasterCounts::default(),
            });
        aggregate.place_count += 1;
        aggregate.counts.accumulate(&place.disasters);
    }

    by_region.into_values().collect()
}

/// Computes [`region_totals`] and writes each region's sums onto every
/// place of that region, replacing any earlier broadcast.
///
/// Returns the region aggregates, ordered by region code.
pub fn broadcast_region_totals(places: &mut [PlaceRecord]) -> Vec<RegionAggregate> {
    let aggregates = region_totals(places);
    let by_region: BTreeMap<&str, &DisasterCounts> = aggregates
        .iter()
        .map(|a| (a.region.as_str(), &a.counts))
        .collect();

    for place in places.iter_mut() {
        place.region_disasters = by_region.get(place.region.as_str()).map(|c| (*c).clone());
    }

    aggregates
}
