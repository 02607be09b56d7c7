//! Wide-to-long reshaping of the per-decade temperature columns.
//!
//! The value family and the delta family are melted independently
//! against the identifying columns, then rejoined on those columns plus
//! the decade. A decade present in only one family keeps the other field
//! missing.

use std::collections::BTreeMap;
use std::sync::Arc;

use geo::MultiPolygon;
use klima_climate_models::{Decade, IslandGroup};

use crate::{DecadeSeries, PlaceRecord, TidyObservation, WideRow};

/// Which measurement family a melted cell came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    /// Average temperature.
    Value,
    /// Temperature change.
    Delta,
}

/// Identifying columns of a melted cell.
///
/// `order` keeps the source row order; geometry compares by identity of
/// the shared polygon.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct IdKey<'a> {
    order: usize,
    name: &'a str,
    admin_div: &'a str,
    island_group: IslandGroup,
    region: &'a str,
    geometry: usize,
}

/// One cell of a melted family.
struct MeltedCell<'a> {
    key: IdKey<'a>,
    geometry: &'a Arc<MultiPolygon<f64>>,
    decade: Decade,
    value: f64,
}

/// Both families of one (place, decade) after the rejoin.
struct JoinedCell<'a> {
    geometry: &'a Arc<MultiPolygon<f64>>,
    value: Option<f64>,
    delta: Option<f64>,
}

impl<'a> JoinedCell<'a> {
    const fn new(geometry: &'a Arc<MultiPolygon<f64>>) -> Self {
        Self {
            geometry,
            value: None,
            delta: None,
        }
    }
}

fn melt(places: &[PlaceRecord], family: Family) -> Vec<MeltedCell<'_>> {
    places
        .iter()
        .enumerate()
        .flat_map(|(order, place)| {
            let series = match family {
                Family::Value => &place.temperature.values,
                Family::Delta => &place.temperature.deltas,
            };
            let key = IdKey {
                order,
                name: &place.name,
                admin_div: &place.admin_div,
                island_group: place.island_group,
                region: &place.region,
                geometry: Arc::as_ptr(&place.geometry).addr(),
            };
            series.iter().map(move |(decade, value)| MeltedCell {
                key: key.clone(),
                geometry: &place.geometry,
                decade: *decade,
                value: *value,
            })
        })
        .collect()
}

/// Converts wide decade columns into one observation per (place, decade).
///
/// Rows come out in source place order, decades chronological within a
/// place. Places without any decade measurement produce no rows.
#[must_use]
pub fn reshape(places: &[PlaceRecord]) -> Vec<TidyObservation> {
    let values = melt(places, Family::Value);
    let deltas = melt(places, Family::Delta);

    let mut joined: BTreeMap<(IdKey<'_>, Decade), JoinedCell<'_>> = BTreeMap::new();

    for cell in values {
        joined
            .entry((cell.key, cell.decade))
            .or_insert_with(|| JoinedCell::new(cell.geometry))
            .value = Some(cell.value);
    }
    for cell in deltas {
        joined
            .entry((cell.key, cell.decade))
            .or_insert_with(|| JoinedCell::new(cell.geometry))
            .delta = Some(cell.value);
    }

    joined
        .into_iter()
        .map(|((key, decade), cell)| TidyObservation {
            name: key.name.to_string(),
            admin_div: key.admin_div.to_string(),
            island_group: key.island_group,
            region: key.region.to_string(),
            geometry: Arc::clone(cell.geometry),
            decade,
            value: cell.value,
            delta: cell.delta,
        })
        .collect()
}

/// Rebuilds one wide row per place from tidy observations.
///
/// Places keep the order of their first observation. Missing fields stay
/// absent from the rebuilt series.
#[must_use]
pub fn pivot_wide(observations: &[TidyObservation]) -> Vec<WideRow> {
    let mut rows: Vec<WideRow> = Vec::new();
    let mut positions: BTreeMap<&str, usize> = BTreeMap::new();

    for obs in observations {
        let pos = *positions.entry(obs.name.as_str()).or_insert_with(|| {
            rows.push(WideRow {
                name: obs.name.clone(),
                admin_div: obs.admin_div.clone(),
                island_group: obs.island_group,
                region: obs.region.clone(),
                geometry: Arc::clone(&obs.geometry),
                temperature: DecadeSeries::default(),
            });
            rows.len() - 1
        });

        let series = &mut rows[pos].temperature;
        if let Some(value) = obs.value {
            series.values.insert(obs.decade, value);
        }
        if let Some(delta) = obs.delta {
            series.deltas.insert(obs.decade, delta);
        }
    }

    rows
}
