//! Typed rows produced by the loader and the derived tables.

use std::collections::BTreeMap;
use std::sync::Arc;

use geo::MultiPolygon;
use klima_climate_models::{Decade, DisasterType, Division, IslandGroup, SpeciesCategory};

/// One administrative area as loaded from a dataset file.
///
/// `name` is unique within its table. The geometry is shared behind an
/// [`Arc`] and never mutated after load; every row derived from this
/// record points at the same polygon.
#[derive(Debug, Clone)]
pub struct PlaceRecord {
    /// Unique place name.
    pub name: String,
    /// Administrative division level (e.g. "Province").
    pub admin_div: String,
    /// Island group the place belongs to.
    pub island_group: IslandGroup,
    /// Region code (e.g. "CAR", "Region VII").
    pub region: String,
    /// Boundary polygon.
    pub geometry: Arc<MultiPolygon<f64>>,
    /// Temperature value and delta per decade. Empty outside the
    /// temperature dataset.
    pub temperature: DecadeSeries,
    /// Species counts. Empty outside the biodiversity dataset.
    pub species: BTreeMap<SpeciesCategory, u64>,
    /// Disaster counts for this place. Empty outside the disaster dataset.
    pub disasters: DisasterCounts,
    /// Disaster sums of the whole region, written once by
    /// [`crate::aggregate::broadcast_region_totals`].
    pub region_disasters: Option<DisasterCounts>,
}

impl PlaceRecord {
    /// Creates a record with identifying columns only.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        admin_div: impl Into<String>,
        island_group: IslandGroup,
        region: impl Into<String>,
        geometry: Arc<MultiPolygon<f64>>,
    ) -> Self {
        Self {
            name: name.into(),
            admin_div: admin_div.into(),
            island_group,
            region: region.into(),
            geometry,
            temperature: DecadeSeries::default(),
            species: BTreeMap::new(),
            disasters: DisasterCounts::default(),
            region_disasters: None,
        }
    }

    /// Count for a disaster type at the requested granularity.
    ///
    /// Returns `None` for [`Division::Region`] if the region broadcast
    /// has not run on this row.
    #[must_use]
    pub fn disaster_count(&self, disaster: DisasterType, division: Division) -> Option<u64> {
        match division {
            Division::Province => Some(self.disasters.get(disaster)),
            Division::Region => self.region_disasters.as_ref().map(|c| c.get(disaster)),
        }
    }

    /// Species count for a category, `None` if the column was not loaded.
    #[must_use]
    pub fn species_count(&self, category: SpeciesCategory) -> Option<u64> {
        self.species.get(&category).copied()
    }
}

/// Decade-keyed temperature measurements of one place.
///
/// The value and delta families are stored separately so a decade can
/// be present in one and absent from the other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecadeSeries {
    /// Average temperature per decade (°C).
    pub values: BTreeMap<Decade, f64>,
    /// Temperature change per decade (°C).
    pub deltas: BTreeMap<Decade, f64>,
}

impl DecadeSeries {
    /// Returns `true` if neither family has any measurement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.deltas.is_empty()
    }

    /// Value for a decade, if measured.
    #[must_use]
    pub fn value(&self, decade: Decade) -> Option<f64> {
        self.values.get(&decade).copied()
    }

    /// Delta for a decade, if measured.
    #[must_use]
    pub fn delta(&self, decade: Decade) -> Option<f64> {
        self.deltas.get(&decade).copied()
    }
}

/// Disaster occurrence counts keyed by type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisasterCounts(BTreeMap<DisasterType, u64>);

impl DisasterCounts {
    /// Count for a disaster type; unrecorded types count as zero.
    #[must_use]
    pub fn get(&self, disaster: DisasterType) -> u64 {
        self.0.get(&disaster).copied().unwrap_or(0)
    }

    /// Sets the count for a disaster type.
    pub fn set(&mut self, disaster: DisasterType, count: u64) {
        self.0.insert(disaster, count);
    }

    /// Adds every count of `other` onto this one, saturating at `u64::MAX`.
    pub fn accumulate(&mut self, other: &Self) {
        for (disaster, count) in &other.0 {
            let total = self.0.entry(*disaster).or_insert(0);
            *total = total.saturating_add(*count);
        }
    }

    /// Iterates over the recorded counts in [`DisasterType`] order.
    pub fn iter(&self) -> impl Iterator<Item = (DisasterType, u64)> + '_ {
        self.0.iter().map(|(d, c)| (*d, *c))
    }
}

impl FromIterator<(DisasterType, u64)> for DisasterCounts {
    fn from_iter<I: IntoIterator<Item = (DisasterType, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One (place, decade) observation of the tidy temperature table.
#[derive(Debug, Clone)]
pub struct TidyObservation {
    /// Place name.
    pub name: String,
    /// Administrative division level.
    pub admin_div: String,
    /// Island group.
    pub island_group: IslandGroup,
    /// Region code.
    pub region: String,
    /// Geometry shared with the source record.
    pub geometry: Arc<MultiPolygon<f64>>,
    /// Decade of the observation.
    pub decade: Decade,
    /// Average temperature, `None` if only the delta was measured.
    pub value: Option<f64>,
    /// Temperature change, `None` if only the value was measured.
    pub delta: Option<f64>,
}

/// One place of a wide table rebuilt from tidy observations.
#[derive(Debug, Clone)]
pub struct WideRow {
    /// Place name.
    pub name: String,
    /// Administrative division level.
    pub admin_div: String,
    /// Island group.
    pub island_group: IslandGroup,
    /// Region code.
    pub region: String,
    /// Geometry shared with the source record.
    pub geometry: Arc<MultiPolygon<f64>>,
    /// Decade measurements.
    pub temperature: DecadeSeries,
}

/// Disaster sums for one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionAggregate {
    /// Region code.
    pub region: String,
    /// Island group of the region's first place.
    pub island_group: IslandGroup,
    /// Number of places summed.
    pub place_count: usize,
    /// Summed counts.
    pub counts: DisasterCounts,
}
