#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geospatial dataset loading and tabular transformation.
//!
//! Reads the temperature, biodiversity, and disaster `GeoJSON` files
//! described by the embedded TOML definitions, turns each feature into a
//! typed [`PlaceRecord`], and prepares the derived tables the charts
//! need: the tidy decade series, the per-region disaster sums broadcast
//! back onto provinces, and a spatial index for resolving map clicks.
//!
//! Everything is assembled once into an immutable [`Dataset`] before any
//! query is served.

pub mod aggregate;
#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;
pub mod join;
pub mod loader;
pub mod paths;
pub mod record;
pub mod registry;
pub mod reshape;
pub mod spatial;

use std::path::Path;

use klima_dataset_models::DatasetId;
use thiserror::Error;

pub use record::{
    DecadeSeries, DisasterCounts, PlaceRecord, RegionAggregate, TidyObservation, WideRow,
};

use crate::spatial::PlaceIndex;

/// Errors that can occur while loading a dataset.
///
/// All of them are fatal at startup: no chart can be produced without
/// its backing table.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The backing file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid `GeoJSON`.
    #[error("Invalid GeoJSON in {file}: {source}")]
    GeoJson {
        /// File label used in log and error messages.
        file: String,
        /// Underlying parse error.
        source: Box<geojson::Error>,
    },

    /// The file parsed, but is not a `FeatureCollection`.
    #[error("{file}: expected a GeoJSON FeatureCollection")]
    NotFeatureCollection {
        /// File label.
        file: String,
    },

    /// A feature lacks one of the required columns.
    #[error("{file}: feature {index} is missing required property '{property}'")]
    MissingProperty {
        /// File label.
        file: String,
        /// Zero-based feature index.
        index: usize,
        /// Property name that was expected.
        property: String,
    },

    /// A property holds a value that cannot be converted.
    #[error("{file}: feature {index} has an invalid '{property}': {message}")]
    InvalidValue {
        /// File label.
        file: String,
        /// Zero-based feature index.
        index: usize,
        /// Offending property name.
        property: String,
        /// Description of what went wrong.
        message: String,
    },

    /// A feature geometry is missing or not a (multi)polygon.
    #[error("{file}: feature {index} has an unusable geometry: {message}")]
    InvalidGeometry {
        /// File label.
        file: String,
        /// Zero-based feature index.
        index: usize,
        /// Description of what went wrong.
        message: String,
    },

    /// Two features share the same place name.
    #[error("{file}: duplicate place name '{name}'")]
    DuplicateName {
        /// File label.
        file: String,
        /// Name that appeared twice.
        name: String,
    },

    /// No definition is registered for the requested dataset.
    #[error("Unknown dataset: {id}")]
    UnknownDataset {
        /// Requested identifier.
        id: String,
    },

    /// An embedded dataset definition failed to parse.
    #[error("Invalid dataset definition '{name}': {message}")]
    Definition {
        /// Registry entry name.
        name: String,
        /// Parse error message.
        message: String,
    },
}

/// Immutable snapshot of every table the dashboard charts.
///
/// Constructed once at startup and shared read-only between queries.
#[derive(Debug)]
pub struct Dataset {
    temperature: Vec<PlaceRecord>,
    temperature_tidy: Vec<TidyObservation>,
    biodiversity: Vec<PlaceRecord>,
    disaster: Vec<PlaceRecord>,
    regions: Vec<RegionAggregate>,
    disaster_index: PlaceIndex,
}

impl Dataset {
    /// Loads all three datasets from `data_dir` and derives the
    /// secondary tables.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if any definition or file is missing or
    /// malformed.
    pub fn load(data_dir: &Path) -> Result<Self, DatasetError> {
        log::info!("Loading datasets from {}", data_dir.display());

        let temperature = loader::load(DatasetId::Temperature, data_dir)?;
        let biodiversity = loader::load(DatasetId::Biodiversity, data_dir)?;
        let disaster = loader::load(DatasetId::Disaster, data_dir)?;

        Ok(Self::from_tables(temperature, biodiversity, disaster))
    }

    /// Builds a snapshot from already loaded tables.
    ///
    /// Reshapes the temperature series, runs the one-time region
    /// broadcast over the disaster table, and indexes the disaster
    /// geometries for click lookups.
    #[must_use]
    pub fn from_tables(
        temperature: Vec<PlaceRecord>,
        biodiversity: Vec<PlaceRecord>,
        mut disaster: Vec<PlaceRecord>,
    ) -> Self {
        let temperature_tidy = reshape::reshape(&temperature);
        log::info!(
            "Reshaped {} temperature places into {} decade observations",
            temperature.len(),
            temperature_tidy.len()
        );

        let regions = aggregate::broadcast_region_totals(&mut disaster);
        log::info!(
            "Aggregated disaster counts for {} regions across {} places",
            regions.len(),
            disaster.len()
        );

        let disaster_index = PlaceIndex::build(&disaster);

        Self {
            temperature,
            temperature_tidy,
            biodiversity,
            disaster,
            regions,
            disaster_index,
        }
    }

    /// Wide temperature table, one row per place.
    #[must_use]
    pub fn temperature(&self) -> &[PlaceRecord] {
        &self.temperature
    }

    /// Tidy temperature table, one row per (place, decade).
    #[must_use]
    pub fn temperature_tidy(&self) -> &[TidyObservation] {
        &self.temperature_tidy
    }

    /// Biodiversity table.
    #[must_use]
    pub fn biodiversity(&self) -> &[PlaceRecord] {
        &self.biodiversity
    }

    /// Disaster table with region sums already broadcast.
    #[must_use]
    pub fn disaster(&self) -> &[PlaceRecord] {
        &self.disaster
    }

    /// Per-region disaster sums, ordered by region code.
    #[must_use]
    pub fn regions(&self) -> &[RegionAggregate] {
        &self.regions
    }

    /// Finds the disaster-table place whose polygon contains the point.
    #[must_use]
    pub fn locate_place(&self, lng: f64, lat: f64) -> Option<&PlaceRecord> {
        self.disaster_index
            .lookup(lng, lat)
            .and_then(|idx| self.disaster.get(idx))
    }
}
