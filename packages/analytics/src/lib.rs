#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart queries over the loaded Klima Insights datasets.
//!
//! Each public function in [`charts`] backs one chart of the dashboard.
//! It takes the raw control labels, resolves them against the closed
//! vocabularies in `klima_climate_models`, and returns the row subset and
//! plotted column as a [`ChartQuery`](klima_analytics_models::ChartQuery).
//! Queries are pure functions of the immutable dataset snapshot.

pub mod charts;
pub mod selection;

use thiserror::Error;

/// Errors raised while resolving a chart selection.
///
/// Chart queries never surface these to callers; they are recovered into
/// a "no selection" result.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// A required control had no value.
    #[error("No {dimension} selected")]
    Missing {
        /// Control that was empty.
        dimension: &'static str,
    },

    /// Division label is neither "Region" nor "Province".
    #[error("Unknown division: '{label}'")]
    UnknownDivision {
        /// Label as received.
        label: String,
    },

    /// Disaster type label has no column mapping.
    #[error("Unknown disaster type: '{label}'")]
    UnknownDisasterType {
        /// Label as received.
        label: String,
    },

    /// Species category label has no column mapping.
    #[error("Unknown species category: '{label}'")]
    UnknownSpeciesCategory {
        /// Label as received.
        label: String,
    },

    /// Island group label is not one of the three groups.
    #[error("Unknown island group: '{label}'")]
    UnknownIslandGroup {
        /// Label as received.
        label: String,
    },

    /// Decade label is outside 1960s-2020s.
    #[error("Unknown decade: '{label}'")]
    UnknownDecade {
        /// Label as received.
        label: String,
    },

    /// Clicked place key matches no region or province.
    #[error("Unknown place: '{name}'")]
    UnknownPlace {
        /// Key as received.
        name: String,
    },

    /// Clicked point lies outside every place polygon.
    #[error("No place at ({lng}, {lat})")]
    NoPlaceAt {
        /// Longitude.
        lng: f64,
        /// Latitude.
        lat: f64,
    },

    /// Nothing left to chart after filtering.
    #[error("No {dimension} available to chart")]
    Empty {
        /// What was being looked for.
        dimension: &'static str,
    },
}

