#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API response types for the Klima Insights server.
//!
//! Chart endpoints serialize the analytics result types directly; this
//! crate holds the envelopes that are specific to the HTTP surface.

use klima_climate_models::{Decade, DisasterType, Division, IslandGroup, SpeciesCategory};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Every label the dashboard controls can send, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOptions {
    /// Decade labels, chronological.
    pub decades: Vec<Decade>,
    /// Island group labels.
    pub island_groups: Vec<IslandGroup>,
    /// Division labels.
    pub divisions: Vec<Division>,
    /// Disaster type labels.
    pub disaster_types: Vec<DisasterType>,
    /// Species category labels.
    pub species_categories: Vec<SpeciesCategory>,
    /// Token for the frontend's map tiles, if configured.
    pub mapbox_token: Option<String>,
}

impl ApiOptions {
    /// Lists every variant of each selection dimension.
    #[must_use]
    pub fn new(mapbox_token: Option<String>) -> Self {
        Self {
            decades: Decade::all().to_vec(),
            island_groups: IslandGroup::all().to_vec(),
            divisions: Division::all().to_vec(),
            disaster_types: DisasterType::all().to_vec(),
            species_categories: SpeciesCategory::all().to_vec(),
            mapbox_token,
        }
    }
}

/// Error body returned with a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Description of what went wrong.
    pub error: String,
}
