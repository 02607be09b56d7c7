#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dataset source definition types.
//!
//! Defines the TOML schema describing each geospatial input file: where
//! it lives, which domain it belongs to, and which feature properties
//! hold the identifying columns shared by every table.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Identifier of one of the datasets the dashboard loads at startup.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DatasetId {
    /// Average temperature per province and decade
    Temperature,
    /// Species counts per province
    Biodiversity,
    /// Disaster occurrence counts per province
    Disaster,
}

impl DatasetId {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Temperature, Self::Biodiversity, Self::Disaster]
    }
}

/// A dataset definition, deserialized from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSource {
    /// Dataset identifier.
    pub id: DatasetId,
    /// Human-readable name (e.g., "Average Temperature per Province").
    pub name: String,
    /// `GeoJSON` file name, relative to the data directory.
    pub file: String,
    /// Domain-specific column layout.
    pub domain: DatasetDomain,
    /// Property names of the identifying columns.
    pub fields: PlaceFieldMapping,
}

impl DatasetSource {
    /// Returns the dataset identifier.
    #[must_use]
    pub const fn id(&self) -> DatasetId {
        self.id
    }

    /// Returns the human-readable dataset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// How the measurement columns of a dataset are laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DatasetDomain {
    /// One value column and one delta column per decade, named
    /// `<decade><suffix>` (e.g. `1960s` and `1960s_diff`).
    Temperature {
        /// Suffix appended to the decade label for the value family.
        #[serde(default)]
        value_suffix: String,
        /// Suffix appended to the decade label for the delta family.
        delta_suffix: String,
    },
    /// One count column per species category.
    Biodiversity,
    /// One count column per disaster type.
    Disaster,
}

/// Property names for the columns every place table carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceFieldMapping {
    /// Property containing the unique place name.
    pub name: String,
    /// Property containing the administrative division level.
    pub admin_div: String,
    /// Property containing the island group.
    pub island_group: String,
    /// Property containing the region code.
    pub region: String,
}
