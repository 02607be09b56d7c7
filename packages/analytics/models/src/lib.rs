#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Chart query parameter and result types.
//!
//! Parameters carry the raw labels the dashboard controls send, exactly as
//! the user picked them. Results carry chart-ready rows and the name of the
//! column being plotted. Every query answers with a [`ChartQuery`], so an
//! unrecognized selection comes back as an explicit "no selection" rather
//! than an error status.

use klima_climate_models::{Decade, DisasterType, Division, IslandGroup, SpeciesCategory};
use serde::{Deserialize, Serialize};

/// Outcome of resolving one chart selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ChartQuery<T> {
    /// The selection resolved to a column and a row subset.
    Resolved(T),
    /// The selection could not be resolved; the chart should stay empty.
    NoSelection {
        /// Human-readable explanation.
        reason: String,
    },
}

impl<T> ChartQuery<T> {
    /// Builds a [`ChartQuery::NoSelection`].
    #[must_use]
    pub fn no_selection(reason: impl Into<String>) -> Self {
        Self::NoSelection {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the selection resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the resolved payload, if any.
    #[must_use]
    pub fn resolved(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            Self::NoSelection { .. } => None,
        }
    }
}

/// Minimum and maximum of the plotted values, for the color scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange<T> {
    /// Smallest value.
    pub min: T,
    /// Largest value.
    pub max: T,
}

impl<T: PartialOrd + Copy> ValueRange<T> {
    /// Computes the range of `values`, `None` if there are none.
    #[must_use]
    pub fn of(values: impl IntoIterator<Item = T>) -> Option<Self> {
        values.into_iter().fold(None, |range, v| {
            Some(match range {
                None => Self { min: v, max: v },
                Some(Self { min, max }) => Self {
                    min: if v < min { v } else { min },
                    max: if v > max { v } else { max },
                },
            })
        })
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Parameters for the temperature bar chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureBarParams {
    /// Island group label (e.g. "Luzon").
    pub island_group: Option<String>,
}

/// Parameters for the temperature choropleth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureMapParams {
    /// Decade label (e.g. "1990s").
    pub decade: Option<String>,
}

/// Parameters for the disaster choropleth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterMapParams {
    /// "Region" or "Province".
    pub division: Option<String>,
    /// Disaster type label (e.g. "Storm").
    pub disaster_type: Option<String>,
}

/// Parameters for the per-island-group disaster bar chart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterBarParams {
    /// "Region" or "Province".
    pub division: Option<String>,
    /// Disaster type label.
    pub disaster_type: Option<String>,
    /// Island group label.
    pub island_group: Option<String>,
}

/// Parameters for the temperature line chart under the disaster map.
///
/// A click is either a place key (`place`) or a map point (`lng`/`lat`).
/// With neither, the chart falls back to a default focus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterLineParams {
    /// "Region" or "Province".
    pub division: Option<String>,
    /// Clicked region code or province name.
    pub place: Option<String>,
    /// Clicked longitude.
    pub lng: Option<f64>,
    /// Clicked latitude.
    pub lat: Option<f64>,
}

/// Parameters for the biodiversity choropleth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiodiversityMapParams {
    /// Species category label (e.g. "Birds").
    pub category: Option<String>,
    /// Optional island group label to narrow the map.
    pub island_group: Option<String>,
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One (place, decade) temperature observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationRow {
    /// Place name.
    pub name: String,
    /// Region code.
    pub region: String,
    /// Island group.
    pub island_group: IslandGroup,
    /// Decade.
    pub decade: Decade,
    /// Average temperature (°C), if measured.
    pub value: Option<f64>,
    /// Temperature change (°C), if measured.
    pub delta: Option<f64>,
}

/// One place with a single temperature value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceValue {
    /// Place name.
    pub name: String,
    /// Region code.
    pub region: String,
    /// Island group.
    pub island_group: IslandGroup,
    /// Plotted value, if measured.
    pub value: Option<f64>,
}

/// One place with a single disaster count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceCount {
    /// Place name.
    pub name: String,
    /// Region code.
    pub region: String,
    /// Island group.
    pub island_group: IslandGroup,
    /// Plotted count.
    pub count: u64,
}

/// One bar of the disaster bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarRow {
    /// Region code or province name.
    pub label: String,
    /// Plotted count.
    pub count: u64,
}

/// One biodiversity place with its cross-domain context.
///
/// Temperature and disaster fields are `None` when the place has no row
/// of that name in the respective table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiodiversityRow {
    /// Place name.
    pub name: String,
    /// Region code.
    pub region: String,
    /// Island group.
    pub island_group: IslandGroup,
    /// Count for the selected species category.
    pub species_count: u64,
    /// Average temperature of the latest measured decade.
    pub latest_temperature: Option<f64>,
    /// Temperature change of the latest measured decade.
    pub temperature_change: Option<f64>,
    /// Total disaster count of the place.
    pub disaster_total: Option<u64>,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Animated bar chart of one island group's temperatures per decade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureBarResult {
    /// Resolved island group.
    pub island_group: IslandGroup,
    /// Plotted column.
    pub column: String,
    /// Observations, grouped by decade in chronological order.
    pub rows: Vec<ObservationRow>,
    /// Decade of the reference line.
    pub reference_decade: Decade,
    /// Highest value of the reference decade, drawn as a reference line.
    pub reference_max: Option<f64>,
}

/// Temperature choropleth for one decade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureMapResult {
    /// Resolved decade.
    pub decade: Decade,
    /// Plotted column (the decade label).
    pub column: String,
    /// One row per place.
    pub rows: Vec<PlaceValue>,
    /// Range of the measured values.
    pub value_range: Option<ValueRange<f64>>,
}

/// Disaster choropleth for one division and disaster type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterMapResult {
    /// Resolved division.
    pub division: Division,
    /// Resolved disaster type.
    pub disaster_type: DisasterType,
    /// Plotted column (`Region_*` or `* Count`).
    pub column: String,
    /// One row per place.
    pub rows: Vec<PlaceCount>,
    /// Range of the plotted counts.
    pub value_range: Option<ValueRange<u64>>,
}

/// Disaster bar chart for one island group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterBarResult {
    /// Resolved division.
    pub division: Division,
    /// Resolved disaster type.
    pub disaster_type: DisasterType,
    /// Resolved island group.
    pub island_group: IslandGroup,
    /// Plotted column.
    pub column: String,
    /// Bars in ascending order: regions by the plotted sum, provinces by
    /// their total disaster count.
    pub rows: Vec<BarRow>,
}

/// How the line chart picked its focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusSource {
    /// A clicked place or map point.
    Click,
    /// No click; the last key of the sorted candidates.
    Fallback,
}

/// Temperature line chart for the focused region or province.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisasterLineResult {
    /// Resolved division.
    pub division: Division,
    /// Focused region code or province name.
    pub focus: String,
    /// Whether the focus came from a click.
    pub focus_source: FocusSource,
    /// Plotted column.
    pub column: String,
    /// Observations of every place under the focus.
    pub rows: Vec<ObservationRow>,
}

/// Biodiversity choropleth joined with temperature and disaster context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiodiversityMapResult {
    /// Resolved species category.
    pub category: SpeciesCategory,
    /// Island group filter, if one was given.
    pub island_group: Option<IslandGroup>,
    /// Plotted column.
    pub column: String,
    /// One row per biodiversity place.
    pub rows: Vec<BiodiversityRow>,
    /// Range of the species counts.
    pub value_range: Option<ValueRange<u64>>,
    /// Places without a temperature row.
    pub unmatched_temperature: Vec<String>,
    /// Places without a disaster row.
    pub unmatched_disaster: Vec<String>,
}
