//! Small `GeoJSON` tables shared by the tests of this crate and its
//! dependents (enable the `test-utils` feature).
//!
//! Helpers panic on malformed input; they only ever see the files under
//! `fixtures/` or literals written in a test.

use klima_dataset_models::DatasetId;

use crate::{Dataset, PlaceRecord};

/// Four provinces, seven decades each, with one null delta and one
/// absent value.
pub const TEMPERATURE: &str = include_str!("../fixtures/temperature.geojson");
/// Three provinces; Palawan has no temperature or disaster row.
pub const BIODIVERSITY: &str = include_str!("../fixtures/biodiversity_land.geojson");
/// Five provinces across four regions; CAR has two.
pub const DISASTER: &str = include_str!("../fixtures/disaster.geojson");

/// Parses `content` with the registered layout of `id`.
///
/// # Panics
///
/// Panics if the definition or the content is invalid.
#[must_use]
pub fn parse_table(id: DatasetId, content: &str) -> Vec<PlaceRecord> {
    let source = crate::registry::source(id).unwrap();
    crate::loader::parse(&source, content, &source.file).unwrap()
}

/// The fixture table of `id`.
///
/// # Panics
///
/// Panics if the fixture fails to parse.
#[must_use]
pub fn table(id: DatasetId) -> Vec<PlaceRecord> {
    let content = match id {
        DatasetId::Temperature => TEMPERATURE,
        DatasetId::Biodiversity => BIODIVERSITY,
        DatasetId::Disaster => DISASTER,
    };
    parse_table(id, content)
}

/// A snapshot of all three fixture tables.
///
/// # Panics
///
/// Panics if a fixture fails to parse.
#[must_use]
pub fn dataset() -> Dataset {
    Dataset::from_tables(
        table(DatasetId::Temperature),
        table(DatasetId::Biodiversity),
        table(DatasetId::Disaster),
    )
}
