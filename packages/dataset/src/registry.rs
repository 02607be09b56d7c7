//! Compile-time registry of dataset definitions.
//!
//! Each entry is a `(name, toml_content)` pair embedded via `include_str!`.
//! Adding a dataset requires creating a TOML file in `sources/` and adding
//! a corresponding entry here.

use klima_dataset_models::{DatasetId, DatasetSource};

use crate::DatasetError;

/// Embedded TOML dataset definitions.
const SOURCE_TOMLS: &[(&str, &str)] = &[
    ("temperature", include_str!("../sources/temperature.toml")),
    ("biodiversity", include_str!("../sources/biodiversity.toml")),
    ("disaster", include_str!("../sources/disaster.toml")),
];

/// Returns all registered dataset definitions.
///
/// # Errors
///
/// Returns [`DatasetError::Definition`] if an embedded TOML file fails to
/// parse.
pub fn all_sources() -> Result<Vec<DatasetSource>, DatasetError> {
    SOURCE_TOMLS
        .iter()
        .map(|(name, toml_str)| {
            toml::de::from_str(toml_str).map_err(|e| DatasetError::Definition {
                name: (*name).to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// Returns the definition registered for `id`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the definitions fail to parse or none
/// matches `id`.
pub fn source(id: DatasetId) -> Result<DatasetSource, DatasetError> {
    all_sources()?
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| DatasetError::UnknownDataset { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use klima_dataset_models::DatasetDomain;

    use super::*;

    #[test]
    fn loads_all_sources() {
        let sources = all_sources().unwrap();
        assert_eq!(sources.len(), DatasetId::all().len());
    }

    #[test]
    fn every_dataset_is_registered_once() {
        let sources = all_sources().unwrap();
        let ids: BTreeSet<DatasetId> = sources.iter().map(DatasetSource::id).collect();
        assert_eq!(ids.len(), sources.len(), "duplicate dataset id");
        for id in DatasetId::all() {
            assert!(ids.contains(id), "{id} has no definition");
        }
    }

    #[test]
    fn all_sources_have_required_fields() {
        for source in &all_sources().unwrap() {
            assert!(!source.name().is_empty(), "{} has empty name", source.id);
            assert!(
                std::path::Path::new(&source.file)
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("geojson")),
                "{} is not a GeoJSON file: {}",
                source.id,
                source.file
            );
            assert!(!source.fields.name.is_empty(), "{} has empty name field", source.id);
            assert!(!source.fields.region.is_empty(), "{} has empty region field", source.id);
        }
    }

    #[test]
    fn domains_match_ids() {
        for source in &all_sources().unwrap() {
            let matches = matches!(
                (source.id, &source.domain),
                (DatasetId::Temperature, DatasetDomain::Temperature { .. })
                    | (DatasetId::Biodiversity, DatasetDomain::Biodiversity)
                    | (DatasetId::Disaster, DatasetDomain::Disaster)
            );
            assert!(matches, "{} has domain {:?}", source.id, source.domain);
        }
    }

    #[test]
    fn temperature_families_use_distinct_suffixes() {
        let source = source(DatasetId::Temperature).unwrap();
        let DatasetDomain::Temperature {
            value_suffix,
            delta_suffix,
        } = source.domain
        else {
            panic!("temperature source has wrong domain");
        };
        assert_eq!(value_suffix, "");
        assert_eq!(delta_suffix, "_diff");
    }
}
