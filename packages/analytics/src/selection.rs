//! Label resolution for the dashboard controls.
//!
//! Every control label maps 1:1 onto a closed enum through its `strum`
//! parser. Labels are matched exactly; anything else is a
//! [`SelectionError`].

use std::str::FromStr;

use klima_climate_models::{Decade, DisasterType, Division, IslandGroup, SpeciesCategory};

use crate::SelectionError;

fn parse_label<T: FromStr>(
    label: Option<&str>,
    dimension: &'static str,
    unknown: fn(String) -> SelectionError,
) -> Result<T, SelectionError> {
    let label = label
        .filter(|l| !l.is_empty())
        .ok_or(SelectionError::Missing { dimension })?;
    label.parse().map_err(|_| unknown(label.to_string()))
}

/// Resolves a division label.
///
/// # Errors
///
/// Returns [`SelectionError`] if the label is missing or unknown.
pub fn division(label: Option<&str>) -> Result<Division, SelectionError> {
    parse_label(label, "division", |label| SelectionError::UnknownDivision {
        label,
    })
}

/// Resolves a disaster type label.
///
/// # Errors
///
/// Returns [`SelectionError`] if the label is missing or unknown.
pub fn disaster_type(label: Option<&str>) -> Result<DisasterType, SelectionError> {
    parse_label(label, "disaster type", |label| {
        SelectionError::UnknownDisasterType { label }
    })
}

/// Resolves a species category label.
///
/// # Errors
///
/// Returns [`SelectionError`] if the label is missing or unknown.
pub fn species_category(label: Option<&str>) -> Result<SpeciesCategory, SelectionError> {
    parse_label(label, "species category", |label| {
        SelectionError::UnknownSpeciesCategory { label }
    })
}

/// Resolves an island group label.
///
/// # Errors
///
/// Returns [`SelectionError`] if the label is missing or unknown.
pub fn island_group(label: Option<&str>) -> Result<IslandGroup, SelectionError> {
    parse_label(label, "island group", |label| {
        SelectionError::UnknownIslandGroup { label }
    })
}

/// Resolves an optional island group filter. An empty control means no
/// filter.
///
/// # Errors
///
/// Returns [`SelectionError`] if a label is given but unknown.
pub fn island_group_filter(label: Option<&str>) -> Result<Option<IslandGroup>, SelectionError> {
    match label.filter(|l| !l.is_empty()) {
        Some(label) => island_group(Some(label)).map(Some),
        None => Ok(None),
    }
}

/// Resolves a decade label.
///
/// # Errors
///
/// Returns [`SelectionError`] if the label is missing or unknown.
pub fn decade(label: Option<&str>) -> Result<Decade, SelectionError> {
    parse_label(label, "decade", |label| SelectionError::UnknownDecade {
        label,
    })
}

/// Resolves the disaster column to chart for a division and disaster
/// type.
///
/// # Errors
///
/// Returns [`SelectionError`] if either label is missing or unknown.
pub fn disaster_column(
    division_label: Option<&str>,
    disaster_label: Option<&str>,
) -> Result<&'static str, SelectionError> {
    let division = division(division_label)?;
    let disaster = disaster_type(disaster_label)?;
    Ok(disaster.column(division))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_storm_resolves_to_broadcast_column() {
        assert_eq!(
            disaster_column(Some("Region"), Some("Storm")).unwrap(),
            "Region_storm"
        );
        assert_eq!(
            disaster_column(Some("Province"), Some("Volcanic Activity")).unwrap(),
            "Volcanic Activity Count"
        );
    }

    #[test]
    fn unknown_division_is_unresolved() {
        let err = disaster_column(Some("Unknown"), Some("Storm")).unwrap_err();
        assert!(
            matches!(err, SelectionError::UnknownDivision { ref label } if label == "Unknown"),
            "{err}"
        );
    }

    #[test]
    fn labels_match_exactly() {
        assert!(matches!(
            disaster_type(Some("storm")),
            Err(SelectionError::UnknownDisasterType { .. })
        ));
        assert!(matches!(
            species_category(Some("Fungi")),
            Err(SelectionError::UnknownSpeciesCategory { .. })
        ));
        assert!(matches!(
            decade(Some("1950s")),
            Err(SelectionError::UnknownDecade { .. })
        ));
        assert_eq!(species_category(Some("Birds")).unwrap(), SpeciesCategory::Birds);
    }

    #[test]
    fn missing_labels_name_the_control() {
        let err = division(None).unwrap_err();
        assert!(matches!(err, SelectionError::Missing { dimension: "division" }));

        let err = island_group(Some("")).unwrap_err();
        assert!(matches!(
            err,
            SelectionError::Missing {
                dimension: "island group"
            }
        ));
    }

    #[test]
    fn island_group_filter_is_optional() {
        assert_eq!(island_group_filter(None).unwrap(), None);
        assert_eq!(island_group_filter(Some("")).unwrap(), None);
        assert_eq!(
            island_group_filter(Some("Visayas")).unwrap(),
            Some(IslandGroup::Visayas)
        );
        assert!(island_group_filter(Some("Palawan")).is_err());
    }
}
