#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Closed vocabularies shared by every Klima Insights crate.
//!
//! Each selection dimension exposed by the dashboard (decade, island
//! group, division, disaster type, species category) is a fixed enum
//! here. Labels parse through `strum`, and the label-to-column lookup
//! tables live next to the variants so an unmapped label can never fall
//! through to an arbitrary column.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One of the seven decade buckets on the temperature time axis.
///
/// Variant order is chronological, so the derived `Ord` sorts
/// `1960s < 1970s < ... < 2020s` regardless of label spelling.
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
pub enum Decade {
    /// 1960-1969
    #[serde(rename = "1960s")]
    #[strum(serialize = "1960s")]
    D1960s,
    /// 1970-1979
    #[serde(rename = "1970s")]
    #[strum(serialize = "1970s")]
    D1970s,
    /// 1980-1989
    #[serde(rename = "1980s")]
    #[strum(serialize = "1980s")]
    D1980s,
    /// 1990-1999
    #[serde(rename = "1990s")]
    #[strum(serialize = "1990s")]
    D1990s,
    /// 2000-2009
    #[serde(rename = "2000s")]
    #[strum(serialize = "2000s")]
    D2000s,
    /// 2010-2019
    #[serde(rename = "2010s")]
    #[strum(serialize = "2010s")]
    D2010s,
    /// 2020-2029
    #[serde(rename = "2020s")]
    #[strum(serialize = "2020s")]
    D2020s,
}

impl Decade {
    /// Returns all decades in chronological order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::D1960s,
            Self::D1970s,
            Self::D1980s,
            Self::D1990s,
            Self::D2000s,
            Self::D2010s,
            Self::D2020s,
        ]
    }

    /// First year of the decade.
    #[must_use]
    pub const fn start_year(self) -> u16 {
        match self {
            Self::D1960s => 1960,
            Self::D1970s => 1970,
            Self::D1980s => 1980,
            Self::D1990s => 1990,
            Self::D2000s => 2000,
            Self::D2010s => 2010,
            Self::D2020s => 2020,
        }
    }
}

/// Coarse geographic partition of the archipelago.
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
pub enum IslandGroup {
    /// Northern island group
    Luzon,
    /// Central island group
    Visayas,
    /// Southern island group
    Mindanao,
}

impl IslandGroup {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Luzon, Self::Visayas, Self::Mindanao]
    }
}

/// Granularity used by the disaster charts.
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
pub enum Division {
    /// Regional totals broadcast onto every province of the region
    Region,
    /// Per-province counts
    Province,
}

impl Division {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Region, Self::Province]
    }

    /// Column holding the key a row is identified by at this granularity.
    #[must_use]
    pub const fn key_column(self) -> &'static str {
        match self {
            Self::Region => "Region",
            Self::Province => "name",
        }
    }
}

/// Disaster categories counted per province.
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
pub enum DisasterType {
    /// Sum over every disaster type
    #[serde(rename = "Total Disaster")]
    #[strum(serialize = "Total Disaster")]
    Total,
    /// Typhoons and tropical storms
    Storm,
    /// Riverine and coastal flooding
    Flood,
    /// Seismic events
    Earthquake,
    /// Eruptions and related activity
    #[serde(rename = "Volcanic Activity")]
    #[strum(serialize = "Volcanic Activity")]
    VolcanicActivity,
    /// Landslides and mudflows
    #[serde(rename = "Mass Movement")]
    #[strum(serialize = "Mass Movement")]
    MassMovement,
    /// Prolonged dry spells
    Drought,
}

impl DisasterType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Total,
            Self::Storm,
            Self::Flood,
            Self::Earthquake,
            Self::VolcanicActivity,
            Self::MassMovement,
            Self::Drought,
        ]
    }

    /// Source column holding the per-province count.
    #[must_use]
    pub const fn province_column(self) -> &'static str {
        match self {
            Self::Total => "Total Disaster Count",
            Self::Storm => "Storm Count",
            Self::Flood => "Flood Count",
            Self::Earthquake => "Earthquake Count",
            Self::VolcanicActivity => "Volcanic Activity Count",
            Self::MassMovement => "Mass Movement Count",
            Self::Drought => "Drought Count",
        }
    }

    /// Derived column holding the region-wide sum broadcast onto each
    /// province.
    #[must_use]
    pub const fn region_column(self) -> &'static str {
        match self {
            Self::Total => "Region_tot",
            Self::Storm => "Region_storm",
            Self::Flood => "Region_flood",
            Self::Earthquake => "Region_earth",
            Self::VolcanicActivity => "Region_vol",
            Self::MassMovement => "Region_mass",
            Self::Drought => "Region_drought",
        }
    }

    /// Resolves the column to chart for this disaster type at the given
    /// granularity.
    #[must_use]
    pub const fn column(self, division: Division) -> &'static str {
        match division {
            Division::Region => self.region_column(),
            Division::Province => self.province_column(),
        }
    }
}

/// Species groups counted per province in the biodiversity dataset.
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
pub enum SpeciesCategory {
    /// Every recorded species
    #[serde(rename = "All Species")]
    #[strum(serialize = "All Species")]
    All,
    /// Species assessed as threatened
    #[serde(rename = "Threatened Species")]
    #[strum(serialize = "Threatened Species")]
    Threatened,
    /// Mammalia
    Mammals,
    /// Aves
    Birds,
    /// Reptilia
    Reptiles,
    /// Amphibia
    Amphibians,
    /// Vascular plants
    Plants,
}

impl SpeciesCategory {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::All,
            Self::Threatened,
            Self::Mammals,
            Self::Birds,
            Self::Reptiles,
            Self::Amphibians,
            Self::Plants,
        ]
    }

    /// Source column holding the count for this category.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::All => "Species Count",
            Self::Threatened => "Threatened Count",
            Self::Mammals => "Mammal Count",
            Self::Birds => "Bird Count",
            Self::Reptiles => "Reptile Count",
            Self::Amphibians => "Amphibian Count",
            Self::Plants => "Plant Count",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn decades_sort_chronologically() {
        let mut shuffled = vec![Decade::D2020s, Decade::D1960s, Decade::D1990s];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![Decade::D1960s, Decade::D1990s, Decade::D2020s]
        );

        let years: Vec<u16> = Decade::all().iter().map(|d| d.start_year()).collect();
        assert!(years.windows(2).all(|w| w[0] + 10 == w[1]));
    }

    #[test]
    fn decade_labels_parse() {
        for decade in Decade::all() {
            assert_eq!(Decade::from_str(&decade.to_string()).unwrap(), *decade);
        }
        assert_eq!("1960s".parse::<Decade>().unwrap(), Decade::D1960s);
        assert!("1950s".parse::<Decade>().is_err());
        assert!("D1960s".parse::<Decade>().is_err());
    }

    #[test]
    fn disaster_labels_match_dropdown() {
        let labels: Vec<String> = DisasterType::all().iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec![
                "Total Disaster",
                "Storm",
                "Flood",
                "Earthquake",
                "Volcanic Activity",
                "Mass Movement",
                "Drought",
            ]
        );
        assert!("Tsunami".parse::<DisasterType>().is_err());
    }

    #[test]
    fn disaster_columns_are_unique_per_division() {
        for division in Division::all() {
            let columns: BTreeSet<&str> = DisasterType::all()
                .iter()
                .map(|t| t.column(*division))
                .collect();
            assert_eq!(columns.len(), DisasterType::all().len());
        }
        assert_eq!(
            DisasterType::Storm.column(Division::Region),
            "Region_storm"
        );
        assert_eq!(
            DisasterType::Storm.column(Division::Province),
            "Storm Count"
        );
    }

    #[test]
    fn species_columns_are_unique() {
        let columns: BTreeSet<&str> = SpeciesCategory::all()
            .iter()
            .map(|c| c.column())
            .collect();
        assert_eq!(columns.len(), SpeciesCategory::all().len());
    }

    #[test]
    fn unknown_division_is_rejected() {
        assert!("Unknown".parse::<Division>().is_err());
        assert_eq!("Province".parse::<Division>().unwrap(), Division::Province);
    }
}
