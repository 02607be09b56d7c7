//! One query per dashboard chart.
//!
//! Each function resolves its labels through [`crate::selection`], picks
//! the row subset from the [`Dataset`], and reports the plotted column.
//! Selection failures are logged at `debug` and returned as
//! [`ChartQuery::NoSelection`].

use std::collections::{BTreeMap, BTreeSet};

use klima_analytics_models::{
    BarRow, BiodiversityMapParams, BiodiversityMapResult, BiodiversityRow, ChartQuery,
    DisasterBarParams, DisasterBarResult, DisasterLineParams, DisasterLineResult,
    DisasterMapParams, DisasterMapResult, FocusSource, ObservationRow, PlaceCount, PlaceValue,
    TemperatureBarParams, TemperatureBarResult, TemperatureMapParams, TemperatureMapResult,
    ValueRange,
};
use klima_climate_models::{Decade, DisasterType, Division};
use klima_dataset::{Dataset, PlaceRecord, TidyObservation, join};

use crate::{SelectionError, selection};

/// Column holding a tidy observation's temperature.
const VALUE_COLUMN: &str = "value";

fn recover<T>(chart: &str, result: Result<T, SelectionError>) -> ChartQuery<T> {
    match result {
        Ok(value) => ChartQuery::Resolved(value),
        Err(e) => {
            log::debug!("{chart}: no selection ({e})");
            ChartQuery::no_selection(e.to_string())
        }
    }
}

fn observation_row(obs: &TidyObservation) -> ObservationRow {
    ObservationRow {
        name: obs.name.clone(),
        region: obs.region.clone(),
        island_group: obs.island_group,
        decade: obs.decade,
        value: obs.value,
        delta: obs.delta,
    }
}

/// Key a place is identified by at the given division.
fn division_key(place: &PlaceRecord, division: Division) -> &str {
    match division {
        Division::Region => &place.region,
        Division::Province => &place.name,
    }
}

// ---------------------------------------------------------------------------
// Temperature
// ---------------------------------------------------------------------------

/// Temperatures of one island group, grouped by decade for an animated
/// bar chart.
///
/// Also reports the highest value of the earliest decade, drawn as a
/// fixed reference line across every frame.
#[must_use]
pub fn temperature_bar(
    dataset: &Dataset,
    params: &TemperatureBarParams,
) -> ChartQuery<TemperatureBarResult> {
    recover("temperature_bar", try_temperature_bar(dataset, params))
}

fn try_temperature_bar(
    dataset: &Dataset,
    params: &TemperatureBarParams,
) -> Result<TemperatureBarResult, SelectionError> {
    let island_group = selection::island_group(params.island_group.as_deref())?;

    let mut rows: Vec<ObservationRow> = dataset
        .temperature_tidy()
        .iter()
        .filter(|obs| obs.island_group == island_group)
        .map(observation_row)
        .collect();
    // Stable: place order is kept within each decade frame.
    rows.sort_by_key(|row| row.decade);

    let reference_decade = Decade::D1960s;
    let reference_max = rows
        .iter()
        .filter(|row| row.decade == reference_decade)
        .filter_map(|row| row.value)
        .reduce(f64::max);

    Ok(TemperatureBarResult {
        island_group,
        column: VALUE_COLUMN.to_string(),
        rows,
        reference_decade,
        reference_max,
    })
}

/// One decade's temperature for every place.
#[must_use]
pub fn temperature_map(
    dataset: &Dataset,
    params: &TemperatureMapParams,
) -> ChartQuery<TemperatureMapResult> {
    recover("temperature_map", try_temperature_map(dataset, params))
}

fn try_temperature_map(
    dataset: &Dataset,
    params: &TemperatureMapParams,
) -> Result<TemperatureMapResult, SelectionError> {
    let decade = selection::decade(params.decade.as_deref())?;

    // Every loaded place keeps its polygon, measured or not.
    let rows: Vec<PlaceValue> = dataset
        .temperature()
        .iter()
        .map(|place| PlaceValue {
            name: place.name.clone(),
            region: place.region.clone(),
            island_group: place.island_group,
            value: place.temperature.value(decade),
        })
        .collect();

    let value_range = ValueRange::of(rows.iter().filter_map(|row| row.value));

    Ok(TemperatureMapResult {
        decade,
        column: decade.to_string(),
        rows,
        value_range,
    })
}

// ---------------------------------------------------------------------------
// Disaster
// ---------------------------------------------------------------------------

/// Disaster counts for every place at the chosen division.
///
/// At [`Division::Region`] each province carries its region's sum.
#[must_use]
pub fn disaster_map(
    dataset: &Dataset,
    params: &DisasterMapParams,
) -> ChartQuery<DisasterMapResult> {
    recover("disaster_map", try_disaster_map(dataset, params))
}

fn try_disaster_map(
    dataset: &Dataset,
    params: &DisasterMapParams,
) -> Result<DisasterMapResult, SelectionError> {
    let division = selection::division(params.division.as_deref())?;
    let disaster_type = selection::disaster_type(params.disaster_type.as_deref())?;

    let rows: Vec<PlaceCount> = dataset
        .disaster()
        .iter()
        .map(|place| PlaceCount {
            name: place.name.clone(),
            region: place.region.clone(),
            island_group: place.island_group,
            count: place
                .disaster_count(disaster_type, division)
                .unwrap_or_default(),
        })
        .collect();

    let value_range = ValueRange::of(rows.iter().map(|row| row.count));

    Ok(DisasterMapResult {
        division,
        disaster_type,
        column: disaster_type.column(division).to_string(),
        rows,
        value_range,
    })
}

/// Disaster counts of one island group, in ascending order.
///
/// At [`Division::Region`] there is one bar per region, taken from the
/// region aggregate rather than summed over the broadcast rows.
#[must_use]
pub fn disaster_bar(
    dataset: &Dataset,
    params: &DisasterBarParams,
) -> ChartQuery<DisasterBarResult> {
    recover("disaster_bar", try_disaster_bar(dataset, params))
}

fn try_disaster_bar(
    dataset: &Dataset,
    params: &DisasterBarParams,
) -> Result<DisasterBarResult, SelectionError> {
    let division = selection::division(params.division.as_deref())?;
    let disaster_type = selection::disaster_type(params.disaster_type.as_deref())?;
    let island_group = selection::island_group(params.island_group.as_deref())?;

    let rows: Vec<BarRow> = match division {
        Division::Region => {
            let mut rows: Vec<BarRow> = dataset
                .regions()
                .iter()
                .filter(|region| region.island_group == island_group)
                .map(|region| BarRow {
                    label: region.region.clone(),
                    count: region.counts.get(disaster_type),
                })
                .collect();
            rows.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.label.cmp(&b.label)));
            rows
        }
        Division::Province => {
            let mut places: Vec<&PlaceRecord> = dataset
                .disaster()
                .iter()
                .filter(|place| place.island_group == island_group)
                .collect();
            // Province bars keep the total-count order whatever type is plotted.
            places.sort_by(|a, b| {
                a.disasters
                    .get(DisasterType::Total)
                    .cmp(&b.disasters.get(DisasterType::Total))
                    .then_with(|| a.name.cmp(&b.name))
            });
            places
                .into_iter()
                .map(|place| BarRow {
                    label: place.name.clone(),
                    count: place.disasters.get(disaster_type),
                })
                .collect()
        }
    };

    Ok(DisasterBarResult {
        division,
        disaster_type,
        island_group,
        column: disaster_type.column(division).to_string(),
        rows,
    })
}

/// Temperature trend of the clicked region or province.
///
/// A click is either a key (`place`) or a map point (`lng`/`lat`), the
/// key taking precedence. Without a click the focus falls back to the
/// last key of the sorted temperature places at that division.
#[must_use]
pub fn disaster_line(
    dataset: &Dataset,
    params: &DisasterLineParams,
) -> ChartQuery<DisasterLineResult> {
    recover("disaster_line", try_disaster_line(dataset, params))
}

fn try_disaster_line(
    dataset: &Dataset,
    params: &DisasterLineParams,
) -> Result<DisasterLineResult, SelectionError> {
    let division = selection::division(params.division.as_deref())?;
    let (focus, focus_source) = resolve_focus(dataset, division, params)?;

    let rows: Vec<ObservationRow> = dataset
        .temperature_tidy()
        .iter()
        .filter(|obs| match division {
            Division::Region => obs.region == focus,
            Division::Province => obs.name == focus,
        })
        .map(observation_row)
        .collect();

    Ok(DisasterLineResult {
        division,
        focus,
        focus_source,
        column: VALUE_COLUMN.to_string(),
        rows,
    })
}

fn resolve_focus(
    dataset: &Dataset,
    division: Division,
    params: &DisasterLineParams,
) -> Result<(String, FocusSource), SelectionError> {
    if let Some(key) = params.place.as_deref().filter(|k| !k.is_empty()) {
        return resolve_place_key(dataset, division, key).map(|f| (f, FocusSource::Click));
    }

    if let (Some(lng), Some(lat)) = (params.lng, params.lat) {
        let place = dataset
            .locate_place(lng, lat)
            .ok_or(SelectionError::NoPlaceAt { lng, lat })?;
        return Ok((
            division_key(place, division).to_string(),
            FocusSource::Click,
        ));
    }

    let candidates: BTreeSet<&str> = dataset
        .temperature()
        .iter()
        .map(|place| division_key(place, division))
        .collect();
    candidates
        .last()
        .map(|key| ((*key).to_string(), FocusSource::Fallback))
        .ok_or(SelectionError::Empty {
            dimension: "places",
        })
}

/// Resolves a clicked key against the temperature and disaster tables.
///
/// At [`Division::Region`] a province name is accepted and mapped onto
/// its region.
fn resolve_place_key(
    dataset: &Dataset,
    division: Division,
    key: &str,
) -> Result<String, SelectionError> {
    let mut places = dataset.temperature().iter().chain(dataset.disaster());

    let found = match division {
        Division::Province => places.find(|p| p.name == key).map(|p| p.name.clone()),
        Division::Region => {
            let known: BTreeMap<&str, &str> = places
                .flat_map(|p| {
                    let region = p.region.as_str();
                    [(region, region), (p.name.as_str(), region)]
                })
                .collect();
            known.get(key).map(|region| (*region).to_string())
        }
    };

    found.ok_or_else(|| SelectionError::UnknownPlace {
        name: key.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Biodiversity
// ---------------------------------------------------------------------------

/// Species counts for one category, with each place's latest temperature
/// and total disaster count alongside.
///
/// Biodiversity anchors the join; places missing from the temperature or
/// disaster table keep `None` in those fields.
#[must_use]
pub fn biodiversity_map(
    dataset: &Dataset,
    params: &BiodiversityMapParams,
) -> ChartQuery<BiodiversityMapResult> {
    recover("biodiversity_map", try_biodiversity_map(dataset, params))
}

fn try_biodiversity_map(
    dataset: &Dataset,
    params: &BiodiversityMapParams,
) -> Result<BiodiversityMapResult, SelectionError> {
    let category = selection::species_category(params.category.as_deref())?;
    let island_group = selection::island_group_filter(params.island_group.as_deref())?;

    let (joined, report) = join::left_join3(
        dataset.biodiversity(),
        dataset.temperature(),
        dataset.disaster(),
    );

    let rows: Vec<BiodiversityRow> = joined
        .iter()
        .filter(|j| island_group.is_none_or(|group| j.primary.island_group == group))
        .map(|j| {
            let latest = j
                .secondary
                .and_then(|t| t.temperature.values.last_key_value())
                .map(|(decade, value)| (*decade, *value));
            BiodiversityRow {
                name: j.primary.name.clone(),
                region: j.primary.region.clone(),
                island_group: j.primary.island_group,
                species_count: j.primary.species_count(category).unwrap_or_default(),
                latest_temperature: latest.map(|(_, value)| value),
                temperature_change: latest.and_then(|(decade, _)| {
                    j.secondary.and_then(|t| t.temperature.delta(decade))
                }),
                disaster_total: j.tertiary.map(|d| d.disasters.get(DisasterType::Total)),
            }
        })
        .collect();

    let kept: BTreeSet<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    let retain = |names: Vec<String>| -> Vec<String> {
        names
            .into_iter()
            .filter(|name| kept.contains(name.as_str()))
            .collect()
    };
    let unmatched_temperature = retain(report.unmatched_secondary);
    let unmatched_disaster = retain(report.unmatched_tertiary);

    let value_range = ValueRange::of(rows.iter().map(|row| row.species_count));

    Ok(BiodiversityMapResult {
        category,
        island_group,
        column: category.column().to_string(),
        rows,
        value_range,
        unmatched_temperature,
        unmatched_disaster,
    })
}

#[cfg(test)]
mod tests {
    use klima_climate_models::{IslandGroup, SpeciesCategory};
    use klima_dataset::fixtures;
    use klima_dataset_models::DatasetId;

    use super::*;

    fn line(
        division: &str,
        place: Option<&str>,
        point: Option<(f64, f64)>,
    ) -> ChartQuery<DisasterLineResult> {
        disaster_line(
            &fixtures::dataset(),
            &DisasterLineParams {
                division: Some(division.to_string()),
                place: place.map(str::to_string),
                lng: point.map(|(lng, _)| lng),
                lat: point.map(|(_, lat)| lat),
            },
        )
    }

    fn names(rows: &[ObservationRow]) -> BTreeSet<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn temperature_bar_uses_selected_island_group() {
        let result = temperature_bar(
            &fixtures::dataset(),
            &TemperatureBarParams {
                island_group: Some("Luzon".to_string()),
            },
        )
        .resolved()
        .unwrap();

        assert_eq!(result.island_group, IslandGroup::Luzon);
        assert_eq!(result.column, "value");
        assert_eq!(result.rows.len(), 14);
        assert!(result.rows.iter().all(|r| r.island_group == IslandGroup::Luzon));

        // Grouped by decade, place order kept within each frame.
        assert_eq!(result.rows[0].decade, Decade::D1960s);
        assert_eq!(result.rows[0].name, "Abra");
        assert_eq!(result.rows[1].decade, Decade::D1960s);
        assert_eq!(result.rows[1].name, "Ilocos Norte");
        assert!(result.rows.windows(2).all(|w| w[0].decade <= w[1].decade));

        assert_eq!(result.reference_decade, Decade::D1960s);
        assert_eq!(result.reference_max, Some(26.9));
    }

    #[test]
    fn temperature_bar_unknown_island_group_is_no_selection() {
        let result = temperature_bar(
            &fixtures::dataset(),
            &TemperatureBarParams {
                island_group: Some("Palawan".to_string()),
            },
        );
        assert!(!result.is_resolved());
    }

    #[test]
    fn temperature_map_reports_decade_values() {
        let result = temperature_map(
            &fixtures::dataset(),
            &TemperatureMapParams {
                decade: Some("1960s".to_string()),
            },
        )
        .resolved()
        .unwrap();

        assert_eq!(result.column, "1960s");
        assert_eq!(result.rows.len(), 4);

        let davao = result.rows.iter().find(|r| r.name == "Davao del Sur").unwrap();
        assert_eq!(davao.value, None);

        let range = result.value_range.unwrap();
        assert_eq!(range.min, 25.8);
        assert_eq!(range.max, 27.4);
    }

    #[test]
    fn temperature_map_keeps_places_without_measurements() {
        let text = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"name":"Abra","admin_div":"Province","island_group":"Luzon","Region":"CAR","1960s":25.0},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}},
            {"type":"Feature","properties":{"name":"Batanes","admin_div":"Province","island_group":"Luzon","Region":"Region II","1960s":null},
             "geometry":{"type":"Polygon","coordinates":[[[2,2],[3,2],[3,3],[2,2]]]}}]}"#;
        let temperature = fixtures::parse_table(DatasetId::Temperature, text);
        let dataset = Dataset::from_tables(temperature, vec![], vec![]);
        assert_eq!(dataset.temperature_tidy().len(), 1);

        let result = temperature_map(
            &dataset,
            &TemperatureMapParams {
                decade: Some("1960s".to_string()),
            },
        )
        .resolved()
        .unwrap();

        let names: Vec<&str> = result.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Abra", "Batanes"]);
        assert_eq!(result.rows[1].value, None);
        assert_eq!(result.rows[1].region, "Region II");
        assert_eq!(result.value_range.unwrap().max, 25.0);
    }

    #[test]
    fn disaster_map_region_storm() {
        let result = disaster_map(
            &fixtures::dataset(),
            &DisasterMapParams {
                division: Some("Region".to_string()),
                disaster_type: Some("Storm".to_string()),
            },
        )
        .resolved()
        .unwrap();

        assert_eq!(result.column, "Region_storm");
        assert_eq!(result.rows.len(), 5);
        for name in ["Abra", "Benguet"] {
            let row = result.rows.iter().find(|r| r.name == name).unwrap();
            assert_eq!(row.count, 10, "{name}");
        }
        assert_eq!(result.value_range, Some(ValueRange { min: 3, max: 11 }));
    }

    #[test]
    fn disaster_map_province_counts() {
        let result = disaster_map(
            &fixtures::dataset(),
            &DisasterMapParams {
                division: Some("Province".to_string()),
                disaster_type: Some("Storm".to_string()),
            },
        )
        .resolved()
        .unwrap();

        assert_eq!(result.column, "Storm Count");
        let abra = result.rows.iter().find(|r| r.name == "Abra").unwrap();
        assert_eq!(abra.count, 4);
    }

    #[test]
    fn disaster_map_unknown_division_is_no_selection() {
        let result = disaster_map(
            &fixtures::dataset(),
            &DisasterMapParams {
                division: Some("Unknown".to_string()),
                disaster_type: Some("Storm".to_string()),
            },
        );
        assert!(matches!(
            result,
            ChartQuery::NoSelection { ref reason } if reason.contains("Unknown")
        ));
    }

    #[test]
    fn disaster_bar_region_has_one_bar_per_region() {
        let result = disaster_bar(
            &fixtures::dataset(),
            &DisasterBarParams {
                division: Some("Region".to_string()),
                disaster_type: Some("Storm".to_string()),
                island_group: Some("Luzon".to_string()),
            },
        )
        .resolved()
        .unwrap();

        assert_eq!(
            result.rows,
            vec![
                BarRow {
                    label: "Region I".to_string(),
                    count: 7,
                },
                BarRow {
                    label: "CAR".to_string(),
                    count: 10,
                },
            ]
        );
    }

    #[test]
    fn disaster_bar_province_is_ascending() {
        let result = disaster_bar(
            &fixtures::dataset(),
            &DisasterBarParams {
                division: Some("Province".to_string()),
                disaster_type: Some("Total Disaster".to_string()),
                island_group: Some("Luzon".to_string()),
            },
        )
        .resolved()
        .unwrap();

        assert_eq!(result.column, "Total Disaster Count");
        let labels: Vec<&str> = result.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Abra", "Ilocos Norte", "Benguet"]);
    }

    #[test]
    fn disaster_bar_province_keeps_total_order_for_other_types() {
        let result = disaster_bar(
            &fixtures::dataset(),
            &DisasterBarParams {
                division: Some("Province".to_string()),
                disaster_type: Some("Storm".to_string()),
                island_group: Some("Luzon".to_string()),
            },
        )
        .resolved()
        .unwrap();

        assert_eq!(result.column, "Storm Count");
        let bars: Vec<(&str, u64)> = result
            .rows
            .iter()
            .map(|r| (r.label.as_str(), r.count))
            .collect();
        assert_eq!(bars, vec![("Abra", 4), ("Ilocos Norte", 7), ("Benguet", 6)]);
    }

    #[test]
    fn disaster_bar_unknown_type_is_no_selection() {
        let result = disaster_bar(
            &fixtures::dataset(),
            &DisasterBarParams {
                division: Some("Region".to_string()),
                disaster_type: Some("Tsunami".to_string()),
                island_group: Some("Luzon".to_string()),
            },
        );
        assert!(!result.is_resolved());
    }

    #[test]
    fn line_without_click_falls_back_to_last_sorted_key() {
        let result = line("Province", None, None).resolved().unwrap();
        assert_eq!(result.focus, "Ilocos Norte");
        assert_eq!(result.focus_source, FocusSource::Fallback);
        assert_eq!(result.rows.len(), 7);
        assert_eq!(names(&result.rows), BTreeSet::from(["Ilocos Norte"]));

        let result = line("Region", None, None).resolved().unwrap();
        assert_eq!(result.focus, "Region XI");
        assert_eq!(names(&result.rows), BTreeSet::from(["Davao del Sur"]));
    }

    #[test]
    fn line_click_overrides_fallback() {
        let result = line("Province", Some("Abra"), None).resolved().unwrap();
        assert_eq!(result.focus, "Abra");
        assert_eq!(result.focus_source, FocusSource::Click);
        assert_eq!(result.rows.len(), 7);
        assert!(result.rows.windows(2).all(|w| w[0].decade < w[1].decade));
    }

    #[test]
    fn line_region_accepts_region_or_province_key() {
        let by_region = line("Region", Some("CAR"), None).resolved().unwrap();
        let by_province = line("Region", Some("Abra"), None).resolved().unwrap();
        assert_eq!(by_region.focus, "CAR");
        assert_eq!(by_province.focus, "CAR");
        assert_eq!(by_region.rows, by_province.rows);
    }

    #[test]
    fn line_point_click_resolves_through_polygons() {
        // Inside Benguet, which has no temperature series of its own.
        let result = line("Region", None, Some((120.75, 16.5))).resolved().unwrap();
        assert_eq!(result.focus, "CAR");
        assert_eq!(result.focus_source, FocusSource::Click);
        assert_eq!(names(&result.rows), BTreeSet::from(["Abra"]));

        let result = line("Province", None, Some((120.75, 16.5))).resolved().unwrap();
        assert_eq!(result.focus, "Benguet");
        assert!(result.rows.is_empty());
    }

    #[test]
    fn line_unresolvable_clicks_are_no_selection() {
        assert!(!line("Province", Some("Atlantis"), None).is_resolved());
        assert!(!line("Province", None, Some((0.0, 0.0))).is_resolved());
        assert!(!line("Unknown", Some("Abra"), None).is_resolved());
    }

    #[test]
    fn biodiversity_map_keeps_unmatched_places() {
        let result = biodiversity_map(
            &fixtures::dataset(),
            &BiodiversityMapParams {
                category: Some("Birds".to_string()),
                island_group: None,
            },
        )
        .resolved()
        .unwrap();

        assert_eq!(result.category, SpeciesCategory::Birds);
        assert_eq!(result.column, "Bird Count");
        assert_eq!(result.rows.len(), 3);

        let abra = &result.rows[0];
        assert_eq!(abra.name, "Abra");
        assert_eq!(abra.species_count, 187);
        assert_eq!(abra.latest_temperature, Some(26.7));
        assert_eq!(abra.temperature_change, Some(0.9));
        assert_eq!(abra.disaster_total, Some(9));

        // Cebu's 2020s delta is missing, not zero.
        let cebu = result.rows.iter().find(|r| r.name == "Cebu").unwrap();
        assert_eq!(cebu.latest_temperature, Some(28.3));
        assert_eq!(cebu.temperature_change, None);

        let palawan = result.rows.iter().find(|r| r.name == "Palawan").unwrap();
        assert_eq!(palawan.species_count, 472);
        assert_eq!(palawan.latest_temperature, None);
        assert_eq!(palawan.disaster_total, None);

        assert_eq!(result.unmatched_temperature, vec!["Palawan".to_string()]);
        assert_eq!(result.unmatched_disaster, vec!["Palawan".to_string()]);
        assert_eq!(result.value_range, Some(ValueRange { min: 187, max: 472 }));
    }

    #[test]
    fn biodiversity_map_island_group_filter() {
        let result = biodiversity_map(
            &fixtures::dataset(),
            &BiodiversityMapParams {
                category: Some("All Species".to_string()),
                island_group: Some("Visayas".to_string()),
            },
        )
        .resolved()
        .unwrap();

        assert_eq!(result.island_group, Some(IslandGroup::Visayas));
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].name, "Cebu");
        assert_eq!(result.rows[0].species_count, 538);
        assert!(result.unmatched_temperature.is_empty());
    }

    #[test]
    fn biodiversity_map_unknown_category_is_no_selection() {
        let result = biodiversity_map(
            &fixtures::dataset(),
            &BiodiversityMapParams {
                category: Some("Fungi".to_string()),
                island_group: None,
            },
        );
        assert!(!result.is_resolved());
    }
}
