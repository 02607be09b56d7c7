//! Reads dataset files into typed [`PlaceRecord`] tables.
//!
//! The column layout of a file is resolved once into a [`ColumnMap`]
//! (identifying columns from the TOML definition, measurement columns
//! from the fixed vocabularies), then every feature is converted through
//! that map. Any missing or malformed column aborts the load.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::Arc;

use geo::MultiPolygon;
use geojson::{Feature, GeoJson, JsonObject};
use klima_climate_models::{Decade, DisasterType, IslandGroup, SpeciesCategory};
use klima_dataset_models::{DatasetDomain, DatasetId, DatasetSource, PlaceFieldMapping};

use crate::{DatasetError, PlaceRecord};

/// Loads the registered dataset `id` from `data_dir`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the definition is missing, the file cannot
/// be read, or any feature is malformed.
pub fn load(id: DatasetId, data_dir: &Path) -> Result<Vec<PlaceRecord>, DatasetError> {
    let source = crate::registry::source(id)?;
    load_source(&source, data_dir)
}

/// Loads the file described by `source` from `data_dir`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be read or parsed.
pub fn load_source(
    source: &DatasetSource,
    data_dir: &Path,
) -> Result<Vec<PlaceRecord>, DatasetError> {
    let path = crate::paths::source_path(data_dir, source);
    log::info!(
        "Loading {} ({}) from {}",
        source.id,
        source.name,
        path.display()
    );

    let content = std::fs::read_to_string(&path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let records = parse(source, &content, &source.file)?;
    log::info!("{}: loaded {} places", source.id, records.len());

    Ok(records)
}

/// Parses `GeoJSON` text laid out as described by `source`.
///
/// `file` labels error messages.
///
/// # Errors
///
/// Returns [`DatasetError`] if the text is not a `FeatureCollection` or
/// any feature is malformed.
pub fn parse(
    source: &DatasetSource,
    content: &str,
    file: &str,
) -> Result<Vec<PlaceRecord>, DatasetError> {
    let geojson: GeoJson = content.parse().map_err(|e| DatasetError::GeoJson {
        file: file.to_string(),
        source: Box::new(e),
    })?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(DatasetError::NotFeatureCollection {
            file: file.to_string(),
        });
    };

    let columns = ColumnMap::build(source, &collection.features, file)?;

    let mut seen = BTreeSet::new();
    let mut records = Vec::with_capacity(collection.features.len());

    for (index, feature) in collection.features.into_iter().enumerate() {
        let record = columns.record(feature, index)?;
        if !seen.insert(record.name.clone()) {
            return Err(DatasetError::DuplicateName {
                file: file.to_string(),
                name: record.name,
            });
        }
        records.push(record);
    }

    Ok(records)
}

/// Column-to-field mapping for one file, resolved once per load.
struct ColumnMap<'a> {
    file: &'a str,
    fields: &'a PlaceFieldMapping,
    layout: Layout,
}

/// Measurement columns of a file.
enum Layout {
    Temperature {
        values: Vec<(String, Decade)>,
        deltas: Vec<(String, Decade)>,
    },
    Biodiversity,
    Disaster,
}

impl<'a> ColumnMap<'a> {
    fn build(
        source: &'a DatasetSource,
        features: &[Feature],
        file: &'a str,
    ) -> Result<Self, DatasetError> {
        let layout = match &source.domain {
            DatasetDomain::Temperature {
                value_suffix,
                delta_suffix,
            } => {
                let (values, deltas) = decade_families(features, value_suffix, delta_suffix);
                if values.is_empty() && deltas.is_empty() {
                    return Err(DatasetError::MissingProperty {
                        file: file.to_string(),
                        index: 0,
                        property: format!("<decade>{value_suffix}"),
                    });
                }
                log::debug!(
                    "{file}: {} value columns, {} delta columns",
                    values.len(),
                    deltas.len()
                );
                Layout::Temperature { values, deltas }
            }
            DatasetDomain::Biodiversity => Layout::Biodiversity,
            DatasetDomain::Disaster => Layout::Disaster,
        };

        Ok(Self {
            file,
            fields: &source.fields,
            layout,
        })
    }

    fn record(&self, feature: Feature, index: usize) -> Result<PlaceRecord, DatasetError> {
        let empty = JsonObject::new();
        let props = Properties {
            file: self.file,
            index,
            map: feature.properties.as_ref().unwrap_or(&empty),
        };

        let name = props.required_str(&self.fields.name)?;
        let admin_div = props.required_str(&self.fields.admin_div)?;
        let island_group_label = props.required_str(&self.fields.island_group)?;
        let island_group: IslandGroup = island_group_label.parse().map_err(|_| {
            props.invalid(
                &self.fields.island_group,
                format!("'{island_group_label}' is not one of Luzon, Visayas, Mindanao"),
            )
        })?;
        let region = props.required_str(&self.fields.region)?;
        let geometry = Arc::new(self.geometry(feature.geometry, index)?);

        let mut record = PlaceRecord::new(name, admin_div, island_group, region, geometry);

        match &self.layout {
            Layout::Temperature { values, deltas } => {
                for (column, decade) in values {
                    if let Some(value) = props.optional_number(column)? {
                        record.temperature.values.insert(*decade, value);
                    }
                }
                for (column, decade) in deltas {
                    if let Some(delta) = props.optional_number(column)? {
                        record.temperature.deltas.insert(*decade, delta);
                    }
                }
            }
            Layout::Biodiversity => {
                for category in SpeciesCategory::all() {
                    let count = props.count(category.column())?;
                    record.species.insert(*category, count);
                }
            }
            Layout::Disaster => {
                for disaster in DisasterType::all() {
                    let count = props.count(disaster.province_column())?;
                    record.disasters.set(*disaster, count);
                }
            }
        }

        Ok(record)
    }

    fn geometry(
        &self,
        geometry: Option<geojson::Geometry>,
        index: usize,
    ) -> Result<MultiPolygon<f64>, DatasetError> {
        let invalid = |message: String| DatasetError::InvalidGeometry {
            file: self.file.to_string(),
            index,
            message,
        };

        let geometry = geometry.ok_or_else(|| invalid("geometry is null".to_string()))?;
        let geo_geom =
            geo::Geometry::<f64>::try_from(geometry).map_err(|e| invalid(e.to_string()))?;

        match geo_geom {
            geo::Geometry::MultiPolygon(mp) => Ok(mp),
            geo::Geometry::Polygon(p) => Ok(MultiPolygon(vec![p])),
            other => Err(invalid(format!(
                "expected Polygon or MultiPolygon, found {}",
                geometry_kind(&other)
            ))),
        }
    }
}

/// Partitions every property name seen across `features` into the value
/// and delta families, sorted chronologically.
///
/// The delta suffix is checked first so a value suffix that is itself a
/// suffix of the delta suffix (such as the empty string) cannot claim
/// delta columns.
fn decade_families(
    features: &[Feature],
    value_suffix: &str,
    delta_suffix: &str,
) -> (Vec<(String, Decade)>, Vec<(String, Decade)>) {
    let mut values = BTreeMap::new();
    let mut deltas = BTreeMap::new();

    let keys: BTreeSet<&String> = features
        .iter()
        .filter_map(|f| f.properties.as_ref())
        .flat_map(JsonObject::keys)
        .collect();

    for key in keys {
        if let Some(decade) = strip_decade(key, delta_suffix) {
            deltas.insert(decade, key.clone());
        } else if let Some(decade) = strip_decade(key, value_suffix) {
            values.insert(decade, key.clone());
        }
    }

    let flip = |m: BTreeMap<Decade, String>| -> Vec<(String, Decade)> {
        m.into_iter().map(|(d, c)| (c, d)).collect()
    };
    (flip(values), flip(deltas))
}

fn strip_decade(column: &str, suffix: &str) -> Option<Decade> {
    column.strip_suffix(suffix)?.parse().ok()
}

const fn geometry_kind(geometry: &geo::Geometry<f64>) -> &'static str {
    match geometry {
        geo::Geometry::Point(_) => "Point",
        geo::Geometry::MultiPoint(_) => "MultiPoint",
        geo::Geometry::Line(_) | geo::Geometry::LineString(_) => "LineString",
        geo::Geometry::MultiLineString(_) => "MultiLineString",
        geo::Geometry::GeometryCollection(_) => "GeometryCollection",
        _ => "an unsupported geometry",
    }
}

/// Property accessors that attach file and feature context to errors.
struct Properties<'a> {
    file: &'a str,
    index: usize,
    map: &'a JsonObject,
}

impl Properties<'_> {
    fn missing(&self, property: &str) -> DatasetError {
        DatasetError::MissingProperty {
            file: self.file.to_string(),
            index: self.index,
            property: property.to_string(),
        }
    }

    fn invalid(&self, property: &str, message: String) -> DatasetError {
        DatasetError::InvalidValue {
            file: self.file.to_string(),
            index: self.index,
            property: property.to_string(),
            message,
        }
    }

    fn required_str(&self, property: &str) -> Result<String, DatasetError> {
        let value = self.map.get(property).ok_or_else(|| self.missing(property))?;
        let s = value
            .as_str()
            .map(str::trim)
            .ok_or_else(|| self.invalid(property, format!("expected a string, found {value}")))?;
        if s.is_empty() {
            return Err(self.invalid(property, "value is empty".to_string()));
        }
        Ok(s.to_string())
    }

    /// Absent and `null` both read as a missing measurement.
    fn optional_number(&self, property: &str) -> Result<Option<f64>, DatasetError> {
        match self.map.get(property) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => value
                .as_f64()
                .filter(|v| v.is_finite())
                .map(Some)
                .ok_or_else(|| self.invalid(property, format!("expected a number, found {value}"))),
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_cmp
    )]
    fn count(&self, property: &str) -> Result<u64, DatasetError> {
        // 2^64, the first whole number past `u64::MAX`.
        const COUNT_LIMIT: f64 = 18_446_744_073_709_551_616.0;
        let value = self.map.get(property).ok_or_else(|| self.missing(property))?;
        if let Some(count) = value.as_u64() {
            return Ok(count);
        }
        value
            .as_f64()
            .filter(|v| v.is_finite() && (0.0..COUNT_LIMIT).contains(v) && v.fract() == 0.0)
            .map(|v| v as u64)
            .ok_or_else(|| {
                self.invalid(
                    property,
                    format!("expected a non-negative whole number, found {value}"),
                )
            })
    }
}
