//! In-memory spatial index for resolving map clicks to places.
//!
//! Builds an R-tree over place polygons once at load time and answers
//! point-in-polygon lookups with the row index of the containing place.

use std::sync::Arc;

use geo::{BoundingRect, Contains, MultiPolygon};
use rstar::{AABB, RTree, RTreeObject};

use crate::PlaceRecord;

/// A place polygon stored in the R-tree with its row index.
struct PlaceEntry {
    row: usize,
    envelope: AABB<[f64; 2]>,
    polygon: Arc<MultiPolygon<f64>>,
}

impl RTreeObject for PlaceEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// R-tree over the polygons of one place table.
pub struct PlaceIndex {
    tree: RTree<PlaceEntry>,
}

impl std::fmt::Debug for PlaceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceIndex")
            .field("size", &self.tree.size())
            .finish()
    }
}

impl PlaceIndex {
    /// Indexes every place with a non-empty polygon.
    #[must_use]
    pub fn build(places: &[PlaceRecord]) -> Self {
        let entries: Vec<PlaceEntry> = places
            .iter()
            .enumerate()
            .filter_map(|(row, place)| {
                let Some(envelope) = compute_envelope(&place.geometry) else {
                    log::warn!("Place {} has an empty geometry; not indexed", place.name);
                    return None;
                };
                Some(PlaceEntry {
                    row,
                    envelope,
                    polygon: Arc::clone(&place.geometry),
                })
            })
            .collect();

        let tree = RTree::bulk_load(entries);
        log::debug!("Indexed {} place polygons", tree.size());

        Self { tree }
    }

    /// Number of indexed polygons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Returns `true` if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Row index of the place containing the point.
    ///
    /// Provinces tile without overlap, so the lowest matching row wins to
    /// keep the answer deterministic.
    #[must_use]
    pub fn lookup(&self, lng: f64, lat: f64) -> Option<usize> {
        let point = geo::Point::new(lng, lat);
        let query_env = AABB::from_point([lng, lat]);

        self.tree
            .locate_in_envelope_intersecting(&query_env)
            .filter(|entry| entry.polygon.contains(&point))
            .map(|entry| entry.row)
            .min()
    }
}

/// Compute the bounding box envelope for a [`MultiPolygon`].
fn compute_envelope(mp: &MultiPolygon<f64>) -> Option<AABB<[f64; 2]>> {
    mp.bounding_rect()
        .map(|rect| AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]))
}

#[cfg(test)]
mod tests {
    use klima_climate_models::IslandGroup;
    use klima_dataset_models::DatasetId;

    use super::*;
    use crate::fixtures;

    #[test]
    fn finds_containing_place() {
        let places = fixtures::table(DatasetId::Disaster);
        let index = PlaceIndex::build(&places);
        assert_eq!(index.len(), places.len());

        let row = index.lookup(123.85, 10.05).unwrap();
        assert_eq!(places[row].name, "Cebu");

        let row = index.lookup(120.75, 17.55).unwrap();
        assert_eq!(places[row].name, "Abra");
    }

    #[test]
    fn points_outside_every_polygon_miss() {
        let places = fixtures::table(DatasetId::Disaster);
        let index = PlaceIndex::build(&places);
        assert_eq!(index.lookup(100.0, 0.0), None);
        // Between Benguet (16.3-16.8) and Abra (17.3-17.8).
        assert_eq!(index.lookup(120.75, 17.0), None);
    }

    #[test]
    fn empty_geometries_are_skipped() {
        let places = vec![PlaceRecord::new(
            "Nowhere",
            "Province",
            IslandGroup::Luzon,
            "CAR",
            Arc::new(MultiPolygon(vec![])),
        )];
        let index = PlaceIndex::build(&places);
        assert!(index.is_empty());
        assert_eq!(index.lookup(0.0, 0.0), None);
    }
}
