//! Left joins between place tables on the shared `name` key.
//!
//! The primary table anchors the join: every primary row is kept, in
//! order, with `None` where a secondary table has no row of that name.

use std::collections::BTreeMap;

use crate::PlaceRecord;

/// One primary row with its matches in up to two secondary tables.
#[derive(Debug, Clone, Copy)]
pub struct JoinedPlace<'a> {
    /// Row of the anchoring table.
    pub primary: &'a PlaceRecord,
    /// Matching row of the first secondary table.
    pub secondary: Option<&'a PlaceRecord>,
    /// Matching row of the second secondary table.
    pub tertiary: Option<&'a PlaceRecord>,
}

/// Primary names that had no match, per secondary table.
///
/// Informational only: unmatched rows are still part of the join output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinReport {
    /// Names missing from the first secondary table.
    pub unmatched_secondary: Vec<String>,
    /// Names missing from the second secondary table.
    pub unmatched_tertiary: Vec<String>,
}

impl JoinReport {
    /// Returns `true` if every primary row matched every secondary table.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmatched_secondary.is_empty() && self.unmatched_tertiary.is_empty()
    }
}

fn index_by_name(table: &[PlaceRecord]) -> BTreeMap<&str, &PlaceRecord> {
    table.iter().map(|p| (p.name.as_str(), p)).collect()
}

/// Left-joins `secondary` onto `primary` by place name.
#[must_use]
pub fn left_join<'a>(
    primary: &'a [PlaceRecord],
    secondary: &'a [PlaceRecord],
) -> (Vec<JoinedPlace<'a>>, JoinReport) {
    left_join3(primary, secondary, &[])
}

/// Left-joins two secondary tables onto `primary` by place name.
#[must_use]
pub fn left_join3<'a>(
    primary: &'a [PlaceRecord],
    secondary: &'a [PlaceRecord],
    tertiary: &'a [PlaceRecord],
) -> (Vec<JoinedPlace<'a>>, JoinReport) {
    let secondary_by_name = index_by_name(secondary);
    let tertiary_by_name = index_by_name(tertiary);
    let mut report = JoinReport::default();

    let joined: Vec<JoinedPlace<'a>> = primary
        .iter()
        .map(|place| {
            let key = place.name.as_str();
            let secondary = secondary_by_name.get(key).copied();
            let tertiary = tertiary_by_name.get(key).copied();

            if secondary.is_none() {
                report.unmatched_secondary.push(place.name.clone());
            }
            if tertiary.is_none() && !tertiary_by_name.is_empty() {
                report.unmatched_tertiary.push(place.name.clone());
            }

            JoinedPlace {
                primary: place,
                secondary,
                tertiary,
            }
        })
        .collect();

    if !report.is_complete() {
        log::debug!(
            "Join kept {} primary rows without a secondary match and {} without a tertiary match",
            report.unmatched_secondary.len(),
            report.unmatched_tertiary.len()
        );
    }

    (joined, report)
}
