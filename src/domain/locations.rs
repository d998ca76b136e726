// src/domain/locations.rs

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// One sub-location bucket. On the wire it is a single-key object,
/// `{"Mall Road": 2}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubLocationCount {
    pub name: String,
    pub count: u64,
}

impl Serialize for SubLocationCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.count)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for SubLocationCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = HashMap::<String, u64>::deserialize(deserializer)?;
        let mut entries = map.into_iter();
        match (entries.next(), entries.next()) {
            (Some((name, count)), None) => Ok(SubLocationCount { name, count }),
            _ => Err(serde::de::Error::custom(
                "sub-location bucket must have exactly one entry",
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSummary {
    pub location: String,
    pub count: u64,
    pub sub_locations: Vec<SubLocationCount>,
}

/// Rolls `(location, sub_location)` pairs, given in storage order, up into
/// per-location summaries.
///
/// Sub-location buckets keep the order in which each name first appears.
/// A blank sub-location is bucketed under `""` like any other value.
/// Locations are sorted by count descending; equal counts keep first
/// appearance order.
pub fn summarize_locations<I>(pairs: I) -> Vec<LocationSummary>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut summaries: Vec<LocationSummary> = Vec::new();
    let mut by_location: HashMap<String, usize> = HashMap::new();
    // (location index, sub-location) -> bucket index within that summary
    let mut by_bucket: HashMap<(usize, String), usize> = HashMap::new();

    for (location, sub_location) in pairs {
        let loc_idx = *by_location.entry(location.clone()).or_insert_with(|| {
            summaries.push(LocationSummary {
                location,
                count: 0,
                sub_locations: Vec::new(),
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[loc_idx];
        summary.count += 1;

        match by_bucket.get(&(loc_idx, sub_location.clone())) {
            Some(&bucket) => summary.sub_locations[bucket].count += 1,
            None => {
                summary.sub_locations.push(SubLocationCount {
                    name: sub_location.clone(),
                    count: 1,
                });
                by_bucket.insert((loc_idx, sub_location), summary.sub_locations.len() - 1);
            }
        }
    }

    // sort_by is stable, so ties stay in first-appearance order
    summaries.sort_by(|a, b| b.count.cmp(&a.count));
    summaries
}
