//! Read-only queries over the built-in tables.
//!
//! Nothing here fails: an unknown province key yields an empty list.

use tracing::debug;

use super::data::table;
use super::types::{LocationMatch, Province, ProvinceInfo};

/// Locations for a typed province, in stored order.
pub fn locations(province: Province) -> &'static [&'static str] {
    table(province)
}

/// Every location of every province, provinces in enumeration order.
pub fn get_all_locations() -> Vec<&'static str> {
    Province::ALL
        .iter()
        .flat_map(|p| table(*p).iter().copied())
        .collect()
}

/// Locations for a raw province key. Unrecognized keys give an empty slice.
pub fn get_locations_by_province(key: &str) -> &'static [&'static str] {
    match Province::from_key(key) {
        Some(p) => table(p),
        None => {
            debug!(key, "unknown province key, returning no locations");
            &[]
        }
    }
}

/// Case-insensitive substring search over [`get_all_locations`].
///
/// Keeps the flattened order and any duplicates. An empty query matches everything.
pub fn search_locations(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    let hits: Vec<&'static str> = get_all_locations()
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect();
    debug!(query, hits = hits.len(), "location search");
    hits
}

/// Like [`search_locations`], tagging each hit with its province.
pub fn search_with_province(query: &str) -> Vec<LocationMatch> {
    let needle = query.to_lowercase();
    Province::ALL
        .into_iter()
        .flat_map(|province| {
            table(province)
                .iter()
                .map(move |&name| LocationMatch { name, province })
        })
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .collect()
}

/// Provinces listing `name` exactly, each at most once.
pub fn provinces_of(name: &str) -> Vec<Province> {
    Province::ALL
        .into_iter()
        .filter(|p| table(*p).contains(&name))
        .collect()
}

/// Key, display name and location count per province.
pub fn province_summaries() -> Vec<ProvinceInfo> {
    Province::ALL
        .iter()
        .map(|p| ProvinceInfo {
            key: p.key(),
            name: p.display_name(),
            count: table(*p).len(),
        })
        .collect()
}
