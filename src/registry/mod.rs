//! Location registry for Pakistan.
//!
//! A compile-time table of provinces and their cities/localities, with
//! flatten, per-province lookup and case-insensitive substring search.

mod data;
pub mod lookup;
pub mod types;

pub use lookup::{
    get_all_locations, get_locations_by_province, locations, province_summaries, provinces_of,
    search_locations, search_with_province,
};
pub use types::{LocationMatch, Province, ProvinceInfo, UnknownProvince};
