//! pk_locations: built-in reference data for Pakistani provinces and their
//! cities, for address entry and autocomplete.

pub mod registry;

pub use registry::{
    get_all_locations, get_locations_by_province, search_locations, LocationMatch, Province,
    ProvinceInfo,
};
