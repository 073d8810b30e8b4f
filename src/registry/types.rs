//! Core types for the location registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level administrative division of Pakistan.
///
/// Variant order is the enumeration order used when flattening the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Province {
    Punjab,
    Sindh,
    Kpk,
    Balochistan,
    GilgitBaltistan,
    AzadKashmir,
    Islamabad,
}

impl Province {
    /// Every province, in enumeration order.
    pub const ALL: [Province; 7] = [
        Province::Punjab,
        Province::Sindh,
        Province::Kpk,
        Province::Balochistan,
        Province::GilgitBaltistan,
        Province::AzadKashmir,
        Province::Islamabad,
    ];

    /// The lookup key, e.g. `"gilgitBaltistan"`. Matches the serde form.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Punjab => "punjab",
            Self::Sindh => "sindh",
            Self::Kpk => "kpk",
            Self::Balochistan => "balochistan",
            Self::GilgitBaltistan => "gilgitBaltistan",
            Self::AzadKashmir => "azadKashmir",
            Self::Islamabad => "islamabad",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Punjab => "Punjab",
            Self::Sindh => "Sindh",
            Self::Kpk => "Khyber Pakhtunkhwa",
            Self::Balochistan => "Balochistan",
            Self::GilgitBaltistan => "Gilgit-Baltistan",
            Self::AzadKashmir => "Azad Jammu & Kashmir",
            Self::Islamabad => "Islamabad Capital Territory",
        }
    }

    /// Exact, case-sensitive key match.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Province {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Province {
    type Err = UnknownProvince;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownProvince(s.to_string()))
    }
}

/// Returned by the strict [`Province`] parse. Registry lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown province key: '{0}'")]
pub struct UnknownProvince(pub String);

/// A search hit together with the province that lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationMatch {
    pub name: &'static str,
    pub province: Province,
}

/// Per-province overview, as listed by [`province_summaries`](super::province_summaries).
#[derive(Debug, Clone, Serialize)]
pub struct ProvinceInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for p in Province::ALL {
            assert_eq!(Province::from_key(p.key()), Some(p));
            assert_eq!(p.to_string(), p.key());
        }
    }

    #[test]
    fn test_from_key_is_case_sensitive() {
        assert_eq!(Province::from_key("Punjab"), None);
        assert_eq!(Province::from_key("gilgitbaltistan"), None);
        assert_eq!(Province::from_key(""), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("azadKashmir".parse::<Province>(), Ok(Province::AzadKashmir));
        let err = "fata".parse::<Province>().unwrap_err();
        assert_eq!(err, UnknownProvince("fata".into()));
        assert_eq!(err.to_string(), "Unknown province key: 'fata'");
    }

    #[test]
    fn test_serde_uses_key() {
        for p in Province::ALL {
            let json = serde_json::to_string(&p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.key()));
            let back: Province = serde_json::from_str(&json).unwrap();
            assert_eq!(back, p);
        }
    }

    #[test]
    fn test_all_is_ordered() {
        let mut sorted = Province::ALL;
        sorted.sort();
        assert_eq!(sorted, Province::ALL);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Province::Kpk.display_name(), "Khyber Pakhtunkhwa");
        assert_eq!(Province::Islamabad.display_name(), "Islamabad Capital Territory");
    }
}
