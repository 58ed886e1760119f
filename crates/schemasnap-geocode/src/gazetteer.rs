//! Offline geocoder backed by a YAML list of known addresses.
//!
//! ```yaml
//! - address: 123 Main Street, Anytown, CA
//!   latitude: 34.0522
//!   longitude: -118.2437
//!   place_type: house
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::address::normalize_address;
use crate::coords::validate_coordinates;
use crate::error::GeocodeError;
use crate::types::{Accuracy, GeocodeResult};
use crate::Geocoder;

const PROVIDER: &str = "gazetteer";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GazetteerEntry {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// OpenStreetMap-style place type used to estimate accuracy.
    #[serde(default)]
    pub place_type: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    entries: HashMap<String, GeocodeResult>,
}

impl Gazetteer {
    /// Build from entries, keyed by normalized address. Later duplicates win.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidEntry`] for a blank address or
    /// out-of-range coordinates.
    pub fn from_entries(entries: Vec<GazetteerEntry>) -> Result<Self, GeocodeError> {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = normalize_address(&entry.address);
            if key.trim().is_empty() {
                return Err(GeocodeError::InvalidEntry {
                    address: entry.address,
                    reason: "address is blank".to_string(),
                });
            }
            let check = validate_coordinates(entry.latitude, entry.longitude);
            if !check.is_valid {
                return Err(GeocodeError::InvalidEntry {
                    address: entry.address,
                    reason: check.errors.join("; "),
                });
            }
            let accuracy = entry
                .place_type
                .as_deref()
                .map_or(Accuracy::High, |kind| Accuracy::estimate(kind, ""));
            map.insert(
                key,
                GeocodeResult {
                    latitude: entry.latitude,
                    longitude: entry.longitude,
                    formatted_address: entry.address,
                    accuracy,
                    provider: PROVIDER.to_string(),
                },
            );
        }
        Ok(Self { entries: map })
    }

    /// Parse a YAML sequence of entries.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Parse`] for malformed YAML and
    /// [`GeocodeError::InvalidEntry`] for unusable entries.
    pub fn from_yaml_str(text: &str) -> Result<Self, GeocodeError> {
        let entries: Vec<GazetteerEntry> = serde_yaml::from_str(text)?;
        Self::from_entries(entries)
    }

    /// Read and parse a gazetteer file.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Io`] if the file cannot be read, otherwise as
    /// [`Gazetteer::from_yaml_str`].
    pub fn load(path: &Path) -> Result<Self, GeocodeError> {
        let text = std::fs::read_to_string(path).map_err(|source| GeocodeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Geocoder for Gazetteer {
    fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        self.entries
            .get(&normalize_address(address))
            .cloned()
            .ok_or_else(|| GeocodeError::NotFound {
                address: address.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r"
- address: 123 Main Street, Anytown, CA, 90210, US
  latitude: 34.0522
  longitude: -118.2437
- address: 1 Market St, San Francisco
  latitude: 37.7936
  longitude: -122.3950
  place_type: street
";

    #[test]
    fn lookup_ignores_case_and_punctuation() {
        let gazetteer = Gazetteer::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(gazetteer.len(), 2);

        let hit = gazetteer
            .geocode("123 MAIN STREET anytown ca 90210 us")
            .unwrap();
        assert!((hit.latitude - 34.0522).abs() < 1e-9);
        assert_eq!(hit.accuracy, Accuracy::High);
        assert_eq!(hit.provider, "gazetteer");
        assert_eq!(hit.formatted_address, "123 Main Street, Anytown, CA, 90210, US");
    }

    #[test]
    fn place_type_sets_accuracy() {
        let gazetteer = Gazetteer::from_yaml_str(SAMPLE).unwrap();
        let hit = gazetteer.geocode("1 Market St, San Francisco").unwrap();
        assert_eq!(hit.accuracy, Accuracy::Medium);
    }

    #[test]
    fn miss_is_not_found() {
        let gazetteer = Gazetteer::from_yaml_str(SAMPLE).unwrap();
        assert!(matches!(
            gazetteer.geocode("42 Nowhere Lane"),
            Err(GeocodeError::NotFound { .. })
        ));
    }

    #[test]
    fn out_of_range_entry_is_rejected() {
        let yaml = "- address: Pole\n  latitude: 95\n  longitude: 0\n";
        let err = Gazetteer::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, GeocodeError::InvalidEntry { ref reason, .. } if reason.contains("Latitude")));
    }

    #[test]
    fn blank_address_entry_is_rejected() {
        let yaml = "- address: '  '\n  latitude: 1\n  longitude: 1\n";
        assert!(matches!(
            Gazetteer::from_yaml_str(yaml),
            Err(GeocodeError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        assert!(matches!(
            Gazetteer::from_yaml_str("address: [unclosed"),
            Err(GeocodeError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            Gazetteer::load(Path::new("/definitely/not/here.yaml")),
            Err(GeocodeError::Io { .. })
        ));
    }
}
