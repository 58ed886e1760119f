use serde::{Deserialize, Serialize};

/// How precisely a result pins down the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    /// Building level.
    High,
    /// Street level.
    Medium,
    /// City or area level.
    #[default]
    Low,
}

impl Accuracy {
    /// Estimate from an OpenStreetMap-style place type and element type.
    #[must_use]
    pub fn estimate(place_type: &str, osm_type: &str) -> Self {
        if place_type.contains("house") || osm_type == "node" {
            Accuracy::High
        } else if place_type.contains("street") || place_type.contains("road") {
            Accuracy::Medium
        } else {
            Accuracy::Low
        }
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Accuracy::High => write!(f, "high"),
            Accuracy::Medium => write!(f, "medium"),
            Accuracy::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: String,
    pub accuracy: Accuracy,
    /// Name of the geocoder that produced the result.
    pub provider: String,
}
