use schemasnap_jsonld::{BusinessInput, GeoValue};

use crate::types::GeocodeResult;

/// Cache key form of an address: lowercase, single-spaced, punctuation removed.
#[must_use]
pub fn normalize_address(address: &str) -> String {
    let stripped: String = address
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Street, city, state, postal code and country joined with `", "`,
/// skipping empty parts.
#[must_use]
pub fn build_address_string(input: &BusinessInput) -> String {
    [
        &input.street_address,
        &input.city,
        &input.state,
        &input.postal_code,
        &input.country,
    ]
    .into_iter()
    .filter_map(|part| part.as_deref())
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

/// Write a lookup result back into the field map as text coordinates.
pub fn apply_coordinates(input: &mut BusinessInput, result: &GeocodeResult) {
    input.latitude = Some(GeoValue::Text(result.latitude.to_string()));
    input.longitude = Some(GeoValue::Text(result.longitude.to_string()));
}
