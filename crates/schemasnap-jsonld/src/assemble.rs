//! Document assembly: field map in, `LocalBusiness` JSON-LD out.

use schemasnap_core::DEFAULT_BUSINESS_TYPE;
use serde_json::Value;

use crate::address::build_address;
use crate::error::JsonLdError;
use crate::geo::build_geo_coordinates;
use crate::hours::{build_opening_hours, WeeklyHours, Weekday};
use crate::input::{is_empty_field_map, truthy, BusinessInput, GeoValue};
use crate::sanitize::sanitize_text;
use crate::types::{LocalBusinessDocument, PostalAddress};

/// Assemble a document from a typed field map.
///
/// An input with no field set produces [`placeholder_document`] rather than a
/// bare skeleton. [`build_document`] never substitutes.
#[must_use]
pub fn generate(input: &BusinessInput) -> LocalBusinessDocument {
    if input.is_empty() {
        return placeholder_document();
    }
    build_document(input)
}

/// Assemble a document, attaching optional substructures only when they
/// carry data. An input with nothing usable yields the `@context`/`@type`
/// skeleton.
#[must_use]
pub fn build_document(input: &BusinessInput) -> LocalBusinessDocument {
    let business_type = truthy(input.business_type.as_ref()).unwrap_or(DEFAULT_BUSINESS_TYPE);
    let mut doc = LocalBusinessDocument::new(business_type);

    doc.name = truthy(input.business_name.as_ref()).map(sanitize_text);

    let address = build_address(input);
    if address.field_count() > 1 {
        doc.address = Some(address);
    }

    doc.telephone = truthy(input.phone.as_ref()).map(str::to_string);
    doc.url = truthy(input.website.as_ref()).map(str::to_string);
    doc.email = truthy(input.email.as_ref()).map(str::to_string);
    doc.description = truthy(input.description.as_ref()).map(sanitize_text);
    doc.price_range = truthy(input.price_range.as_ref()).map(str::to_string);
    doc.geo = build_geo_coordinates(input);

    let hours = build_opening_hours(input.is_open_24_hours(), input.opening_hours.as_ref());
    if !hours.is_empty() {
        doc.opening_hours_specification = Some(hours);
    }

    doc
}

/// Resolve a raw field map and assemble it.
///
/// Only a map with no keys at all produces the placeholder; a map whose keys
/// are all unknown, null or wrong-shaped yields the bare skeleton.
///
/// # Errors
///
/// Returns [`JsonLdError::InvalidInput`] if `value` is not an object.
pub fn generate_from_value(value: &Value) -> Result<LocalBusinessDocument, JsonLdError> {
    let input = BusinessInput::from_value(value)?;
    if is_empty_field_map(value) {
        return Ok(placeholder_document());
    }
    Ok(build_document(&input))
}

/// Fixed sample document returned for an empty field map.
#[must_use]
pub fn placeholder_document() -> LocalBusinessDocument {
    LocalBusinessDocument {
        name: Some("Your Business Name".to_string()),
        address: Some(PostalAddress {
            street_address: Some("123 Main Street".to_string()),
            address_locality: Some("City".to_string()),
            address_region: Some("State".to_string()),
            postal_code: Some("12345".to_string()),
            address_country: Some("US".to_string()),
            ..PostalAddress::default()
        }),
        telephone: Some("(555) 123-4567".to_string()),
        ..LocalBusinessDocument::new(DEFAULT_BUSINESS_TYPE)
    }
}

/// A fully populated sample field map for demos and smoke tests.
#[must_use]
pub fn example_input() -> BusinessInput {
    let hours = WeeklyHours::new()
        .with_day(Weekday::Monday, "07:00", "19:00")
        .with_day(Weekday::Tuesday, "07:00", "19:00")
        .with_day(Weekday::Wednesday, "07:00", "19:00")
        .with_day(Weekday::Thursday, "07:00", "19:00")
        .with_day(Weekday::Friday, "07:00", "20:00")
        .with_day(Weekday::Saturday, "08:00", "20:00")
        .with_day(Weekday::Sunday, "08:00", "18:00");

    BusinessInput {
        business_name: Some("Acme Coffee Shop".to_string()),
        business_type: Some("Restaurant".to_string()),
        description: Some("Artisanal coffee and fresh pastries in downtown".to_string()),
        phone: Some("(555) 123-4567".to_string()),
        website: Some("https://acmecoffee.com".to_string()),
        email: Some("hello@acmecoffee.com".to_string()),
        street_address: Some("123 Main Street".to_string()),
        city: Some("Anytown".to_string()),
        state: Some("CA".to_string()),
        postal_code: Some("90210".to_string()),
        country: Some("US".to_string()),
        latitude: Some(GeoValue::Text("34.0522".to_string())),
        longitude: Some(GeoValue::Text("-118.2437".to_string())),
        price_range: Some("$$".to_string()),
        open_24_hours: None,
        opening_hours: Some(hours),
    }
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod tests;
