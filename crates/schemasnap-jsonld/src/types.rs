//! Schema.org document types emitted by the assembler.

use serde::{Deserialize, Serialize, Serializer};

use crate::hours::Weekday;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const POSTAL_ADDRESS_TYPE: &str = "PostalAddress";
pub const GEO_COORDINATES_TYPE: &str = "GeoCoordinates";
pub const OPENING_HOURS_TYPE: &str = "OpeningHoursSpecification";

fn postal_address_type() -> String {
    POSTAL_ADDRESS_TYPE.to_string()
}

fn geo_coordinates_type() -> String {
    GEO_COORDINATES_TYPE.to_string()
}

fn opening_hours_type() -> String {
    OPENING_HOURS_TYPE.to_string()
}

fn schema_context() -> String {
    SCHEMA_CONTEXT.to_string()
}

/// A `LocalBusiness` (or subtype) JSON-LD document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusinessDocument {
    #[serde(rename = "@context", default = "schema_context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub business_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours_specification: Option<Vec<OpeningHoursSpecification>>,
}

impl LocalBusinessDocument {
    /// A bare `{ "@context", "@type" }` skeleton.
    #[must_use]
    pub fn new(business_type: &str) -> Self {
        Self {
            context: schema_context(),
            business_type: business_type.to_string(),
            name: None,
            address: None,
            telephone: None,
            url: None,
            email: None,
            description: None,
            price_range: None,
            geo: None,
            opening_hours_specification: None,
        }
    }

    /// Number of top-level keys the document serializes to.
    #[must_use]
    pub fn key_count(&self) -> usize {
        2 + [
            self.name.is_some(),
            self.address.is_some(),
            self.telephone.is_some(),
            self.url.is_some(),
            self.email.is_some(),
            self.description.is_some(),
            self.price_range.is_some(),
            self.geo.is_some(),
            self.opening_hours_specification.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// Convert to a JSON value for the validator and scorer.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type", default = "postal_address_type")]
    pub address_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

impl Default for PostalAddress {
    fn default() -> Self {
        Self {
            address_type: postal_address_type(),
            street_address: None,
            address_locality: None,
            address_region: None,
            postal_code: None,
            address_country: None,
        }
    }
}

impl PostalAddress {
    /// Serialized key count, `@type` included.
    #[must_use]
    pub fn field_count(&self) -> usize {
        1 + [
            &self.street_address,
            &self.address_locality,
            &self.address_region,
            &self.postal_code,
            &self.address_country,
        ]
        .into_iter()
        .filter(|field| field.is_some())
        .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type", default = "geo_coordinates_type")]
    pub geo_type: String,
    #[serde(serialize_with = "serialize_coordinate")]
    pub latitude: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub longitude: f64,
}

/// Whole-number coordinates are written as integers (`40`, not `40.0`).
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_coordinate<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        #[allow(clippy::cast_possible_truncation)]
        return serializer.serialize_i64(*value as i64);
    }
    serializer.serialize_f64(*value)
}

impl GeoCoordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            geo_type: geo_coordinates_type(),
            latitude,
            longitude,
        }
    }
}

/// `dayOfWeek` is a bare label for a single day and an array otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayOfWeek {
    Single(Weekday),
    Many(Vec<Weekday>),
}

impl DayOfWeek {
    #[must_use]
    pub fn days(&self) -> &[Weekday] {
        match self {
            DayOfWeek::Single(day) => std::slice::from_ref(day),
            DayOfWeek::Many(days) => days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHoursSpecification {
    #[serde(rename = "@type", default = "opening_hours_type")]
    pub spec_type: String,
    pub day_of_week: DayOfWeek,
    #[serde(default)]
    pub opens: String,
    #[serde(default)]
    pub closes: String,
}

impl OpeningHoursSpecification {
    #[must_use]
    pub fn new(day_of_week: DayOfWeek, opens: &str, closes: &str) -> Self {
        Self {
            spec_type: opening_hours_type(),
            day_of_week,
            opens: opens.to_string(),
            closes: closes.to_string(),
        }
    }

    /// One specification covering every day of the week.
    #[must_use]
    pub fn all_week(opens: &str, closes: &str) -> Self {
        Self::new(DayOfWeek::Many(Weekday::ALL.to_vec()), opens, closes)
    }
}

/// Outcome of [`crate::validate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn from_messages(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
