//! The field-map boundary.
//!
//! Form data arrives as a loosely-typed map. It is resolved into
//! [`BusinessInput`] here, once; builders downstream only see typed fields.
//! A top-level value that is not a map is the single hard failure.
//! Leaf values of the wrong shape are dropped, never rejected.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::JsonLdError;
use crate::hours::WeeklyHours;

/// A latitude or longitude as supplied by the caller.
///
/// Forms hand over strings; fixtures and geocoders hand over numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoValue {
    Number(f64),
    Text(String),
}

impl GeoValue {
    /// Mirrors form truthiness: an empty string, `0` and `NaN` count as
    /// absent. The text `"0"` is not blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            GeoValue::Number(n) => *n == 0.0 || n.is_nan(),
            GeoValue::Text(s) => s.is_empty(),
        }
    }
}

impl From<f64> for GeoValue {
    fn from(value: f64) -> Self {
        GeoValue::Number(value)
    }
}

impl From<&str> for GeoValue {
    fn from(value: &str) -> Self {
        GeoValue::Text(value.to_string())
    }
}

/// Typed view of the business-profile field map.
///
/// `None` means the key was absent. `Some("")` means it was present but
/// empty; every builder treats that the same as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInput {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_geo", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<GeoValue>,
    #[serde(default, deserialize_with = "lenient_geo", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<GeoValue>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(
        rename = "open24Hours",
        default,
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub open_24_hours: Option<bool>,
    #[serde(default, deserialize_with = "lenient_hours", skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<WeeklyHours>,
}

impl BusinessInput {
    /// Resolve a JSON value into a typed field map.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`JsonLdError::InvalidInput`] if `value` is not an object.
    pub fn from_value(value: &Value) -> Result<Self, JsonLdError> {
        if !value.is_object() {
            return Err(JsonLdError::InvalidInput {
                found: value_kind(value),
            });
        }
        Ok(BusinessInput::deserialize(value)?)
    }

    /// Parse a JSON document into a typed field map.
    ///
    /// # Errors
    ///
    /// Returns [`JsonLdError::Parse`] for malformed JSON and
    /// [`JsonLdError::InvalidInput`] for a non-object document.
    pub fn from_json_str(text: &str) -> Result<Self, JsonLdError> {
        Self::from_value(&field_map_from_json_str(text)?)
    }

    /// Parse a YAML document into a typed field map.
    ///
    /// # Errors
    ///
    /// Returns [`JsonLdError::Parse`] for malformed YAML and
    /// [`JsonLdError::InvalidInput`] for a non-mapping document.
    pub fn from_yaml_str(text: &str) -> Result<Self, JsonLdError> {
        Self::from_value(&field_map_from_yaml_str(text)?)
    }

    /// `true` when no field is set.
    ///
    /// For typed callers this is the empty field map. Maps parsed from text
    /// can resolve to an empty input while still carrying keys (unknown,
    /// null or wrong-shaped); use [`is_empty_field_map`] on the raw value
    /// for those.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &BusinessInput::default()
    }

    /// `true` when the 24/7 flag is set.
    #[must_use]
    pub fn is_open_24_hours(&self) -> bool {
        self.open_24_hours.unwrap_or(false)
    }
}

/// Parse JSON text into a raw field map without resolving it.
///
/// # Errors
///
/// Returns [`JsonLdError::Parse`] for malformed JSON.
pub fn field_map_from_json_str(text: &str) -> Result<Value, JsonLdError> {
    serde_json::from_str(text).map_err(|e| JsonLdError::Parse {
        format: "JSON",
        reason: e.to_string(),
    })
}

/// Parse YAML text into a raw field map without resolving it.
///
/// # Errors
///
/// Returns [`JsonLdError::Parse`] for malformed YAML.
pub fn field_map_from_yaml_str(text: &str) -> Result<Value, JsonLdError> {
    serde_yaml::from_str(text).map_err(|e| JsonLdError::Parse {
        format: "YAML",
        reason: e.to_string(),
    })
}

/// `true` only for an object with no keys at all.
#[must_use]
pub fn is_empty_field_map(value: &Value) -> bool {
    value.as_object().is_some_and(serde_json::Map::is_empty)
}

/// Returns the value of an optional text field when it is truthy.
pub(crate) fn truthy(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_geo<'de, D>(deserializer: D) -> Result<Option<GeoValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(GeoValue::Text(s)),
        Some(Value::Number(n)) => n.as_f64().map(GeoValue::Number),
        _ => None,
    })
}

/// Checkbox values arrive as booleans, `"on"`, or `"true"`/`"false"` text.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => Some(n.as_f64().is_some_and(|f| f != 0.0)),
        Some(Value::String(s)) => {
            let lowered = s.trim().to_ascii_lowercase();
            Some(!matches!(lowered.as_str(), "" | "false" | "0" | "no" | "off"))
        }
        _ => None,
    })
}

fn lenient_hours<'de, D>(deserializer: D) -> Result<Option<WeeklyHours>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(WeeklyHours::from_value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::hours::Weekday;

    #[test]
    fn rejects_non_object_input() {
        for value in [json!(null), json!([]), json!("name"), json!(3), json!(true)] {
            let result = BusinessInput::from_value(&value);
            assert!(
                matches!(result, Err(JsonLdError::InvalidInput { .. })),
                "expected InvalidInput for {value}, got: {result:?}"
            );
        }
    }

    #[test]
    fn empty_object_is_empty_input() {
        let input = BusinessInput::from_value(&json!({})).unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let input = BusinessInput::from_value(&json!({ "favoriteColor": "teal" })).unwrap();
        assert!(input.is_empty());
    }

    #[test]
    fn present_empty_string_is_distinct_from_absent() {
        let input = BusinessInput::from_value(&json!({ "businessName": "" })).unwrap();
        assert_eq!(input.business_name.as_deref(), Some(""));
        assert!(!input.is_empty());
        assert_eq!(truthy(input.business_name.as_ref()), None);
    }

    #[test]
    fn numeric_text_fields_are_stringified() {
        let input = BusinessInput::from_value(&json!({ "postalCode": 90210 })).unwrap();
        assert_eq!(input.postal_code.as_deref(), Some("90210"));
    }

    #[test]
    fn wrong_shaped_leaves_are_dropped() {
        let input =
            BusinessInput::from_value(&json!({ "phone": ["555"], "city": { "x": 1 } })).unwrap();
        assert!(input.phone.is_none());
        assert!(input.city.is_none());
    }

    #[test]
    fn coordinates_accept_strings_and_numbers() {
        let input =
            BusinessInput::from_value(&json!({ "latitude": "34.05", "longitude": -118.24 }))
                .unwrap();
        assert_eq!(input.latitude, Some(GeoValue::Text("34.05".to_string())));
        assert_eq!(input.longitude, Some(GeoValue::Number(-118.24)));
    }

    #[test]
    fn open_24_hours_accepts_checkbox_values() {
        let on = BusinessInput::from_value(&json!({ "open24Hours": "on" })).unwrap();
        assert!(on.is_open_24_hours());
        let off = BusinessInput::from_value(&json!({ "open24Hours": "false" })).unwrap();
        assert!(!off.is_open_24_hours());
        let flag = BusinessInput::from_value(&json!({ "open24Hours": true })).unwrap();
        assert!(flag.is_open_24_hours());
    }

    #[test]
    fn opening_hours_resolve_to_weekday_slots() {
        let input = BusinessInput::from_value(&json!({
            "openingHours": {
                "monday": { "open": "09:00", "close": "17:00" },
                "funday": { "open": "01:00", "close": "02:00" }
            }
        }))
        .unwrap();
        let hours = input.opening_hours.unwrap();
        assert_eq!(hours.get(Weekday::Monday).unwrap().open, "09:00");
        assert!(hours.get(Weekday::Tuesday).is_none());
        assert_eq!(hours.populated_days().count(), 1);
    }

    #[test]
    fn parses_yaml_field_map() {
        let yaml = "businessName: Corner Deli\nphone: \"555-0100\"\nopen24Hours: true\n";
        let input = BusinessInput::from_yaml_str(yaml).unwrap();
        assert_eq!(input.business_name.as_deref(), Some("Corner Deli"));
        assert_eq!(input.phone.as_deref(), Some("555-0100"));
        assert!(input.is_open_24_hours());
    }

    #[test]
    fn yaml_sequence_is_invalid_input() {
        let result = BusinessInput::from_yaml_str("- a\n- b\n");
        assert!(matches!(result, Err(JsonLdError::InvalidInput { found: "an array" })));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let result = BusinessInput::from_json_str("{ not json");
        assert!(matches!(result, Err(JsonLdError::Parse { format: "JSON", .. })));
    }
}
