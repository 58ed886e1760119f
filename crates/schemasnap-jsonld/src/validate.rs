//! Structural validation of a `LocalBusiness` document.
//!
//! Works on `serde_json::Value` so documents produced elsewhere can be
//! checked too. Missing data is reported, never raised.

use serde_json::Value;

use crate::types::{LocalBusinessDocument, ValidationResult};

/// Address sub-fields that must be present whenever `address` is.
pub const REQUIRED_ADDRESS_FIELDS: [&str; 4] =
    ["streetAddress", "addressLocality", "addressRegion", "postalCode"];

/// Validate a document, collecting blocking errors and advisory warnings.
#[must_use]
pub fn validate(doc: &Value) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let name_ok = doc
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    if !name_ok {
        errors.push("Business name is required".to_string());
    }

    let address = doc.get("address").filter(|a| is_truthy(a));
    if !address.and_then(|a| a.get("streetAddress")).is_some_and(is_truthy) {
        errors.push("Street address is required".to_string());
    }

    if !field_is_truthy(doc, "telephone") {
        errors.push("A phone number is required".to_string());
    }

    if !field_is_truthy(doc, "url") {
        warnings.push("Website URL is recommended for better SEO".to_string());
    }
    if !field_is_truthy(doc, "openingHoursSpecification") {
        warnings.push("Opening hours help customers find you".to_string());
    }
    if !field_is_truthy(doc, "geo") {
        warnings.push("Geographic coordinates improve local search".to_string());
    }

    if let Some(address) = address {
        for field in REQUIRED_ADDRESS_FIELDS {
            if !field_is_truthy(address, field) {
                errors.push(format!("Address {field} is required"));
            }
        }
    }

    if let Some(geo) = doc.get("geo").filter(|g| is_truthy(g)) {
        if !coordinate_in_range(geo.get("latitude"), 90.0) {
            errors.push("Invalid latitude coordinate".to_string());
        }
        if !coordinate_in_range(geo.get("longitude"), 180.0) {
            errors.push("Invalid longitude coordinate".to_string());
        }
    }

    if let Some(specs) = doc
        .get("openingHoursSpecification")
        .filter(|s| is_truthy(s))
    {
        match specs {
            Value::Array(entries) => {
                for (idx, spec) in entries.iter().enumerate() {
                    check_hours_entry(idx + 1, spec, &mut errors);
                }
            }
            Value::Object(_) => check_hours_entry(1, specs, &mut errors),
            _ => errors.push("Opening hours specification is malformed".to_string()),
        }
    }

    ValidationResult::from_messages(errors, warnings)
}

/// Validate a typed document.
///
/// # Errors
///
/// Returns `serde_json::Error` if the document cannot be converted to JSON.
pub fn validate_document(doc: &LocalBusinessDocument) -> Result<ValidationResult, serde_json::Error> {
    Ok(validate(&doc.to_value()?))
}

fn check_hours_entry(position: usize, spec: &Value, errors: &mut Vec<String>) {
    let opens = non_empty_str(spec.get("opens"));
    let closes = non_empty_str(spec.get("closes"));

    match (opens, closes) {
        (Some(opens), Some(closes)) => {
            // Zero-padded 24h times order the same lexically and chronologically.
            if opens >= closes {
                errors.push(format!(
                    "Opening hours specification {position}: opening time must be before closing time"
                ));
            }
        }
        _ => errors.push(format!(
            "Opening hours specification {position} missing opens/closes times"
        )),
    }
}

fn coordinate_in_range(value: Option<&Value>, limit: f64) -> bool {
    value
        .and_then(Value::as_f64)
        .is_some_and(|v| (-limit..=limit).contains(&v))
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn field_is_truthy(obj: &Value, key: &str) -> bool {
    obj.get(key).is_some_and(is_truthy)
}

/// Presence test matching how form data is judged: empty strings, zero,
/// `false` and `null` count as absent.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
