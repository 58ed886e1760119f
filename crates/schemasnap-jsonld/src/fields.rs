//! Per-field input checks, applied before generation.
//!
//! These mirror the rules a form enforces on each input: format checks for
//! phone, email, URL, postal code, coordinates and times, plus a length cap
//! on the description. Optional values that are empty always pass.

use std::sync::LazyLock;

use regex::Regex;
use schemasnap_core::{is_supported_business_type, AppConfig};
use serde::Serialize;

use crate::hours::Weekday;
use crate::input::{BusinessInput, GeoValue};
use crate::sanitize::parse_float_prefix;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid regex"));
static US_POSTAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid regex"));
static CA_POSTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]\d[A-Za-z] ?\d[A-Za-z]\d$").expect("valid regex")
});
static UK_POSTAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{1,2}\d[A-Z\d]? ?\d[A-Z]{2}$").expect("valid regex")
});

/// Result of a single field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub is_valid: bool,
    pub message: String,
    /// Canonical form of the value, when the check produces one.
    pub normalized: Option<String>,
}

impl FieldCheck {
    fn pass() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
            normalized: None,
        }
    }

    fn pass_normalized(value: String) -> Self {
        Self {
            normalized: Some(value),
            ..Self::pass()
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            is_valid: false,
            message: message.to_string(),
            normalized: None,
        }
    }

    fn from_bool(is_valid: bool, message: &str) -> Self {
        if is_valid {
            Self::pass()
        } else {
            Self::fail(message)
        }
    }
}

#[must_use]
pub fn required(value: &str) -> FieldCheck {
    FieldCheck::from_bool(!value.trim().is_empty(), "This field is required")
}

#[must_use]
pub fn email(value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::pass();
    }
    FieldCheck::from_bool(EMAIL_RE.is_match(value), "Please enter a valid email address")
}

/// Accepts bare hosts by assuming `https://`.
#[must_use]
pub fn url(value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::pass();
    }
    let candidate = if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://{value}")
    };
    match url::Url::parse(&candidate) {
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => {
            FieldCheck::pass_normalized(parsed.to_string())
        }
        _ => FieldCheck::fail("Please enter a valid URL"),
    }
}

/// Between 7 and 15 digits once punctuation is stripped.
#[must_use]
pub fn phone(value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::pass();
    }
    let digits = digits_only(value);
    if !(7..=15).contains(&digits.len()) {
        return FieldCheck::fail("Please enter a valid phone number");
    }
    FieldCheck::pass_normalized(format_phone_number(value))
}

/// `(XXX) XXX-XXXX` for ten digits, `+digits` for longer numbers, else as given.
#[must_use]
pub fn format_phone_number(value: &str) -> String {
    let digits = digits_only(value);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        n if n > 10 => format!("+{digits}"),
        _ => value.to_string(),
    }
}

#[must_use]
pub fn latitude(value: &str) -> FieldCheck {
    coordinate(value, 90.0, "Latitude")
}

#[must_use]
pub fn longitude(value: &str) -> FieldCheck {
    coordinate(value, 180.0, "Longitude")
}

fn coordinate(value: &str, limit: f64, label: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::pass();
    }
    let Some(num) = parse_float_prefix(value) else {
        return FieldCheck::fail(&format!("{label} must be a number"));
    };
    if !(-limit..=limit).contains(&num) {
        return FieldCheck::fail(&format!("{label} must be between -{limit} and {limit}"));
    }
    FieldCheck::pass_normalized(round_to_six_places(num))
}

/// At most six decimals, trailing zeros dropped.
fn round_to_six_places(num: f64) -> String {
    let fixed = format!("{num:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Country-specific pattern; unknown countries fall back to the US pattern.
#[must_use]
pub fn postal_code(value: &str, country: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::pass();
    }
    let pattern: &Regex = match country.trim().to_ascii_uppercase().as_str() {
        "CA" => &CA_POSTAL_RE,
        "UK" | "GB" => &UK_POSTAL_RE,
        _ => &US_POSTAL_RE,
    };
    FieldCheck::from_bool(
        pattern.is_match(value.trim()),
        "Please enter a valid postal code",
    )
}

#[must_use]
pub fn max_length(value: &str, max: usize) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::pass();
    }
    FieldCheck::from_bool(
        value.chars().count() <= max,
        &format!("Maximum {max} characters allowed"),
    )
}

/// `H:MM` or `HH:MM` on a 24-hour clock.
#[must_use]
pub fn time(value: &str) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::pass();
    }
    FieldCheck::from_bool(TIME_RE.is_match(value), "Please enter time in HH:MM format")
}

/// Opening must be strictly before closing, compared in minutes.
#[must_use]
pub fn time_range(open: &str, close: &str) -> FieldCheck {
    if open.is_empty() || close.is_empty() {
        return FieldCheck::pass();
    }
    match (minutes_since_midnight(open), minutes_since_midnight(close)) {
        (Some(open), Some(close)) if open < close => FieldCheck::pass(),
        _ => FieldCheck::fail("Opening time must be before closing time"),
    }
}

fn minutes_since_midnight(value: &str) -> Option<u32> {
    let (hours, minutes) = value.split_once(':')?;
    Some(hours.trim().parse::<u32>().ok()? * 60 + minutes.trim().parse::<u32>().ok()?)
}

/// Escape text for safe inclusion in HTML.
#[must_use]
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.trim().chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            other => out.push(other),
        }
    }
    out
}

/// Prefix `https://` unless the value already names an http(s) scheme.
#[must_use]
pub fn normalize_url(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Settings the rule set depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub default_country: String,
    pub description_max_len: usize,
}

impl Default for FieldRules {
    fn default() -> Self {
        Self {
            default_country: "US".to_string(),
            description_max_len: 160,
        }
    }
}

impl From<&AppConfig> for FieldRules {
    fn from(config: &AppConfig) -> Self {
        Self {
            default_country: config.default_country.clone(),
            description_max_len: config.description_max_len,
        }
    }
}

/// A failed check, tagged with the field-map key it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

/// Apply the form's rule set to every field of `input`.
///
/// Each field reports at most one issue: the first failing rule.
#[must_use]
pub fn check_input(input: &BusinessInput, rules: &FieldRules) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    let text = |field: &Option<String>| field.clone().unwrap_or_default();

    let country = input
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(rules.default_country.as_str())
        .to_string();

    let business_type = text(&input.business_type);
    let business_type_check = match required(&business_type) {
        check if !check.is_valid => check,
        _ => FieldCheck::from_bool(
            is_supported_business_type(&business_type),
            "Please choose a supported business type",
        ),
    };

    let checks: Vec<(&str, FieldCheck)> = vec![
        ("businessName", required(&text(&input.business_name))),
        ("businessType", business_type_check),
        ("phone", first_failure(&[required, phone], &text(&input.phone))),
        ("streetAddress", required(&text(&input.street_address))),
        ("city", required(&text(&input.city))),
        ("state", required(&text(&input.state))),
        (
            "postalCode",
            match required(&text(&input.postal_code)) {
                check if !check.is_valid => check,
                _ => postal_code(&text(&input.postal_code), &country),
            },
        ),
        ("country", required(&text(&input.country))),
        ("website", url(&text(&input.website))),
        ("email", email(&text(&input.email))),
        (
            "description",
            max_length(&text(&input.description), rules.description_max_len),
        ),
        ("latitude", latitude(&geo_text(input.latitude.as_ref()))),
        ("longitude", longitude(&geo_text(input.longitude.as_ref()))),
    ];

    for (field, check) in checks {
        if !check.is_valid {
            issues.push(FieldIssue {
                field: field.to_string(),
                message: check.message,
            });
        }
    }

    if !input.is_open_24_hours() {
        if let Some(hours) = &input.opening_hours {
            for (day, day_hours) in hours.populated_days() {
                check_day(day, &day_hours.open, &day_hours.close, &mut issues);
            }
        }
    }

    issues
}

fn check_day(day: Weekday, open: &str, close: &str, issues: &mut Vec<FieldIssue>) {
    let mut failed = false;
    for (suffix, value) in [("open", open), ("close", close)] {
        let check = first_failure(&[required, time], value);
        if !check.is_valid {
            failed = true;
            issues.push(FieldIssue {
                field: format!("openingHours.{}.{suffix}", day.key()),
                message: check.message,
            });
        }
    }
    if !failed {
        let check = time_range(open, close);
        if !check.is_valid {
            issues.push(FieldIssue {
                field: format!("openingHours.{}", day.key()),
                message: check.message,
            });
        }
    }
}

fn first_failure(checks: &[fn(&str) -> FieldCheck], value: &str) -> FieldCheck {
    checks
        .iter()
        .map(|check| check(value))
        .find(|result| !result.is_valid)
        .unwrap_or_else(FieldCheck::pass)
}

fn geo_text(value: Option<&GeoValue>) -> String {
    match value {
        Some(GeoValue::Text(s)) => s.clone(),
        Some(GeoValue::Number(n)) => n.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
