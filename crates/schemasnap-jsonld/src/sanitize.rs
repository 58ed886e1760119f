//! Text normalization and coordinate coercion for builder inputs.

use std::sync::LazyLock;

use regex::Regex;

use crate::input::GeoValue;

static FLOAT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid regex")
});

/// Normalize free text for embedding in a document.
///
/// Control characters (U+0000–U+001F, U+007F–U+009F) are removed outright,
/// then leading/trailing whitespace is dropped and interior runs collapse to
/// one space. The result is a fixed point: sanitizing it again is a no-op.
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    let without_controls: String = text.chars().filter(|c| !c.is_control()).collect();
    without_controls
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse the longest leading decimal number in `text`, ignoring whatever
/// follows it: `"34.05N"` is `34.05`, `"north"` is `None`.
///
/// Leading whitespace is skipped. Only finite values are returned, so
/// `"Infinity"` and `"NaN"` are rejected.
#[must_use]
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let prefix = FLOAT_PREFIX_RE.find(text.trim_start())?;
    prefix
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Coerce a caller-supplied coordinate to a finite `f64`.
///
/// Text goes through [`parse_float_prefix`]. Returns `None` for blank or
/// non-numeric text and for non-finite values.
#[must_use]
pub fn parse_coordinate(value: &GeoValue) -> Option<f64> {
    match value {
        GeoValue::Number(n) => n.is_finite().then_some(*n),
        GeoValue::Text(s) => parse_float_prefix(s),
    }
}
