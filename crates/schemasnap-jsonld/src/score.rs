//! Weighted completeness score for a document.

use serde_json::Value;

use crate::types::LocalBusinessDocument;
use crate::validate::{is_truthy, REQUIRED_ADDRESS_FIELDS};

const REQUIRED_POINTS: u32 = 20;
const RECOMMENDED_POINTS: u32 = 10;

pub const REQUIRED_FIELDS: [&str; 3] = ["name", "address", "telephone"];
pub const RECOMMENDED_FIELDS: [&str; 6] = [
    "url",
    "email",
    "description",
    "geo",
    "openingHoursSpecification",
    "priceRange",
];

/// Percentage (0–100) of the schema that is populated.
///
/// Required fields are worth 20 points each, with `address` pro-rated over
/// its four required sub-fields; recommended fields are worth 10 each.
/// Halves round up.
#[must_use]
pub fn completeness_score(doc: &Value) -> u8 {
    let mut earned: u32 = 0;

    for field in REQUIRED_FIELDS {
        let Some(value) = doc.get(field).filter(|v| is_truthy(v)) else {
            continue;
        };
        if field == "address" {
            let completed = REQUIRED_ADDRESS_FIELDS
                .iter()
                .filter(|sub| value.get(**sub).is_some_and(is_truthy))
                .count();
            // 4 sub-fields share 20 points, so 5 each.
            earned += u32::try_from(completed).unwrap_or(0) * (REQUIRED_POINTS / 4);
        } else {
            earned += REQUIRED_POINTS;
        }
    }

    for field in RECOMMENDED_FIELDS {
        if doc.get(field).is_some_and(is_truthy) {
            earned += RECOMMENDED_POINTS;
        }
    }

    let max = max_points();
    let percent = (earned * 100 + max / 2) / max;
    u8::try_from(percent).unwrap_or(100)
}

/// Score a typed document.
///
/// # Errors
///
/// Returns `serde_json::Error` if the document cannot be converted to JSON.
pub fn document_score(doc: &LocalBusinessDocument) -> Result<u8, serde_json::Error> {
    Ok(completeness_score(&doc.to_value()?))
}

fn max_points() -> u32 {
    // 3 x 20 + 6 x 10 = 120
    3 * REQUIRED_POINTS + 6 * RECOMMENDED_POINTS
}
