//! Schema.org `LocalBusiness` JSON-LD generation.
//!
//! A pure transform from a business-profile field map to a JSON-LD document,
//! plus validation and a completeness score for the result. Nothing here
//! performs I/O or logs; every function is deterministic in its input.

pub mod address;
pub mod assemble;
pub mod error;
pub mod fields;
pub mod geo;
pub mod hours;
pub mod input;
pub mod output;
pub mod sanitize;
pub mod score;
pub mod types;
pub mod validate;

pub use address::build_address;
pub use assemble::{
    build_document, example_input, generate, generate_from_value, placeholder_document,
};
pub use error::JsonLdError;
pub use fields::{check_input, FieldCheck, FieldIssue, FieldRules};
pub use geo::build_geo_coordinates;
pub use hours::{build_opening_hours, DayHours, WeeklyHours, Weekday};
pub use input::{
    field_map_from_json_str, field_map_from_yaml_str, is_empty_field_map, BusinessInput, GeoValue,
};
pub use output::{
    export_file_name, format, format_bytes, has_content, minify, render, to_html_script,
    ExportStats,
};
pub use sanitize::{parse_coordinate, parse_float_prefix, sanitize_text};
pub use score::{completeness_score, document_score};
pub use types::{
    DayOfWeek, GeoCoordinates, LocalBusinessDocument, OpeningHoursSpecification, PostalAddress,
    ValidationResult,
};
pub use validate::{validate, validate_document};
