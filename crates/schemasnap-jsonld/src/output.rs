//! Rendering documents for export.

use chrono::{DateTime, Utc};
use schemasnap_core::OutputFormat;
use serde::Serialize;

use crate::error::JsonLdError;
use crate::types::LocalBusinessDocument;

/// Two-space indented JSON.
///
/// # Errors
///
/// Returns [`JsonLdError::Json`] if `doc` fails to serialize.
pub fn format<T: Serialize + ?Sized>(doc: &T) -> Result<String, JsonLdError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Compact JSON.
///
/// # Errors
///
/// Returns [`JsonLdError::Json`] if `doc` fails to serialize.
pub fn minify<T: Serialize + ?Sized>(doc: &T) -> Result<String, JsonLdError> {
    Ok(serde_json::to_string(doc)?)
}

/// The pretty-printed document wrapped in an `application/ld+json` script tag.
///
/// The indented form is embedded, not the compact one, so the snippet stays
/// readable when pasted into a page.
///
/// # Errors
///
/// Returns [`JsonLdError::Json`] if `doc` fails to serialize.
pub fn to_html_script<T: Serialize + ?Sized>(doc: &T) -> Result<String, JsonLdError> {
    Ok(format!(
        "<script type=\"application/ld+json\">\n{}\n</script>",
        format(doc)?
    ))
}

/// Render `doc` in the requested format.
///
/// # Errors
///
/// Returns [`JsonLdError::Json`] if `doc` fails to serialize.
pub fn render<T: Serialize + ?Sized>(doc: &T, output: OutputFormat) -> Result<String, JsonLdError> {
    match output {
        OutputFormat::Pretty => format(doc),
        OutputFormat::Minified => minify(doc),
        OutputFormat::Html => to_html_script(doc),
    }
}

/// `true` when the document carries anything beyond `@context` and `@type`.
#[must_use]
pub fn has_content(doc: &LocalBusinessDocument) -> bool {
    doc.key_count() > 2
}

/// Download file name for an export, e.g. `schema-formatted-2024-05-01T12-30-00.json`.
#[must_use]
pub fn export_file_name(output: OutputFormat, at: DateTime<Utc>) -> String {
    let stamp = at.format("%Y-%m-%dT%H-%M-%S");
    match output {
        OutputFormat::Pretty => format!("schema-formatted-{stamp}.json"),
        OutputFormat::Minified => format!("schema-minified-{stamp}.json"),
        OutputFormat::Html => format!("schema-snippet-{stamp}.html"),
    }
}

/// Size comparison of the three export renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportStats {
    pub fields: usize,
    pub formatted_bytes: usize,
    pub minified_bytes: usize,
    pub html_bytes: usize,
    /// Percent saved by minifying, rounded half up.
    pub compression_percent: usize,
}

impl ExportStats {
    /// Measure every rendering of `doc`.
    ///
    /// # Errors
    ///
    /// Returns [`JsonLdError::Json`] if `doc` fails to serialize.
    pub fn measure(doc: &LocalBusinessDocument) -> Result<Self, JsonLdError> {
        let formatted = format(doc)?.len();
        let minified = minify(doc)?.len();
        let html = to_html_script(doc)?.len();

        let saved = formatted.saturating_sub(minified);
        let compression_percent = if formatted == 0 {
            0
        } else {
            (saved * 200 + formatted) / (formatted * 2)
        };

        Ok(Self {
            fields: doc.key_count(),
            formatted_bytes: formatted,
            minified_bytes: minified,
            html_bytes: html,
            compression_percent,
        })
    }
}

/// Human-readable byte size: `0 B`, `512 B`, `1.5 KB`, `2.25 MB`.
#[must_use]
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["B", "KB", "MB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && unit < UNITS.len() - 1 {
        scaled /= 1024;
        unit += 1;
    }
    let divisor = 1024_usize.pow(u32::try_from(unit).unwrap_or(0));
    // Hundredths, rounded half up.
    let hundredths = (bytes * 100 + divisor / 2) / divisor;
    let whole = hundredths / 100;
    let frac = hundredths % 100;

    if frac == 0 {
        format!("{whole} {}", UNITS[unit])
    } else if frac % 10 == 0 {
        format!("{whole}.{} {}", frac / 10, UNITS[unit])
    } else {
        format!("{whole}.{frac:02} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::assemble::{example_input, generate, placeholder_document};

    #[test]
    fn format_uses_two_space_indent() {
        let text = format(&placeholder_document()).unwrap();
        assert!(text.starts_with("{\n  \"@context\": \"https://schema.org\""));
    }

    #[test]
    fn minify_has_no_newlines() {
        let text = minify(&placeholder_document()).unwrap();
        assert!(!text.contains('\n'));
        assert!(text.starts_with("{\"@context\":\"https://schema.org\",\"@type\":\"LocalBusiness\""));
    }

    #[test]
    fn html_script_wraps_pretty_json() {
        let doc = placeholder_document();
        let html = to_html_script(&doc).unwrap();
        let pretty = format(&doc).unwrap();
        assert_eq!(
            html,
            format!("<script type=\"application/ld+json\">\n{pretty}\n</script>")
        );
        assert!(!html.contains(&minify(&doc).unwrap()));
    }

    #[test]
    fn render_dispatches_on_format() {
        let doc = placeholder_document();
        assert_eq!(render(&doc, OutputFormat::Minified).unwrap(), minify(&doc).unwrap());
        assert_eq!(render(&doc, OutputFormat::Pretty).unwrap(), format(&doc).unwrap());
        assert!(render(&doc, OutputFormat::Html).unwrap().starts_with("<script"));
    }

    #[test]
    fn skeleton_has_no_content() {
        let doc = LocalBusinessDocument::new("LocalBusiness");
        assert!(!has_content(&doc));
        assert!(has_content(&placeholder_document()));
    }

    #[test]
    fn export_file_names_follow_format() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(
            export_file_name(OutputFormat::Pretty, at),
            "schema-formatted-2024-05-01T12-30-00.json"
        );
        assert_eq!(
            export_file_name(OutputFormat::Minified, at),
            "schema-minified-2024-05-01T12-30-00.json"
        );
        assert_eq!(
            export_file_name(OutputFormat::Html, at),
            "schema-snippet-2024-05-01T12-30-00.html"
        );
    }

    #[test]
    fn export_stats_measure_renderings() {
        let doc = generate(&example_input());
        let stats = ExportStats::measure(&doc).unwrap();
        assert_eq!(stats.fields, 11);
        assert!(stats.minified_bytes < stats.formatted_bytes);
        assert!(stats.html_bytes > stats.formatted_bytes);
        assert!(stats.compression_percent > 0 && stats.compression_percent < 100);
    }

    #[test]
    fn format_bytes_scales_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(1100), "1.07 KB");
    }
}
