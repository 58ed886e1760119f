//! `generate` and `example` command handlers.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use schemasnap_core::{AppConfig, OutputFormat};
use schemasnap_geocode::{
    apply_coordinates, build_address_string, CachedGeocoder, Gazetteer, Geocoder,
};
use schemasnap_jsonld::{
    build_document, document_score, example_input, export_file_name, field_map_from_json_str,
    field_map_from_yaml_str, format_bytes, generate, has_content, is_empty_field_map,
    placeholder_document, render, validate_document, BusinessInput, ExportStats,
    LocalBusinessDocument,
};
use serde_json::Value;

#[derive(Debug)]
pub(crate) struct GenerateArgs {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub report: bool,
    pub gazetteer: Option<PathBuf>,
}

/// Read a raw field map from a file, or JSON from stdin when `path` is `-`.
///
/// Files ending in `.yaml` or `.yml` are parsed as YAML, everything else as JSON.
pub(crate) fn read_field_map(path: &Path) -> anyhow::Result<Value> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read field map from stdin")?;
        return Ok(field_map_from_json_str(&text)?);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let map = if is_yaml {
        field_map_from_yaml_str(&text)
    } else {
        field_map_from_json_str(&text)
    };
    map.with_context(|| format!("invalid field map in {}", path.display()))
}

/// Read and resolve a field map; see [`read_field_map`].
pub(crate) fn read_input(path: &Path) -> anyhow::Result<BusinessInput> {
    let map = read_field_map(path)?;
    BusinessInput::from_value(&map)
        .with_context(|| format!("invalid field map in {}", path.display()))
}

/// Assemble the document for a raw map, substituting the placeholder only
/// when the map has no keys.
pub(crate) fn document_for(map: &Value, input: &BusinessInput) -> LocalBusinessDocument {
    if is_empty_field_map(map) {
        placeholder_document()
    } else {
        build_document(input)
    }
}

pub(crate) fn run_generate(config: &AppConfig, args: &GenerateArgs) -> anyhow::Result<bool> {
    let map = read_field_map(&args.input)?;
    let mut input = BusinessInput::from_value(&map)
        .with_context(|| format!("invalid field map in {}", args.input.display()))?;

    if let Some(gazetteer) = &args.gazetteer {
        fill_coordinates(config, gazetteer, &mut input)?;
    }

    let doc = document_for(&map, &input);
    if is_empty_field_map(&map) {
        tracing::warn!("field map is empty; emitting placeholder document");
    } else if !has_content(&doc) {
        tracing::warn!("field map produced no schema properties");
    }

    if args.report {
        print_report(&doc)?;
    }

    emit(&doc, args.format, args.output.as_deref(), args.output_dir.as_deref())?;
    Ok(true)
}

pub(crate) fn run_example(format: OutputFormat) -> anyhow::Result<bool> {
    let doc = generate(&example_input());
    emit(&doc, format, None, None)?;
    Ok(true)
}

/// Look up coordinates for inputs that have an address but no usable geo.
///
/// A gazetteer miss is logged and generation continues without `geo`.
fn fill_coordinates(
    config: &AppConfig,
    gazetteer_path: &Path,
    input: &mut BusinessInput,
) -> anyhow::Result<()> {
    let has_geo = [&input.latitude, &input.longitude]
        .into_iter()
        .all(|value| value.as_ref().is_some_and(|v| !v.is_blank()));
    if has_geo {
        return Ok(());
    }

    let address = build_address_string(input);
    if address.is_empty() {
        tracing::debug!("no address to geocode");
        return Ok(());
    }

    let gazetteer = Gazetteer::load(gazetteer_path)?;
    tracing::debug!(
        path = %gazetteer_path.display(),
        entries = gazetteer.len(),
        "loaded gazetteer"
    );
    let geocoder = CachedGeocoder::with_rate_limit(
        gazetteer,
        "gazetteer",
        config.geocode_rate_limit,
        Duration::from_millis(config.geocode_window_ms),
    );

    match geocoder.geocode(&address) {
        Ok(result) => {
            tracing::info!(
                address = %address,
                latitude = result.latitude,
                longitude = result.longitude,
                accuracy = %result.accuracy,
                "filled coordinates"
            );
            apply_coordinates(input, &result);
        }
        Err(e) => tracing::warn!(address = %address, error = %e, "geocoding skipped"),
    }
    Ok(())
}

fn emit(
    doc: &LocalBusinessDocument,
    format: OutputFormat,
    output: Option<&Path>,
    output_dir: Option<&Path>,
) -> anyhow::Result<()> {
    let rendered = render(doc, format)?;

    let target = match (output, output_dir) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, Some(dir)) => Some(dir.join(export_file_name(format, Utc::now()))),
        (None, None) => None,
    };

    match target {
        Some(path) => {
            std::fs::write(&path, rendered + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), %format, "wrote document");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn print_report(doc: &LocalBusinessDocument) -> anyhow::Result<()> {
    let result = validate_document(doc)?;
    let score = document_score(doc)?;
    let stats = ExportStats::measure(doc)?;

    eprintln!(
        "valid: {}  completeness: {score}%  fields: {}",
        if result.is_valid { "yes" } else { "no" },
        stats.fields
    );
    for error in &result.errors {
        eprintln!("  error: {error}");
    }
    for warning in &result.warnings {
        eprintln!("  warning: {warning}");
    }
    eprintln!(
        "size: {} formatted, {} minified ({}% smaller), {} html",
        format_bytes(stats.formatted_bytes),
        format_bytes(stats.minified_bytes),
        stats.compression_percent,
        format_bytes(stats.html_bytes)
    );
    Ok(())
}
