//! Read-only commands: `validate`, `score`, `check` and `types`.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use schemasnap_core::{AppConfig, DEFAULT_BUSINESS_TYPE, SUPPORTED_BUSINESS_TYPES};
use schemasnap_jsonld::{check_input, completeness_score, validate, FieldRules};

use crate::generate::read_input;

fn read_document(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read document from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Returns `false` when the document has errors.
pub(crate) fn run_validate(path: &Path) -> anyhow::Result<bool> {
    let doc = read_document(path)?;
    let result = validate(&doc);

    if result.is_valid {
        println!("valid");
    } else {
        println!("invalid ({} errors)", result.errors.len());
    }
    for error in &result.errors {
        println!("  error: {error}");
    }
    for warning in &result.warnings {
        println!("  warning: {warning}");
    }

    tracing::debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated document"
    );
    Ok(result.is_valid)
}

pub(crate) fn run_score(path: &Path) -> anyhow::Result<bool> {
    let doc = read_document(path)?;
    println!("{}%", completeness_score(&doc));
    Ok(true)
}

/// Returns `false` when any field fails its checks.
pub(crate) fn run_check(config: &AppConfig, path: &Path) -> anyhow::Result<bool> {
    let input = read_input(path)?;
    let issues = check_input(&input, &FieldRules::from(config));

    if issues.is_empty() {
        println!("all fields pass");
        return Ok(true);
    }
    for issue in &issues {
        println!("{}: {}", issue.field, issue.message);
    }
    Ok(false)
}

pub(crate) fn run_types() -> bool {
    for &name in SUPPORTED_BUSINESS_TYPES {
        if name == DEFAULT_BUSINESS_TYPE {
            println!("{name} (default)");
        } else {
            println!("{name}");
        }
    }
    true
}
