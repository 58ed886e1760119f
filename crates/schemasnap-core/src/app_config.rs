use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How a generated document is rendered for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Two-space indented JSON.
    #[default]
    Pretty,
    /// Compact JSON with no insignificant whitespace.
    Minified,
    /// Pretty JSON wrapped in a `<script type="application/ld+json">` tag.
    Html,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Minified => write!(f, "minified"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "formatted" => Ok(OutputFormat::Pretty),
            "minified" | "compact" => Ok(OutputFormat::Minified),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!(
                "unknown output format '{other}'; expected pretty, minified, or html"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub output_format: OutputFormat,
    /// Country used to pick a postal-code pattern when the input has none.
    pub default_country: String,
    pub description_max_len: usize,
    pub gazetteer_path: Option<PathBuf>,
    pub geocode_rate_limit: u32,
    pub geocode_window_ms: u64,
}
