use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("a non-empty address is required")]
    EmptyAddress,

    #[error("rate limit exceeded for {provider} (retry after {retry_after_ms}ms)")]
    RateLimited {
        provider: String,
        retry_after_ms: u64,
    },

    #[error("address not found: {address}")]
    NotFound { address: String },

    #[error("failed to read gazetteer {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse gazetteer: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid gazetteer entry for \"{address}\": {reason}")]
    InvalidEntry { address: String, reason: String },
}
