use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonLdError {
    #[error("field map must be an object, got {found}")]
    InvalidInput { found: &'static str },

    #[error("failed to parse field map as {format}: {reason}")]
    Parse {
        format: &'static str,
        reason: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
