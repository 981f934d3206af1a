use thiserror::Error;

/// Errors decoding an API response at the fetch boundary
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON array or an object with a \"data\" array, got {0}")]
    UnexpectedShape(&'static str),
}
