use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API error: {code} - {message}")]
    ApiError { code: i32, message: String },

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// A response payload that does not match the shape the decoder expects.
///
/// Every variant names the offending field; `raw` holds the JSON text that was
/// found there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected a JSON object for `{field}`, got {raw}")]
    NotAnObject { field: String, raw: String },

    #[error("missing field `{field}`")]
    MissingField { field: String },

    #[error("invalid value for `{field}`: {raw} ({reason})")]
    InvalidValue {
        field: String,
        raw: String,
        reason: String,
    },

    #[error("unrecognized code for `{field}`: {raw}")]
    UnknownCode { field: String, raw: String },
}

impl DecodeError {
    /// Name of the field the error was raised for
    pub fn field(&self) -> &str {
        match self {
            Self::NotAnObject { field, .. }
            | Self::MissingField { field }
            | Self::InvalidValue { field, .. }
            | Self::UnknownCode { field, .. } => field,
        }
    }
}
