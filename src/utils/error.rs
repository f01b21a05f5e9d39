use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("failed to decode request body: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invalid request: {}", .errors.join(", "))]
    Validation { errors: Vec<String> },

    #[error("registry request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode registry reply: {0}")]
    ReplyDecode(#[source] serde_json::Error),

    #[error("registry responded with status {status}")]
    UpstreamStatus { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CheckError {
    /// Message placed in the `error` field of an in-band error response.
    pub fn client_message(&self) -> String {
        match self {
            CheckError::EmptyBody => "empty request".to_string(),
            CheckError::Decode(_) => "failed to decode request".to_string(),
            CheckError::Validation { errors } => errors.join(", "),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
