//! Error types for the Airthings web client.

use thiserror::Error;

/// Primary error type for all client operations.
#[derive(Error, Debug)]
pub enum AirthingsError {
    /// The vendor answered with a 4xx status.
    #[error("Unauthorized (status {status}): {body}")]
    Unauthorized { status: u16, body: String },

    /// The vendor answered with a non-2xx, non-4xx status.
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// The supplied username/password are wrong; retrying cannot help
    /// without new credentials.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A 2xx body was missing a field the flow depends on.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AirthingsError {
    /// Whether this error represents a 4xx answer from the vendor.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// The HTTP status carried by this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The diagnostic payload carried by this error.
    pub fn details(&self) -> String {
        match self {
            Self::Unauthorized { body, .. } | Self::Api { body, .. } => body.clone(),
            other => other.to_string(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, AirthingsError>;

/// Classify an HTTP status + body into the success/unauthorized/api taxonomy.
///
/// `status / 100 == 2` is the success path, `== 4` raises
/// [`AirthingsError::Unauthorized`], anything else raises
/// [`AirthingsError::Api`].
pub fn classify_status(status: u16, body: String) -> Result<String> {
    match status / 100 {
        2 => Ok(body),
        4 => Err(AirthingsError::Unauthorized { status, body }),
        _ => Err(AirthingsError::Api { status, body }),
    }
}
