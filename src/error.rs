//! Error types and handling for the pharmacy locator

use thiserror::Error;

/// Main error type for the pharmacy locator
#[derive(Error, Debug)]
pub enum PharmacyError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport failures talking to the Overpass API (connect, timeout, TLS)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The Overpass API answered with a non-success status
    #[error("Overpass API returned status {status}")]
    UpstreamStatus { status: u16 },

    /// Response body could not be decoded
    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl PharmacyError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Whether the error came from the Overpass API rather than local setup
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::UpstreamStatus { .. } | Self::Parse { .. }
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PharmacyError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file.")
            }
            PharmacyError::Network { .. } => {
                "Unable to reach the Overpass API. Please check your internet connection."
                    .to_string()
            }
            PharmacyError::UpstreamStatus { status } => {
                format!("The Overpass API is unavailable right now (status {status}).")
            }
            PharmacyError::Parse { .. } => {
                "The Overpass API returned an unexpected response.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for PharmacyError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            PharmacyError::UpstreamStatus {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            PharmacyError::parse(err.to_string())
        } else {
            PharmacyError::network(err.to_string())
        }
    }
}
