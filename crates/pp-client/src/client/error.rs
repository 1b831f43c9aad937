use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during profile service calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Profile service error ({status}): {detail} {location}")]
    Api {
        status: u16,
        /// Human-readable rejection message, surfaced verbatim
        detail: String,
        location: ErrorLocation,
    },

    #[error("Profile {id} not found {location}")]
    NotFound { id: Uuid, location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API rejection error with location
    #[track_caller]
    pub fn api(status: u16, detail: String) -> Self {
        ClientError::Api {
            status,
            detail,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a not-found error with location
    #[track_caller]
    pub fn not_found(id: Uuid) -> Self {
        ClientError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the requested record does not exist; callers use this to
    /// navigate away instead of reporting a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }

    /// The rejection message for display, if the service sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
