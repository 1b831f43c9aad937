use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while editing or submitting a profile form
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Image is {size} bytes, above the {limit} byte limit {location}")]
    SizeLimit {
        size: u64,
        limit: u64,
        location: ErrorLocation,
    },

    #[error("A submission is already in flight {location}")]
    ConcurrentSubmission { location: ErrorLocation },

    #[error("Image read error for {path}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Submission failed: {source} {location}")]
    Submission {
        location: ErrorLocation,
        #[source]
        source: pp_client::ClientError,
    },
}

impl FormError {
    /// Create a size-limit error with location
    #[track_caller]
    pub fn size_limit(size: u64, limit: u64) -> Self {
        FormError::SizeLimit {
            size,
            limit,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a concurrent-submission error with location
    #[track_caller]
    pub fn concurrent_submission() -> Self {
        FormError::ConcurrentSubmission {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a service rejection with location
    #[track_caller]
    pub fn submission(source: pp_client::ClientError) -> Self {
        FormError::Submission {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
