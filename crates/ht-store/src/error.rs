use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by the remote store access layer.
///
/// The store makes no distinction between transient failures (rate limit,
/// timeout) and fatal ones; both arrive as `Api` or `Http` and the caller
/// decides whether to retry the whole operation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store transport error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Store request failed with status {status}: {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed store record: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn api(status: u16, message: String) -> Self {
        StoreError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: String) -> Self {
        StoreError::Decode {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        StoreError::Http {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
