//! Error types for the listings client.
//!
//! This module defines the centralized error type [`ListingsError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Network failures carry the user-facing operation context ("Failed to fetch
//! listings", "Failed to subscribe", ...) so the message can be logged as-is.

use thiserror::Error;

/// Operation context attached to listing fetch failures.
pub const FETCH_LISTINGS_FAILED: &str = "Failed to fetch listings";

/// Operation context attached to single listing lookup failures.
pub const FETCH_LISTING_FAILED: &str = "Failed to fetch listing";

/// Operation context attached to subscription list failures.
pub const FETCH_SUBSCRIPTIONS_FAILED: &str = "Failed to fetch subscriptions";

/// Operation context attached to subscription creation failures.
pub const SUBSCRIBE_FAILED: &str = "Failed to subscribe";

/// Operation context attached to subscription deletion failures.
pub const DELETE_SUBSCRIPTION_FAILED: &str = "Failed to delete subscription";

/// The main error type for listings client operations.
///
/// Network-level variants ([`Transport`](Self::Transport),
/// [`Status`](Self::Status), [`Decode`](Self::Decode)) are all treated as a
/// single "network error" kind by the application layer: no variant is retried
/// and none is distinguished beyond success or failure.
///
/// # Examples
///
/// ```
/// use listings_client::domain::ListingsError;
///
/// let err = ListingsError::Status {
///     context: "Failed to fetch listings",
///     status: 502,
/// };
/// assert_eq!(err.to_string(), "Failed to fetch listings (HTTP 502)");
/// assert!(err.is_network());
/// ```
#[derive(Debug, Error)]
pub enum ListingsError {
    /// The request could not be sent or its body could not be read.
    #[error("{context}: {source}")]
    Transport {
        /// Operation that failed.
        context: &'static str,
        /// Underlying HTTP client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{context} (HTTP {status})")]
    Status {
        /// Operation that failed.
        context: &'static str,
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// A JSON body could not be decoded or encoded.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A base URL or endpoint path could not be parsed.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A filter update would break a criteria invariant (e.g. `page = 0`).
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

impl ListingsError {
    /// Returns `true` for errors produced while talking to the listings API.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode(_)
        )
    }
}

/// A specialized `Result` type for listings client operations.
pub type Result<T> = std::result::Result<T, ListingsError>;
