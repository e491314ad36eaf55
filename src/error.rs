//! Error types for EMT Madrid API operations.

use thiserror::Error;

use crate::category::ServiceCategory;

/// Errors that can occur during EMT Madrid API operations.
#[derive(Debug, Error)]
pub enum EmtError {
    /// Configuration is missing or incomplete.
    #[error("EMT configuration required: {0}")]
    ConfigMissing(String),

    /// A service name the factory does not recognize.
    ///
    /// The library's [`EmtClient::service`](crate::EmtClient::service)
    /// reports absence with `None`; this variant exists for surfaces (the
    /// CLI) that must turn absence into a failure.
    #[error("unknown service '{0}': expected bus, geo, media, bike or parking")]
    UnknownService(String),

    /// A logical endpoint name that is not in the category's table.
    #[error("unknown endpoint '{id}' for the {category} service")]
    UnknownEndpoint {
        category: ServiceCategory,
        id: String,
    },

    /// The remote service answered with a non-success HTTP status.
    #[error("EMT API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// HTTP transport error (connect, timeout, TLS, body read).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not valid JSON.
    #[error("failed to decode response as JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured domain is not a valid URL.
    #[error("invalid domain URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for EMT operations.
pub type Result<T> = core::result::Result<T, EmtError>;
