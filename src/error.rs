//! Error types shared by the auction, chat, and review layers.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the platform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A configured or composed URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// The auction API answered with a non-success status.
    #[error("auction API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response detail, when the server provided one.
        message: String,
    },

    /// Networking failed while calling the auction API.
    #[error("network error talking to the auction API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A response body did not have the expected shape.
    #[error("unexpected response payload: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// A review date could not be parsed.
    #[error("invalid review date: {value}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
    },

    /// The messaging transport rejected an operation.
    #[error("messaging error: {message}")]
    Messaging {
        /// Transport error detail.
        message: String,
    },

    /// A chat operation requires a connected session.
    #[error("chat session is not connected")]
    NotConnected,

    /// A chat operation was attempted in the wrong conversation.
    #[error("chat error: {message}")]
    Chat {
        /// Why the operation was rejected.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ClientError {
    /// Wraps a JSON decoding failure.
    #[must_use]
    pub fn decode(error: &serde_json::Error) -> Self {
        Self::Decode {
            message: error.to_string(),
        }
    }

    /// Wraps a local I/O failure.
    #[must_use]
    pub fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
