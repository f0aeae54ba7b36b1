//! Error types for the Viva client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Viva client.
///
/// Every failure is local to the operation that produced it; none of these
/// variants is fatal to the process, and the session state is guaranteed
/// unchanged whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VivaError {
    /// Malformed local input, caught before any request is sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport-level failure (connect, timeout). Retryable by
    /// re-invoking the same call.
    #[error("Network error: {0}")]
    Network(String),

    /// The transport succeeded but the service reported a failure, or the
    /// payload was structurally invalid. The message is surfaced verbatim.
    #[error("Service error: {0}")]
    Server(String),

    /// An operation was attempted in a phase that does not permit it.
    #[error("State error: {0}")]
    State(String),
}

impl VivaError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Server error
    pub fn server(message: impl Into<String>) -> Self {
        Self::Server(message.into())
    }

    /// Creates a State error
    pub fn state(message: impl Into<String>) -> Self {
        Self::State(message.into())
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a Server error
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server(_))
    }

    /// Check if this is a State error
    pub fn is_state(&self) -> bool {
        matches!(self, Self::State(_))
    }

    /// Whether re-invoking the failed call is a sensible recovery.
    ///
    /// Only transport failures qualify; validation and state errors need a
    /// different input, and server rejections are authoritative.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

impl From<serde_json::Error> for VivaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Server(format!("invalid service payload: {err}"))
    }
}

/// A type alias for `Result<T, VivaError>`.
pub type Result<T> = std::result::Result<T, VivaError>;
