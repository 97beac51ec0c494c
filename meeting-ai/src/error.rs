//! Error types for the upstream AI boundary.

use std::fmt;

/// Provider-agnostic error for transcription and summarization calls.
///
/// Gateway implementations map their transport and response errors into
/// these variants so callers can apply one fallback policy regardless of
/// which provider is configured.
#[derive(Debug)]
pub enum Error {
    /// Credentials rejected (401/403) or missing. The configured API key
    /// or project id needs attention; retrying will not help.
    Authentication(String),

    /// Connectivity failure: DNS, connection refused, TLS. Typically
    /// transient.
    Network(String),

    /// The request exceeded the configured timeout.
    Timeout(String),

    /// The provider answered with a non-success status or an in-band
    /// failure of its own.
    Provider(String),

    /// The provider answered 200 but the body did not have a readable
    /// shape.
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Timeout(msg) => write!(f, "Timeout: {}", msg),
            Error::Provider(msg) => write!(f, "Provider error: {}", msg),
            Error::Parse(msg) => write!(f, "Unreadable provider response: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}
