//! Error types for the greeting client.
//!
//! # Design
//! `GreetError` has one variant per failure class a caller may want to tell
//! apart. The variants are ordered from the most specific network condition to
//! the generic catch-all, and that order is also the classification
//! precedence. `Display` gives the diagnostic text; `user_message` adds the
//! `Error: ` prefix the CLI prints.

use thiserror::Error;

/// Failure reported by a `Transport` before any HTTP status is available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No connection could be established (refused, unresolvable host, reset).
    #[error("connection failed: {0}")]
    Connect(String),

    /// The per-call timeout elapsed.
    #[error("timed out: {0}")]
    Timeout(String),

    /// Any other failure below the HTTP-status layer.
    #[error("{0}")]
    Other(String),
}

/// Errors produced while fetching a greeting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetError {
    /// The server could not be reached at `base_url`.
    #[error("Could not connect to the server at {base_url}. Is it running?")]
    Connectivity { base_url: String, detail: String },

    /// The server did not answer within the timeout.
    #[error("Request timed out. The server at {base_url} is taking too long to respond.")]
    Timeout { base_url: String },

    /// The server answered with a 4xx or 5xx status.
    #[error("HTTP error occurred: {detail}")]
    Protocol { status: u16, detail: String },

    /// Any other transport-level failure.
    #[error("Request error occurred: {0}")]
    Transport(String),

    /// Anything else, e.g. a body that is not a JSON object.
    #[error("Unexpected error occurred: {0}")]
    Unexpected(String),
}

impl GreetError {
    /// Display-ready diagnostic, always prefixed with `Error: `.
    pub fn user_message(&self) -> String {
        format!("Error: {self}")
    }
}
