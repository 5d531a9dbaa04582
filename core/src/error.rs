//! Error types for the message-board API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the message does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body; the body is carried verbatim, never parsed or
//! classified here. `Unsupported` is how the declared-but-unwired operations
//! fail: loudly, with the operation name, so callers can tell an incomplete
//! feature from a call that succeeded quietly.
//!
//! No variant triggers recovery anywhere in the crate. Every failure
//! propagates unchanged to the caller.

use std::fmt;

/// Errors returned by `MessageClient` and `MessageApi` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the addressed message does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The HTTP round-trip itself failed: connection refused, DNS failure,
    /// transport-level timeout. The underlying error is exposed through
    /// `source()`.
    Transport(reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The operation is declared on the API surface but has no wire contract
    /// yet. No request was issued.
    Unsupported { operation: &'static str },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "message not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Transport(err) => write!(f, "transport failed: {err}"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Unsupported { operation } => {
                write!(f, "{operation} is not supported yet")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}
