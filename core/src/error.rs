//! Error types for the records API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. `Transport` and `Download` cover the two
//! host-side seams: executing requests and delivering exported files.

use std::fmt;

/// Errors returned by `RecordsClient` and `RecordStore` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested record does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The request never completed: connection failure, timeout, or a
    /// response the transport could not read.
    Transport(String),

    /// Exported bytes could not be delivered to the download sink.
    Download(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Transport(msg) => {
                write!(f, "transport failed: {msg}")
            }
            ApiError::Download(msg) => {
                write!(f, "download failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
