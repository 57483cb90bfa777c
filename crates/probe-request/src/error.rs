//! Request ingestion errors.
//!
//! Missing fields are never errors — they render as placeholder text. The
//! only failures are in getting the body from the gateway in the first
//! place.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    /// CONTENT_LENGTH was present but not a number.
    #[error("unparsable CONTENT_LENGTH {0:?}")]
    InvalidContentLength(String),

    /// The declared body size exceeds the configured cap.
    #[error("request body of {declared} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { declared: u64, limit: u64 },

    /// Reading the request or writing the response failed.
    #[error("request I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
