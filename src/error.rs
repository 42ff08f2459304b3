use std::time::Duration;

use reqwest::StatusCode;

/// Why a candidate was rejected before any network access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReason {
    #[error("no URL was entered")]
    Empty,
    #[error("not an absolute URL with a scheme and host")]
    MalformedUrl,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("invalid URL: {0}")]
    Invalid(#[from] InvalidReason),
    #[error("a submission is already in progress")]
    Busy,
    /// The message stays generic, the cause is only kept as the source.
    #[error("the URL could not be shortened")]
    Failed(#[source] TransportError),
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("shortening service responded with {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("no response within {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid base URL: {value}")]
    InvalidBaseUrl { var: &'static str, value: String },
    #[error("{var} must be a positive number of seconds, got {value}")]
    InvalidTimeout { var: &'static str, value: String },
}
