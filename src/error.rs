// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for signin-shim
//!
//! A rejected sign-in payload is an error; rejected credentials are not.
//! Invalid credentials come back as an ordinary 401 [`Response`](crate::http::Response).

use thiserror::Error;

/// Result type alias for signin-shim operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for signin-shim
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed in the underlying transport
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Intercepted sign-in body could not be decoded
    #[error("Malformed request to {url}: {reason}")]
    MalformedRequest { url: String, reason: String },

    /// An interceptor refused to let the request through
    #[error("Request to {url} aborted: {reason}")]
    Aborted { url: String, reason: String },

    /// Mock token could not be split or decoded
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Network error outside reqwest (custom transports)
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a malformed request error from a JSON decode failure
    ///
    /// Only the error category and position are kept. serde_json messages
    /// can quote the offending value, which may be the password.
    pub fn malformed_request(url: impl Into<String>, source: &serde_json::Error) -> Self {
        Error::MalformedRequest {
            url: url.into(),
            reason: format!(
                "{:?} error at line {} column {}",
                source.classify(),
                source.line(),
                source.column()
            ),
        }
    }

    /// Create a malformed request error with a fixed reason
    pub fn malformed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedRequest {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an aborted error
    pub fn aborted(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Aborted {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid token error
    pub fn invalid_token<S: Into<String>>(msg: S) -> Self {
        Error::InvalidToken(msg.into())
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Error::Network(msg.into())
    }

    /// Check if this is a malformed sign-in payload
    pub fn is_malformed_request(&self) -> bool {
        matches!(self, Error::MalformedRequest { .. })
    }

    /// Check if this is a network error
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Http(_))
    }

    /// Check if this is recoverable (can retry)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Network(_) => true,
            _ => false,
        }
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::MalformedRequest { url, .. } => Some(url),
            Error::Aborted { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add operation context to error
    fn context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            Error::Other(format!("{}: {}", msg, err))
        })
    }
}
