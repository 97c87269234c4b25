// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types.
//!
//! Auth-related failures are handled locally by the session layer (state
//! transition + credential clearing); everything else propagates to the
//! caller untouched.

/// Error type for all client operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The access token could not be decoded. Fatal to the session;
    /// stored credentials are cleared before this is returned.
    #[error("Malformed access token: {0}")]
    MalformedToken(String),

    /// A 401 that survived a refresh attempt (or a refresh that failed).
    /// Fatal to the session; the caller should return to the login view.
    #[error("Authentication failed")]
    Auth,

    /// Any other non-2xx response, with the server-provided message when
    /// one was available. Recoverable; the caller decides retry/display.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// A response body or resource URL that did not match its contract.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Token store or other internal failure.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// True for session-fatal errors that should send the user to login.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Auth | ApiError::MalformedToken(_))
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;
