//! Error types for the campus client toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, backend API, and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for campus operations.
///
/// This error type covers all possible failure modes in the toolkit,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Authentication errors (invalid credentials, expired session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Backend API errors (non-2xx responses with an error payload).
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Input validation errors (malformed URL, empty credential, bad field).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Check whether this error is the fatal session-expired outcome.
    ///
    /// When this returns `true` the credential store has already been
    /// cleared and the caller should route the user to a sign-in entry
    /// point. The client never performs that navigation itself.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Error::Auth(AuthError::SessionExpired { .. }))
    }

    /// Check whether this error is an authorization failure (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Error::Api(api) => api.is_unauthorized(),
            Error::Auth(AuthError::SessionExpired { .. }) => true,
            _ => false,
        }
    }

    /// The backend API error underlying this failure, if any.
    ///
    /// Digs through a session-expired wrapper so callers can reach the
    /// failure that was propagated with it.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(api),
            Error::Auth(AuthError::SessionExpired { source }) => source.api_error(),
            _ => None,
        }
    }

    /// The best human-readable explanation for this failure: the
    /// backend's normalized message when one exists, the error's own
    /// rendering otherwise.
    pub fn user_message(&self) -> String {
        match self.api_error() {
            Some(api) => api.normalized_message(),
            None => self.to_string(),
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// DNS resolution failed.
    #[error("DNS resolution failed: {host}")]
    Dns { host: String },

    /// TLS/SSL error.
    #[error("TLS error: {message}")]
    Tls { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No refresh credential is available to exchange.
    #[error("refresh token missing")]
    RefreshTokenMissing,

    /// The session is irrecoverably expired and the store has been cleared.
    ///
    /// Raised when an authorization failure could not be repaired: either
    /// no refresh credential was available (the source is the original
    /// 401) or the refresh call itself failed (the source is that
    /// failure). Callers should direct the user to sign in again.
    #[error("session expired")]
    SessionExpired {
        #[source]
        source: Box<Error>,
    },
}

/// An error response from the backend API.
///
/// The backend nests a human-readable explanation under one of two
/// optional fields. [`ApiError::normalized_message`] resolves them with a
/// fixed precedence instead of callers sniffing the shape themselves.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Primary error message from the response body.
    pub message: Option<String>,
    /// Fallback detail field from the response body.
    pub detail: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        } else if let Some(ref detail) = self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, message: Option<String>, detail: Option<String>) -> Self {
        Self {
            status,
            message,
            detail,
        }
    }

    /// Check if this is an authorization failure.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Resolve the human-readable message with a fixed precedence:
    /// `message`, then `detail`, then a generic fallback.
    pub fn normalized_message(&self) -> String {
        self.message
            .as_deref()
            .or(self.detail.as_deref())
            .unwrap_or("Request failed. Please try again.")
            .to_string()
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid backend base URL.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },

    /// An identity-provider credential was required but missing.
    #[error("missing identity provider credential")]
    MissingProviderCredential,

    /// Invalid phone number format.
    #[error("{reason}")]
    Phone { reason: String },

    /// Invalid country code format.
    #[error("{reason}")]
    CountryCode { reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_message_prefers_message_field() {
        let err = ApiError::new(
            400,
            Some("Email already registered.".into()),
            Some("bad request".into()),
        );
        assert_eq!(err.normalized_message(), "Email already registered.");
    }

    #[test]
    fn normalized_message_falls_back_to_detail() {
        let err = ApiError::new(400, None, Some("Given token not valid.".into()));
        assert_eq!(err.normalized_message(), "Given token not valid.");
    }

    #[test]
    fn normalized_message_generic_default() {
        let err = ApiError::new(500, None, None);
        assert_eq!(err.normalized_message(), "Request failed. Please try again.");
    }

    #[test]
    fn session_expired_keeps_underlying_failure() {
        let original = Error::Api(ApiError::new(401, None, None));
        let err = Error::Auth(AuthError::SessionExpired {
            source: Box::new(original),
        });
        assert!(err.is_session_expired());
        assert!(err.is_unauthorized());
        let source = std::error::Error::source(&err);
        assert!(source.is_some());
    }
}
