//! Error types for the Robinhood Crypto API client.
//!
//! Every fallible operation in this crate returns [`Error`]. Endpoint
//! methods narrow transport-level failures into a domain kind
//! ([`Error::Quote`], [`Error::Trade`]) and let everything else through
//! unchanged.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Robinhood Crypto operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Body fragment the API returns when the bearer token was rejected.
pub const INVALID_AUTHORIZATION_MARKER: &str = "Invalid Authorization header";

/// The main error type for all Robinhood Crypto API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed at the `reqwest` level (connect, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// API returned a non-2xx response
    #[error("API error: status={status}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
        /// Raw response body
        body: String,
    },

    /// Any other failure reported by a [`Transport`](crate::Transport)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Username/password exchange failed
    #[error("Login failed: {0}")]
    Login(String),

    /// The login exchange asked for a one-time code but no prompt is configured
    #[error("Multi-factor authentication required")]
    MfaRequired,

    /// Currency pair is not in the pair table
    #[error("Unknown currency pair: {0}")]
    UnknownPair(String),

    /// Account list was empty or the account reference was never resolved
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Quote request failed
    #[error("Quote request failed: {0}")]
    Quote(#[source] Box<Error>),

    /// Order placement or order history request failed
    #[error("Trade request failed: {0}")]
    Trade(#[source] Box<Error>),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Returns `true` if the API rejected the bearer token in a way the
    /// client can recover from by logging in again.
    pub fn is_invalid_authorization(&self) -> bool {
        matches!(self, Error::Api { body, .. } if body.contains(INVALID_AUTHORIZATION_MARKER))
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Login(_) | Error::MfaRequired) || self.is_invalid_authorization()
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::InvalidInput(_) | Error::UnknownPair(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Failures raised below the endpoint layer: the wire, the status
    /// line, or the payload decode.
    pub(crate) fn is_transport_level(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Json(_) | Error::Api { .. } | Error::Transport(_)
        )
    }

    /// Wrap a transport-level failure as [`Error::Quote`].
    pub(crate) fn into_quote_failure(self) -> Self {
        if self.is_transport_level() {
            Error::Quote(Box::new(self))
        } else {
            self
        }
    }

    /// Wrap a transport-level failure as [`Error::Trade`].
    pub(crate) fn into_trade_failure(self) -> Self {
        if self.is_transport_level() {
            Error::Trade(Box::new(self))
        } else {
            self
        }
    }

    /// Create an API error from a non-2xx response.
    pub(crate) fn from_api_response(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|json| {
                json.get("detail")
                    .or_else(|| json.get("error"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| {
                if body.is_empty() {
                    "Unknown API error".to_string()
                } else {
                    body.clone()
                }
            });

        Error::Api {
            status,
            message,
            body,
        }
    }
}
