//! HTTP client and service layer for the Robinhood Crypto API.
//!
//! This module provides the main entry point [`RobinhoodCryptoClient`] for
//! interacting with the API.
//!
//! # Example
//!
//! ```no_run
//! use robinhood_crypto::{ClientConfig, RobinhoodCryptoClient};
//! use std::time::Duration;
//!
//! # async fn example() -> robinhood_crypto::Result<()> {
//! let config = ClientConfig::default().with_timeout(Duration::from_secs(10));
//! let client = RobinhoodCryptoClient::login_with_config("username", "password", config).await?;
//!
//! let holdings = client.accounts().holdings().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod reauth;

pub use config::{ClientConfig, Endpoints, DEFAULT_API_BASE, DEFAULT_NUMMUS_BASE};
pub use http::RobinhoodCryptoClient;
pub(crate) use http::ClientInner;
#[cfg(test)]
pub(crate) use http::testing;
