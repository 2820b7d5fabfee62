//! # robinhood-crypto
//!
//! An async Rust client for Robinhood's crypto trading endpoints.
//!
//! The client logs in with username and password, caches the account ids
//! every call needs, and transparently logs in again when the API rejects
//! the bearer token.
//!
//! ## Features
//!
//! - **Authentication**: password login with optional SMS multi-factor code
//!   and device token, or a seeded access token
//! - **Market Data**: quotes and historical candles per currency pair
//! - **Accounts**: ledger and brokerage accounts, holdings, portfolio
//! - **Orders**: place, list, inspect and cancel orders
//! - **Reauthentication**: one transparent retry after an
//!   `Invalid Authorization header` rejection
//! - **Testability**: all I/O goes through a pluggable [`Transport`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use robinhood_crypto::RobinhoodCryptoClient;
//!
//! #[tokio::main]
//! async fn main() -> robinhood_crypto::Result<()> {
//!     let client = RobinhoodCryptoClient::login("username", "password").await?;
//!
//!     let quote = client.market_data().quotes("BTCUSD").await?;
//!     println!("BTC: bid={} ask={}", quote.bid_price, quote.ask_price);
//!
//!     let holdings = client.accounts().holdings().await?;
//!     println!("Found {} holdings", holdings.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Order Placement
//!
//! ```rust,no_run
//! use robinhood_crypto::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> robinhood_crypto::Result<()> {
//!     let client = RobinhoodCryptoClient::login("user", "pass").await?;
//!
//!     let order = OrderRequestBuilder::new()
//!         .price(dec!(6500.00))
//!         .quantity(dec!(0.001))
//!         .side(Side::Buy)
//!         .time_in_force(TimeInForce::Gtc)
//!         .order_type(OrderType::Limit)
//!         .build()?;
//!
//!     let placed = client.orders().trade("BTCUSD", order).await?;
//!     println!("Order placed: {}", placed["id"]);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;

// Re-export primary types at crate root for convenience
pub use auth::{AuthSession, Credentials, MfaPrompt};
pub use client::{ClientConfig, Endpoints, RobinhoodCryptoClient};
pub use error::{Error, Result};
pub use models::{AccountId, AccountNumber, AccountRef, OrderId, PairId, PairTable};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;

/// Prelude module for convenient imports.
///
/// ```rust
/// use robinhood_crypto::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{AuthSession, Credentials, MfaPrompt};
    pub use crate::client::{ClientConfig, Endpoints, RobinhoodCryptoClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        AccountId, AccountNumber, AccountRef, OrderId, PairId, PairTable,
        // Enums
        AccountScope, OrderType, Side, TimeInForce,
        // Orders
        OrderRequest, OrderRequestBuilder,
        // Market data
        DataPoint, Historicals, HistoricalsQuery, Quote,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_number_creation() {
        let account = AccountNumber::new("5RY82436");
        assert_eq!(account.as_str(), "5RY82436");
    }

    #[test]
    fn test_default_base_urls() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.api_base, "https://api.robinhood.com");
        assert_eq!(endpoints.nummus_base, "https://nummus.robinhood.com");
    }

    #[test]
    fn test_unknown_pair_error() {
        let pairs = PairTable::default();
        assert!(matches!(pairs.resolve("XYZUSD"), Err(Error::UnknownPair(_))));
    }
}
