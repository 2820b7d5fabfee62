//! API service modules for Robinhood Crypto endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the API. Services are cheap handles obtained from
//! [`RobinhoodCryptoClient`](crate::RobinhoodCryptoClient).

pub(crate) mod accounts;
mod market_data;
mod orders;

pub use accounts::AccountsService;
pub use market_data::MarketDataService;
pub use orders::OrdersService;
