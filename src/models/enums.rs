//! Enumeration types for the Robinhood Crypto API.

use serde::{Deserialize, Serialize};

/// Direction of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy the base currency
    Buy,
    /// Sell the base currency
    Sell,
}

/// Time in force specification for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    /// Good till cancelled
    Gtc,
    /// Good for day
    Gfd,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
}

/// Order type specifying how the order should be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Execute immediately at the current market price
    Market,
    /// Execute at the specified price or better
    Limit,
}

/// Which account listing to query.
///
/// The nummus API keys crypto activity by a ledger account id, while the
/// general trading API keys portfolios by a brokerage account number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccountScope {
    /// Crypto ledger accounts (`nummus.robinhood.com/accounts/`)
    #[default]
    Ledger,
    /// Brokerage accounts (`api.robinhood.com/accounts/`)
    Brokerage,
}
