//! Client configuration options.

use std::time::Duration;

use crate::models::{AccountNumber, OrderId, PairId, PairTable};

/// Default API host for market data, brokerage accounts and login.
pub const DEFAULT_API_BASE: &str = "https://api.robinhood.com";

/// Default host for the crypto ledger (orders, holdings, ledger accounts).
pub const DEFAULT_NUMMUS_BASE: &str = "https://nummus.robinhood.com";

const DEFAULT_CLIENT_ID: &str = "c82SH0WZOsabOXGP2sxqcj34FxkvfnWRZBKlBjFS";

/// Base URLs of the two API sub-domains.
///
/// Every endpoint URL is derived from these, so pointing both at a proxy
/// or a local test server redirects all traffic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// General trading API
    pub api_base: String,
    /// Crypto ledger API
    pub nummus_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            nummus_base: DEFAULT_NUMMUS_BASE.to_string(),
        }
    }
}

impl Endpoints {
    /// Use custom base URLs. Trailing slashes are trimmed.
    pub fn new(api_base: impl Into<String>, nummus_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            nummus_base: nummus_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn auth_url(&self) -> String {
        format!("{}/oauth2/token/", self.api_base)
    }

    pub(crate) fn quotes_url(&self, pair: &PairId) -> String {
        format!("{}/marketdata/forex/quotes/{}/", self.api_base, pair)
    }

    pub(crate) fn historicals_url(&self, pair: &PairId) -> String {
        format!("{}/marketdata/forex/historicals/{}/", self.api_base, pair)
    }

    pub(crate) fn brokerage_accounts_url(&self) -> String {
        format!("{}/accounts/", self.api_base)
    }

    pub(crate) fn portfolio_url(&self, account_number: &AccountNumber) -> String {
        format!("{}/portfolios/{}/", self.api_base, account_number)
    }

    pub(crate) fn ledger_accounts_url(&self) -> String {
        format!("{}/accounts/", self.nummus_base)
    }

    pub(crate) fn holdings_url(&self) -> String {
        format!("{}/holdings/", self.nummus_base)
    }

    pub(crate) fn orders_url(&self) -> String {
        format!("{}/orders/", self.nummus_base)
    }

    pub(crate) fn order_url(&self, id: &OrderId) -> String {
        format!("{}/orders/{}/", self.nummus_base, id)
    }

    pub(crate) fn order_cancel_url(&self, id: &OrderId) -> String {
        format!("{}/orders/{}/cancel/", self.nummus_base, id)
    }
}

/// Configuration for the Robinhood Crypto client.
///
/// # Example
///
/// ```
/// use robinhood_crypto::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(10))
///     .with_device_token(true);
/// assert!(config.pairs.contains("BTCUSD"));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// Base URLs
    pub endpoints: Endpoints,
    /// OAuth client id sent with the login exchange
    pub client_id: String,
    /// Requested token lifetime in seconds
    pub token_expires_in: u32,
    /// Send a per-process device token with every login
    pub use_device_token: bool,
    /// Tradable pairs
    pub pairs: PairTable,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            endpoints: Endpoints::default(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            token_expires_in: 86400,
            use_device_token: false,
            pairs: PairTable::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the base URLs.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set the OAuth client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Set the requested token lifetime.
    pub fn with_token_expires_in(mut self, secs: u32) -> Self {
        self.token_expires_in = secs;
        self
    }

    /// Enable or disable the device token.
    pub fn with_device_token(mut self, enabled: bool) -> Self {
        self.use_device_token = enabled;
        self
    }

    /// Register an extra tradable pair.
    pub fn with_pair(mut self, symbol: impl Into<String>, id: impl Into<PairId>) -> Self {
        self.pairs = self.pairs.with_pair(symbol, id);
        self
    }

    /// Replace the pair table.
    pub fn with_pairs(mut self, pairs: PairTable) -> Self {
        self.pairs = pairs;
        self
    }
}
