//! Currency pair lookup table.

use std::collections::BTreeMap;

use super::primitives::PairId;
use crate::{Error, Result};

/// Read-only mapping from pair symbol (e.g. `BTCUSD`) to its pair id.
///
/// Built once as part of [`ClientConfig`](crate::ClientConfig) and never
/// mutated after the client is constructed.
///
/// ```
/// use robinhood_crypto::models::PairTable;
///
/// let pairs = PairTable::default();
/// assert_eq!(
///     pairs.resolve("BTCUSD").unwrap().as_str(),
///     "3d961844-d360-45fc-989b-f6fca761d511"
/// );
/// assert!(pairs.resolve("DOGEUSD").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairTable {
    pairs: BTreeMap<String, PairId>,
}

impl Default for PairTable {
    fn default() -> Self {
        Self::empty()
            .with_pair("BTCUSD", "3d961844-d360-45fc-989b-f6fca761d511")
            .with_pair("ETHUSD", "76637d50-c702-4ed1-bcb5-5b0732a81f48")
    }
}

impl PairTable {
    /// Create a table with no pairs.
    pub fn empty() -> Self {
        Self {
            pairs: BTreeMap::new(),
        }
    }

    /// Register a pair, replacing any previous id for the same symbol.
    pub fn with_pair(mut self, symbol: impl Into<String>, id: impl Into<PairId>) -> Self {
        self.pairs.insert(symbol.into(), id.into());
        self
    }

    /// Look up the pair id for a symbol.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPair`] if the symbol is not registered.
    pub fn resolve(&self, symbol: &str) -> Result<&PairId> {
        self.pairs
            .get(symbol)
            .ok_or_else(|| Error::UnknownPair(symbol.to_string()))
    }

    /// Returns `true` if the symbol is registered.
    pub fn contains(&self, symbol: &str) -> bool {
        self.pairs.contains_key(symbol)
    }

    /// Iterate over the registered symbols in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.pairs.keys().map(String::as_str)
    }
}
