//! Strongly-typed identifiers.
//!
//! The two API sub-domains use different account identifiers for the
//! same user, so each gets its own newtype to keep them from being mixed
//! up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// Ledger account id used by the nummus (crypto) API.
    ///
    /// ```
    /// use robinhood_crypto::AccountId;
    ///
    /// let id = AccountId::new("fad55b1b-1142-4c84-8bb3-1e65edfa37d4");
    /// assert_eq!(id.as_str(), "fad55b1b-1142-4c84-8bb3-1e65edfa37d4");
    /// ```
    AccountId
}

string_id! {
    /// Brokerage account number used by the general trading API.
    AccountNumber
}

string_id! {
    /// Opaque order id assigned by the API.
    OrderId
}

string_id! {
    /// Stable UUID-shaped identifier of a currency pair.
    PairId
}

/// Account identifiers cached by the client for its lifetime.
///
/// The ledger id is always present once the client is built. The
/// brokerage number is resolved best-effort and only
/// [`portfolios`](crate::api::AccountsService::portfolios) depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRef {
    /// Ledger (nummus) account id
    pub account_id: AccountId,
    /// Brokerage account number, if one could be resolved
    pub account_number: Option<AccountNumber>,
}
