//! Accounts service for ledger, brokerage and holdings data.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::AccountScope;
use crate::{Error, Result};

/// Service for account-related operations.
///
/// Account payloads are returned verbatim as JSON; their shape varies
/// between the ledger and brokerage sub-domains.
///
/// # Example
///
/// ```no_run
/// use robinhood_crypto::models::AccountScope;
///
/// # async fn example(client: robinhood_crypto::RobinhoodCryptoClient) -> robinhood_crypto::Result<()> {
/// let accounts = client.accounts().list(AccountScope::Ledger).await?;
/// println!("{} ledger accounts", accounts.len());
///
/// let id = client.accounts().account_id().await?;
/// println!("Ledger account: {}", id);
///
/// for holding in client.accounts().holdings().await? {
///     println!("{}", holding["currency"]["code"]);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the accounts of one scope.
    ///
    /// Returns an empty list when the payload has no `results` array.
    pub async fn list(&self, scope: AccountScope) -> Result<Vec<Value>> {
        let payload = self.inner.get(&self.accounts_url(scope)).await?;
        Ok(results(payload))
    }

    /// The id of the first ledger account.
    ///
    /// Fails with [`Error::AccountNotFound`] when no account is listed.
    pub async fn account_id(&self) -> Result<String> {
        let payload = self.inner.get(&self.accounts_url(AccountScope::Ledger)).await?;
        first_account_field(payload, AccountScope::Ledger)
    }

    /// The account number of the first brokerage account.
    ///
    /// Fails with [`Error::AccountNotFound`] when no account is listed.
    pub async fn account_number(&self) -> Result<String> {
        let payload = self
            .inner
            .get(&self.accounts_url(AccountScope::Brokerage))
            .await?;
        first_account_field(payload, AccountScope::Brokerage)
    }

    /// Current crypto holdings.
    pub async fn holdings(&self) -> Result<Vec<Value>> {
        let payload = self
            .inner
            .get(&self.inner.config.endpoints.holdings_url())
            .await?;
        Ok(results(payload))
    }

    /// Portfolio summary of the cached brokerage account.
    pub async fn portfolios(&self) -> Result<Value> {
        let account_number = self
            .inner
            .account_ref()
            .await
            .and_then(|account| account.account_number)
            .ok_or_else(|| Error::AccountNotFound("brokerage account".to_string()))?;

        self.inner
            .get(&self.inner.config.endpoints.portfolio_url(&account_number))
            .await
    }

    fn accounts_url(&self, scope: AccountScope) -> String {
        let endpoints = &self.inner.config.endpoints;
        match scope {
            AccountScope::Ledger => endpoints.ledger_accounts_url(),
            AccountScope::Brokerage => endpoints.brokerage_accounts_url(),
        }
    }
}

/// The `results` array of a listing, or empty.
pub(crate) fn results(payload: Value) -> Vec<Value> {
    match payload {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// The identifying field of the first account in a listing.
pub(crate) fn first_account_field(payload: Value, scope: AccountScope) -> Result<String> {
    let (field, kind) = match scope {
        AccountScope::Ledger => ("id", "ledger account"),
        AccountScope::Brokerage => ("account_number", "brokerage account"),
    };

    results(payload)
        .first()
        .and_then(|account| account.get(field))
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| Error::AccountNotFound(kind.to_string()))
}
