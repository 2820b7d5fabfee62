//! HTTP client implementation for the Robinhood Crypto API.

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, instrument, warn};

use crate::api::accounts::first_account_field;
use crate::api::{AccountsService, MarketDataService, OrdersService};
use crate::auth::{build_api_headers, AuthSession, Credentials};
use crate::models::{AccountId, AccountNumber, AccountRef, AccountScope};
use crate::transport::{HttpRequest, HttpTransport, Transport};
use crate::{Error, Result};

use super::config::ClientConfig;
use super::reauth::with_reauth;

/// The main client for interacting with the Robinhood Crypto API.
///
/// Building a client logs in (unless the session was seeded with a
/// token), installs the bearer headers and caches the account ids every
/// later call needs. Each network call made through the client recovers
/// once from a rejected token by logging in again.
///
/// The client is cheap to clone, but it is not meant for concurrent use:
/// serialize calls on one instance or build one client per task.
///
/// # Example
///
/// ```no_run
/// use robinhood_crypto::RobinhoodCryptoClient;
///
/// # async fn example() -> robinhood_crypto::Result<()> {
/// let client = RobinhoodCryptoClient::login("username", "password").await?;
///
/// let quote = client.market_data().quotes("BTCUSD").await?;
/// println!("BTC mark price: {}", quote.mark_price);
///
/// let holdings = client.accounts().holdings().await?;
/// println!("{} holdings", holdings.len());
/// # Ok(())
/// # }
/// ```
pub struct RobinhoodCryptoClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    transport: Arc<dyn Transport>,
    session: AuthSession,
    pub(crate) config: ClientConfig,
    headers: RwLock<HeaderMap>,
    account: RwLock<Option<AccountRef>>,
}

impl RobinhoodCryptoClient {
    /// Log in with username/password and default configuration.
    pub async fn login(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::login_with_config(username, password, ClientConfig::default()).await
    }

    /// Log in with username/password and custom configuration.
    pub async fn login_with_config(
        username: impl Into<String>,
        password: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let session = AuthSession::new(Credentials::new(username, password));
        Self::with_session(session, config).await
    }

    /// Build a client from a prepared session over HTTPS.
    pub async fn with_session(session: AuthSession, config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new()?);
        Self::with_transport(session, transport, config).await
    }

    /// Build a client from a prepared session over a custom transport.
    pub async fn with_transport(
        session: AuthSession,
        transport: Arc<dyn Transport>,
        config: ClientConfig,
    ) -> Result<Self> {
        let token = match session.access_token().await {
            Some(token) => token,
            None => session.login(transport.as_ref(), &config).await?,
        };

        let inner = ClientInner {
            transport,
            session,
            config,
            headers: RwLock::new(build_api_headers(&token)?),
            account: RwLock::new(None),
        };
        inner.bootstrap().await?;

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Get the market data service.
    pub fn market_data(&self) -> MarketDataService {
        MarketDataService::new(self.inner.clone())
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Log in again, rebuild headers and re-fetch the account ids.
    pub async fn refresh_session(&self) -> Result<()> {
        self.inner.reauthenticate().await
    }

    /// The cached account ids.
    pub async fn account_ref(&self) -> Option<AccountRef> {
        self.inner.account_ref().await
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &AuthSession {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    pub(crate) async fn account_ref(&self) -> Option<AccountRef> {
        self.account.read().await.clone()
    }

    /// Resolve and cache the account ids, recovering from a stale token.
    async fn bootstrap(&self) -> Result<()> {
        let account = with_reauth(
            move || self.resolve_account_ref(),
            move || self.reauthenticate(),
        )
        .await
        .inspect_err(|err| error!(error = %err, "account bootstrap failed"))?;
        *self.account.write().await = Some(account);
        Ok(())
    }

    #[instrument(skip(self), fields(username = %self.session.username()))]
    pub(crate) async fn reauthenticate(&self) -> Result<()> {
        let token = self
            .session
            .login(self.transport.as_ref(), &self.config)
            .await?;
        *self.headers.write().await = build_api_headers(&token)?;

        let account = self.resolve_account_ref().await?;
        *self.account.write().await = Some(account);
        Ok(())
    }

    /// Fetch both account ids with the current headers, without reauth.
    ///
    /// A missing brokerage account leaves `account_number` empty.
    async fn resolve_account_ref(&self) -> Result<AccountRef> {
        let endpoints = &self.config.endpoints;

        let ledger = self
            .send(Method::GET, &endpoints.ledger_accounts_url(), None)
            .await?;
        let account_id = AccountId::new(first_account_field(ledger, AccountScope::Ledger)?);

        // Only an empty brokerage listing is tolerated; request failures propagate.
        let brokerage = self
            .send(Method::GET, &endpoints.brokerage_accounts_url(), None)
            .await?;
        let account_number = match first_account_field(brokerage, AccountScope::Brokerage) {
            Ok(number) => Some(AccountNumber::new(number)),
            Err(err @ Error::AccountNotFound(_)) => {
                warn!(error = %err, "no brokerage account listed");
                None
            }
            Err(err) => return Err(err),
        };

        Ok(AccountRef {
            account_id,
            account_number,
        })
    }

    /// Issue one request with the current headers.
    async fn send(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value> {
        let request = HttpRequest {
            method,
            url: url.to_string(),
            headers: self.headers.read().await.clone(),
            body: body.cloned(),
            timeout: self.config.timeout,
        };

        debug!(method = %request.method, url = %request.url, "api request");
        let response = self.transport.request(request).await?;

        if !response.is_success() {
            return Err(Error::from_api_response(response.status, response.body));
        }
        response.json()
    }

    /// Issue a request, logging in again once if the token is rejected.
    pub(crate) async fn request(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<Value> {
        let body = body.as_ref();
        with_reauth(
            move || self.send(method.clone(), url, body),
            move || self.reauthenticate(),
        )
        .await
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let value = self.request(Method::GET, url, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: Option<&B>,
    ) -> Result<T> {
        let body = body.map(serde_json::to_value).transpose()?;
        let value = self.request(Method::POST, url, body).await?;
        Ok(serde_json::from_value(value)?)
    }
}

impl Clone for RobinhoodCryptoClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for RobinhoodCryptoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobinhoodCryptoClient")
            .field("session", &self.inner.session)
            .field("config", &self.inner.config)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::transport::MockTransport;
    use reqwest::header::AUTHORIZATION;
    use serde_json::json;

    fn seeded(token: &str) -> AuthSession {
        AuthSession::new(Credentials::new("satoshi", "hunter2")).with_access_token(token)
    }

    #[tokio::test]
    async fn test_login_bootstraps_account_ref() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        let account = client.account_ref().await.unwrap();
        assert_eq!(account.account_id.as_str(), LEDGER_ID);
        assert_eq!(account.account_number.unwrap().as_str(), ACCOUNT_NUMBER);

        let urls: Vec<String> = mock.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.robinhood.com/oauth2/token/",
                "https://nummus.robinhood.com/accounts/",
                "https://api.robinhood.com/accounts/",
            ]
        );
        let bootstrap = &mock.requests()[1];
        assert_eq!(bootstrap.headers.get(AUTHORIZATION).unwrap(), "Bearer tok-1");
    }

    #[tokio::test]
    async fn test_seeded_token_skips_login() {
        let mock = Arc::new(MockTransport::new());
        script_accounts(&mock);

        connect(seeded("seeded"), &mock).await.unwrap();

        assert_eq!(mock.request_count(), 2);
        let first = &mock.requests()[0];
        assert_eq!(first.url, "https://nummus.robinhood.com/accounts/");
        assert_eq!(first.headers.get(AUTHORIZATION).unwrap(), "Bearer seeded");
    }

    #[tokio::test]
    async fn test_stale_seeded_token_recovers_during_bootstrap() {
        let mock = Arc::new(MockTransport::new());
        mock.push_body(401, INVALID_AUTH_BODY);
        script_login(&mock, "tok-2");
        script_accounts(&mock);

        let client = connect(seeded("abcdef"), &mock).await.unwrap();

        assert_eq!(mock.request_count(), 6);
        assert_eq!(mock.remaining(), 0);
        let last = mock.last_request().unwrap();
        assert_eq!(last.headers.get(AUTHORIZATION).unwrap(), "Bearer tok-2");
        assert_eq!(client.account_ref().await.unwrap().account_id.as_str(), LEDGER_ID);
    }

    #[tokio::test]
    async fn test_empty_ledger_accounts_fail_bootstrap() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!({"access_token": "tok-1"}))
            .push_json(200, json!({"results": []}));

        let result = connect(session(), &mock).await;

        assert!(matches!(result, Err(Error::AccountNotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_brokerage_account_is_tolerated() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!({"access_token": "tok-1"}))
            .push_json(200, json!({"results": [{"id": LEDGER_ID}]}))
            .push_json(200, json!({"detail": "no results key"}));

        let client = connect(session(), &mock).await.unwrap();

        let account = client.account_ref().await.unwrap();
        assert!(account.account_number.is_none());
    }

    #[tokio::test]
    async fn test_brokerage_lookup_failure_fails_bootstrap() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(200, json!({"access_token": "tok-1"}))
            .push_json(200, json!({"results": [{"id": LEDGER_ID}]}))
            .push_json(503, json!({"detail": "Service unavailable."}));

        let result = connect(session(), &mock).await;

        assert!(matches!(result, Err(Error::Api { status: 503, .. })));
        assert_eq!(mock.request_count(), 3);
    }

    #[tokio::test]
    async fn test_brokerage_lookup_failure_during_reauth_surfaces() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        mock.push_json(200, json!({"access_token": "tok-2"}))
            .push_json(200, json!({"results": [{"id": LEDGER_ID}]}))
            .push_error(Error::Transport("timed out".to_string()));

        let result = client.refresh_session().await;

        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn test_login_failure_surfaces() {
        let mock = Arc::new(MockTransport::new());
        mock.push_json(401, json!({"detail": "Unable to log in with provided credentials."}));

        let session = AuthSession::new(Credentials::new("satoshi", "wrong"));
        let result = connect(session, &mock).await;

        assert!(matches!(result, Err(Error::Login(_))));
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_request_reauths_once_and_returns_retry_result() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        mock.push_body(401, INVALID_AUTH_BODY);
        script_login(&mock, "tok-2");
        mock.push_json(200, json!({"ok": true}));

        let value = client
            .inner
            .request(Method::GET, "https://nummus.robinhood.com/holdings/", None)
            .await
            .unwrap();

        assert_eq!(value, json!({"ok": true}));
        // 3 bootstrap + failed call + login + 2 account lookups + retry
        assert_eq!(mock.request_count(), 8);
        let retry = mock.last_request().unwrap();
        assert_eq!(retry.url, "https://nummus.robinhood.com/holdings/");
        assert_eq!(retry.headers.get(AUTHORIZATION).unwrap(), "Bearer tok-2");
    }

    #[tokio::test]
    async fn test_request_without_marker_is_not_retried() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        mock.push_json(
            401,
            json!({"detail": "Authentication credentials were not provided."}),
        );

        let result = client
            .inner
            .request(Method::GET, "https://nummus.robinhood.com/holdings/", None)
            .await;

        assert!(matches!(result, Err(Error::Api { status: 401, .. })));
        assert_eq!(mock.request_count(), 4);
    }

    #[tokio::test]
    async fn test_request_second_rejection_surfaces() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        mock.push_body(401, INVALID_AUTH_BODY);
        script_login(&mock, "tok-2");
        mock.push_body(401, INVALID_AUTH_BODY);

        let result = client
            .inner
            .request(Method::GET, "https://nummus.robinhood.com/holdings/", None)
            .await;

        assert!(result.unwrap_err().is_invalid_authorization());
        assert_eq!(mock.request_count(), 8);
        assert_eq!(mock.remaining(), 0);
    }

    #[tokio::test]
    async fn test_refresh_session_replaces_headers() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        script_login(&mock, "tok-3");
        client.refresh_session().await.unwrap();

        mock.push_json(200, json!({}));
        client
            .inner
            .request(Method::GET, "https://nummus.robinhood.com/holdings/", None)
            .await
            .unwrap();
        let last = mock.last_request().unwrap();
        assert_eq!(last.headers.get(AUTHORIZATION).unwrap(), "Bearer tok-3");
    }

    #[test]
    fn test_client_debug_redacts() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let mock = Arc::new(MockTransport::new());
        let client = rt.block_on(client(&mock));

        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("tok-1"));
        assert!(!debug_str.contains("hunter2"));
    }
}
