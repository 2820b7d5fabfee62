//! Session management for Robinhood authentication.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::device;
use super::headers::build_auth_headers;
use crate::transport::{HttpRequest, Transport};
use crate::{ClientConfig, Error, Result};

/// Supplies a one-time code when the login exchange asks for one.
///
/// Called synchronously from inside the login flow, so an implementation
/// may block on user input. Closures returning `Result<String>` implement
/// this trait.
pub trait MfaPrompt: Send + Sync {
    /// Return the one-time code to attach to the retried exchange.
    fn one_time_code(&self) -> Result<String>;
}

impl<F> MfaPrompt for F
where
    F: Fn() -> Result<String> + Send + Sync,
{
    fn one_time_code(&self) -> Result<String> {
        self()
    }
}

/// Username and password used to mint access tokens.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Create credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// The username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A bearer token and when it was obtained.
#[derive(Clone)]
pub struct SessionToken {
    access_token: SecretString,
    obtained_at: DateTime<Utc>,
}

impl SessionToken {
    fn new(access_token: String) -> Self {
        Self {
            access_token: SecretString::from(access_token),
            obtained_at: Utc::now(),
        }
    }

    /// When the token was obtained (or seeded).
    pub fn obtained_at(&self) -> DateTime<Utc> {
        self.obtained_at
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("access_token", &"[REDACTED]")
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

/// Authentication session for the Robinhood API.
///
/// Owns the credentials and the current bearer token. The token is only
/// ever replaced by [`login`](Self::login); nothing is persisted.
pub struct AuthSession {
    credentials: Credentials,
    token: RwLock<Option<SessionToken>>,
    mfa_prompt: Option<Arc<dyn MfaPrompt>>,
}

impl AuthSession {
    /// Create a session that has not logged in yet.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token: RwLock::new(None),
            mfa_prompt: None,
        }
    }

    /// Seed the session with an existing access token.
    ///
    /// No login happens when a client is built from a seeded session. If
    /// the API later rejects the token, the client logs in with the
    /// credentials and carries on.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        let access_token = access_token.into();
        *self.token.get_mut() = if access_token.is_empty() {
            None
        } else {
            Some(SessionToken::new(access_token))
        };
        self
    }

    /// Answer multi-factor challenges with this prompt.
    pub fn with_mfa_prompt(mut self, prompt: impl MfaPrompt + 'static) -> Self {
        self.mfa_prompt = Some(Arc::new(prompt));
        self
    }

    /// The username this session logs in as.
    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Returns `true` once a non-empty token is held.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// When the current token was obtained.
    pub async fn obtained_at(&self) -> Option<DateTime<Utc>> {
        self.token.read().await.as_ref().map(SessionToken::obtained_at)
    }

    pub(crate) async fn access_token(&self) -> Option<SecretString> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    /// Exchange the credentials for a new access token.
    ///
    /// If the API answers with an MFA challenge, the configured
    /// [`MfaPrompt`] is asked for a code and the exchange is repeated once
    /// with the code attached.
    ///
    /// # Errors
    ///
    /// - [`Error::Login`] on a non-2xx answer, a body without
    ///   `access_token`, or a second challenge after a code was sent
    /// - [`Error::MfaRequired`] on a challenge with no prompt configured
    /// - transport errors propagate unchanged
    #[instrument(skip_all, fields(username = %self.credentials.username))]
    pub async fn login(
        &self,
        transport: &dyn Transport,
        config: &ClientConfig,
    ) -> Result<SecretString> {
        let access_token = match self.exchange(transport, config, None).await? {
            LoginOutcome::Token(token) => token,
            LoginOutcome::MfaChallenge => {
                let prompt = self.mfa_prompt.as_ref().ok_or(Error::MfaRequired)?;
                info!("multi-factor code requested");
                let code = prompt.one_time_code()?;
                match self.exchange(transport, config, Some(code.trim())).await? {
                    LoginOutcome::Token(token) => token,
                    LoginOutcome::MfaChallenge => {
                        return Err(Error::Login("multi-factor code was rejected".to_string()))
                    }
                }
            }
        };

        let token = SessionToken::new(access_token);
        let secret = token.access_token.clone();
        *self.token.write().await = Some(token);
        info!("access token obtained");
        Ok(secret)
    }

    async fn exchange(
        &self,
        transport: &dyn Transport,
        config: &ClientConfig,
        mfa_code: Option<&str>,
    ) -> Result<LoginOutcome> {
        let device_token = config.use_device_token.then(device::device_token);
        let payload = LoginRequest {
            password: self.credentials.password.expose_secret(),
            username: &self.credentials.username,
            grant_type: "password",
            scope: "internal",
            client_id: &config.client_id,
            expires_in: config.token_expires_in,
            device_token,
            challenge_type: device_token.map(|_| "sms"),
            mfa_code,
        };

        let request = HttpRequest {
            method: Method::POST,
            url: config.endpoints.auth_url(),
            headers: build_auth_headers(),
            body: Some(serde_json::to_value(&payload)?),
            timeout: config.timeout,
        };

        debug!(with_mfa_code = mfa_code.is_some(), "requesting access token");
        let response = transport.request(request).await?;

        if !response.is_success() {
            return Err(Error::Login(format!(
                "authentication failed with status {}",
                response.status
            )));
        }

        let body: LoginResponse = response
            .json()
            .map_err(|e| Error::Login(format!("unreadable authentication response: {}", e)))?;

        if body.mfa_required {
            return Ok(LoginOutcome::MfaChallenge);
        }

        match body.access_token {
            Some(token) if !token.is_empty() => Ok(LoginOutcome::Token(token)),
            _ => Err(Error::Login(
                "response did not contain an access token".to_string(),
            )),
        }
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("credentials", &self.credentials)
            .field("access_token", &"[REDACTED]")
            .field("mfa_prompt", &self.mfa_prompt.is_some())
            .finish()
    }
}

enum LoginOutcome {
    Token(String),
    MfaChallenge,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    password: &'a str,
    username: &'a str,
    grant_type: &'static str,
    scope: &'static str,
    client_id: &'a str,
    expires_in: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    challenge_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mfa_code: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    mfa_required: bool,
}
