//! Authentication and session management for the Robinhood API.
//!
//! Login is a single username/password exchange against the OAuth2
//! token endpoint. The resulting bearer token is attached to every API
//! call by the client.
//!
//! ```no_run
//! use robinhood_crypto::{AuthSession, ClientConfig, Credentials, HttpTransport};
//!
//! # async fn example() -> robinhood_crypto::Result<()> {
//! let session = AuthSession::new(Credentials::new("username", "password"))
//!     .with_mfa_prompt(|| {
//!         let mut code = String::new();
//!         std::io::stdin()
//!             .read_line(&mut code)
//!             .map_err(|e| robinhood_crypto::Error::InvalidInput(e.to_string()))?;
//!         Ok::<_, robinhood_crypto::Error>(code)
//!     });
//!
//! let transport = HttpTransport::new()?;
//! session.login(&transport, &ClientConfig::default()).await?;
//! # Ok(())
//! # }
//! ```

pub mod device;
mod headers;
mod session;

pub use headers::{build_api_headers, build_auth_headers};
pub use session::{AuthSession, Credentials, MfaPrompt, SessionToken};
