//! Transparent reauthentication example.
//!
//! The session is seeded with a bogus access token. The first call is
//! rejected with `Invalid Authorization header`, the client logs in again
//! with the stored credentials and the call succeeds.
//!
//! Run with: RUST_LOG=robinhood_crypto=debug cargo run --example reauth

use robinhood_crypto::{AuthSession, ClientConfig, Credentials, RobinhoodCryptoClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> robinhood_crypto::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = std::env::var("ROBINHOOD_USERNAME")
        .expect("ROBINHOOD_USERNAME environment variable required");
    let password = std::env::var("ROBINHOOD_PASSWORD")
        .expect("ROBINHOOD_PASSWORD environment variable required");

    let session = AuthSession::new(Credentials::new(username, password))
        .with_access_token("abcdef");

    // Bootstrapping the account ids hits the API with the bogus token
    let client = RobinhoodCryptoClient::with_session(session, ClientConfig::default()).await?;
    println!("Recovered session, token obtained at {:?}", client.session().obtained_at().await);

    let quote = client.market_data().quotes("ETHUSD").await?;
    println!("ETH mark price: {}", quote.mark_price);

    Ok(())
}
