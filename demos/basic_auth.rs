//! Basic authentication example.
//!
//! This example demonstrates how to log in to the Robinhood API and
//! inspect the crypto accounts behind the session.
//!
//! Set ROBINHOOD_MFA_CODE if the account asks for a one-time code.
//!
//! Run with: cargo run --example basic_auth

use robinhood_crypto::models::AccountScope;
use robinhood_crypto::{AuthSession, ClientConfig, Credentials, RobinhoodCryptoClient};

#[tokio::main]
async fn main() -> robinhood_crypto::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get credentials from environment variables
    let username = std::env::var("ROBINHOOD_USERNAME")
        .expect("ROBINHOOD_USERNAME environment variable required");
    let password = std::env::var("ROBINHOOD_PASSWORD")
        .expect("ROBINHOOD_PASSWORD environment variable required");

    let mut session = AuthSession::new(Credentials::new(username, password));
    if let Ok(code) = std::env::var("ROBINHOOD_MFA_CODE") {
        session = session.with_mfa_prompt(move || Ok::<_, robinhood_crypto::Error>(code.clone()));
    }

    println!("Connecting to Robinhood...");
    let client = RobinhoodCryptoClient::with_session(session, ClientConfig::default()).await?;
    println!("Successfully authenticated!");

    if let Some(account) = client.account_ref().await {
        println!("\nLedger account:    {}", account.account_id);
        match &account.account_number {
            Some(number) => println!("Brokerage account: {}", number),
            None => println!("Brokerage account: (none)"),
        }
    }

    let ledger = client.accounts().list(AccountScope::Ledger).await?;
    println!("\nFound {} ledger account(s)", ledger.len());
    for account in &ledger {
        println!("  - {} ({})", account["id"], account["status"]);
    }

    println!("\nHoldings:");
    for holding in client.accounts().holdings().await? {
        println!("  {} {}", holding["currency"]["code"], holding["quantity"]);
    }

    println!("\nDone!");
    Ok(())
}
