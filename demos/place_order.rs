//! Order placement example.
//!
//! This example places a small limit buy far below the market, checks its
//! status and cancels it again.
//!
//! Run with: cargo run --example place_order

use robinhood_crypto::models::{OrderRequestBuilder, OrderType, Side, TimeInForce};
use robinhood_crypto::{OrderId, RobinhoodCryptoClient};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> robinhood_crypto::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Get credentials from environment variables
    let username = std::env::var("ROBINHOOD_USERNAME")
        .expect("ROBINHOOD_USERNAME environment variable required");
    let password = std::env::var("ROBINHOOD_PASSWORD")
        .expect("ROBINHOOD_PASSWORD environment variable required");

    let client = RobinhoodCryptoClient::login(username, password).await?;

    let quote = client.market_data().quotes("BTCUSD").await?;
    println!("BTC mark price: {}", quote.mark_price);

    // Half the mark price, so the order rests on the book
    let price = (quote.mark_price / dec!(2)).round_dp(2);
    let order = OrderRequestBuilder::new()
        .price(price)
        .quantity(dec!(0.0001))
        .side(Side::Buy)
        .time_in_force(TimeInForce::Gtc)
        .order_type(OrderType::Limit)
        .build()?;

    println!("\nPlacing limit buy at {}...", price);
    let placed = client.orders().trade("BTCUSD", order).await?;

    let Some(id) = placed["id"].as_str().map(OrderId::new) else {
        println!("Order response had no id: {}", placed);
        return Ok(());
    };
    println!("Order placed: {}", id);

    let status = client.orders().status(&id).await?;
    println!("State: {}", status["state"]);

    println!("\nCancelling...");
    client.orders().cancel(&id).await?;
    println!("Cancel requested.");

    Ok(())
}
