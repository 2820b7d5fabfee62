//! Fetch quotes and a day of candles for BTC and ETH.
//!
//! Run with: cargo run --example fetch_market_data

use robinhood_crypto::models::HistoricalsQuery;
use robinhood_crypto::RobinhoodCryptoClient;

#[tokio::main]
async fn main() -> robinhood_crypto::Result<()> {
    tracing_subscriber::fmt::init();

    let username = std::env::var("ROBINHOOD_USERNAME")
        .expect("ROBINHOOD_USERNAME required");
    let password = std::env::var("ROBINHOOD_PASSWORD")
        .expect("ROBINHOOD_PASSWORD required");

    println!("Authenticating...");
    let client = RobinhoodCryptoClient::login(username, password).await?;
    println!("Authenticated successfully!\n");

    for pair in ["BTCUSD", "ETHUSD"] {
        println!("=== {} Quote ===", pair);
        let quote = client.market_data().quotes(pair).await?;
        println!("Bid:          {}", quote.bid_price);
        println!("Ask:          {}", quote.ask_price);
        println!("Mark:         {}", quote.mark_price);
        println!("High:         {:?}", quote.high_price);
        println!("Low:          {:?}", quote.low_price);
        println!("Open:         {:?}", quote.open_price);
        println!("Volume:       {:?}", quote.volume);
        println!();
    }

    println!("=== BTCUSD Hourly Candles (week) ===");
    let query = HistoricalsQuery::default().interval("hour").span("week");
    let series = client.market_data().historicals("BTCUSD", query).await?;
    for point in series.data_points.iter().rev().take(5) {
        println!(
            "{}  O={} H={} L={} C={}",
            point.begins_at, point.open_price, point.high_price, point.low_price, point.close_price
        );
    }
    println!("({} candles total)", series.data_points.len());

    Ok(())
}
