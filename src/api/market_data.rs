//! Market data service for quotes and historical series.

use std::sync::Arc;

use url::Url;

use crate::client::ClientInner;
use crate::models::{Historicals, HistoricalsQuery, Quote};
use crate::Result;

/// Service for market data operations.
///
/// Pair symbols are resolved against the configured
/// [`PairTable`](crate::models::PairTable) before any network call.
///
/// # Example
///
/// ```no_run
/// use robinhood_crypto::models::HistoricalsQuery;
///
/// # async fn example(client: robinhood_crypto::RobinhoodCryptoClient) -> robinhood_crypto::Result<()> {
/// let quote = client.market_data().quotes("BTCUSD").await?;
/// println!("BTC: bid={} ask={}", quote.bid_price, quote.ask_price);
///
/// let query = HistoricalsQuery::default().interval("hour").span("week");
/// let series = client.market_data().historicals("ETHUSD", query).await?;
/// println!("{} candles", series.data_points.len());
/// # Ok(())
/// # }
/// ```
pub struct MarketDataService {
    inner: Arc<ClientInner>,
}

impl MarketDataService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the current quote for a pair.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownPair`](crate::Error::UnknownPair) for an
    ///   unregistered symbol
    /// - [`Error::Quote`](crate::Error::Quote) wrapping any HTTP or
    ///   decoding failure
    pub async fn quotes(&self, pair: &str) -> Result<Quote> {
        let pair_id = self.inner.config.pairs.resolve(pair)?;
        let url = self.inner.config.endpoints.quotes_url(pair_id);

        self.inner
            .get(&url)
            .await
            .map_err(|e| e.into_quote_failure())
    }

    /// Get a historical price series for a pair.
    pub async fn historicals(&self, pair: &str, query: HistoricalsQuery) -> Result<Historicals> {
        let pair_id = self.inner.config.pairs.resolve(pair)?;

        let mut url = Url::parse(&self.inner.config.endpoints.historicals_url(pair_id))?;
        url.query_pairs_mut().extend_pairs(query.pairs());

        self.inner.get(url.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{client, script_login, INVALID_AUTH_BODY};
    use crate::transport::MockTransport;
    use crate::Error;
    use reqwest::header::AUTHORIZATION;
    use reqwest::Method;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn btc_quote() -> serde_json::Value {
        json!({
            "ask_price": "6457.590000",
            "bid_price": "6449.150000",
            "mark_price": "6453.370000",
            "high_price": "6539.830000",
            "low_price": "6365.000000",
            "open_price": "6393.255000",
            "symbol": "BTCUSD",
            "id": "3d961844-d360-45fc-989b-f6fca761d511",
            "volume": "0.000000"
        })
    }

    #[tokio::test]
    async fn test_quotes_requests_pair_id() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        mock.push_json(200, btc_quote());
        let quote = client.market_data().quotes("BTCUSD").await.unwrap();

        assert_eq!(quote.symbol, "BTCUSD");
        assert_eq!(quote.mark_price, dec!(6453.37));

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url,
            "https://api.robinhood.com/marketdata/forex/quotes/3d961844-d360-45fc-989b-f6fca761d511/"
        );
        assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Bearer tok-1");
    }

    #[tokio::test]
    async fn test_unknown_pair_fails_without_io() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;
        let before = mock.request_count();

        let result = client.market_data().quotes("DOGEUSD").await;

        assert!(matches!(result, Err(Error::UnknownPair(ref s)) if s == "DOGEUSD"));
        assert_eq!(mock.request_count(), before);
    }

    #[tokio::test]
    async fn test_quote_http_failure_is_wrapped() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        mock.push_json(500, json!({"detail": "upstream unavailable"}));
        let err = client.market_data().quotes("ETHUSD").await.unwrap_err();

        match err {
            Error::Quote(cause) => assert!(matches!(*cause, Error::Api { status: 500, .. })),
            other => panic!("expected quote failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_quote_reauth_then_success() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        mock.push_body(401, INVALID_AUTH_BODY);
        script_login(&mock, "tok-2");
        mock.push_json(200, btc_quote());

        let quote = client.market_data().quotes("BTCUSD").await.unwrap();

        assert_eq!(quote.bid_price, dec!(6449.15));
        let retry = mock.last_request().unwrap();
        assert_eq!(retry.headers.get(AUTHORIZATION).unwrap(), "Bearer tok-2");
        assert_eq!(mock.remaining(), 0);
    }

    #[tokio::test]
    async fn test_historicals_query_string() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        mock.push_json(
            200,
            json!({
                "bounds": "24_7",
                "interval": "hour",
                "span": "week",
                "symbol": "BTCUSD",
                "id": "3d961844-d360-45fc-989b-f6fca761d511",
                "open_price": null,
                "open_time": null,
                "previous_close_price": null,
                "previous_close_time": null,
                "data_points": [{
                    "begins_at": "2018-09-25T00:00:00Z",
                    "open_price": "6580.000000",
                    "close_price": "6590.120000",
                    "high_price": "6601.000000",
                    "low_price": "6575.500000",
                    "volume": "0.000000",
                    "session": "reg",
                    "interpolated": false
                }]
            }),
        );

        let query = HistoricalsQuery::default().interval("hour").span("week");
        let series = client.market_data().historicals("BTCUSD", query).await.unwrap();

        assert_eq!(series.data_points.len(), 1);
        assert_eq!(series.data_points[0].close_price, dec!(6590.12));
        assert_eq!(
            mock.last_request().unwrap().url,
            "https://api.robinhood.com/marketdata/forex/historicals/3d961844-d360-45fc-989b-f6fca761d511/?interval=hour&span=week&bounds=24_7"
        );
    }

    #[tokio::test]
    async fn test_historicals_unknown_pair_fails_without_io() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;
        let before = mock.request_count();

        let result = client
            .market_data()
            .historicals("DOGEUSD", HistoricalsQuery::default())
            .await;

        assert!(matches!(result, Err(Error::UnknownPair(ref s)) if s == "DOGEUSD"));
        assert_eq!(mock.request_count(), before);
    }

    #[tokio::test]
    async fn test_historicals_failure_propagates_unwrapped() {
        let mock = Arc::new(MockTransport::new());
        let client = client(&mock).await;

        mock.push_json(404, json!({"detail": "Not found."}));
        let result = client
            .market_data()
            .historicals("ETHUSD", HistoricalsQuery::default())
            .await;

        assert!(matches!(result, Err(Error::Api { status: 404, .. })));
    }
}
