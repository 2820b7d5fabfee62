//! Market data models for quotes and historical price series.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote snapshot for a currency pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Pair id
    pub id: String,
    /// Pair symbol, e.g. `BTCUSD`
    pub symbol: String,
    /// Best ask price
    pub ask_price: Decimal,
    /// Best bid price
    pub bid_price: Decimal,
    /// Mark (midpoint) price
    pub mark_price: Decimal,
    /// Today's high
    #[serde(default)]
    pub high_price: Option<Decimal>,
    /// Today's low
    #[serde(default)]
    pub low_price: Option<Decimal>,
    /// Today's open
    #[serde(default)]
    pub open_price: Option<Decimal>,
    /// Traded volume
    #[serde(default)]
    pub volume: Option<Decimal>,
}

/// Query parameters for historical price series.
///
/// Values are passed through to the API as-is. Known values are
/// `15second`, `5minute`, `10minute`, `hour`, `day`, `week` for the
/// interval; `hour`, `day`, `year`, `5year`, `all` for the span; and
/// `24_7`, `regular`, `extended`, `trading` for the bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalsQuery {
    /// Candle width
    pub interval: String,
    /// Window covered by the series
    pub span: String,
    /// Trading session bounds
    pub bounds: String,
}

impl Default for HistoricalsQuery {
    fn default() -> Self {
        Self {
            interval: "5minute".to_string(),
            span: "day".to_string(),
            bounds: "24_7".to_string(),
        }
    }
}

impl HistoricalsQuery {
    /// Set the interval.
    pub fn interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = interval.into();
        self
    }

    /// Set the span.
    pub fn span(mut self, span: impl Into<String>) -> Self {
        self.span = span.into();
        self
    }

    /// Set the bounds.
    pub fn bounds(mut self, bounds: impl Into<String>) -> Self {
        self.bounds = bounds.into();
        self
    }

    pub(crate) fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("interval", self.interval.as_str()),
            ("span", self.span.as_str()),
            ("bounds", self.bounds.as_str()),
        ]
    }
}

/// Historical price series for a currency pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Historicals {
    /// Pair id
    pub id: String,
    /// Pair symbol
    pub symbol: String,
    /// Candle width
    pub interval: String,
    /// Window covered by the series
    pub span: String,
    /// Trading session bounds
    pub bounds: String,
    /// Candles, oldest first
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
    /// Open price of the span
    #[serde(default)]
    pub open_price: Option<Decimal>,
    /// Open time of the span
    #[serde(default)]
    pub open_time: Option<DateTime<Utc>>,
    /// Previous close price
    #[serde(default)]
    pub previous_close_price: Option<Decimal>,
    /// Previous close time
    #[serde(default)]
    pub previous_close_time: Option<DateTime<Utc>>,
}

/// A single candle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    /// Start of the candle
    pub begins_at: DateTime<Utc>,
    /// Open price
    pub open_price: Decimal,
    /// Close price
    pub close_price: Decimal,
    /// High price
    pub high_price: Decimal,
    /// Low price
    pub low_price: Decimal,
    /// Volume
    #[serde(default)]
    pub volume: Option<Decimal>,
    /// Session label, e.g. `reg`
    #[serde(default)]
    pub session: Option<String>,
    /// Whether the candle was interpolated
    #[serde(default)]
    pub interpolated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_from_string_prices() {
        let quote: Quote = serde_json::from_value(serde_json::json!({
            "ask_price": "8836.3300",
            "bid_price": "8801.0500",
            "mark_price": "8818.6900",
            "high_price": "9064.6400",
            "low_price": "8779.9599",
            "open_price": "8847.2400",
            "symbol": "BTCUSD",
            "id": "3d961844-d360-45fc-989b-f6fca761d511",
            "volume": "380373.1898"
        }))
        .unwrap();

        assert_eq!(quote.mark_price, dec!(8818.69));
        assert_eq!(quote.volume, Some(dec!(380373.1898)));
    }

    #[test]
    fn test_historicals_with_null_fields() {
        let series: Historicals = serde_json::from_value(serde_json::json!({
            "data_points": [{
                "begins_at": "2018-05-07T00:20:00Z",
                "open_price": "9636.2650",
                "close_price": "9598.4300",
                "high_price": "9638.0600",
                "low_price": "9594.3700",
                "volume": "0.0000",
                "session": "reg",
                "interpolated": false
            }],
            "bounds": "24_7",
            "interval": "5minute",
            "span": "day",
            "symbol": "BTCUSD",
            "id": "3d961844-d360-45fc-989b-f6fca761d511",
            "open_price": null,
            "open_time": null,
            "previous_close_price": null,
            "previous_close_time": null
        }))
        .unwrap();

        assert_eq!(series.data_points.len(), 1);
        assert_eq!(series.data_points[0].close_price, dec!(9598.43));
        assert!(series.open_price.is_none());
    }

    #[test]
    fn test_historicals_query_defaults() {
        let query = HistoricalsQuery::default().span("year");
        assert_eq!(
            query.pairs(),
            [("interval", "5minute"), ("span", "year"), ("bounds", "24_7")]
        );
    }
}
