//! Orders service for order placement and management.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use super::accounts::results;
use crate::client::ClientInner;
use crate::models::{OrderId, OrderRequest};
use crate::{Error, Result};

/// Service for order operations.
///
/// # Example
///
/// ```no_run
/// use robinhood_crypto::models::{OrderRequestBuilder, OrderType, Side, TimeInForce};
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: robinhood_crypto::RobinhoodCryptoClient) -> robinhood_crypto::Result<()> {
/// let order = OrderRequestBuilder::new()
///     .price(dec!(6500.00))
///     .quantity(dec!(0.001))
///     .side(Side::Buy)
///     .time_in_force(TimeInForce::Gtc)
///     .order_type(OrderType::Limit)
///     .build()?;
///
/// let placed = client.orders().trade("BTCUSD", order).await?;
/// println!("Order: {}", placed["id"]);
///
/// for order in client.orders().trade_history().await? {
///     println!("{} {}", order["side"], order["state"]);
/// }
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

#[derive(Debug, Serialize)]
struct TradePayload<'a> {
    account_id: &'a str,
    currency_pair_id: &'a str,
    ref_id: String,
    #[serde(flatten)]
    order: &'a OrderRequest,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Place an order for a pair.
    ///
    /// Every call carries a fresh `ref_id`. Orders are never resubmitted
    /// except once after a rejected token.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownPair`] for an unregistered symbol
    /// - [`Error::InvalidInput`] when the order fails validation
    /// - [`Error::Trade`] wrapping any HTTP or decoding failure
    pub async fn trade(&self, pair: &str, order: OrderRequest) -> Result<Value> {
        let pair_id = self.inner.config.pairs.resolve(pair)?;
        order.validate()?;

        let account = self
            .inner
            .account_ref()
            .await
            .ok_or_else(|| Error::AccountNotFound("ledger account".to_string()))?;

        let payload = TradePayload {
            account_id: account.account_id.as_str(),
            currency_pair_id: pair_id.as_str(),
            ref_id: Uuid::new_v4().to_string(),
            order: &order,
        };
        info!(
            pair,
            side = ?order.side,
            order_type = ?order.order_type,
            ref_id = %payload.ref_id,
            "placing order"
        );

        self.inner
            .post(&self.inner.config.endpoints.orders_url(), Some(&payload))
            .await
            .map_err(|e| e.into_trade_failure())
    }

    /// Most recent orders, first page only.
    ///
    /// Returns the page's `results`; the `next`/`previous` cursors are
    /// discarded and later pages are never fetched.
    pub async fn trade_history(&self) -> Result<Vec<Value>> {
        let payload = self
            .inner
            .get(&self.inner.config.endpoints.orders_url())
            .await
            .map_err(|e| e.into_trade_failure())?;
        Ok(results(payload))
    }

    /// Get a single order.
    pub async fn status(&self, id: &OrderId) -> Result<Value> {
        self.inner
            .get(&self.inner.config.endpoints.order_url(id))
            .await
    }

    /// Request cancellation of an order.
    pub async fn cancel(&self, id: &OrderId) -> Result<Value> {
        self.inner
            .post::<_, ()>(&self.inner.config.endpoints.order_cancel_url(id), None)
            .await
    }
}
