//! Order request models.
//!
//! Placed orders come back from the API as opaque JSON and are not
//! modelled here; only the fields a caller must supply are typed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::*;
use crate::{Error, Result};

/// The caller-supplied part of a new order.
///
/// [`OrdersService::trade`](crate::api::OrdersService::trade) adds the
/// account id, pair id and a fresh reference id before sending it.
///
/// # Example
///
/// ```
/// use robinhood_crypto::models::{OrderRequestBuilder, OrderType, Side, TimeInForce};
/// use rust_decimal_macros::dec;
///
/// let order = OrderRequestBuilder::new()
///     .price(dec!(9000))
///     .quantity(dec!(0.0001))
///     .side(Side::Buy)
///     .time_in_force(TimeInForce::Gtc)
///     .order_type(OrderType::Market)
///     .build()
///     .unwrap();
/// assert_eq!(order.side, Side::Buy);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Price per unit of the base currency
    pub price: Decimal,
    /// Amount of the base currency
    pub quantity: Decimal,
    /// Buy or sell
    pub side: Side,
    /// How long the order remains active
    pub time_in_force: TimeInForce,
    /// Market or limit
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

impl OrderRequest {
    /// Check the numeric fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if price or quantity is not positive.
    pub fn validate(&self) -> Result<()> {
        if self.price <= Decimal::ZERO {
            return Err(Error::InvalidInput("price must be positive".to_string()));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(Error::InvalidInput("quantity must be positive".to_string()));
        }
        Ok(())
    }
}

/// Builder for [`OrderRequest`] that rejects missing fields.
#[derive(Debug, Default, Clone)]
pub struct OrderRequestBuilder {
    price: Option<Decimal>,
    quantity: Option<Decimal>,
    side: Option<Side>,
    time_in_force: Option<TimeInForce>,
    order_type: Option<OrderType>,
}

impl OrderRequestBuilder {
    /// Create a new order builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the quantity.
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the side.
    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the time in force.
    pub fn time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set the order type.
    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Build the order, validating all fields.
    pub fn build(self) -> Result<OrderRequest> {
        let order = OrderRequest {
            price: self.price.ok_or_else(|| missing("price"))?,
            quantity: self.quantity.ok_or_else(|| missing("quantity"))?,
            side: self.side.ok_or_else(|| missing("side"))?,
            time_in_force: self.time_in_force.ok_or_else(|| missing("time_in_force"))?,
            order_type: self.order_type.ok_or_else(|| missing("order_type"))?,
        };
        order.validate()?;
        Ok(order)
    }
}

fn missing(field: &str) -> Error {
    Error::InvalidInput(format!("{} is required", field))
}
