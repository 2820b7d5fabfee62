//! Data models for the Robinhood Crypto API.
//!
//! - [`primitives`] - Identifier newtypes and the cached [`AccountRef`]
//! - [`enums`] - Order sides, types, time in force, account scopes
//! - [`pair`] - The currency pair table
//! - [`order`] - Order request and its builder
//! - [`market_data`] - Quotes and historical series

pub mod primitives;
pub mod enums;
pub mod pair;
pub mod order;
pub mod market_data;

pub use primitives::*;
pub use enums::*;
pub use pair::*;
pub use order::*;
pub use market_data::*;
