//! Localization seam.
//!
//! The ticket never embeds display strings; everything user-visible is
//! a message id resolved through this trait. Hosts plug in whatever
//! catalog they have.

/// Message ids the ticket resolves.
pub mod msg {
    pub const ORDER_BALANCE: &str = "order_balance";
    pub const ORDER_TYPE: &str = "order_type";
    pub const ORDER_PRICE: &str = "order_price";
    pub const ORDER_AMOUNT: &str = "order_amount";
    pub const ORDER_BUY: &str = "order_buy";
    pub const ORDER_SELL: &str = "order_sell";
    pub const ORDER_TYPE_LIMIT: &str = "order_type_limit";
    pub const ORDER_TYPE_MARKET: &str = "order_type_market";
    pub const ORDER_ANONYMOUS: &str = "order_anonymous";
}

/// Resolve a message id to a display string.
pub trait Translate {
    fn translate(&self, id: &str) -> String;
}
