//! Side (Buy / Sell) for the ticket.

use serde::{Deserialize, Serialize};

/// Which side of the market this ticket trades.
///
/// A prop of the form, fixed for the lifetime of a ticket instance:
/// it decides which currency funds the order (buy spends the quote
/// unit, sell spends the base unit) and which submit label is shown.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Lowercase wire/CLI representation (`"buy"` / `"sell"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }

    /// Try to parse from the lowercase representation.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "buy" => Some(Side::Buy),
            "sell" => Some(Side::Sell),
            _ => None,
        }
    }

    /// Message id for the submit button label (`order_buy` / `order_sell`).
    pub fn submit_label_id(self) -> &'static str {
        match self {
            Side::Buy => "order_buy",
            Side::Sell => "order_sell",
        }
    }
}
