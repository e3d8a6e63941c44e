//! Order type (Limit vs Market) and the selector option list.

use serde::{Deserialize, Serialize};

/// Execution type of the order. Execution semantics live downstream;
/// here it is only a selection the user makes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Limit,
    Market,
}

/// The canonical selector options, in display order. A fresh form
/// starts with the first one selected.
pub const TYPE_OPTIONS: [OrderType; 2] = [OrderType::Limit, OrderType::Market];

impl OrderType {
    /// Lowercase value carried in the submission (`"limit"` / `"market"`).
    pub fn as_str(self) -> &'static str {
        match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
        }
    }

    /// Message id for the option label, resolved through [`crate::Translate`].
    pub fn label_id(self) -> &'static str {
        match self {
            OrderType::Limit => "order_type_limit",
            OrderType::Market => "order_type_market",
        }
    }

    /// The other option, for cycling a two-entry selector.
    pub fn toggled(self) -> Self {
        match self {
            OrderType::Limit => OrderType::Market,
            OrderType::Market => OrderType::Limit,
        }
    }
}
