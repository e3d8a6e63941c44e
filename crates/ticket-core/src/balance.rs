//! The read-only store view the host injects, and balance derivation.
//!
//! The ticket does not subscribe to any global store. The host hands it
//! a plain [`StoreView`] snapshot (market metadata, balance list,
//! anonymity flag) and the form derives what it needs per event / per
//! render.

use serde::{Deserialize, Serialize};

use crate::side::Side;

/// Trading-pair metadata: base unit is being bought/sold, quote unit
/// prices it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketInfo {
    pub base_unit: String,
    pub quote_unit: String,
}

/// One currency balance as supplied by the host's account data.
///
/// Amounts arrive as strings; they are parsed at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceEntry {
    pub currency_code: String,
    pub balance: String,
    pub locked: String,
}

/// Balance for one currency, parsed. `locked` is the portion already
/// committed to open orders and unavailable for new ones.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DerivedBalance {
    pub balance: f64,
    pub locked: f64,
}

impl DerivedBalance {
    pub const ZERO: DerivedBalance = DerivedBalance {
        balance: 0.0,
        locked: 0.0,
    };

    /// What can actually fund a new order.
    pub fn available(self) -> f64 {
        self.balance - self.locked
    }
}

/// Look up `currency_code` in the balance list. The first matching
/// entry wins (at most one is expected per code); a missing code or an
/// unparsable amount derives as zero.
pub fn derive_balance(balances: &[BalanceEntry], currency_code: &str) -> DerivedBalance {
    match balances.iter().find(|b| b.currency_code == currency_code) {
        Some(entry) => DerivedBalance {
            balance: entry.balance.parse().unwrap_or(0.0),
            locked: entry.locked.parse().unwrap_or(0.0),
        },
        None => DerivedBalance::ZERO,
    }
}

/// Snapshot of external state the form reads: which side the ticket
/// trades, the pair metadata, the account's balances, and whether the
/// session is anonymous (anonymous sessions cannot submit).
#[derive(Debug, Clone, PartialEq)]
pub struct StoreView {
    pub side: Side,
    pub market: MarketInfo,
    pub balances: Vec<BalanceEntry>,
    pub anonymous: bool,
}

impl StoreView {
    /// The currency that funds an order on this side: buys spend the
    /// quote unit, sells spend the base unit.
    pub fn funding_currency(&self) -> &str {
        match self.side {
            Side::Buy => &self.market.quote_unit,
            Side::Sell => &self.market.base_unit,
        }
    }

    /// Derived balance of the funding currency.
    pub fn funding_balance(&self) -> DerivedBalance {
        derive_balance(&self.balances, self.funding_currency())
    }
}
