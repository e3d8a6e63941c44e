//! ticket-core
//!
//! Pure order-ticket logic:
//! - side / order-type enums
//! - strict decimal validation for price and amount text
//! - balance derivation from the host's balance list
//! - immutable form state plus the event reducer
//! - the localization seam (message-id translation)

pub mod balance;
pub mod decimal;
pub mod form;
pub mod order_type;
pub mod side;
pub mod translate;

pub use side::Side;
pub use order_type::OrderType;

pub use balance::{derive_balance, BalanceEntry, DerivedBalance, MarketInfo, StoreView};
pub use decimal::is_strict_decimal;
pub use form::{FieldErrors, FormEvent, FormState, OrderSubmission, Step};
pub use translate::Translate;
