//! Immutable form state and the event reducer.
//!
//! The host keeps the current [`FormState`], feeds every user event
//! through [`FormState::step`], and re-renders from the returned state.
//! A step never performs I/O; when a submit passes validation the
//! resulting [`Step`] carries the [`OrderSubmission`] and the host
//! invokes its coordinator callback exactly once.

use crate::balance::StoreView;
use crate::decimal::is_strict_decimal;
use crate::order_type::{OrderType, TYPE_OPTIONS};

/// Per-field validity flags. `true` means the field is currently
/// invalid and should be highlighted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub order_type: bool,
    pub price: bool,
    pub amount: bool,
}

impl FieldErrors {
    pub fn any(self) -> bool {
        self.order_type || self.price || self.amount
    }
}

/// Local state of the order ticket. Created fresh when the ticket
/// mounts, mutated only through [`FormState::step`], never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Selected execution type. A cleared selector is `None`, which is
    /// invalid at submit time.
    pub order_type: Option<OrderType>,
    /// Raw price text as entered. `None` until the user first edits.
    pub price: Option<String>,
    /// Raw amount text as entered or produced by quick-amount.
    pub amount: Option<String>,
    pub errors: FieldErrors,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            order_type: Some(TYPE_OPTIONS[0]),
            price: None,
            amount: None,
            errors: FieldErrors::default(),
        }
    }
}

/// User events the reducer understands. Delivered synchronously, in
/// the order the host UI produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Selector changed; `None` models a cleared selection.
    SelectType(Option<OrderType>),
    /// Price text changed (full new value, not a delta).
    EditPrice(String),
    /// Amount text changed (full new value, not a delta).
    EditAmount(String),
    /// One of the percentage buttons (0.25 / 0.5 / 0.75 / 1.0).
    QuickAmount(f64),
    /// The submit button.
    Submit,
}

/// Normalized order intent handed to the host coordinator. Price and
/// amount are the raw entered strings, passed through unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmission {
    pub order_type: OrderType,
    pub price: String,
    pub amount: String,
}

/// Result of one reducer step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: FormState,
    /// Present iff the event was a submit that passed validation.
    pub submission: Option<OrderSubmission>,
}

impl Step {
    fn state(state: FormState) -> Step {
        Step {
            state,
            submission: None,
        }
    }
}

impl FormState {
    /// Apply one event against the current store view.
    pub fn step(&self, event: FormEvent, view: &StoreView) -> Step {
        match event {
            FormEvent::SelectType(selected) => {
                let mut next = self.clone();
                next.errors.order_type = selected.is_none();
                next.order_type = selected;
                Step::state(next)
            }
            FormEvent::EditPrice(text) => {
                let mut next = self.clone();
                next.errors.price = !is_strict_decimal(&text);
                next.price = Some(text);
                Step::state(next)
            }
            FormEvent::EditAmount(text) => {
                let mut next = self.clone();
                next.errors.amount = !is_strict_decimal(&text);
                next.amount = Some(text);
                Step::state(next)
            }
            FormEvent::QuickAmount(fraction) => {
                // TODO: round to instrument precision once product
                // confirms the rounding rule (also affects the missing
                // clamp to available balance).
                let available = view.funding_balance().available();
                let mut next = self.clone();
                next.amount = Some(format_amount(fraction * available));
                Step::state(next)
            }
            FormEvent::Submit => self.submit(view),
        }
    }

    /// Submit: suppressed entirely while anonymous; otherwise the full
    /// validation pass, and a submission iff every field is valid.
    /// Fields are not reset on success.
    fn submit(&self, view: &StoreView) -> Step {
        if view.anonymous {
            return Step::state(self.clone());
        }

        let errors = self.validate();
        let mut next = self.clone();
        next.errors = errors;

        if errors.any() {
            return Step::state(next);
        }

        // validate() guarantees the fields are present.
        let submission = OrderSubmission {
            order_type: next.order_type.unwrap_or(TYPE_OPTIONS[0]),
            price: next.price.clone().unwrap_or_default(),
            amount: next.amount.clone().unwrap_or_default(),
        };

        Step {
            state: next,
            submission: Some(submission),
        }
    }

    /// Re-evaluate all three fields independently, replacing the whole
    /// error set.
    fn validate(&self) -> FieldErrors {
        let text_ok = |field: &Option<String>| {
            field
                .as_deref()
                .map(|s| !s.is_empty() && is_strict_decimal(s))
                .unwrap_or(false)
        };

        FieldErrors {
            order_type: self.order_type.is_none(),
            price: !text_ok(&self.price),
            amount: !text_ok(&self.amount),
        }
    }
}

/// Shortest round-trip formatting, so `0.5 * 8.0` becomes `"4"` and
/// fractions keep every produced digit. No rounding, no clamping.
fn format_amount(value: f64) -> String {
    format!("{}", value)
}
