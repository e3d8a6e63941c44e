// crates/ticket-tui/src/app.rs

use chrono::{DateTime, Local};
use ticket_core::{FormEvent, FormState, OrderSubmission, OrderType, Side, StoreView};
use tracing::info;

use crate::i18n::Catalog;

/// Normal: hotkeys navigate the ticket. Editing: keystrokes go into
/// the focused text field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Which row of the ticket has focus.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    OrderType,
    Price,
    Amount,
}

/// One entry in the local blotter: a submission the coordinator
/// accepted, with the time it was emitted.
#[derive(Debug, Clone)]
pub struct SubmittedOrder {
    pub side: Side,
    pub submission: OrderSubmission,
    pub timestamp: DateTime<Local>,
}

pub struct App {
    /// Read-only store view injected at startup.
    pub view: StoreView,
    pub catalog: Catalog,

    /// Current form state; replaced wholesale on every reducer step.
    pub form: FormState,

    // UI state
    pub input_mode: InputMode,
    pub focus: Focus,
    pub should_quit: bool,
    pub show_help: bool,

    /// Orders emitted so far, newest last.
    pub submissions: Vec<SubmittedOrder>,
}

impl App {
    pub fn new(view: StoreView, catalog: Catalog) -> Self {
        App {
            view,
            catalog,
            form: FormState::default(),
            input_mode: InputMode::Normal,
            focus: Focus::OrderType,
            should_quit: false,
            show_help: false,
            submissions: Vec::new(),
        }
    }

    /// Run one reducer step and absorb the outcome. The emitted
    /// submission, if any, lands in the blotter.
    pub fn dispatch(&mut self, event: FormEvent) {
        let step = self.form.step(event, &self.view);
        self.form = step.state;

        if let Some(submission) = step.submission {
            info!(
                side = self.view.side.as_str(),
                order_type = submission.order_type.as_str(),
                price = %submission.price,
                amount = %submission.amount,
                "order submitted"
            );
            self.submissions.push(SubmittedOrder {
                side: self.view.side,
                submission,
                timestamp: Local::now(),
            });
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            Focus::OrderType => Focus::Price,
            Focus::Price => Focus::Amount,
            Focus::Amount => Focus::OrderType,
        };
    }

    pub fn prev_focus(&mut self) {
        self.focus = match self.focus {
            Focus::OrderType => Focus::Amount,
            Focus::Price => Focus::OrderType,
            Focus::Amount => Focus::Price,
        };
    }

    /// Cycle the order-type selector (re-selects the first option when
    /// the selection was cleared).
    pub fn toggle_order_type(&mut self) {
        let next = match self.form.order_type {
            Some(t) => t.toggled(),
            None => OrderType::Limit,
        };
        self.dispatch(FormEvent::SelectType(Some(next)));
    }

    /// Clear the selector. Leaves the form in the invalid-type state.
    pub fn clear_order_type(&mut self) {
        self.dispatch(FormEvent::SelectType(None));
    }

    /// Begin editing the focused text field.
    pub fn start_editing(&mut self) {
        if matches!(self.focus, Focus::Price | Focus::Amount) {
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        let mut text = self.focused_text();
        text.push(c);
        self.edit_focused(text);
    }

    pub fn delete_char(&mut self) {
        let mut text = self.focused_text();
        text.pop();
        self.edit_focused(text);
    }

    pub fn quick_amount(&mut self, fraction: f64) {
        self.dispatch(FormEvent::QuickAmount(fraction));
    }

    pub fn submit(&mut self) {
        self.dispatch(FormEvent::Submit);
    }

    fn focused_text(&self) -> String {
        let field = match self.focus {
            Focus::Price => &self.form.price,
            Focus::Amount => &self.form.amount,
            Focus::OrderType => return String::new(),
        };
        field.clone().unwrap_or_default()
    }

    fn edit_focused(&mut self, text: String) {
        match self.focus {
            Focus::Price => self.dispatch(FormEvent::EditPrice(text)),
            Focus::Amount => self.dispatch(FormEvent::EditAmount(text)),
            Focus::OrderType => {}
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
