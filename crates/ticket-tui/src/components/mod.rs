pub mod blotter;
pub mod help;
pub mod status_bar;
pub mod ticket_form;
