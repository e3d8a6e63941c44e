//! ticket-tui
//!
//! Terminal host for the order ticket: renders the form, feeds key
//! events through the core reducer, and acts as the coordinator that
//! receives submissions (they land in a local blotter; no network).

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod ui;
