// crates/ticket-tui/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::components::{
    blotter::draw_blotter, help::draw_help, status_bar::draw_status_bar,
    ticket_form::draw_ticket_form,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Ticket form
            Constraint::Percentage(55), // Blotter
        ])
        .split(chunks[0]);

    draw_ticket_form(f, main[0], app);
    draw_blotter(f, main[1], app);
    draw_status_bar(f, chunks[1], app);

    if app.show_help {
        draw_help(f, centered_rect(60, 60, f.size()));
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
