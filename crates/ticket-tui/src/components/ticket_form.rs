use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use ticket_core::translate::msg;
use ticket_core::{Side, Translate};

use crate::app::{App, Focus, InputMode};

pub fn draw_ticket_form(f: &mut Frame, area: Rect, app: &App) {
    let side_title = app.catalog.translate(app.view.side.submit_label_id());
    let block = Block::default()
        .title(format!(" {} {} ", side_title, app.view.market.base_unit.to_uppercase()))
        .borders(Borders::ALL)
        .border_style(match app.view.side {
            Side::Buy => Style::default().fg(Color::Green),
            Side::Sell => Style::default().fg(Color::Red),
        });

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Balance
            Constraint::Length(2), // Order type
            Constraint::Length(2), // Price
            Constraint::Length(2), // Amount
            Constraint::Length(2), // Quick-amount buttons
            Constraint::Min(1),    // Submit hint
        ])
        .split(inner);

    draw_balance(f, chunks[0], app);
    draw_type_row(f, chunks[1], app);
    draw_text_row(f, chunks[2], app, Focus::Price);
    draw_text_row(f, chunks[3], app, Focus::Amount);
    draw_quick_row(f, chunks[4]);
    draw_submit_hint(f, chunks[5], app);

    if app.view.anonymous {
        draw_anonymous_mask(f, area, app);
    }
}

fn draw_balance(f: &mut Frame, area: Rect, app: &App) {
    let currency = app.view.funding_currency().to_uppercase();
    let balance = app.view.funding_balance();

    let line = Line::from(vec![
        Span::raw(format!(
            "{} {}: ",
            currency,
            app.catalog.translate(msg::ORDER_BALANCE)
        )),
        Span::styled(
            format!("{:.2}", balance.balance),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]);

    let widget = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(widget, area);
}

fn draw_type_row(f: &mut Frame, area: Rect, app: &App) {
    let value = match app.form.order_type {
        Some(t) => app.catalog.translate(t.label_id()),
        None => "-".to_string(),
    };

    let line = Line::from(vec![
        label_span(app, msg::ORDER_TYPE, Focus::OrderType),
        Span::styled(
            value,
            value_style(app.form.errors.order_type),
        ),
        Span::styled(" [Space] cycle  [c] clear", Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(widget, area);
}

fn draw_text_row(f: &mut Frame, area: Rect, app: &App, field: Focus) {
    let (label_id, text, error, suffix) = match field {
        Focus::Price => (
            msg::ORDER_PRICE,
            app.form.price.as_deref().unwrap_or(""),
            app.form.errors.price,
            app.view.market.quote_unit.to_uppercase(),
        ),
        Focus::Amount => (
            msg::ORDER_AMOUNT,
            app.form.amount.as_deref().unwrap_or(""),
            app.form.errors.amount,
            app.view.market.base_unit.to_uppercase(),
        ),
        Focus::OrderType => return,
    };

    let editing = app.focus == field && app.input_mode == InputMode::Editing;

    let mut spans = vec![
        label_span(app, label_id, field),
        Span::styled(text.to_string(), value_style(error)),
    ];
    if editing {
        spans.push(Span::styled(
            "_",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    spans.push(Span::styled(
        format!(" {}", suffix),
        Style::default().fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(widget, area);
}

fn draw_quick_row(f: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw("        "),
        Span::styled("[1] 25%  ", Style::default().fg(Color::Gray)),
        Span::styled("[2] 50%  ", Style::default().fg(Color::Gray)),
        Span::styled("[3] 75%  ", Style::default().fg(Color::Gray)),
        Span::styled("[4] 100%", Style::default().fg(Color::Gray)),
    ]);

    let widget = Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(widget, area);
}

fn draw_submit_hint(f: &mut Frame, area: Rect, app: &App) {
    let side_label = app.catalog.translate(app.view.side.submit_label_id());
    let color = match app.view.side {
        Side::Buy => Color::Green,
        Side::Sell => Color::Red,
    };

    let line = Line::from(vec![
        Span::raw("[Enter] "),
        Span::styled(
            format!("{} {}", side_label, app.view.market.base_unit.to_uppercase()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let widget = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Greyed-out overlay shown while the session is anonymous; submits
/// are suppressed underneath it as well.
fn draw_anonymous_mask(f: &mut Frame, area: Rect, app: &App) {
    let mask = Paragraph::new(app.catalog.translate(msg::ORDER_ANONYMOUS))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));

    let overlay = centered_overlay(area);
    f.render_widget(Clear, overlay);
    f.render_widget(mask, overlay);
}

fn centered_overlay(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Percentage(40),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(vertical[1])[1]
}

fn label_span(app: &App, label_id: &str, field: Focus) -> Span<'static> {
    let style = if app.focus == field {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Span::styled(format!("{:<8}", app.catalog.translate(label_id)), style)
}

fn value_style(error: bool) -> Style {
    if error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}
