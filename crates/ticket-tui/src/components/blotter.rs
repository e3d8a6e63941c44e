use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use ticket_core::Side;

use crate::app::App;

/// Orders the coordinator accepted this session, newest first.
pub fn draw_blotter(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .submissions
        .iter()
        .rev()
        .map(|s| {
            let color = match s.side {
                Side::Buy => Color::Green,
                Side::Sell => Color::Red,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<5}", s.side.as_str().to_uppercase()),
                    Style::default().fg(color),
                ),
                Span::raw(format!(
                    "{:<7} {} @ {}  {}",
                    s.submission.order_type.as_str(),
                    s.submission.amount,
                    s.submission.price,
                    s.timestamp.format("%H:%M:%S"),
                )),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Submitted Orders ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}
