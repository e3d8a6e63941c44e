use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.input_mode {
        InputMode::Normal => {
            "[Tab] Field | [e] Edit | [Space] Type | [1-4] Quick Amount | [Enter] Submit | [F1] Help | [q] Quit"
        }
        InputMode::Editing => "[Esc] Done | [Backspace] Delete | [Enter] Submit",
    };

    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::Gray))];
    if app.view.anonymous {
        spans.push(Span::styled(
            "  ANONYMOUS",
            Style::default().fg(Color::Yellow),
        ));
    }

    let widget = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}
