use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

pub fn draw_help(f: &mut Frame, area: Rect) {
    let items = vec![
        ListItem::new("Tab / Shift-Tab  move focus between fields"),
        ListItem::new("e                edit the focused price/amount field"),
        ListItem::new("Space / ← →      cycle the order type"),
        ListItem::new("c                clear the order type selection"),
        ListItem::new("1 / 2 / 3 / 4    set amount to 25/50/75/100% of available"),
        ListItem::new("Enter            submit the order"),
        ListItem::new("Esc              leave edit mode"),
        ListItem::new("F1               toggle this help"),
        ListItem::new("q                quit"),
    ];

    let list = List::new(items).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, area);
    f.render_widget(list, area);
}
