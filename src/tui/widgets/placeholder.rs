// src/tui/widgets/placeholder.rs — Pages that are not built yet.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(title.to_string(), theme.header())),
        Line::from(""),
        Line::from(Span::styled(
            "This feature is currently under development. Please check back later for updates.",
            theme.text_dim(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Home", theme.key_hint()),
            Span::styled(" back to home", theme.key_desc()),
        ]),
    ];
    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
    f.render_widget(p, area);
}
