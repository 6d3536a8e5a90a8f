// src/tui/widgets/chat.rs — AI Assistant page: transcript, suggestions, input.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::chat::{ChatMessage, ChatState, Sender};
use crate::tui::theme::Theme;

/// What the page needs from the session, borrowed for one frame.
pub struct ChatView<'a> {
    pub messages: &'a [ChatMessage],
    pub state: ChatState,
    pub suggestions: &'a [String],
    pub input: &'a str,
}

pub fn render(f: &mut Frame, area: Rect, view: &ChatView<'_>, theme: &Theme) {
    let suggestion_rows = if view.suggestions.is_empty() {
        0
    } else {
        view.suggestions.len() as u16 + 2
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(suggestion_rows),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(f, chunks[0], theme);
    render_transcript(f, chunks[1], view, theme);
    if suggestion_rows > 0 {
        render_suggestions(f, chunks[2], view.suggestions, theme);
    }
    render_input(f, chunks[3], view, theme);
}

fn render_header(f: &mut Frame, area: Rect, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(" MOSDAC AI Assistant ", theme.header()),
        Span::styled("● ", theme.success()),
        Span::styled("Online", theme.text_dim()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_transcript(f: &mut Frame, area: Rect, view: &ChatView<'_>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border());

    let mut lines: Vec<Line> = Vec::new();
    for msg in view.messages {
        let (prefix, style) = match msg.sender {
            Sender::User => ("You", theme.user_message()),
            Sender::Bot => ("AI ", theme.bot_message()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{prefix} │ "), theme.text_dim()),
            Span::styled(msg.text.clone(), style),
        ]));
        lines.push(Line::from(""));
    }
    if view.state == ChatState::AwaitingReply {
        lines.push(Line::from(vec![
            Span::styled("AI  │ ", theme.text_dim()),
            Span::styled("• • •", theme.info()),
        ]));
    }

    // keep the newest message in view
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let wrapped: usize = lines
        .iter()
        .map(|l| l.width().max(1).div_ceil(inner_width))
        .sum();
    let scroll = wrapped.saturating_sub(inner_height) as u16;

    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(p, area);
}

fn render_suggestions(f: &mut Frame, area: Rect, suggestions: &[String], theme: &Theme) {
    let lines: Vec<Line> = suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Line::from(vec![
                Span::styled(format!(" F{} ", i + 1), theme.key_hint()),
                Span::styled(s.clone(), theme.text()),
            ])
        })
        .collect();
    let p = Paragraph::new(lines).block(
        Block::default()
            .title(" Try asking ")
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    f.render_widget(p, area);
}

fn render_input(f: &mut Frame, area: Rect, view: &ChatView<'_>, theme: &Theme) {
    let content = if view.input.is_empty() {
        Span::styled("Ask your question...", theme.text_dim())
    } else {
        Span::styled(view.input.to_string(), theme.text())
    };
    let p = Paragraph::new(Line::from(vec![content, Span::styled("▏", theme.info())])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_focus()),
    );
    f.render_widget(p, area);
}
