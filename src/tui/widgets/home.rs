// src/tui/widgets/home.rs — Landing page: hero, counters, capability cards.

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::portal::data::Capability;
use crate::portal::stats::{animated_count, format_thousands, Stat, COUNT_UP};
use crate::tui::theme::Theme;

pub fn render(
    f: &mut Frame,
    area: Rect,
    stats: &[Stat],
    capabilities: &[Capability],
    elapsed: Duration,
    selected: usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(6),
        ])
        .split(area);

    render_hero(f, chunks[0], theme);
    render_stats(f, chunks[1], stats, elapsed, theme);
    render_capabilities(f, chunks[2], capabilities, selected, theme);
}

fn render_hero(f: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled("MOSDAC AI Portal", theme.header())),
        Line::from(Span::styled(
            "Intelligent Geospatial Data Assistant",
            theme.info(),
        )),
        Line::from(Span::styled(
            "Explore satellite missions, data products and documentation with a knowledge graph-powered assistant.",
            theme.text_dim(),
        )),
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

fn render_stats(f: &mut Frame, area: Rect, stats: &[Stat], elapsed: Duration, theme: &Theme) {
    if stats.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = stats
        .iter()
        .map(|_| Constraint::Ratio(1, stats.len() as u32))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (stat, cell) in stats.iter().zip(cells.iter()) {
        let shown = animated_count(stat.value, elapsed, COUNT_UP);
        let lines = vec![
            Line::from(Span::styled(format_thousands(shown), theme.highlight())),
            Line::from(Span::styled(stat.label.clone(), theme.text_dim())),
        ];
        let p = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(p, *cell);
    }
}

fn render_capabilities(
    f: &mut Frame,
    area: Rect,
    capabilities: &[Capability],
    selected: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" Discover Our Capabilities ")
        .borders(Borders::ALL)
        .border_style(theme.border());

    let lines: Vec<Line> = capabilities
        .iter()
        .enumerate()
        .flat_map(|(i, cap)| {
            let accent = Style::default().fg(Theme::token(&cap.color));
            let marker = if i == selected { "▶ " } else { "  " };
            let title_style = if i == selected {
                accent.add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                accent.add_modifier(Modifier::BOLD)
            };
            [
                Line::from(vec![
                    Span::styled(marker, accent),
                    Span::styled(format!(" {} ", cap.title), title_style),
                    Span::styled(format!("  [{}]", cap.button), theme.text_dim()),
                ]),
                Line::from(Span::styled(
                    format!("    {}", cap.description),
                    theme.text(),
                )),
            ]
        })
        .collect();

    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(p, area);
}
