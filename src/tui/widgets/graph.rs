// src/tui/widgets/graph.rs — Knowledge Graph page: filter bar, canvas, legend.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::portal::graph::{EntityKind, KnowledgeGraph};
use crate::tui::theme::Theme;

/// Graph coordinates live in an 800x400 frame.
const VIEW_W: f64 = 800.0;
const VIEW_H: f64 = 400.0;
const NODE_RADIUS: f64 = 25.0;

pub fn render(
    f: &mut Frame,
    area: Rect,
    graph: &KnowledgeGraph,
    query: &str,
    kind: Option<EntityKind>,
    theme: &Theme,
) {
    let legend_rows = (graph.legend().len() as u16).div_ceil(2) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(legend_rows),
        ])
        .split(area);

    render_filter_bar(f, chunks[0], query, kind, theme);

    let visible = graph.filter(query, kind);
    match visible.segments() {
        Ok(segments) => {
            let link_color = theme.grid();
            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title(format!(
                            " Knowledge Graph Explorer ({} entities) ",
                            visible.nodes.len()
                        ))
                        .borders(Borders::ALL)
                        .border_style(theme.border()),
                )
                .marker(Marker::Braille)
                .x_bounds([0.0, VIEW_W])
                .y_bounds([0.0, VIEW_H])
                .paint(move |ctx| {
                    for s in &segments {
                        ctx.draw(&CanvasLine::new(
                            s.x1,
                            VIEW_H - s.y1,
                            s.x2,
                            VIEW_H - s.y2,
                            link_color,
                        ));
                    }
                    ctx.layer();
                    for node in &visible.nodes {
                        let color = Theme::token(&node.color);
                        ctx.draw(&Circle {
                            x: node.x,
                            y: VIEW_H - node.y,
                            radius: NODE_RADIUS,
                            color,
                        });
                        ctx.print(
                            node.x - NODE_RADIUS,
                            VIEW_H - node.y,
                            Span::styled(
                                node.id.clone(),
                                Style::default().fg(color).add_modifier(Modifier::BOLD),
                            ),
                        );
                    }
                });
            f.render_widget(canvas, chunks[1]);
        }
        Err(e) => {
            f.render_widget(
                Paragraph::new(Span::styled(e.to_string(), theme.error())).block(
                    Block::default()
                        .title(" Knowledge Graph Explorer ")
                        .borders(Borders::ALL)
                        .border_style(theme.border()),
                ),
                chunks[1],
            );
        }
    }

    render_legend(f, chunks[2], graph, theme);
}

fn render_filter_bar(
    f: &mut Frame,
    area: Rect,
    query: &str,
    kind: Option<EntityKind>,
    theme: &Theme,
) {
    let search = if query.is_empty() {
        Span::styled("Search entities...", theme.text_dim())
    } else {
        Span::styled(query.to_string(), theme.text())
    };
    let kind_label = kind.map(|k| k.as_str()).unwrap_or("All Types");
    let line = Line::from(vec![
        Span::styled(" ⌕ ", theme.info()),
        search,
        Span::styled("    type: ", theme.text_dim()),
        Span::styled(kind_label, theme.tab_active()),
        Span::styled("  (↑/↓)", theme.key_desc()),
    ]);
    f.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focus()),
        ),
        area,
    );
}

fn render_legend(f: &mut Frame, area: Rect, graph: &KnowledgeGraph, theme: &Theme) {
    let lines: Vec<Line> = graph
        .legend()
        .chunks(2)
        .map(|pair| {
            let mut spans = Vec::new();
            for entry in pair {
                spans.push(Span::styled(" ● ", Style::default().fg(Theme::token(&entry.color))));
                spans.push(Span::styled(format!("{:<26}", entry.name), theme.text()));
                spans.push(Span::styled(format!("{:<12}", entry.kind.as_str()), theme.text_dim()));
            }
            Line::from(spans)
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Legend ")
                .borders(Borders::ALL)
                .border_style(theme.border()),
        ),
        area,
    );
}

/// Next entry in the type filter cycle: All, then each kind, then All.
pub fn next_kind(current: Option<EntityKind>) -> Option<EntityKind> {
    match current {
        None => Some(EntityKind::ALL[0]),
        Some(k) => {
            let i = EntityKind::ALL.iter().position(|x| *x == k).unwrap_or(0);
            EntityKind::ALL.get(i + 1).copied()
        }
    }
}

pub fn prev_kind(current: Option<EntityKind>) -> Option<EntityKind> {
    match current {
        None => EntityKind::ALL.last().copied(),
        Some(k) => {
            let i = EntityKind::ALL.iter().position(|x| *x == k).unwrap_or(0);
            i.checked_sub(1).map(|j| EntityKind::ALL[j])
        }
    }
}
