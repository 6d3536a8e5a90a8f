// src/tui/widgets/catalog.rs — Product Catalog page: search box, table, summary.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::portal::catalog::{self, Product};
use crate::tui::theme::Theme;

pub fn render(
    f: &mut Frame,
    area: Rect,
    products: &[Product],
    query: &str,
    state: &mut TableState,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    let shown = catalog::search(products, query);

    let search = if query.is_empty() {
        Span::styled("Search products, satellites, or locations...", theme.text_dim())
    } else {
        Span::styled(query.to_string(), theme.text())
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(" ⌕ ", theme.info()), search])).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focus()),
        ),
        chunks[0],
    );

    let header = Row::new(vec![
        Cell::from("Product").style(theme.table_header()),
        Cell::from("Satellite").style(theme.table_header()),
        Cell::from("Location").style(theme.table_header()),
        Cell::from("Res.").style(theme.table_header()),
        Cell::from("Date").style(theme.table_header()),
        Cell::from("Type").style(theme.table_header()),
        Cell::from("Size").style(theme.table_header()),
    ]);

    let rows: Vec<Row> = shown
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(truncate(&p.name, 38)).style(theme.text()),
                Cell::from(p.satellite.clone()).style(theme.text()),
                Cell::from(p.location.clone()).style(theme.text_dim()),
                Cell::from(p.resolution.clone()).style(theme.text_dim()),
                Cell::from(p.date.clone()).style(theme.text_dim()),
                Cell::from(p.kind.as_str())
                    .style(Style::default().fg(Theme::token(p.kind.color()))),
                Cell::from(p.size.clone()).style(theme.text_dim()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(24),
        Constraint::Length(15),
        Constraint::Length(18),
        Constraint::Length(6),
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Length(8),
    ];

    // keep the selection inside the filtered rows
    match state.selected() {
        Some(i) if i >= shown.len() => state.select(shown.len().checked_sub(1)),
        None if !shown.is_empty() => state.select(Some(0)),
        _ => {}
    }

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(" Product Catalog ")
                .borders(Borders::ALL)
                .border_style(theme.border()),
        )
        .row_highlight_style(theme.table_selected())
        .highlight_symbol(">> ");
    f.render_stateful_widget(table, chunks[1], state);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", catalog::summary(shown.len(), products.len())),
            theme.text_dim(),
        )),
        chunks[2],
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
