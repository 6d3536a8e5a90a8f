// src/tui/widgets/charts.rs — Data Visualization page: line and pie charts.
//
// Geometry comes from `crate::charts`; this module only maps the chart's
// y-down frame onto the canvas' y-up frame and paints it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use crate::charts::{fmt_coord, LineChart, LineChartLayout, PieChart, PieLayout};
use crate::tui::theme::Theme;

/// Angular step used to fill wedges with radial strokes.
const FILL_STEP_DEG: f64 = 1.5;

pub fn render(
    f: &mut Frame,
    area: Rect,
    line: Result<(&LineChart, &LineChartLayout), String>,
    pie: Result<(&PieChart, &PieLayout), String>,
    hovered_point: Option<usize>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    match line {
        Ok((chart, layout)) => render_line(f, chunks[0], chart, layout, hovered_point, theme),
        Err(msg) => render_unavailable(f, chunks[0], " Active Users ", &msg, theme),
    }
    match pie {
        Ok((chart, layout)) => render_pie(f, chunks[1], chart, layout, theme),
        Err(msg) => render_unavailable(f, chunks[1], " Product Distribution ", &msg, theme),
    }
}

fn render_unavailable(f: &mut Frame, area: Rect, title: &str, msg: &str, theme: &Theme) {
    let p = Paragraph::new(Line::from(Span::styled(msg.to_string(), theme.error())))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
    f.render_widget(p, area);
}

fn render_line(
    f: &mut Frame,
    area: Rect,
    chart: &LineChart,
    layout: &LineChartLayout,
    hovered: Option<usize>,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(area);

    let h = layout.height;
    let grid_color = theme.grid();
    let line_color = Theme::GREEN;
    let label_style = theme.text_dim();
    let tooltip = hovered.and_then(|i| chart.tooltip(i));
    let hint = match &tooltip {
        Some(tip) => format!(" {} · users: {}", tip.name, fmt_coord(tip.value)),
        None => " [ ] move between points".to_string(),
    };

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Active Users ")
                .borders(Borders::ALL)
                .border_style(theme.border()),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, layout.width])
        .y_bounds([0.0, h])
        .paint(move |ctx| {
            for g in &chart.grid {
                ctx.draw(&CanvasLine::new(g.x1, h - g.y, g.x2, h - g.y, grid_color));
                ctx.print(
                    0.0,
                    h - g.label_y,
                    Span::styled(g.label.clone(), label_style),
                );
            }
            ctx.layer();

            for pair in chart.points.windows(2) {
                ctx.draw(&CanvasLine::new(
                    pair[0].x,
                    h - pair[0].y,
                    pair[1].x,
                    h - pair[1].y,
                    line_color,
                ));
            }
            for (i, p) in chart.points.iter().enumerate() {
                let radius = if hovered == Some(i) { 8.0 } else { 5.0 };
                ctx.draw(&Circle {
                    x: p.x,
                    y: h - p.y,
                    radius,
                    color: line_color,
                });
            }
            for label in &chart.x_labels {
                ctx.print(
                    label.x,
                    h - label.y,
                    Span::styled(label.text.clone(), label_style),
                );
            }
            if let Some(tip) = &tooltip {
                ctx.print(
                    tip.x,
                    h - tip.y,
                    Span::styled(
                        format!("{}: {}", tip.name, fmt_coord(tip.value)),
                        Style::default()
                            .fg(line_color)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });
    f.render_widget(canvas, chunks[0]);

    f.render_widget(
        Paragraph::new(Span::styled(hint, theme.text_dim())),
        chunks[1],
    );
}

/// Point at `angle` degrees, measured clockwise from 12 o'clock, on the
/// canvas' y-up frame.
fn clock_point(layout: &PieLayout, radius: f64, angle: f64) -> (f64, f64) {
    let rad = angle.to_radians();
    (
        layout.center + radius * rad.sin(),
        layout.center + radius * rad.cos(),
    )
}

fn render_pie(f: &mut Frame, area: Rect, chart: &PieChart, layout: &PieLayout, theme: &Theme) {
    let legend_rows = chart.wedges.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(legend_rows)])
        .split(area);

    let reach = layout.radius + layout.hover_delta;
    let c = layout.center;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Product Distribution ")
                .borders(Borders::ALL)
                .border_style(theme.border()),
        )
        .marker(Marker::Braille)
        .x_bounds([c - reach, c + reach])
        .y_bounds([c - reach, c + reach])
        .paint(move |ctx| {
            for wedge in &chart.wedges {
                let color = Theme::token(&wedge.color);
                let mut angle = wedge.start_angle;
                while angle < wedge.end_angle {
                    let (x, y) = clock_point(layout, wedge.radius, angle);
                    ctx.draw(&CanvasLine::new(c, c, x, y, color));
                    angle += FILL_STEP_DEG;
                }
                let (x, y) = clock_point(layout, wedge.radius, wedge.end_angle);
                ctx.draw(&CanvasLine::new(c, c, x, y, color));
            }
        });
    f.render_widget(canvas, chunks[0]);

    let lines: Vec<Line> = chart
        .wedges
        .iter()
        .map(|w| {
            let swatch = Style::default().fg(Theme::token(&w.color));
            let label_style = if w.emphasized {
                theme.text().add_modifier(Modifier::BOLD)
            } else {
                theme.text()
            };
            Line::from(vec![
                Span::styled(" ■ ", swatch),
                Span::styled(w.name.clone(), label_style),
                Span::styled(format!("  {}%", fmt_coord(w.percent())), theme.text_dim()),
            ])
        })
        .collect();
    let p = Paragraph::new(lines).block(
        Block::default()
            .title(" { } highlight ")
            .borders(Borders::ALL)
            .border_style(theme.border()),
    );
    f.render_widget(p, chunks[1]);
}
