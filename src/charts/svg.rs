// src/charts/svg.rs — Standalone SVG documents for computed charts.

use super::{fmt_coord, LineChart, LineChartLayout, PieChart, PieLayout};
use crate::portal::theme::ThemeMode;

/// Colors that change with the light/dark theme.
struct SvgPalette {
    background: &'static str,
    grid: &'static str,
    label: &'static str,
    heading: &'static str,
    tooltip_bg: &'static str,
}

impl SvgPalette {
    fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: "#FFFFFF",
                grid: "#E5E7EB",
                label: "#6B7280",
                heading: "#1F2937",
                tooltip_bg: "#1F2937",
            },
            ThemeMode::Dark => Self {
                background: "#1F2937",
                grid: "#374151",
                label: "#9CA3AF",
                heading: "#FFFFFF",
                tooltip_bg: "#111827",
            },
        }
    }
}

const LINE_COLOR: &str = "#22C55E";
const LEGEND_WIDTH: f64 = 120.0;

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the line chart with grid, axis labels, point markers and an
/// optional tooltip for the hovered point.
pub fn render_line_chart(
    chart: &LineChart,
    layout: &LineChartLayout,
    mode: ThemeMode,
    hovered: Option<usize>,
) -> String {
    let palette = SvgPalette::for_mode(mode);
    let w = fmt_coord(layout.width);
    let h = fmt_coord(layout.height);

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\">\n"
    );
    out.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        palette.background
    ));

    for g in &chart.grid {
        out.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-dasharray=\"4\"/>\n",
            fmt_coord(g.x1),
            fmt_coord(g.y),
            fmt_coord(g.x2),
            fmt_coord(g.y),
            palette.grid,
        ));
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"12\" fill=\"{}\">{}</text>\n",
            fmt_coord(g.label_x),
            fmt_coord(g.label_y),
            palette.label,
            escape_xml(&g.label),
        ));
    }

    for label in &chart.x_labels {
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{}\">{}</text>\n",
            fmt_coord(label.x),
            fmt_coord(label.y),
            palette.label,
            escape_xml(&label.text),
        ));
    }

    out.push_str(&format!(
        "  <path d=\"{}\" fill=\"none\" stroke=\"{LINE_COLOR}\" stroke-width=\"3\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n",
        chart.path
    ));

    for p in &chart.points {
        out.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"5\" fill=\"{LINE_COLOR}\"/>\n",
            fmt_coord(p.x),
            fmt_coord(p.y),
        ));
    }

    if let Some(tip) = hovered.and_then(|i| chart.tooltip(i)) {
        out.push_str(&format!(
            "  <g class=\"tooltip\">\n    <rect x=\"{}\" y=\"{}\" width=\"80\" height=\"36\" rx=\"6\" fill=\"{}\"/>\n",
            fmt_coord(tip.x - 40.0),
            fmt_coord(tip.y - 18.0),
            palette.tooltip_bg,
        ));
        out.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"11\" font-weight=\"bold\" fill=\"#FFFFFF\">{}</text>\n",
            fmt_coord(tip.x),
            fmt_coord(tip.y - 4.0),
            escape_xml(&tip.name),
        ));
        out.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"11\" fill=\"#FFFFFF\">users: {}</text>\n  </g>\n",
            fmt_coord(tip.x),
            fmt_coord(tip.y + 11.0),
            fmt_coord(tip.value),
        ));
    }

    out.push_str("</svg>\n");
    out
}

/// Render the pie chart with a legend to its right. The wedges are rotated
/// so that angle 0 points up.
pub fn render_pie_chart(chart: &PieChart, layout: &PieLayout, mode: ThemeMode) -> String {
    let palette = SvgPalette::for_mode(mode);
    let margin = layout.hover_delta + 1.0;
    let diameter = 2.0 * (layout.center.max(layout.radius));
    let view_w = diameter + 2.0 * margin + LEGEND_WIDTH;
    let view_h = diameter + 2.0 * margin;
    let c = fmt_coord(layout.center);

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        fmt_coord(-margin),
        fmt_coord(-margin),
        fmt_coord(view_w),
        fmt_coord(view_h),
    );
    out.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        fmt_coord(-margin),
        fmt_coord(-margin),
        fmt_coord(view_w),
        fmt_coord(view_h),
        palette.background,
    ));

    out.push_str(&format!("  <g transform=\"rotate(-90 {c} {c})\">\n"));
    for wedge in &chart.wedges {
        out.push_str(&format!(
            "    <path d=\"{}\" fill=\"{}\"/>\n",
            wedge.path,
            escape_xml(&wedge.color),
        ));
    }
    out.push_str("  </g>\n");

    if let Some(w) = chart.emphasized.and_then(|i| chart.wedges.get(i)) {
        out.push_str(&format!(
            "  <text x=\"{c}\" y=\"{}\" text-anchor=\"middle\" font-size=\"6\" fill=\"{}\">{}</text>\n",
            fmt_coord(layout.center - 2.0),
            palette.label,
            escape_xml(&w.name),
        ));
        out.push_str(&format!(
            "  <text x=\"{c}\" y=\"{}\" text-anchor=\"middle\" font-size=\"9\" font-weight=\"bold\" fill=\"{}\">{}%</text>\n",
            fmt_coord(layout.center + 8.0),
            palette.heading,
            fmt_coord(w.percent()),
        ));
    }

    let legend_x = diameter + margin + 4.0;
    for (i, wedge) in chart.wedges.iter().enumerate() {
        let y = 10.0 + i as f64 * 12.0;
        out.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"6\" height=\"6\" rx=\"1\" fill=\"{}\"/>\n",
            fmt_coord(legend_x),
            fmt_coord(y - 5.0),
            escape_xml(&wedge.color),
        ));
        out.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"6\" fill=\"{}\">{} {}%</text>\n",
            fmt_coord(legend_x + 9.0),
            fmt_coord(y),
            palette.label,
            escape_xml(&wedge.name),
            fmt_coord(wedge.percent()),
        ));
    }

    out.push_str("</svg>\n");
    out
}
