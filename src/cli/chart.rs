// src/cli/chart.rs — Chart export command
//
// Renders a dataset series through the geometry module and writes either
// a standalone SVG document or the computed geometry as JSON.

use crate::charts::{compute_line_chart, compute_pie_chart, svg};
use crate::infra::config::Config;
use crate::portal::data::{PortalDataSource, MONTHLY_USERS, PRODUCT_DISTRIBUTION};
use crate::portal::theme::ThemeMode;

use super::{ChartFormat, ChartKind};

/// What to draw and how to encode it.
#[derive(Debug, Clone)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub series: Option<String>,
    pub format: ChartFormat,
    pub theme: ThemeMode,
    pub hover: Option<usize>,
}

impl ChartRequest {
    fn series_key(&self) -> &str {
        match (&self.series, self.kind) {
            (Some(key), _) => key,
            (None, ChartKind::Line) => MONTHLY_USERS,
            (None, ChartKind::Pie) => PRODUCT_DISTRIBUTION,
        }
    }
}

/// Produce the chart document for `req`.
pub async fn render_chart(
    config: &Config,
    source: &dyn PortalDataSource,
    req: &ChartRequest,
) -> anyhow::Result<String> {
    let key = req.series_key();
    tracing::debug!("Rendering {:?} chart for series '{}'", req.kind, key);

    match req.kind {
        ChartKind::Line => {
            let layout = &config.charts.line;
            let points = source.line_series(key).await?;
            let chart = compute_line_chart(&points, layout)?;
            if let Some(i) = req.hover {
                if i >= chart.points.len() {
                    anyhow::bail!(
                        "Point {} out of range; series '{}' has {} points",
                        i,
                        key,
                        chart.points.len()
                    );
                }
            }
            Ok(match req.format {
                ChartFormat::Svg => svg::render_line_chart(&chart, layout, req.theme, req.hover),
                ChartFormat::Json => serde_json::to_string_pretty(&chart)?,
            })
        }
        ChartKind::Pie => {
            let layout = &config.charts.pie;
            let slices = source.pie_series(key).await?;
            if let Some(i) = req.hover {
                if i >= slices.len() {
                    anyhow::bail!(
                        "Slice {} out of range; series '{}' has {} slices",
                        i,
                        key,
                        slices.len()
                    );
                }
            }
            let chart = compute_pie_chart(&slices, layout, req.hover)?;
            Ok(match req.format {
                ChartFormat::Svg => svg::render_pie_chart(&chart, layout, req.theme),
                ChartFormat::Json => serde_json::to_string_pretty(&chart)?,
            })
        }
    }
}

/// Render and write to `output`, or stdout.
pub async fn run_chart(
    config: &Config,
    source: &dyn PortalDataSource,
    req: ChartRequest,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let doc = render_chart(config, source, &req).await?;
    if let Some(path) = output {
        std::fs::write(path, &doc)?;
        eprintln!("Wrote {} chart to {}", req.series_key(), path);
    } else {
        println!("{}", doc);
    }
    Ok(())
}
