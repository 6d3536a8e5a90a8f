// src/charts/line.rs — Line chart geometry

use serde::{Deserialize, Serialize};

use super::{fmt_coord, ChartError, ChartPoint};

/// Canvas and axis parameters for the line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Normalization ceiling for the vertical axis. Values above it draw
    /// past the top padding line; nothing is clamped.
    pub scale_max: f64,
    /// Values that get a horizontal grid line and label.
    pub ticks: Vec<f64>,
}

impl Default for LineChartLayout {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            padding: 40.0,
            scale_max: 1000.0,
            ticks: vec![0.0, 200.0, 400.0, 600.0, 800.0],
        }
    }
}

impl LineChartLayout {
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ChartError::InvalidLayout(format!(
                "canvas must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.padding >= 0.0 && self.padding < self.width.min(self.height) / 2.0) {
            return Err(ChartError::InvalidLayout(format!(
                "padding {} must be in [0, {})",
                self.padding,
                self.width.min(self.height) / 2.0
            )));
        }
        if !(self.scale_max > 0.0 && self.scale_max.is_finite()) {
            return Err(ChartError::InvalidLayout(format!(
                "scale_max must be positive, got {}",
                self.scale_max
            )));
        }
        Ok(())
    }

    /// Vertical position of `value`: inverted so larger values sit higher.
    pub fn y_for(&self, value: f64) -> f64 {
        self.height
            - self.padding
            - (value / self.scale_max) * (self.height - 2.0 * self.padding)
    }

    /// Horizontal position of index `i` out of `count` points.
    pub fn x_for(&self, i: usize, count: usize) -> f64 {
        if count < 2 {
            return self.padding;
        }
        if i + 1 == count {
            // pin the last point to the right padding line exactly
            return self.width - self.padding;
        }
        self.padding + i as f64 * (self.width - 2.0 * self.padding) / (count - 1) as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    pub name: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    pub value: f64,
    pub label: String,
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Hover popup anchored above a data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub name: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub points: Vec<PlotPoint>,
    /// `M x y L x y ...` in index order.
    pub path: String,
    pub grid: Vec<GridLine>,
    pub x_labels: Vec<AxisLabel>,
}

const TOOLTIP_OFFSET: f64 = 50.0;
const Y_LABEL_GAP: f64 = 10.0;
const Y_LABEL_BASELINE: f64 = 5.0;
const X_LABEL_DROP: f64 = 20.0;

impl LineChart {
    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        self.points.get(index).map(|p| Tooltip {
            name: p.name.clone(),
            value: p.value,
            x: p.x,
            y: p.y - TOOLTIP_OFFSET,
        })
    }
}

/// Map an ordered series onto the canvas described by `layout`.
pub fn compute_line_chart(
    points: &[ChartPoint],
    layout: &LineChartLayout,
) -> Result<LineChart, ChartError> {
    layout.validate()?;
    if points.len() < 2 {
        return Err(ChartError::TooFewPoints {
            count: points.len(),
        });
    }
    if let Some(bad) = points
        .iter()
        .find(|p| !p.users.is_finite() || p.users < 0.0)
    {
        return Err(ChartError::NonFiniteValue {
            name: bad.name.clone(),
        });
    }

    let count = points.len();
    let plotted: Vec<PlotPoint> = points
        .iter()
        .enumerate()
        .map(|(i, p)| PlotPoint {
            name: p.name.clone(),
            value: p.users,
            x: layout.x_for(i, count),
            y: layout.y_for(p.users),
        })
        .collect();

    let path = plotted
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{} {} {}", cmd, fmt_coord(p.x), fmt_coord(p.y))
        })
        .collect::<Vec<_>>()
        .join(" ");

    let grid = layout
        .ticks
        .iter()
        .map(|&tick| {
            let y = layout.y_for(tick);
            GridLine {
                value: tick,
                label: fmt_coord(tick),
                x1: layout.padding,
                x2: layout.width - layout.padding,
                y,
                label_x: layout.padding - Y_LABEL_GAP,
                label_y: y + Y_LABEL_BASELINE,
            }
        })
        .collect();

    let x_labels = plotted
        .iter()
        .map(|p| AxisLabel {
            text: p.name.clone(),
            x: p.x,
            y: layout.height - layout.padding + X_LABEL_DROP,
        })
        .collect();

    Ok(LineChart {
        points: plotted,
        path,
        grid,
        x_labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monthly() -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Jan", 400.0),
            ChartPoint::new("Feb", 300.0),
            ChartPoint::new("Mar", 600.0),
            ChartPoint::new("Apr", 820.0),
            ChartPoint::new("May", 500.0),
            ChartPoint::new("Jun", 700.0),
        ]
    }

    #[test]
    fn test_reference_path() {
        let chart = compute_line_chart(&monthly(), &LineChartLayout::default()).unwrap();
        assert_eq!(
            chart.path,
            "M 40 172 L 144 194 L 248 128 L 352 79.6 L 456 150 L 560 106"
        );
    }

    #[test]
    fn test_endpoints_pinned_to_padding() {
        let layout = LineChartLayout::default();
        let chart = compute_line_chart(&monthly(), &layout).unwrap();
        assert_eq!(chart.points[0].x, layout.padding);
        assert_eq!(chart.points[5].x, layout.width - layout.padding);
    }

    #[test]
    fn test_endpoints_pinned_for_awkward_widths() {
        let layout = LineChartLayout {
            width: 333.3,
            padding: 17.1,
            ..Default::default()
        };
        let pts: Vec<ChartPoint> = (0..7).map(|i| ChartPoint::new(format!("p{i}"), 1.0)).collect();
        let chart = compute_line_chart(&pts, &layout).unwrap();
        assert_eq!(chart.points[0].x, 17.1);
        assert_eq!(chart.points[6].x, 333.3 - 17.1);
    }

    #[test]
    fn test_value_above_scale_is_not_clamped() {
        let layout = LineChartLayout::default();
        let pts = vec![ChartPoint::new("a", 0.0), ChartPoint::new("b", 1500.0)];
        let chart = compute_line_chart(&pts, &layout).unwrap();
        assert!(chart.points[1].y < layout.padding);
        assert_eq!(chart.points[0].y, layout.height - layout.padding);
    }

    #[test]
    fn test_flat_segment_still_emitted() {
        let pts = vec![
            ChartPoint::new("a", 500.0),
            ChartPoint::new("b", 500.0),
            ChartPoint::new("c", 500.0),
        ];
        let chart = compute_line_chart(&pts, &LineChartLayout::default()).unwrap();
        assert_eq!(chart.path, "M 40 150 L 300 150 L 560 150");
    }

    #[test]
    fn test_grid_and_labels() {
        let layout = LineChartLayout::default();
        let chart = compute_line_chart(&monthly(), &layout).unwrap();
        assert_eq!(chart.grid.len(), 5);
        let zero = &chart.grid[0];
        assert_eq!(zero.label, "0");
        assert_eq!(zero.y, 260.0);
        assert_eq!(zero.x1, 40.0);
        assert_eq!(zero.x2, 560.0);
        assert_eq!(zero.label_x, 30.0);
        assert_eq!(zero.label_y, 265.0);

        assert_eq!(chart.x_labels.len(), 6);
        assert_eq!(chart.x_labels[3].text, "Apr");
        assert_eq!(chart.x_labels[3].y, 280.0);
    }

    #[test]
    fn test_tooltip_sits_above_point() {
        let chart = compute_line_chart(&monthly(), &LineChartLayout::default()).unwrap();
        let tip = chart.tooltip(0).unwrap();
        assert_eq!(tip.name, "Jan");
        assert_eq!(tip.x, 40.0);
        assert!((tip.y - 122.0).abs() < 1e-9);
        assert!(chart.tooltip(6).is_none());
    }

    #[test]
    fn test_rejects_single_point() {
        let err = compute_line_chart(&[ChartPoint::new("a", 1.0)], &LineChartLayout::default())
            .unwrap_err();
        assert_eq!(err, ChartError::TooFewPoints { count: 1 });
    }

    #[test]
    fn test_rejects_nan_and_negative() {
        let layout = LineChartLayout::default();
        let nan = vec![ChartPoint::new("a", 1.0), ChartPoint::new("b", f64::NAN)];
        assert!(matches!(
            compute_line_chart(&nan, &layout),
            Err(ChartError::NonFiniteValue { .. })
        ));
        let neg = vec![ChartPoint::new("a", -1.0), ChartPoint::new("b", 2.0)];
        assert!(matches!(
            compute_line_chart(&neg, &layout),
            Err(ChartError::NonFiniteValue { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_padding() {
        let layout = LineChartLayout {
            padding: 150.0,
            ..Default::default()
        };
        assert!(matches!(
            compute_line_chart(&monthly(), &layout),
            Err(ChartError::InvalidLayout(_))
        ));
    }
}
