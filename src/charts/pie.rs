// src/charts/pie.rs — Pie chart geometry

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{fmt_coord, ChartError, PieSlice};

/// Circle placement in the pie's own coordinate frame (a 100x100 viewBox by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieLayout {
    pub center: f64,
    pub radius: f64,
    /// Extra radius for the emphasized (hovered) wedge. Angles are unaffected.
    pub hover_delta: f64,
}

impl Default for PieLayout {
    fn default() -> Self {
        Self {
            center: 50.0,
            radius: 50.0,
            hover_delta: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Wedge {
    pub name: String,
    pub color: String,
    pub value: f64,
    /// Share of the total in `0..=1`.
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub radius: f64,
    pub large_arc: bool,
    pub emphasized: bool,
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub path: String,
}

impl Wedge {
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }

    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn contains_angle(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub total: f64,
    pub wedges: Vec<Wedge>,
    pub emphasized: Option<usize>,
}

impl PieChart {
    /// Index of the wedge covering `angle` degrees (normalized into `[0, 360)`).
    pub fn wedge_at_angle(&self, angle: f64) -> Option<usize> {
        let a = angle.rem_euclid(360.0);
        self.wedges.iter().position(|w| w.contains_angle(a))
    }
}

fn point_on_circle(layout: &PieLayout, radius: f64, angle: f64) -> (f64, f64) {
    let rad = PI * angle / 180.0;
    (
        layout.center + radius * rad.cos(),
        layout.center + radius * rad.sin(),
    )
}

fn wedge_path(layout: &PieLayout, w: &WedgeGeometry) -> String {
    let c = fmt_coord(layout.center);
    let r = fmt_coord(w.radius);
    let (x1, y1) = w.start;
    let (x2, y2) = w.end;

    if w.end_angle - w.start_angle >= 360.0 {
        // A single arc whose endpoints coincide draws nothing, so split it.
        let (xm, ym) = point_on_circle(layout, w.radius, w.start_angle + 180.0);
        return format!(
            "M {c},{c} L {},{} A {r},{r} 0 0,1 {},{} A {r},{r} 0 0,1 {},{} Z",
            fmt_coord(x1),
            fmt_coord(y1),
            fmt_coord(xm),
            fmt_coord(ym),
            fmt_coord(x2),
            fmt_coord(y2),
        );
    }

    format!(
        "M {c},{c} L {},{} A {r},{r} 0 {},1 {},{} Z",
        fmt_coord(x1),
        fmt_coord(y1),
        u8::from(w.large_arc),
        fmt_coord(x2),
        fmt_coord(y2),
    )
}

struct WedgeGeometry {
    start_angle: f64,
    end_angle: f64,
    radius: f64,
    large_arc: bool,
    start: (f64, f64),
    end: (f64, f64),
}

/// Tile the full circle with one wedge per slice, in slice order.
///
/// Slice `i` starts where slice `i - 1` ended; the first starts at 0 and
/// the last ends at exactly 360, whatever the absolute sum of values.
pub fn compute_pie_chart(
    slices: &[PieSlice],
    layout: &PieLayout,
    emphasized: Option<usize>,
) -> Result<PieChart, ChartError> {
    if slices.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    if let Some(bad) = slices
        .iter()
        .find(|s| !(s.value > 0.0 && s.value.is_finite()))
    {
        return Err(ChartError::NonPositiveSlice {
            name: bad.name.clone(),
            value: bad.value,
        });
    }
    if !(layout.radius > 0.0 && layout.hover_delta >= 0.0) {
        return Err(ChartError::InvalidLayout(format!(
            "radius {} / hover delta {} out of range",
            layout.radius, layout.hover_delta
        )));
    }

    // Angles come from weights scaled by the largest value, so the sum
    // stays finite even when the raw total overflows.
    let max = slices.iter().map(|s| s.value).fold(0.0_f64, f64::max);
    let weight = |s: &PieSlice| s.value / max;
    let total: f64 = slices.iter().map(|s| s.value).sum();
    let scaled_total: f64 = slices.iter().map(weight).sum();
    let last = slices.len() - 1;

    let wedges = slices
        .iter()
        .enumerate()
        .scan(0.0_f64, |cumulative, (i, slice)| {
            let start_angle = 360.0 * *cumulative / scaled_total;
            *cumulative += weight(slice);
            let end_angle = if i == last {
                360.0
            } else {
                360.0 * *cumulative / scaled_total
            };
            Some((i, slice, start_angle, end_angle))
        })
        .map(|(i, slice, start_angle, end_angle)| {
            let is_emphasized = emphasized == Some(i);
            let radius = if is_emphasized {
                layout.radius + layout.hover_delta
            } else {
                layout.radius
            };
            let fraction = weight(slice) / scaled_total;
            let geometry = WedgeGeometry {
                start_angle,
                end_angle,
                radius,
                large_arc: fraction > 0.5,
                start: point_on_circle(layout, radius, start_angle),
                end: point_on_circle(layout, radius, end_angle),
            };
            Wedge {
                name: slice.name.clone(),
                color: slice.color.clone(),
                value: slice.value,
                fraction,
                start_angle,
                end_angle,
                radius,
                large_arc: geometry.large_arc,
                emphasized: is_emphasized,
                start: geometry.start,
                end: geometry.end,
                path: wedge_path(layout, &geometry),
            }
        })
        .collect();

    Ok(PieChart {
        total,
        wedges,
        emphasized: emphasized.filter(|&i| i <= last),
    })
}
