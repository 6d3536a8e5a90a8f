// src/charts/mod.rs — Chart geometry: data series to drawable vector paths.
//
// Everything here is pure. The same input always yields byte-identical
// path strings, so output can be cached, diffed, and snapshot-tested.

pub mod line;
pub mod pie;
pub mod svg;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use line::{compute_line_chart, AxisLabel, GridLine, LineChart, LineChartLayout, PlotPoint, Tooltip};
pub use pie::{compute_pie_chart, PieChart, PieLayout, Wedge};

/// One sample on the line chart. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub users: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, users: f64) -> Self {
        Self {
            name: name.into(),
            users,
        }
    }
}

/// One weighted wedge of the pie chart. Values are proportional weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    /// Fill color token, e.g. `#10B981`.
    pub color: String,
}

impl PieSlice {
    pub fn new(name: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            color: color.into(),
        }
    }
}

/// Precondition violations on chart input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("line chart needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("value for '{name}' is not a finite non-negative number")]
    NonFiniteValue { name: String },

    #[error("pie chart needs at least one slice")]
    EmptySeries,

    #[error("slice '{name}' has non-positive weight {value}")]
    NonPositiveSlice { name: String, value: f64 },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

/// Format a coordinate for a path string: rounded to 3 decimals, no
/// trailing zeros, and never `-0`.
pub fn fmt_coord(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_coord_integers_have_no_fraction() {
        assert_eq!(fmt_coord(40.0), "40");
        assert_eq!(fmt_coord(560.0), "560");
    }

    #[test]
    fn test_fmt_coord_rounds_float_noise() {
        assert_eq!(fmt_coord(79.600_000_000_000_02), "79.6");
        assert_eq!(fmt_coord(105.999_999_999_999_97), "106");
    }

    #[test]
    fn test_fmt_coord_negative_zero() {
        assert_eq!(fmt_coord(-0.0), "0");
        assert_eq!(fmt_coord(-0.000_1), "0");
    }

    #[test]
    fn test_fmt_coord_keeps_three_decimals() {
        assert_eq!(fmt_coord(34.549_150_281), "34.549");
        assert_eq!(fmt_coord(-12.5), "-12.5");
    }
}
