//! Declarative chart options
//!
//! [`ChartOptions`] serializes to the object shape the chart library takes in
//! `setOption`. Everything that cannot be expressed as data (the tooltip
//! formatter, per-point symbol sizing) is left for the adapter to attach.
use serde::Serialize;

use crate::projection::MissionData;

/// Marker size used when sizing by rating count is off.
pub const FIXED_SYMBOL_SIZE: f64 = 20.0;

/// Ratings sit on a 1..=10 scale, so the y axis never starts below 1.
pub const Y_AXIS_FLOOR: f64 = 1.0;

/// An axis bound handed to the chart as-is.
///
/// Numeric text becomes a number; anything else is forwarded verbatim and
/// left to the chart to interpret.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Bound {
    Number(f64),
    Text(String),
}

impl Bound {
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        raw.trim()
            .parse::<f64>()
            .map_or_else(|_| Self::Text(raw.to_string()), Self::Number)
    }

    #[must_use]
    pub fn year_start(year: &str) -> Self {
        Self::Text(format!("{year}-01-01"))
    }

    #[must_use]
    pub fn year_end(year: &str) -> Self {
        Self::Text(format!("{year}-12-31"))
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Axis limits as read from the form, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AxisConfig {
    pub limit_x: bool,
    pub x_left: String,
    pub x_right: String,
    pub limit_y: bool,
    pub y_bottom: String,
    pub y_top: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    Fixed,
    #[default]
    RatingCount,
}

impl SizeMode {
    #[must_use]
    pub const fn from_scale_by_ratings(scale: bool) -> Self {
        if scale { Self::RatingCount } else { Self::Fixed }
    }

    /// Marker size for one point.
    #[must_use]
    pub fn size_of(self, data: &MissionData) -> f64 {
        match self {
            Self::Fixed => FIXED_SYMBOL_SIZE,
            Self::RatingCount => f64::from(data.rating_count()),
        }
    }
}

// Unset bounds serialize as `null` rather than being omitted so that a
// merging `setOption` clears a bound left over from the previous update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub min: Option<Bound>,
    pub max: Option<Bound>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub min: Bound,
    pub max: Option<Bound>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: Vec<MissionData>,
    /// Present only for fixed sizing; rating-count sizing is a callback.
    #[serde(rename = "symbolSize", skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(skip)]
    pub size_mode: SizeMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipOptions {
    pub trigger: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub series: Vec<Series>,
    pub tooltip: TooltipOptions,
}

impl ChartOptions {
    /// Series whose marker size must be computed per point by the chart.
    pub fn rating_sized_series(&self) -> impl Iterator<Item = usize> + '_ {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, series)| series.size_mode == SizeMode::RatingCount)
            .map(|(idx, _)| idx)
    }
}

#[must_use]
pub fn build_options(data: Vec<MissionData>, axis: &AxisConfig, size_mode: SizeMode) -> ChartOptions {
    let (x_min, x_max) = if axis.limit_x {
        (
            Some(Bound::year_start(&axis.x_left)),
            Some(Bound::year_end(&axis.x_right)),
        )
    } else {
        (None, None)
    };
    let (y_min, y_max) = if axis.limit_y {
        (
            Bound::from_input(&axis.y_bottom),
            Some(Bound::from_input(&axis.y_top)),
        )
    } else {
        (Bound::Number(Y_AXIS_FLOOR), None)
    };

    ChartOptions {
        x_axis: XAxis {
            kind: "time",
            min: x_min,
            max: x_max,
        },
        y_axis: YAxis {
            kind: "value",
            min: y_min,
            max: y_max,
        },
        series: vec![Series {
            kind: "scatter",
            data,
            symbol_size: match size_mode {
                SizeMode::Fixed => Some(FIXED_SYMBOL_SIZE),
                SizeMode::RatingCount => None,
            },
            size_mode,
        }],
        tooltip: TooltipOptions { trigger: "item" },
    }
}
