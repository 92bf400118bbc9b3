use serde::{Deserialize, Serialize};

use crate::core::period::Period;
use crate::core::range::{PeriodWindow, RangeConfig};
use crate::core::series::SeriesPoint;

/// Visual role of a series: trend/potential variants render dashed, primaries
/// solid. Geometry is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeriesKind {
    #[default]
    Primary,
    Trend,
}

/// Named input series for projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesInput {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<SeriesPoint>,
}

/// A point projected into normalized `[0,1] x [0,1]` plot space.
///
/// `x` grows with time, `y` with value; backends flip and scale into their
/// own pixel/point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub points: Vec<ProjectedPoint>,
}

/// Shared projection result both rendering surfaces consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionFrame {
    pub series: Vec<ProjectedSeries>,
    pub min_index: i64,
    pub max_index: i64,
    pub min_value: f64,
    pub max_value: f64,
}

impl ProjectionFrame {
    /// Projects a period onto the normalized x axis using the frame's index
    /// bounds (the same mapping applied to every series point).
    #[must_use]
    pub fn x_of(&self, period: Period) -> f64 {
        normalize(period.index() as f64, self.min_index as f64, self.max_index as f64)
    }
}

/// Padding applied to the value axis after min/max accumulation.
const VALUE_PADDING_RATIO: f64 = 0.08;

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min).max(1.0)
}

/// Projects named series onto normalized plot coordinates.
///
/// Only in-window points with representable periods and finite values
/// participate; series left with no points are dropped. Returns `None` when
/// nothing survives, so callers render nothing rather than a degenerate
/// frame. A single-valued y range is expanded by one unit each side before
/// the 8% padding.
#[must_use]
pub fn project(series: &[SeriesInput], window: &PeriodWindow) -> Option<ProjectionFrame> {
    let mut min_index = i64::MAX;
    let mut max_index = i64::MIN;
    let mut min_value = f64::INFINITY;
    let mut max_value = f64::NEG_INFINITY;
    let mut kept: Vec<(&SeriesInput, Vec<SeriesPoint>)> = Vec::new();

    for input in series {
        let points: Vec<SeriesPoint> = input
            .points
            .iter()
            .copied()
            .filter(|point| point.value.is_finite() && window.contains(point.period))
            .collect();
        if points.is_empty() {
            continue;
        }
        for point in &points {
            min_index = min_index.min(point.period.index());
            max_index = max_index.max(point.period.index());
            min_value = min_value.min(point.value);
            max_value = max_value.max(point.value);
        }
        kept.push((input, points));
    }

    if kept.is_empty() {
        return None;
    }

    if min_value == max_value {
        min_value -= 1.0;
        max_value += 1.0;
    }
    let padding = (max_value - min_value) * VALUE_PADDING_RATIO;
    min_value -= padding;
    max_value += padding;

    let projected = kept
        .into_iter()
        .map(|(input, points)| ProjectedSeries {
            name: input.name.clone(),
            kind: input.kind,
            points: points
                .iter()
                .map(|point| ProjectedPoint {
                    x: normalize(point.period.index() as f64, min_index as f64, max_index as f64),
                    y: normalize(point.value, min_value, max_value),
                })
                .collect(),
        })
        .collect();

    Some(ProjectionFrame {
        series: projected,
        min_index,
        max_index,
        min_value,
        max_value,
    })
}

/// Normalized "actual data" shaded region for one projection frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadeRegion {
    pub x0: f64,
    pub x1: f64,
}

/// The actual-data region spans `[plot_min, actual_max]`, clipped to the
/// frame's index bounds.
///
/// Empty (`None`) when either bound is unrepresentable or `actual_max`
/// precedes `plot_min`; both surfaces inherit this from the one shared
/// implementation.
#[must_use]
pub fn shade_region(ranges: &RangeConfig, frame: &ProjectionFrame) -> Option<ShadeRegion> {
    let shade_min = Period::parse(ranges.actual_min())?;
    let shade_max = Period::parse(&ranges.actual_max)?;
    if shade_max.index() < shade_min.index() {
        return None;
    }

    let x0_index = shade_min.index().max(frame.min_index);
    let x1_index = shade_max.index().min(frame.max_index);
    if x1_index < x0_index {
        return None;
    }

    Some(ShadeRegion {
        x0: normalize(x0_index as f64, frame.min_index as f64, frame.max_index as f64),
        x1: normalize(x1_index as f64, frame.min_index as f64, frame.max_index as f64),
    })
}
