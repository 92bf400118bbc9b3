use serde::{Deserialize, Serialize};

use crate::core::period::Period;

/// Tick density chosen from the in-range period count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickMode {
    /// Up to three years: every quarter gets a labeled tick.
    All,
    /// Medium horizons: one tick per year.
    Yearly,
    /// Long horizons: one tick every two years.
    Biennial,
}

/// One planned axis tick.
///
/// In yearly and biennial modes the tick sits at a specific quarter but its
/// label is the bare year; both rendering surfaces must keep that asymmetry
/// or gridlines and labels drift apart between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTick {
    pub period: Period,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPlan {
    pub mode: TickMode,
    pub ticks: Vec<AxisTick>,
}

impl AxisPlan {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            mode: TickMode::All,
            ticks: Vec::new(),
        }
    }
}

/// Plans axis ticks for a sorted list of in-range periods.
///
/// Mode thresholds: `n <= 12` every period, `n <= 40` yearly, otherwise
/// biennial. The candidate tick for a selected year prefers that year's Q1,
/// then any in-range row of that year; years with no in-range row are
/// skipped.
#[must_use]
pub fn plan(periods_in_range: &[Period]) -> AxisPlan {
    let Some((&first, &last)) = periods_in_range
        .first()
        .zip(periods_in_range.last())
    else {
        return AxisPlan::empty();
    };

    let n = periods_in_range.len();
    let mode = if n <= 12 {
        TickMode::All
    } else if n <= 40 {
        TickMode::Yearly
    } else {
        TickMode::Biennial
    };

    if mode == TickMode::All {
        let ticks = periods_in_range
            .iter()
            .map(|&period| AxisTick {
                period,
                label: period.label(),
            })
            .collect();
        return AxisPlan { mode, ticks };
    }

    let step = if mode == TickMode::Biennial { 2 } else { 1 };
    let mut ticks = Vec::new();
    let mut year = first.year();
    while year <= last.year() {
        let candidate = periods_in_range
            .iter()
            .find(|p| p.year() == year && p.quarter() == 1)
            .or_else(|| periods_in_range.iter().find(|p| p.year() == year));
        if let Some(&period) = candidate {
            ticks.push(AxisTick {
                period,
                label: year.to_string(),
            });
        }
        year += step;
    }

    AxisPlan { mode, ticks }
}
