use serde::{Deserialize, Serialize};

use crate::core::period::Period;

/// Resolved inclusive period window.
///
/// Bounds come from user-facing labels; an unparseable or absent label leaves
/// that side open. Inverted windows are legal and simply match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub min: Option<Period>,
    pub max: Option<Period>,
}

impl PeriodWindow {
    #[must_use]
    pub fn from_labels(min: &str, max: &str) -> Self {
        Self {
            min: Period::parse(min),
            max: Period::parse(max),
        }
    }

    #[must_use]
    pub const fn open() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn contains(&self, period: Period) -> bool {
        if let Some(min) = self.min {
            if period < min {
                return false;
            }
        }
        if let Some(max) = self.max {
            if period > max {
                return false;
            }
        }
        true
    }
}

/// Snapshot of the user-selected plot, shading, and table bounds.
///
/// Both rendering surfaces are driven from one snapshot so their layout
/// decisions cannot drift apart. The actual-data shading always starts at
/// `plot_min`; only its upper bound is independently selectable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub plot_min: String,
    pub plot_max: String,
    pub actual_max: String,
    pub table_min: String,
    pub table_max: String,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            plot_min: "2019Q4".to_owned(),
            plot_max: "2030Q4".to_owned(),
            actual_max: Period::current().label(),
            table_min: "2019Q4".to_owned(),
            table_max: "2030Q4".to_owned(),
        }
    }
}

impl RangeConfig {
    /// Lower bound of the actual-data shading, locked to the plot minimum.
    #[must_use]
    pub fn actual_min(&self) -> &str {
        &self.plot_min
    }

    #[must_use]
    pub fn plot_window(&self) -> PeriodWindow {
        PeriodWindow::from_labels(&self.plot_min, &self.plot_max)
    }

    #[must_use]
    pub fn table_window(&self) -> PeriodWindow {
        PeriodWindow::from_labels(&self.table_min, &self.table_max)
    }
}
