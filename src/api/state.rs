use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::dataset::Dataset;
use crate::core::period::Period;
use crate::error::{DashError, DashResult};

/// Upper bound on concurrently compared scenarios.
pub const MAX_SCENARIOS: usize = 6;

/// Default line colors assigned to scenarios in load order.
pub const DEFAULT_COLOR_CYCLE: [&str; 10] = [
    "#1f77b4", // blue
    "#ff7f0e", // orange
    "#2ca02c", // green
    "#d62728", // red
    "#9467bd", // purple
    "#8c564b", // brown
    "#e377c2", // pink
    "#7f7f7f", // gray
    "#bcbd22", // olive
    "#17becf", // teal
];

/// One independently loaded policy scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Hex line color, e.g. `#1f77b4`.
    pub color: String,
    pub dataset: Dataset,
}

/// Explicit dashboard session state.
///
/// Everything the core computes is a pure function of this value plus a
/// `RangeConfig` snapshot, so recomputation is safe to run eagerly on every
/// input change with no hidden accumulation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    scenarios: IndexMap<String, Scenario>,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scenario, assigning the next color from the default cycle when
    /// none is given. A scenario with the same name replaces the previous one.
    pub fn add_scenario(
        &mut self,
        name: impl Into<String>,
        color: Option<String>,
        dataset: Dataset,
    ) -> DashResult<()> {
        let name = name.into();
        if !self.scenarios.contains_key(&name) && self.scenarios.len() >= MAX_SCENARIOS {
            return Err(DashError::ScenarioLimit { max: MAX_SCENARIOS });
        }
        let color = color.unwrap_or_else(|| {
            DEFAULT_COLOR_CYCLE
                .get(self.scenarios.len())
                .copied()
                .unwrap_or("#000000")
                .to_owned()
        });
        debug!(scenario = %name, rows = dataset.len(), "scenario added");
        self.scenarios.insert(
            name.clone(),
            Scenario {
                name,
                color,
                dataset,
            },
        );
        Ok(())
    }

    pub fn remove_scenario(&mut self, name: &str) -> DashResult<Scenario> {
        self.scenarios
            .shift_remove(name)
            .ok_or_else(|| DashError::UnknownScenario(name.to_owned()))
    }

    #[must_use]
    pub fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.get(name)
    }

    pub fn scenarios(&self) -> impl DoubleEndedIterator<Item = &Scenario> {
        self.scenarios.values()
    }

    #[must_use]
    pub fn scenario_names(&self) -> Vec<String> {
        self.scenarios.keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Union of representable periods across all scenarios, ascending and
    /// deduplicated. Drives range selectors and the axis planner.
    #[must_use]
    pub fn available_periods(&self) -> Vec<Period> {
        let mut periods: Vec<Period> = self
            .scenarios
            .values()
            .flat_map(|s| s.dataset.periods())
            .collect();
        periods.sort_unstable();
        periods.dedup();
        periods
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Derives a scenario display name from an uploaded file name.
///
/// `chartpackcsv_Dec25_Internal Briefing.csv` becomes
/// `MPC Dec-25 (Internal Briefing)`; files without a `_MonYY` marker fall
/// back to `MPC Scenario`.
#[must_use]
pub fn scenario_label_from_file_name(file_name: &str) -> String {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);

    match find_month_marker(stem) {
        Some((start, month, year)) => {
            let mut label = format!("MPC {month}-{year}");
            // Skip "_MonYY" (1 + 3 + 2 bytes, all ASCII).
            let descriptor = clean_descriptor(&stem[start + 6..]);
            if !descriptor.is_empty() {
                label.push_str(&format!(" ({descriptor})"));
            }
            label
        }
        None => "MPC Scenario".to_owned(),
    }
}

/// Finds `_MonYY` (case-insensitive month, two digits) and returns the byte
/// offset of the underscore plus the canonical month and year text.
fn find_month_marker(stem: &str) -> Option<(usize, &'static str, &str)> {
    let bytes = stem.as_bytes();
    for (pos, &byte) in bytes.iter().enumerate() {
        if byte != b'_' || pos + 6 > bytes.len() {
            continue;
        }
        if !stem.is_char_boundary(pos + 4) || !stem.is_char_boundary(pos + 6) {
            continue;
        }
        let candidate = &stem[pos + 1..pos + 4];
        let Some(month) = MONTHS
            .iter()
            .copied()
            .find(|m| m.eq_ignore_ascii_case(candidate))
        else {
            continue;
        };
        let year = &stem[pos + 4..pos + 6];
        if year.bytes().all(|b| b.is_ascii_digit()) {
            return Some((pos, month, year));
        }
    }
    None
}

fn clean_descriptor(raw: &str) -> String {
    raw.split(['_', '-'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
