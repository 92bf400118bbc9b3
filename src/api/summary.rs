use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::api::engine::yearly_aggregates;
use crate::api::state::DashboardState;
use crate::core::period::Period;
use crate::core::range::RangeConfig;
use crate::core::row::Row;

/// Variables the summary table can display, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableVar {
    OutputGap,
    PolicyRate,
    PolicyRateStep,
    HeadlineYoy,
    CoreYoy,
    GdpGrowth,
}

impl TableVar {
    pub const ALL: [TableVar; 6] = [
        TableVar::OutputGap,
        TableVar::PolicyRate,
        TableVar::PolicyRateStep,
        TableVar::HeadlineYoy,
        TableVar::CoreYoy,
        TableVar::GdpGrowth,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TableVar::OutputGap => "Output Gap",
            TableVar::PolicyRate => "Policy Rate",
            TableVar::PolicyRateStep => "Policy Rate (0.25pp)",
            TableVar::HeadlineYoy => "Headline Inflation",
            TableVar::CoreYoy => "Core Inflation",
            TableVar::GdpGrowth => "GDP Growth",
        }
    }

    /// Reads this variable from a row (quarterly) or a yearly aggregate;
    /// both share the same accessors because aggregation resolves its
    /// overrides into the same slots.
    #[must_use]
    pub fn value(self, row: &Row) -> Option<f64> {
        match self {
            TableVar::OutputGap => row.output_gap,
            TableVar::PolicyRate => row.policy_rate,
            TableVar::PolicyRateStep => row
                .policy_rate
                .map(|rate| (rate / 0.25).round() * 0.25),
            TableVar::HeadlineYoy => row.headline_yoy,
            TableVar::CoreYoy => row.core_yoy,
            TableVar::GdpGrowth => row.output_growth,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableFrequency {
    Quarterly,
    Yearly,
}

/// Fully formatted summary table: one row per period (or year), one column
/// group per variable with one column per scenario inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub frequency: TableFrequency,
    pub variables: Vec<TableVar>,
    pub scenario_names: Vec<String>,
    pub row_labels: Vec<String>,
    /// `cells[row][variable_index * scenarios + scenario_index]`, formatted
    /// to two decimals, empty string where no observation exists.
    pub cells: Vec<Vec<String>>,
}

impl SummaryTable {
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.variables.len() * self.scenario_names.len()
    }
}

fn format_cell(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.2}"))
}

/// Builds the summary table for the current state over the table window.
///
/// Quarterly rows cover the union of in-window periods across scenarios;
/// yearly rows cover the union of aggregate years. A scenario missing a
/// period simply leaves its cells blank, so differently shaped files can be
/// compared without alignment preprocessing.
#[must_use]
pub fn build_summary_table(
    state: &DashboardState,
    ranges: &RangeConfig,
    variables: &[TableVar],
    frequency: TableFrequency,
) -> SummaryTable {
    let scenario_names = state.scenario_names();
    let (row_labels, cells) = match frequency {
        TableFrequency::Quarterly => quarterly_rows(state, ranges, variables),
        TableFrequency::Yearly => yearly_rows(state, ranges, variables),
    };
    trace!(
        rows = row_labels.len(),
        variables = variables.len(),
        scenarios = scenario_names.len(),
        "summary table built"
    );
    SummaryTable {
        frequency,
        variables: variables.to_vec(),
        scenario_names,
        row_labels,
        cells,
    }
}

fn quarterly_rows(
    state: &DashboardState,
    ranges: &RangeConfig,
    variables: &[TableVar],
) -> (Vec<String>, Vec<Vec<String>>) {
    let window = ranges.table_window();
    let periods: Vec<Period> = state
        .available_periods()
        .into_iter()
        .filter(|p| window.contains(*p))
        .collect();

    let mut labels = Vec::with_capacity(periods.len());
    let mut cells = Vec::with_capacity(periods.len());
    for period in periods {
        labels.push(period.label());
        let mut row_cells = Vec::with_capacity(variables.len() * state.len());
        for variable in variables {
            for scenario in state.scenarios() {
                let value = scenario
                    .dataset
                    .row_at(period)
                    .and_then(|row| variable.value(row));
                row_cells.push(format_cell(value));
            }
        }
        cells.push(row_cells);
    }
    (labels, cells)
}

fn yearly_rows(
    state: &DashboardState,
    ranges: &RangeConfig,
    variables: &[TableVar],
) -> (Vec<String>, Vec<Vec<String>>) {
    let aggregates = yearly_aggregates(state, ranges);
    let mut years: Vec<i64> = aggregates
        .values()
        .flat_map(|by_year| by_year.keys().copied())
        .collect();
    years.sort_unstable();
    years.dedup();

    let mut labels = Vec::with_capacity(years.len());
    let mut cells = Vec::with_capacity(years.len());
    for year in years {
        labels.push(year.to_string());
        let mut row_cells = Vec::with_capacity(variables.len() * state.len());
        for variable in variables {
            for name in aggregates.keys() {
                let value = aggregates
                    .get(name)
                    .and_then(|by_year| by_year.get(&year))
                    .and_then(|row| variable.value(row));
                row_cells.push(format_cell(value));
            }
        }
        cells.push(row_cells);
    }
    (labels, cells)
}

#[cfg(test)]
mod tests {
    use super::{build_summary_table, TableFrequency, TableVar};
    use crate::api::state::DashboardState;
    use crate::core::dataset::Dataset;
    use crate::core::range::RangeConfig;
    use crate::core::row::Row;

    fn ranges(table_min: &str, table_max: &str) -> RangeConfig {
        RangeConfig {
            table_min: table_min.to_owned(),
            table_max: table_max.to_owned(),
            ..RangeConfig::default()
        }
    }

    fn two_scenario_state() -> DashboardState {
        let mut state = DashboardState::new();
        state
            .add_scenario(
                "base",
                None,
                Dataset::from_rows(vec![
                    Row {
                        policy_rate: Some(1.13),
                        ..Row::new("2020Q1")
                    },
                    Row {
                        policy_rate: Some(1.4),
                        ..Row::new("2020Q2")
                    },
                ]),
            )
            .expect("added");
        state
            .add_scenario(
                "alt",
                None,
                Dataset::from_rows(vec![Row {
                    policy_rate: Some(2.0),
                    ..Row::new("2020Q2")
                }]),
            )
            .expect("added");
        state
    }

    #[test]
    fn quarterly_table_blanks_missing_scenarios() {
        let table = build_summary_table(
            &two_scenario_state(),
            &ranges("2019Q4", "2030Q4"),
            &[TableVar::PolicyRate],
            TableFrequency::Quarterly,
        );
        assert_eq!(table.row_labels, vec!["2020Q1", "2020Q2"]);
        assert_eq!(table.cells[0], vec!["1.13".to_owned(), String::new()]);
        assert_eq!(table.cells[1], vec!["1.40".to_owned(), "2.00".to_owned()]);
    }

    #[test]
    fn stepped_policy_rate_rounds_to_quarter_points() {
        let table = build_summary_table(
            &two_scenario_state(),
            &ranges("2019Q4", "2030Q4"),
            &[TableVar::PolicyRateStep],
            TableFrequency::Quarterly,
        );
        assert_eq!(table.cells[0][0], "1.25");
        assert_eq!(table.cells[1][0], "1.50");
    }

    #[test]
    fn table_window_restricts_the_rows() {
        let table = build_summary_table(
            &two_scenario_state(),
            &ranges("2020Q2", "2020Q2"),
            &[TableVar::PolicyRate],
            TableFrequency::Quarterly,
        );
        assert_eq!(table.row_labels, vec!["2020Q2"]);
    }

    #[test]
    fn yearly_table_uses_aggregates() {
        let mut state = DashboardState::new();
        state
            .add_scenario(
                "base",
                None,
                Dataset::from_rows(vec![
                    Row {
                        policy_rate: Some(1.0),
                        output_gap: Some(-2.0),
                        avg_output_gap: Some(-1.5),
                        ..Row::new("2020Q4")
                    },
                    Row {
                        policy_rate: Some(1.5),
                        ..Row::new("2021Q2")
                    },
                ]),
            )
            .expect("added");
        let table = build_summary_table(
            &state,
            &ranges("2019Q4", "2030Q4"),
            &[TableVar::OutputGap, TableVar::PolicyRate],
            TableFrequency::Yearly,
        );
        assert_eq!(table.row_labels, vec!["2020", "2021"]);
        assert_eq!(table.column_count(), 2);
        // Yearly output gap comes from the 4-quarter average override.
        assert_eq!(table.cells[0], vec!["-1.50".to_owned(), "1.00".to_owned()]);
        assert_eq!(table.cells[1], vec![String::new(), "1.50".to_owned()]);
    }
}
