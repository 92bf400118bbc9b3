use std::collections::BTreeMap;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::api::charts::ChartId;
use crate::api::state::DashboardState;
use crate::core::aggregate::aggregate_to_yearly;
use crate::core::axis::{self, AxisPlan};
use crate::core::period::Period;
use crate::core::projection::{project, shade_region, ProjectionFrame, SeriesInput, ShadeRegion};
use crate::core::range::RangeConfig;
use crate::core::row::Row;
use crate::render::Color;

/// One chart fully resolved against the current state and ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProjection {
    pub chart: ChartId,
    pub frame: ProjectionFrame,
    /// Stroke color per projected series, parallel to `frame.series`.
    pub colors: Vec<Color>,
    pub shade: Option<ShadeRegion>,
}

/// Projects one chart across every loaded scenario.
///
/// Scenarios contribute in reverse load order so the first-loaded scenario
/// paints last and stays on top where lines overlap. Returns `None` when no
/// scenario has drawable points inside the plot window.
#[must_use]
pub fn project_chart(
    state: &DashboardState,
    chart: ChartId,
    ranges: &RangeConfig,
) -> Option<ChartProjection> {
    let window = ranges.plot_window();
    let mut inputs: Vec<SeriesInput> = Vec::new();
    let mut color_by_name: IndexMap<String, Color> = IndexMap::new();

    for scenario in state.scenarios().rev() {
        let color = Color::from_hex(&scenario.color);
        for series in chart.build_series(scenario, &window) {
            color_by_name.insert(series.name.clone(), color);
            inputs.push(series);
        }
    }

    let frame = project(&inputs, &window)?;
    let colors = frame
        .series
        .iter()
        .map(|series| {
            color_by_name
                .get(&series.name)
                .copied()
                .unwrap_or(Color::BLACK)
        })
        .collect();
    let shade = shade_region(ranges, &frame);
    trace!(
        chart = ?chart,
        series = frame.series.len(),
        shaded = shade.is_some(),
        "chart projected"
    );
    Some(ChartProjection {
        chart,
        frame,
        colors,
        shade,
    })
}

/// Axis plan shared by every chart: the available periods restricted to the
/// plot window.
#[must_use]
pub fn axis_plan(state: &DashboardState, ranges: &RangeConfig) -> AxisPlan {
    let window = ranges.plot_window();
    let periods: Vec<Period> = state
        .available_periods()
        .into_iter()
        .filter(|p| window.contains(*p))
        .collect();
    axis::plan(&periods)
}

/// Yearly aggregates per scenario over the table window, in load order.
#[must_use]
pub fn yearly_aggregates(
    state: &DashboardState,
    ranges: &RangeConfig,
) -> IndexMap<String, BTreeMap<i64, Row>> {
    let window = ranges.table_window();
    let aggregates = state
        .scenarios()
        .map(|s| (s.name.clone(), aggregate_to_yearly(&s.dataset, &window)))
        .collect();
    debug!(scenarios = state.len(), "yearly aggregates rebuilt");
    aggregates
}

/// Finds a scenario's row for one period, if loaded.
#[must_use]
pub fn row_at<'a>(state: &'a DashboardState, scenario: &str, period: Period) -> Option<&'a Row> {
    state.scenario(scenario)?.dataset.row_at(period)
}

#[cfg(test)]
mod tests {
    use super::{axis_plan, project_chart, yearly_aggregates};
    use crate::api::charts::ChartId;
    use crate::api::state::DashboardState;
    use crate::core::axis::TickMode;
    use crate::core::dataset::Dataset;
    use crate::core::range::RangeConfig;
    use crate::core::row::Row;
    use crate::render::Color;

    fn state_with(labels_and_rates: &[(&str, f64)]) -> DashboardState {
        let rows = labels_and_rates
            .iter()
            .map(|&(label, rate)| Row {
                policy_rate: Some(rate),
                ..Row::new(label)
            })
            .collect();
        let mut state = DashboardState::new();
        state
            .add_scenario("base", None, Dataset::from_rows(rows))
            .expect("added");
        state
    }

    fn ranges(plot_min: &str, plot_max: &str) -> RangeConfig {
        RangeConfig {
            plot_min: plot_min.to_owned(),
            plot_max: plot_max.to_owned(),
            actual_max: "2020Q4".to_owned(),
            ..RangeConfig::default()
        }
    }

    #[test]
    fn first_loaded_scenario_projects_last() {
        let mut state = state_with(&[("2020Q1", 1.0), ("2020Q2", 2.0)]);
        let alt = vec![
            Row {
                policy_rate: Some(3.0),
                ..Row::new("2020Q1")
            },
            Row {
                policy_rate: Some(4.0),
                ..Row::new("2020Q2")
            },
        ];
        state
            .add_scenario("alt", None, Dataset::from_rows(alt))
            .expect("added");
        let chart = project_chart(&state, ChartId::PolicyRate, &ranges("2019Q4", "2030Q4"))
            .expect("projection");
        let names: Vec<_> = chart.frame.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alt", "base"]);
        // "base" was loaded first and keeps the first cycle color.
        assert_eq!(chart.colors[1], Color::from_hex("#1f77b4"));
        assert_eq!(chart.colors[0], Color::from_hex("#ff7f0e"));
    }

    #[test]
    fn empty_window_yields_no_projection() {
        let state = state_with(&[("2020Q1", 1.0)]);
        assert!(project_chart(&state, ChartId::PolicyRate, &ranges("2025Q1", "2026Q1")).is_none());
    }

    #[test]
    fn axis_plan_respects_the_plot_window() {
        let labels: Vec<String> = (0..20)
            .map(|i| format!("{}Q{}", 2020 + i / 4, i % 4 + 1))
            .collect();
        let pairs: Vec<(&str, f64)> = labels.iter().map(|l| (l.as_str(), 1.0)).collect();
        let state = state_with(&pairs);
        let plan = axis_plan(&state, &ranges("2020Q1", "2021Q4"));
        assert_eq!(plan.mode, TickMode::All);
        assert_eq!(plan.ticks.len(), 8);
    }

    #[test]
    fn yearly_aggregates_are_keyed_by_scenario() {
        let state = state_with(&[("2020Q3", 1.0), ("2020Q4", 2.0)]);
        let aggregates = yearly_aggregates(&state, &ranges("2019Q4", "2030Q4"));
        let years = aggregates.get("base").expect("scenario present");
        assert_eq!(years.len(), 1);
        assert_eq!(years.get(&2020).expect("year").policy_rate, Some(2.0));
    }
}
