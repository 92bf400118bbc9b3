//! Session-level orchestration: scenario state, file loading, and the
//! chart/table assembly that drives both rendering surfaces.

mod charts;
mod engine;
mod loader;
mod state;
mod summary;

pub use charts::ChartId;
pub use engine::{axis_plan, project_chart, row_at, yearly_aggregates, ChartProjection};
pub use loader::{dataset_from_path, dataset_from_reader};
pub use state::{
    scenario_label_from_file_name, DashboardState, Scenario, DEFAULT_COLOR_CYCLE, MAX_SCENARIOS,
};
pub use summary::{build_summary_table, SummaryTable, TableFrequency, TableVar};
