pub mod aggregate;
pub mod axis;
pub mod dataset;
pub mod derive;
pub mod period;
pub mod projection;
pub mod range;
pub mod row;
pub mod series;

pub use aggregate::aggregate_to_yearly;
pub use axis::{AxisPlan, AxisTick, TickMode};
pub use dataset::Dataset;
pub use derive::augment_with_derived_metrics;
pub use period::{period_in_range, Period};
pub use projection::{
    project, shade_region, ProjectedPoint, ProjectedSeries, ProjectionFrame, SeriesInput,
    SeriesKind, ShadeRegion,
};
pub use range::{PeriodWindow, RangeConfig};
pub use row::{Field, Row};
pub use series::{extract, log_level, quarter_point_steps, SeriesPoint};
