use serde::{Deserialize, Serialize};

use crate::api::state::Scenario;
use crate::core::projection::{SeriesInput, SeriesKind};
use crate::core::range::PeriodWindow;
use crate::core::row::Field;
use crate::core::series::{extract, log_level, quarter_point_steps};

/// The fixed chart catalog, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartId {
    PolicyRate,
    PolicyRateStep,
    OutputGap,
    OutputLevels,
    HeadlineYoy,
    CoreYoy,
    HeadlineQoq,
    CoreQoq,
    PotentialGrowth,
}

impl ChartId {
    pub const ALL: [ChartId; 9] = [
        ChartId::PolicyRate,
        ChartId::PolicyRateStep,
        ChartId::OutputGap,
        ChartId::OutputLevels,
        ChartId::HeadlineYoy,
        ChartId::CoreYoy,
        ChartId::HeadlineQoq,
        ChartId::CoreQoq,
        ChartId::PotentialGrowth,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ChartId::PolicyRate => "Policy Rate (%)",
            ChartId::PolicyRateStep => "Policy Rate (%, in 0.25 increments)",
            ChartId::OutputGap => "Output Gap (%)",
            ChartId::OutputLevels => "Output & Potential Output",
            ChartId::HeadlineYoy => "Headline Inflation (%YoY)",
            ChartId::CoreYoy => "Core Inflation (%YoY)",
            ChartId::HeadlineQoq => "Headline Inflation (%QoQ Ann.)",
            ChartId::CoreQoq => "Core Inflation (%QoQ Ann.)",
            ChartId::PotentialGrowth => "Ann. Potential Growth (%)",
        }
    }

    #[must_use]
    pub fn y_label(self) -> &'static str {
        match self {
            ChartId::OutputLevels => "Level (ln x 100)",
            _ => "Percent",
        }
    }

    /// Charts whose every series is drawn dashed, independent of kind.
    #[must_use]
    pub fn dashed(self) -> bool {
        matches!(self, ChartId::PolicyRateStep)
    }

    /// Builds this chart's series for one scenario.
    ///
    /// Most charts contribute a single primary series; the output-levels
    /// chart pairs the actual level with its dashed potential trend, both on
    /// the log-level scale.
    #[must_use]
    pub fn build_series(self, scenario: &Scenario, window: &PeriodWindow) -> Vec<SeriesInput> {
        let primary = |field: Field| extract(&scenario.dataset, field, window);
        match self {
            ChartId::PolicyRate => vec![SeriesInput {
                name: scenario.name.clone(),
                kind: SeriesKind::Primary,
                points: primary(Field::PolicyRate),
            }],
            ChartId::PolicyRateStep => vec![SeriesInput {
                name: scenario.name.clone(),
                kind: SeriesKind::Primary,
                points: quarter_point_steps(&primary(Field::PolicyRate)),
            }],
            ChartId::OutputGap => vec![SeriesInput {
                name: scenario.name.clone(),
                kind: SeriesKind::Primary,
                points: primary(Field::OutputGap),
            }],
            ChartId::OutputLevels => vec![
                SeriesInput {
                    name: format!("{} Output", scenario.name),
                    kind: SeriesKind::Primary,
                    points: log_level(&primary(Field::Output)),
                },
                SeriesInput {
                    name: format!("{} Potential", scenario.name),
                    kind: SeriesKind::Trend,
                    points: log_level(&primary(Field::PotentialOutput)),
                },
            ],
            ChartId::HeadlineYoy => vec![SeriesInput {
                name: scenario.name.clone(),
                kind: SeriesKind::Primary,
                points: primary(Field::HeadlineYoy),
            }],
            ChartId::CoreYoy => vec![SeriesInput {
                name: scenario.name.clone(),
                kind: SeriesKind::Primary,
                points: primary(Field::CoreYoy),
            }],
            ChartId::HeadlineQoq => vec![SeriesInput {
                name: scenario.name.clone(),
                kind: SeriesKind::Primary,
                points: primary(Field::HeadlineQoq),
            }],
            ChartId::CoreQoq => vec![SeriesInput {
                name: scenario.name.clone(),
                kind: SeriesKind::Primary,
                points: primary(Field::CoreQoq),
            }],
            ChartId::PotentialGrowth => vec![SeriesInput {
                name: scenario.name.clone(),
                kind: SeriesKind::Primary,
                points: primary(Field::PotentialGrowth),
            }],
        }
    }
}
