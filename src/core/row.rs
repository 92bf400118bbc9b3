use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::period::Period;

/// One observed quarter of one scenario.
///
/// Every recognized column is an optional numeric value; `None` means "not
/// observed", never zero. Unrecognized CSV columns are preserved opaquely in
/// `extra` and never interpreted. Derived fields start absent and are filled
/// by the metrics engine's one-time augmentation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub period: String,

    // Raw columns.
    pub policy_rate: Option<f64>,
    pub output: Option<f64>,
    pub potential_output: Option<f64>,
    pub output_gap: Option<f64>,
    pub headline_yoy: Option<f64>,
    pub core_yoy: Option<f64>,
    pub headline_qoq: Option<f64>,
    pub core_qoq: Option<f64>,
    pub potential_growth: Option<f64>,
    pub cpi_level: Option<f64>,
    pub core_cpi_level: Option<f64>,
    pub annual_gdp_growth: Option<f64>,

    // Derived fields.
    pub output_growth: Option<f64>,
    pub annual_gdp: Option<f64>,
    pub avg_output_gap: Option<f64>,
    pub cpi_mean4: Option<f64>,
    pub core_mean4: Option<f64>,
    pub headline_yoy_from_mean: Option<f64>,
    pub core_yoy_from_mean: Option<f64>,

    /// Unrecognized columns, preserved verbatim.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, String>,
}

impl Row {
    #[must_use]
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn period_parsed(&self) -> Option<Period> {
        Period::parse(&self.period)
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::PolicyRate => self.policy_rate,
            Field::Output => self.output,
            Field::PotentialOutput => self.potential_output,
            Field::OutputGap => self.output_gap,
            Field::HeadlineYoy => self.headline_yoy,
            Field::CoreYoy => self.core_yoy,
            Field::HeadlineQoq => self.headline_qoq,
            Field::CoreQoq => self.core_qoq,
            Field::PotentialGrowth => self.potential_growth,
            Field::CpiLevel => self.cpi_level,
            Field::CoreCpiLevel => self.core_cpi_level,
            Field::AnnualGdpGrowth => self.annual_gdp_growth,
            Field::OutputGrowth => self.output_growth,
            Field::AnnualGdp => self.annual_gdp,
            Field::AvgOutputGap => self.avg_output_gap,
            Field::CpiMean4 => self.cpi_mean4,
            Field::CoreMean4 => self.core_mean4,
            Field::HeadlineYoyFromMean => self.headline_yoy_from_mean,
            Field::CoreYoyFromMean => self.core_yoy_from_mean,
        }
    }

    pub fn set(&mut self, field: Field, value: Option<f64>) {
        let slot = match field {
            Field::PolicyRate => &mut self.policy_rate,
            Field::Output => &mut self.output,
            Field::PotentialOutput => &mut self.potential_output,
            Field::OutputGap => &mut self.output_gap,
            Field::HeadlineYoy => &mut self.headline_yoy,
            Field::CoreYoy => &mut self.core_yoy,
            Field::HeadlineQoq => &mut self.headline_qoq,
            Field::CoreQoq => &mut self.core_qoq,
            Field::PotentialGrowth => &mut self.potential_growth,
            Field::CpiLevel => &mut self.cpi_level,
            Field::CoreCpiLevel => &mut self.core_cpi_level,
            Field::AnnualGdpGrowth => &mut self.annual_gdp_growth,
            Field::OutputGrowth => &mut self.output_growth,
            Field::AnnualGdp => &mut self.annual_gdp,
            Field::AvgOutputGap => &mut self.avg_output_gap,
            Field::CpiMean4 => &mut self.cpi_mean4,
            Field::CoreMean4 => &mut self.core_mean4,
            Field::HeadlineYoyFromMean => &mut self.headline_yoy_from_mean,
            Field::CoreYoyFromMean => &mut self.core_yoy_from_mean,
        };
        *slot = value;
    }
}

/// Typed identifier for every recognized series column.
///
/// Replaces string-keyed accessor closures: the column mapping is checked once
/// here (see the registry test) instead of at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    PolicyRate,
    Output,
    PotentialOutput,
    OutputGap,
    HeadlineYoy,
    CoreYoy,
    HeadlineQoq,
    CoreQoq,
    PotentialGrowth,
    CpiLevel,
    CoreCpiLevel,
    AnnualGdpGrowth,
    OutputGrowth,
    AnnualGdp,
    AvgOutputGap,
    CpiMean4,
    CoreMean4,
    HeadlineYoyFromMean,
    CoreYoyFromMean,
}

impl Field {
    pub const ALL: [Self; 19] = [
        Self::PolicyRate,
        Self::Output,
        Self::PotentialOutput,
        Self::OutputGap,
        Self::HeadlineYoy,
        Self::CoreYoy,
        Self::HeadlineQoq,
        Self::CoreQoq,
        Self::PotentialGrowth,
        Self::CpiLevel,
        Self::CoreCpiLevel,
        Self::AnnualGdpGrowth,
        Self::OutputGrowth,
        Self::AnnualGdp,
        Self::AvgOutputGap,
        Self::CpiMean4,
        Self::CoreMean4,
        Self::HeadlineYoyFromMean,
        Self::CoreYoyFromMean,
    ];

    /// CSV column name as it appears in scenario files.
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::PolicyRate => "i",
            Self::Output => "y",
            Self::PotentialOutput => "ytrnd",
            Self::OutputGap => "ygap",
            Self::HeadlineYoy => "picpi4",
            Self::CoreYoy => "pi4",
            Self::HeadlineQoq => "picpi",
            Self::CoreQoq => "pi",
            Self::PotentialGrowth => "dytrnd",
            Self::CpiLevel => "cpi_nonsa",
            Self::CoreCpiLevel => "core_nonsa",
            Self::AnnualGdpGrowth => "dyA_nonsa",
            Self::OutputGrowth => "y_growth",
            Self::AnnualGdp => "annual_GDP",
            Self::AvgOutputGap => "avg_ygap",
            Self::CpiMean4 => "cpi_ma4",
            Self::CoreMean4 => "core_ma4",
            Self::HeadlineYoyFromMean => "HL_inf",
            Self::CoreYoyFromMean => "CORE_inf",
        }
    }

    #[must_use]
    pub fn from_column(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.column_name() == name)
    }

    /// Derived fields are owned by the metrics engine; supplied values are
    /// kept only where the engine's recomputation yields nothing.
    #[must_use]
    pub const fn is_derived(self) -> bool {
        matches!(
            self,
            Self::OutputGrowth
                | Self::AnnualGdp
                | Self::AvgOutputGap
                | Self::CpiMean4
                | Self::CoreMean4
                | Self::HeadlineYoyFromMean
                | Self::CoreYoyFromMean
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, Row};

    #[test]
    fn column_registry_is_a_bijection() {
        for field in Field::ALL {
            assert_eq!(Field::from_column(field.column_name()), Some(field));
        }
        let mut names: Vec<_> = Field::ALL.iter().map(|f| f.column_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Field::ALL.len());
    }

    #[test]
    fn get_and_set_agree_for_every_field() {
        let mut row = Row::new("2024Q1");
        for (i, field) in Field::ALL.iter().enumerate() {
            row.set(*field, Some(i as f64));
        }
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(row.get(*field), Some(i as f64));
        }
    }

    #[test]
    fn absent_fields_stay_absent() {
        let row = Row::new("2024Q1");
        assert_eq!(row.get(Field::PolicyRate), None);
        assert_eq!(row.get(Field::CpiMean4), None);
    }
}
