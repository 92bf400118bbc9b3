use serde::{Deserialize, Serialize};

use crate::core::dataset::Dataset;
use crate::core::period::Period;
use crate::core::range::PeriodWindow;
use crate::core::row::Field;

/// One observation of an extracted series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub period: Period,
    pub value: f64,
}

/// Extracts an ordered `(period, value)` sequence for one field.
///
/// A row contributes iff its period is representable, the window accepts it,
/// and the field value is a finite number. Dataset row order is preserved;
/// callers needing temporal order supply pre-sorted datasets.
#[must_use]
pub fn extract(dataset: &Dataset, field: Field, window: &PeriodWindow) -> Vec<SeriesPoint> {
    dataset
        .rows()
        .iter()
        .filter_map(|row| {
            let period = row.period_parsed()?;
            if !window.contains(period) {
                return None;
            }
            let value = row.get(field)?;
            if !value.is_finite() {
                return None;
            }
            Some(SeriesPoint { period, value })
        })
        .collect()
}

/// Log-level transform used for the output-levels chart: `ln(v) * 100`.
///
/// Non-positive observations have no log level and are dropped.
#[must_use]
pub fn log_level(points: &[SeriesPoint]) -> Vec<SeriesPoint> {
    points
        .iter()
        .filter(|point| point.value > 0.0)
        .map(|point| SeriesPoint {
            period: point.period,
            value: point.value.ln() * 100.0,
        })
        .collect()
}

/// Snaps each value to the nearest 0.25 increment (policy-rate step chart).
#[must_use]
pub fn quarter_point_steps(points: &[SeriesPoint]) -> Vec<SeriesPoint> {
    points
        .iter()
        .map(|point| SeriesPoint {
            period: point.period,
            value: (point.value / 0.25).round() * 0.25,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{extract, log_level, quarter_point_steps, SeriesPoint};
    use crate::core::dataset::Dataset;
    use crate::core::period::Period;
    use crate::core::range::PeriodWindow;
    use crate::core::row::{Field, Row};

    fn point(label: &str, value: f64) -> SeriesPoint {
        SeriesPoint {
            period: Period::parse(label).expect("valid label"),
            value,
        }
    }

    #[test]
    fn extract_skips_absent_and_out_of_window_rows() {
        let dataset = Dataset::from_rows(vec![
            Row {
                policy_rate: Some(1.5),
                ..Row::new("2020Q1")
            },
            Row::new("2020Q2"),
            Row {
                policy_rate: Some(f64::NAN),
                ..Row::new("2020Q3")
            },
            Row {
                policy_rate: Some(2.0),
                ..Row::new("2021Q1")
            },
        ]);
        let window = PeriodWindow::from_labels("2020Q1", "2020Q4");
        let series = extract(&dataset, Field::PolicyRate, &window);
        assert_eq!(series, vec![point("2020Q1", 1.5)]);
    }

    #[test]
    fn extract_preserves_dataset_row_order() {
        let dataset = Dataset::from_rows(vec![
            Row {
                policy_rate: Some(2.0),
                ..Row::new("2021Q1")
            },
            Row {
                policy_rate: Some(1.0),
                ..Row::new("2020Q1")
            },
        ]);
        let series = extract(&dataset, Field::PolicyRate, &PeriodWindow::open());
        let labels: Vec<_> = series.iter().map(|p| p.period.label()).collect();
        assert_eq!(labels, vec!["2021Q1", "2020Q1"]);
    }

    #[test]
    fn log_level_drops_non_positive_values() {
        let series = vec![point("2020Q1", 100.0), point("2020Q2", 0.0), point("2020Q3", -3.0)];
        let transformed = log_level(&series);
        assert_eq!(transformed.len(), 1);
        assert!((transformed[0].value - 100.0f64.ln() * 100.0).abs() < 1e-12);
    }

    #[test]
    fn quarter_point_steps_round_to_nearest_increment() {
        let series = vec![point("2020Q1", 1.13), point("2020Q2", 1.12)];
        let stepped = quarter_point_steps(&series);
        assert_eq!(stepped[0].value, 1.25);
        assert_eq!(stepped[1].value, 1.0);
    }
}
