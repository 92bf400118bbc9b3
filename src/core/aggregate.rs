use std::collections::BTreeMap;

use crate::core::dataset::Dataset;
use crate::core::range::PeriodWindow;
use crate::core::row::Row;

/// Collapses in-range quarterly rows into one row per calendar year.
///
/// The representative row is the year's Q4 row when present, otherwise the
/// chronologically last row of that year. Averaged fields are then overridden
/// from the *last* row of the year's sorted sequence: the output gap becomes
/// the trailing 4-quarter average, both YoY inflation fields come from the
/// rolling-mean-derived values, and GDP growth fields come from the
/// annualized source column. The aggregated row's period is the bare year.
///
/// Years with zero in-range rows produce no entry. Results are transient and
/// rebuilt on every call.
#[must_use]
pub fn aggregate_to_yearly(dataset: &Dataset, window: &PeriodWindow) -> BTreeMap<i64, Row> {
    let mut by_year: BTreeMap<i64, Vec<&Row>> = BTreeMap::new();
    for row in dataset.rows() {
        let Some(period) = row.period_parsed() else {
            continue;
        };
        if !window.contains(period) {
            continue;
        }
        by_year.entry(period.year()).or_default().push(row);
    }

    let mut yearly = BTreeMap::new();
    for (year, mut rows) in by_year {
        rows.sort_by_key(|row| row.period_parsed().map(|p| p.index()));

        let representative = rows
            .iter()
            .find(|row| row.period_parsed().is_some_and(|p| p.quarter() == 4))
            .copied()
            .or_else(|| rows.last().copied());
        let Some(representative) = representative else {
            continue;
        };

        let mut aggregated = representative.clone();
        if let Some(last) = rows.last() {
            if let Some(avg) = last.avg_output_gap {
                aggregated.output_gap = Some(avg);
            }
            if let Some(headline) = last.headline_yoy_from_mean {
                aggregated.headline_yoy = Some(headline);
            }
            if let Some(core) = last.core_yoy_from_mean {
                aggregated.core_yoy = Some(core);
            }
            if let Some(annual) = last.annual_gdp_growth {
                aggregated.output_growth = Some(annual);
                aggregated.annual_gdp = Some(annual);
            }
        }
        aggregated.period = year.to_string();
        yearly.insert(year, aggregated);
    }

    yearly
}
