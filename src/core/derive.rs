use std::collections::HashMap;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::dataset::Dataset;
use crate::core::row::{Field, Row};

const WINDOW: usize = 4;

/// One-time augmentation pass computing derived metrics in place.
///
/// Two passes over the rows sorted by period index:
/// 1. year-over-year output growth (exact 4-quarter lag), Q4 capture of the
///    annualized GDP column, and 4-quarter rolling means of the output gap and
///    both CPI levels;
/// 2. year-over-year inflation from the 4-quarter-lagged rolling means.
///
/// Guards are keep-existing-if-new-is-absent: a recomputation overwrites a
/// derived field only when it yields a number, so re-running the pass on
/// already-derived rows is idempotent.
pub fn augment_with_derived_metrics(dataset: &mut Dataset) {
    let rows = dataset.rows_mut();

    let mut order: Vec<(i64, usize)> = rows
        .iter()
        .enumerate()
        .filter_map(|(pos, row)| row.period_parsed().map(|p| (p.index(), pos)))
        .collect();
    order.sort_by_key(|&(index, _)| index);
    if order.is_empty() {
        return;
    }

    // Later duplicates overwrite earlier ones, matching the dataset policy.
    let position_by_index: HashMap<i64, usize> = order.iter().copied().collect();

    // Pass 1: same-field lags and trailing windows.
    for (i, &(index, pos)) in order.iter().enumerate() {
        let lagged_pos = position_by_index.get(&(index - WINDOW as i64)).copied();

        let output_now = rows[pos].output.filter(|v| v.is_finite());
        let output_lag = lagged_pos
            .and_then(|p| rows[p].output)
            .filter(|v| v.is_finite());
        if let (Some(now), Some(lag)) = (output_now, output_lag) {
            if lag != 0.0 {
                rows[pos].output_growth = Some((now / lag - 1.0) * 100.0);
            }
        }

        let is_q4 = rows[pos].period_parsed().is_some_and(|p| p.quarter() == 4);
        if is_q4 {
            if let Some(annual) = rows[pos].annual_gdp_growth.filter(|v| v.is_finite()) {
                rows[pos].annual_gdp = Some(annual);
            }
        }

        if let Some(mean) = rolling_mean(rows, &order, i, Field::OutputGap) {
            rows[pos].avg_output_gap = Some(mean);
        }
        if let Some(mean) = rolling_mean(rows, &order, i, Field::CpiLevel) {
            rows[pos].cpi_mean4 = Some(mean);
        }
        if let Some(mean) = rolling_mean(rows, &order, i, Field::CoreCpiLevel) {
            rows[pos].core_mean4 = Some(mean);
        }
    }

    // Pass 2: year-over-year inflation from the lagged rolling means.
    for &(index, pos) in &order {
        let lagged_pos = position_by_index.get(&(index - WINDOW as i64)).copied();

        if let Some(value) = yoy_from_means(rows, pos, lagged_pos, Field::CpiMean4) {
            rows[pos].headline_yoy_from_mean = Some(value);
        }
        if let Some(value) = yoy_from_means(rows, pos, lagged_pos, Field::CoreMean4) {
            rows[pos].core_yoy_from_mean = Some(value);
        }
    }

    debug!(rows = order.len(), "augmented scenario rows with derived metrics");
}

/// Mean of `field` over the trailing 4 sorted rows ending at `i`.
///
/// Absent unless at least 3 sorted rows precede `i` and all 4 window values
/// are finite numbers.
fn rolling_mean(rows: &[Row], order: &[(i64, usize)], i: usize, field: Field) -> Option<f64> {
    if i + 1 < WINDOW {
        return None;
    }
    let mut window: SmallVec<[f64; WINDOW]> = SmallVec::new();
    for &(_, pos) in &order[i + 1 - WINDOW..=i] {
        let value = rows[pos].get(field).filter(|v| v.is_finite())?;
        window.push(value);
    }
    Some(window.iter().sum::<f64>() / WINDOW as f64)
}

fn yoy_from_means(
    rows: &[Row],
    pos: usize,
    lagged_pos: Option<usize>,
    field: Field,
) -> Option<f64> {
    let now = rows[pos].get(field).filter(|v| v.is_finite())?;
    let lag = lagged_pos
        .and_then(|p| rows[p].get(field))
        .filter(|v| v.is_finite())?;
    if lag == 0.0 {
        return None;
    }
    Some((now / lag - 1.0) * 100.0)
}
