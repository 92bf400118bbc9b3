use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::period::Period;
use crate::core::row::Row;

/// Ordered rows for one scenario, unique by period.
///
/// Duplicate period labels within one file have no principled precedence in
/// the source data; the policy here is explicit: the later observation wins
/// and the displaced row is logged. Rows with unparseable periods are kept
/// (they are excluded later at extraction time) so a few malformed labels
/// never reject a whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let original_count = rows.len();
        let mut canonical: Vec<Row> = Vec::with_capacity(rows.len());

        for row in rows {
            if row.period.trim().is_empty() {
                continue;
            }
            let duplicate_of = Period::parse(&row.period).and_then(|period| {
                canonical
                    .iter()
                    .position(|existing| existing.period_parsed() == Some(period))
            });
            if let Some(pos) = duplicate_of {
                warn!(period = %row.period, "duplicate period label, keeping later row");
                canonical.remove(pos);
            }
            canonical.push(row);
        }

        debug!(
            original_count,
            canonical_count = canonical.len(),
            "canonicalized scenario rows"
        );
        Self { rows: canonical }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row lookup by exact period.
    #[must_use]
    pub fn row_at(&self, period: Period) -> Option<&Row> {
        self.rows
            .iter()
            .find(|row| row.period_parsed() == Some(period))
    }

    /// Sorts rows ascending by period index; unparseable periods sink to the
    /// end in their original relative order.
    pub fn sort_by_period(&mut self) {
        self.rows.sort_by_key(|row| {
            row.period_parsed()
                .map_or((1u8, 0), |period| (0u8, period.index()))
        });
    }

    /// All parseable periods in row order.
    #[must_use]
    pub fn periods(&self) -> Vec<Period> {
        self.rows
            .iter()
            .filter_map(Row::period_parsed)
            .collect()
    }
}
