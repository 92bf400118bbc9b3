use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Dense integer encoding of one calendar quarter: `year * 4 + quarter`.
///
/// The encoding is a total bijection over the label grammar `YYYYQ[1-4]`, so
/// quarter arithmetic (lags, ordering, range checks) reduces to plain integer
/// arithmetic on the index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Period(i64);

impl Period {
    /// Parses a `YYYYQ[1-4]` label.
    ///
    /// Returns `None` for anything outside the grammar, including a zero year.
    /// Unparseable labels are never an error: callers exclude them from
    /// sequences and range filters fail open.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 6 || bytes[4] != b'Q' {
            return None;
        }
        if !bytes[..4].iter().all(u8::is_ascii_digit) {
            return None;
        }
        let year: i64 = trimmed[..4].parse().ok()?;
        let quarter = match bytes[5] {
            b'1'..=b'4' => i64::from(bytes[5] - b'0'),
            _ => return None,
        };
        if year == 0 {
            return None;
        }
        Some(Self(year * 4 + quarter))
    }

    /// Builds a period from explicit parts without going through a label.
    #[must_use]
    pub fn from_parts(year: i64, quarter: i64) -> Option<Self> {
        if year <= 0 || !(1..=4).contains(&quarter) {
            return None;
        }
        Some(Self(year * 4 + quarter))
    }

    #[must_use]
    pub fn from_index(index: i64) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn quarter(self) -> i64 {
        (self.0 - 1).rem_euclid(4) + 1
    }

    #[must_use]
    pub fn year(self) -> i64 {
        (self.0 - self.quarter()) / 4
    }

    /// Canonical `YYYYQ[1-4]` label. Inverse of [`Period::parse`] for every
    /// index whose year is representable in four digits.
    #[must_use]
    pub fn label(self) -> String {
        format!("{:04}Q{}", self.year(), self.quarter())
    }

    /// The period `quarters` before this one (`lag(4)` is the same quarter one
    /// year earlier).
    #[must_use]
    pub fn lag(self, quarters: i64) -> Self {
        Self(self.0 - quarters)
    }

    /// The calendar quarter containing the current wall-clock date.
    #[must_use]
    pub fn current() -> Self {
        let now = Utc::now();
        let quarter = i64::from(now.month0() / 3) + 1;
        Self(i64::from(now.year()) * 4 + quarter)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Range check over period labels.
///
/// Unparseable labels pass (fail open, never filters unparseable input);
/// unparseable or absent bounds leave that side open.
#[must_use]
pub fn period_in_range(label: &str, min: Option<&str>, max: Option<&str>) -> bool {
    let Some(period) = Period::parse(label) else {
        return true;
    };
    if let Some(min_period) = min.and_then(Period::parse) {
        if period.index() < min_period.index() {
            return false;
        }
    }
    if let Some(max_period) = max.and_then(Period::parse) {
        if period.index() > max_period.index() {
            return false;
        }
    }
    true
}
