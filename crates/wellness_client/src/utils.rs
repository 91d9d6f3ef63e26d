//! Date range helpers shared by the provider queries.

use chrono::{Duration, NaiveDate, Utc};

/// Inclusive calendar range used by every metric query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The `days` days leading up to and including today (UTC).
    pub fn last_days(days: i64) -> Self {
        let end = Utc::now().date_naive();
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    /// Parse a pair of optional `YYYY-MM-DD` strings, defaulting either side to
    /// the trailing `default_days` window.
    pub fn from_optional(start: Option<&str>, end: Option<&str>, default_days: i64) -> Option<Self> {
        let fallback = Self::last_days(default_days);
        let start = match start {
            Some(s) => parse_date(s)?,
            None => fallback.start,
        };
        let end = match end {
            Some(s) => parse_date(s)?,
            None => fallback.end,
        };
        Some(Self { start, end })
    }

    /// Number of days spanned, as the expected-meal calculation counts them.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().max(0)
    }

    pub fn start_date(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    pub fn start_datetime(&self) -> String {
        format!("{}T00:00:00Z", self.start_date())
    }

    pub fn end_datetime(&self) -> String {
        format!("{}T23:59:59Z", self.end_date())
    }
}

/// Parse a date, accepting a bare `YYYY-MM-DD` or an RFC3339 datetime.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    None
}

/// Extract the `YYYY-MM-DD` prefix of a provider datetime.
pub fn date_part(s: &str) -> &str {
    s.split('T').next().unwrap_or(s)
}
