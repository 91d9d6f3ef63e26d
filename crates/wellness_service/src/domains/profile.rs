//! Weekly profile built from the raw provider series.

use std::collections::BTreeMap;

use serde::Serialize;
use wellness_client::MetricSeries;
use wellness_client::utils::date_part;

/// Meals expected per day when computing compliance.
pub const MEALS_PER_DAY: f64 = 3.0;

/// Averages over the scoring window. Every field is rounded to whole units.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub sleep_minutes: f64,
    /// `None` when the provider had no quality readings, or they averaged 0.
    pub sleep_quality: Option<f64>,
    pub steps: f64,
    pub exercise_minutes: f64,
    pub meal_compliance: f64,
}

/// Raw signals feeding [`Profile::build`].
#[derive(Clone, Debug, Default)]
pub struct Signals {
    pub sleep: MetricSeries,
    pub sleep_quality: MetricSeries,
    pub steps: MetricSeries,
    pub exercise: MetricSeries,
    pub meals_logged: u32,
    pub days: i64,
}

impl Profile {
    pub fn build(signals: &Signals) -> Self {
        let quality = average(&signals.sleep_quality).round();
        Self {
            sleep_minutes: average(&signals.sleep).round(),
            sleep_quality: (quality > 0.0).then_some(quality),
            steps: average_daily_snapshot(&signals.steps).round(),
            exercise_minutes: average_daily_total(&signals.exercise).round(),
            meal_compliance: meal_compliance(signals.meals_logged, signals.days).round(),
        }
    }

    /// True when any signal carries a reading at all.
    pub fn has_tracking_data(&self) -> bool {
        self.sleep_minutes > 0.0
            || self.steps > 0.0
            || self.exercise_minutes > 0.0
            || self.meal_compliance > 0.0
    }
}

/// Mean over every observation; a missing reading counts as 0.
pub fn average(series: &MetricSeries) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let total: f64 = series.points.iter().map(|p| p.value.unwrap_or(0.0)).sum();
    total / series.len() as f64
}

/// Sum each calendar day's readings, keyed by `YYYY-MM-DD`. Points without a
/// date share the empty key.
pub fn daily_totals(series: &MetricSeries) -> BTreeMap<String, f64> {
    let mut days = BTreeMap::new();
    for point in &series.points {
        let day = point.date.as_deref().map(date_part).unwrap_or_default();
        *days.entry(day.to_string()).or_insert(0.0) += point.value.unwrap_or(0.0);
    }
    days
}

/// Mean of the per-day totals; several sessions on one day add up.
pub fn average_daily_total(series: &MetricSeries) -> f64 {
    let days = daily_totals(series);
    if days.is_empty() {
        return 0.0;
    }
    days.values().sum::<f64>() / days.len() as f64
}

/// Last reading of each calendar day, keyed like [`daily_totals`]. Step
/// counters report a running total, so a later reading supersedes earlier
/// ones.
pub fn daily_snapshots(series: &MetricSeries) -> BTreeMap<String, f64> {
    let mut days = BTreeMap::new();
    for point in &series.points {
        let day = point.date.as_deref().map(date_part).unwrap_or_default();
        days.insert(day.to_string(), point.value.unwrap_or(0.0));
    }
    days
}

/// Mean of the per-day snapshots.
pub fn average_daily_snapshot(series: &MetricSeries) -> f64 {
    let days = daily_snapshots(series);
    if days.is_empty() {
        return 0.0;
    }
    days.values().sum::<f64>() / days.len() as f64
}

/// Logged meals as a percentage of `days * 3`, capped at 100.
pub fn meal_compliance(logged: u32, days: i64) -> f64 {
    if days <= 0 {
        return 0.0;
    }
    let expected = days as f64 * MEALS_PER_DAY;
    (f64::from(logged) / expected * 100.0).min(100.0)
}
