use std::collections::BTreeMap;

use wellness_client::MetricSeries;
use wellness_client::utils::date_part;

use crate::domains::Profile;
use crate::domains::profile::daily_snapshots;
use crate::types::{DailyActivity, RawData};

/// Merge step and exercise series into one row per calendar day, sorted by
/// date. Steps follow [`daily_snapshots`], so the profile and these rows read
/// the counter the same way; exercise sessions add up. Points without a date
/// are dropped.
pub fn daily_activity(steps: &MetricSeries, exercise: &MetricSeries) -> Vec<DailyActivity> {
    let mut days: BTreeMap<String, DailyActivity> = BTreeMap::new();

    for (date, total) in daily_snapshots(steps) {
        if !date.is_empty() {
            day_row(&mut days, &date).steps = total;
        }
    }
    for point in &exercise.points {
        if let Some(date) = point.date.as_deref() {
            day_row(&mut days, date_part(date)).exercise_minutes += point.value.unwrap_or(0.0);
        }
    }

    days.into_values().collect()
}

fn day_row<'a>(days: &'a mut BTreeMap<String, DailyActivity>, date: &str) -> &'a mut DailyActivity {
    days.entry(date.to_string()).or_insert_with(|| DailyActivity {
        date: date.to_string(),
        steps: 0.0,
        exercise_minutes: 0.0,
    })
}

pub fn raw_data(profile: &Profile) -> RawData {
    RawData {
        sleep_time: profile.sleep_minutes.round() as i64,
        sleep_quality: profile.sleep_quality.unwrap_or(0.0).round() as i64,
        steps: profile.steps.round() as i64,
        exercise: profile.exercise_minutes.round() as i64,
        meal_compliance: profile.meal_compliance.round() as i64,
    }
}
