use serde::{Deserialize, Serialize, Serializer};

use crate::domains::Pillar;
use crate::domains::plans::Program;

/// A score, or `"N/A"` when the user has no tracking data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScoreValue {
    Score(f64),
    NotAvailable,
}

impl Serialize for ScoreValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScoreValue::Score(v) => serializer.serialize_f64(*v),
            ScoreValue::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UserScoreQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserScoreRequest {
    pub profile_id: Option<String>,
    pub programs: Vec<Program>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scores {
    pub overall: ScoreValue,
    pub sleep: ScoreValue,
    pub movement: ScoreValue,
    pub mindfulness: ScoreValue,
    pub nutrition: ScoreValue,
}

impl Scores {
    pub fn not_available() -> Self {
        Self {
            overall: ScoreValue::NotAvailable,
            sleep: ScoreValue::NotAvailable,
            movement: ScoreValue::NotAvailable,
            mindfulness: ScoreValue::NotAvailable,
            nutrition: ScoreValue::NotAvailable,
        }
    }
}

/// Weekly averages echoed back to the caller, in whole units.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawData {
    pub sleep_time: i64,
    pub sleep_quality: i64,
    pub steps: i64,
    pub exercise: i64,
    pub meal_compliance: i64,
}

fn pillar_title<S: Serializer>(pillar: &Pillar, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(pillar.title())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanSummary {
    #[serde(serialize_with = "pillar_title")]
    pub pillar: Pillar,
    pub title: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserScore {
    pub profile_id: String,
    pub scores: Scores,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_data: Option<bool>,
    pub raw_data: RawData,
    pub plan_data: Vec<PlanSummary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyScoreRequest {
    pub user_id: Option<String>,
    pub force_refresh: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegacyPillars {
    pub weight: f64,
    pub sleep: f64,
    pub movement: f64,
    pub mindfulness: f64,
    pub nutrition: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyScore {
    pub overall: f64,
    pub pillars: LegacyPillars,
    pub last_updated: String,
    pub user_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityRequest {
    pub user_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DailyActivity {
    pub date: String,
    pub steps: f64,
    pub exercise_minutes: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub success: bool,
    pub data: Vec<DailyActivity>,
    pub user_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Synced,
    AlreadySynced,
    SkippedEmpty,
    Error,
}

impl SyncStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Synced => "synced",
            SyncStatus::AlreadySynced => "already_synced",
            SyncStatus::SkippedEmpty => "skipped_empty",
            SyncStatus::Error => "error",
        }
    }
}

/// Outcome for one order in a sync pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncDetail {
    pub user_id: Option<String>,
    pub order_key: Option<String>,
    pub biomarker_count: usize,
    pub status: SyncStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub success: bool,
    pub message: String,
    pub synced_count: usize,
    pub details: Vec<SyncDetail>,
}
