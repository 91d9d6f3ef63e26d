//! Typed clients for the health-data (GraphQL) and lab-scheduling (REST) providers.
//!
//! Every external call sits behind an async trait so the scoring and ingestion
//! code in `wellness_service` can be exercised against in-memory mocks.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod auth;
pub mod config;
pub mod http_client;
pub mod lab;
pub mod units;
pub mod utils;

pub use utils::DateRange;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("authentication error: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("api error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("graphql error: {0}")]
    GraphQl(String),
    #[error("decode error: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            404 => ClientError::NotFound(body),
            401 | 403 => ClientError::Auth(body),
            _ => ClientError::Api { status, body },
        }
    }
}

/// A single dated observation. `value` is `None` when the provider reported
/// the day but no reading.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct MetricPoint {
    pub date: Option<String>,
    pub value: Option<f64>,
}

impl MetricPoint {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: Some(date.into()),
            value: Some(value),
        }
    }
}

/// Ordered observations for one signal over the requested range.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct MetricSeries {
    pub points: Vec<MetricPoint>,
}

impl MetricSeries {
    pub fn new(points: Vec<MetricPoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TendencyKind {
    Up,
    Down,
    Stable,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Tendency {
    #[serde(rename = "type")]
    pub kind: TendencyKind,
    pub difference: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct WeightEntry {
    pub date: Option<String>,
    pub value: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct WeightSeries {
    #[serde(default)]
    pub entries: Vec<WeightEntry>,
    pub tendency: Option<Tendency>,
}

/// Measured value plus the unit the lab reported it in.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BiomarkerValue {
    pub value: f64,
    pub unit: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerInput {
    pub biomarker_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biomarker_unit_id: Option<String>,
    pub result: BiomarkerValue,
    pub date: Option<String>,
    pub alert: bool,
    pub alert_text: Option<String>,
    pub display_value: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerReport {
    pub lab_test_report_id: String,
    pub biomarkers: Vec<BiomarkerInput>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct BiomarkerUnit {
    pub id: String,
    pub name: String,
}

/// Read side of the health-data provider plus biomarker ingestion.
#[async_trait]
pub trait HealthDataClient: Send + Sync + 'static {
    /// Nightly sleep duration in minutes.
    async fn get_sleep_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError>;

    /// Nightly sleep quality on a 0-100 scale.
    async fn get_sleep_quality_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError>;

    /// Step counts; each point carries the provider's datetime.
    async fn get_steps_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError>;

    /// Exercise sessions in minutes; a day may have several.
    async fn get_exercise_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError>;

    async fn get_meals_logged(&self, user_id: &str, range: &DateRange)
    -> Result<u32, ClientError>;

    async fn get_weight_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<WeightSeries, ClientError>;

    async fn add_biomarker_results(
        &self,
        user_id: &str,
        report: &BiomarkerReport,
    ) -> Result<bool, ClientError>;

    async fn get_biomarker_units(&self) -> Result<Vec<BiomarkerUnit>, ClientError>;
}

/// Per-user string attributes kept by the provider. Values are opaque strings,
/// usually JSON.
#[async_trait]
pub trait AttributeStore: Send + Sync + 'static {
    async fn get_attribute(&self, user_id: &str, name: &str)
    -> Result<Option<String>, ClientError>;

    async fn set_attribute(
        &self,
        user_id: &str,
        name: &str,
        value: &str,
        category: Option<&str>,
    ) -> Result<bool, ClientError>;
}

/// Accept either a JSON string or a number and keep it as a string.
pub(crate) fn deserialize_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string().into()),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
