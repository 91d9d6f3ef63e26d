//! GraphQL client for the health-data provider.
//!
//! This module provides a reqwest-based implementation of
//! [`HealthDataClient`](crate::HealthDataClient) and
//! [`AttributeStore`](crate::AttributeStore).

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::config::HealthDataConfig;
use crate::{
    AttributeStore, BiomarkerReport, BiomarkerUnit, ClientError, DateRange, HealthDataClient,
    MetricPoint, MetricSeries, WeightSeries,
};

/// Page size for every connection query; a week never comes close.
const PAGE_SIZE: u32 = 300;

#[derive(Clone, Debug)]
pub struct GraphqlHealthClient {
    endpoint: String,
    api_token: SecretString,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GraphqlEnvelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphqlErrorItem>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorItem {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
struct Connection<N> {
    #[serde(default)]
    edges: Vec<Edge<N>>,
}

#[derive(Debug, Deserialize)]
struct Edge<N> {
    node: N,
}

#[derive(Debug, Deserialize)]
struct ValueNode {
    date: Option<String>,
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct StepsNode {
    datetime: Option<String>,
    steps: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseNode {
    datetime: Option<String>,
    duration_minutes: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MealTracker {
    total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct MutationOutcome {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawAttribute {
    key: Option<String>,
    name: Option<String>,
    value: Option<Value>,
}

impl GraphqlHealthClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `endpoint` - Full GraphQL endpoint URL
    /// * `api_token` - Bearer token for the provider
    pub fn new(endpoint: &str, api_token: SecretString) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            api_token,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &HealthDataConfig) -> Self {
        Self::new(&config.endpoint, config.api_token.clone())
    }

    /// Execute a GraphQL document on behalf of `user_id` and return `data`.
    async fn execute(
        &self,
        query: &str,
        user_id: Option<&str>,
        variables: Value,
    ) -> Result<Value, ClientError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_token.expose_secret())
            .json(&json!({ "query": query, "variables": variables }));
        if let Some(user) = user_id {
            request = request.header("sg-user", user);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let body_snippet: String = body.chars().take(256).collect();
            return Err(ClientError::from_status(status.as_u16(), body_snippet));
        }

        let envelope: GraphqlEnvelope = resp.json().await?;
        if let Some(first) = envelope.errors.first() {
            return Err(ClientError::GraphQl(first.message.clone()));
        }
        envelope
            .data
            .ok_or_else(|| ClientError::Decode("response carried no data".into()))
    }

    /// Run a member-scoped connection query and decode `member.<field>`.
    async fn member_connection<N: DeserializeOwned>(
        &self,
        user_id: &str,
        field: &str,
        node_fields: &str,
        range: &DateRange,
    ) -> Result<Connection<N>, ClientError> {
        let query = format!(
            "query($id: ID!, $start: DateTime!, $end: DateTime!, $first: Int!) {{ \
             member(id: $id) {{ {field}(start: $start, end: $end, first: $first) {{ \
             edges {{ node {{ {node_fields} }} }} }} }} }}"
        );
        let variables = json!({
            "id": user_id,
            "start": range.start_datetime(),
            "end": range.end_datetime(),
            "first": PAGE_SIZE,
        });
        let data = self.execute(&query, Some(user_id), variables).await?;
        let conn = data
            .get("member")
            .and_then(|m| m.get(field))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("member.{field}")))?;
        decode(conn)
    }

    async fn custom_attributes(&self, user_id: &str) -> Result<Vec<RawAttribute>, ClientError> {
        let data = self
            .execute(
                "query { myProfile { id customAttributes } }",
                Some(user_id),
                Value::Null,
            )
            .await?;
        // The provider returns the attribute list as a JSON-encoded string.
        match data.get("myProfile").and_then(|p| p.get("customAttributes")) {
            Some(Value::String(s)) if !s.is_empty() => {
                serde_json::from_str(s).map_err(|e| ClientError::Decode(e.to_string()))
            }
            Some(Value::Array(_)) => decode(data["myProfile"]["customAttributes"].clone()),
            _ => Ok(Vec::new()),
        }
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

fn value_series(conn: Connection<ValueNode>) -> MetricSeries {
    MetricSeries::new(
        conn.edges
            .into_iter()
            .map(|e| MetricPoint {
                date: e.node.date,
                value: e.node.value,
            })
            .collect(),
    )
}

#[async_trait]
impl HealthDataClient for GraphqlHealthClient {
    async fn get_sleep_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        let conn = self
            .member_connection::<ValueNode>(user_id, "sleepTimes", "date value", range)
            .await?;
        Ok(value_series(conn))
    }

    async fn get_sleep_quality_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        let conn = self
            .member_connection::<ValueNode>(user_id, "sleepQualityScores", "date value", range)
            .await?;
        Ok(value_series(conn))
    }

    async fn get_steps_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        let conn = self
            .member_connection::<StepsNode>(user_id, "stepsCounter", "datetime steps", range)
            .await?;
        Ok(MetricSeries::new(
            conn.edges
                .into_iter()
                .map(|e| MetricPoint {
                    date: e.node.datetime,
                    value: e.node.steps,
                })
                .collect(),
        ))
    }

    async fn get_exercise_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        let conn = self
            .member_connection::<ExerciseNode>(
                user_id,
                "exerciseTracker",
                "datetime durationMinutes",
                range,
            )
            .await?;
        Ok(MetricSeries::new(
            conn.edges
                .into_iter()
                .map(|e| MetricPoint {
                    date: e.node.datetime,
                    value: e.node.duration_minutes,
                })
                .collect(),
        ))
    }

    async fn get_meals_logged(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<u32, ClientError> {
        let query = "query($id: ID!, $start: DateTime!, $end: DateTime!) { \
                     member(id: $id) { mealTracker(start: $start, end: $end) { totalCount } } }";
        let variables = json!({
            "id": user_id,
            "start": range.start_datetime(),
            "end": range.end_datetime(),
        });
        let data = self.execute(query, Some(user_id), variables).await?;
        let tracker = data
            .get("member")
            .and_then(|m| m.get("mealTracker"))
            .cloned()
            .unwrap_or(Value::Null);
        if tracker.is_null() {
            return Ok(0);
        }
        let tracker: MealTracker = decode(tracker)?;
        Ok(tracker.total_count.unwrap_or(0))
    }

    async fn get_weight_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<WeightSeries, ClientError> {
        let query = "query($start: Date!, $end: Date!) { \
                     weightTracker(startDate: $start, endDate: $end, source: SUGGESTIC) { \
                     entries { date value } tendency { type difference } } }";
        let variables = json!({ "start": range.start_date(), "end": range.end_date() });
        let data = self.execute(query, Some(user_id), variables).await?;
        match data.get("weightTracker") {
            Some(v) if !v.is_null() => decode(v.clone()),
            _ => Ok(WeightSeries::default()),
        }
    }

    async fn add_biomarker_results(
        &self,
        user_id: &str,
        report: &BiomarkerReport,
    ) -> Result<bool, ClientError> {
        let query = "mutation AddBiomarkerResults($input: AddBiomarkerResultsInput!) { \
                     addBiomarkerResults(input: $input) { success message } }";
        let variables = json!({ "input": report });
        let data = self.execute(query, Some(user_id), variables).await?;
        let outcome: MutationOutcome = decode(data["addBiomarkerResults"].clone())?;
        if !outcome.success {
            tracing::warn!(
                report_id = %report.lab_test_report_id,
                message = ?outcome.message,
                "biomarker mutation reported failure"
            );
        }
        Ok(outcome.success)
    }

    async fn get_biomarker_units(&self) -> Result<Vec<BiomarkerUnit>, ClientError> {
        let data = self
            .execute(
                "query { biomarkerUnits { edges { node { id name } } } }",
                None,
                Value::Null,
            )
            .await?;
        let conn: Connection<BiomarkerUnit> = decode(data["biomarkerUnits"].clone())?;
        Ok(conn.edges.into_iter().map(|e| e.node).collect())
    }
}

#[async_trait]
impl AttributeStore for GraphqlHealthClient {
    async fn get_attribute(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<Option<String>, ClientError> {
        let attrs = self.custom_attributes(user_id).await?;
        let found = attrs.into_iter().find(|a| {
            a.key.as_deref() == Some(name) || a.name.as_deref() == Some(name)
        });
        Ok(found.and_then(|a| match a.value {
            Some(Value::String(s)) => Some(s),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }))
    }

    async fn set_attribute(
        &self,
        user_id: &str,
        name: &str,
        value: &str,
        category: Option<&str>,
    ) -> Result<bool, ClientError> {
        let query = "mutation SetCustomAttribute($attributes: [ProfileCustomAttribute!]!) { \
                     createProfileCustomAttributes(append: true, attributes: $attributes) { \
                     success errors { field messages } } }";
        let mut attribute = json!({ "name": name, "dataType": "STRING", "value": value });
        if let Some(c) = category {
            attribute["category"] = Value::String(c.to_string());
        }
        let variables = json!({ "attributes": [attribute] });
        let data = self.execute(query, Some(user_id), variables).await?;
        let outcome: MutationOutcome = decode(data["createProfileCustomAttributes"].clone())?;
        if !outcome.errors.is_empty() {
            tracing::error!(attribute = name, errors = ?outcome.errors, "error setting custom attribute");
            return Ok(false);
        }
        Ok(outcome.success)
    }
}
