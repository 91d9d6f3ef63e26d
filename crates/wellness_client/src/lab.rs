//! Lab-scheduling provider: result batches and the OAuth-authenticated client.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tokio::sync::RwLock;

use crate::auth::{TOKEN_TTL, TokenCache};
use crate::config::LabConfig;
use crate::{ClientError, deserialize_opt_string};

/// One measured row inside a lab result.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResultRow {
    #[serde(rename = "Test_Name", default, deserialize_with = "deserialize_opt_string")]
    pub test_name: Option<String>,
    #[serde(rename = "Parent_Result", default, deserialize_with = "deserialize_opt_string")]
    pub parent_result: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub value: Option<String>,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(rename = "Reference_Range", default)]
    pub reference_range: Option<String>,
    #[serde(rename = "Abnormal_Flag", default)]
    pub abnormal_flag: Option<String>,
    #[serde(rename = "Observation_Result_Status", default)]
    pub observation_status: Option<String>,
    #[serde(rename = "Order_Status", default)]
    pub order_status: Option<String>,
    #[serde(rename = "Collection_Date_Time", default)]
    pub collection_date_time: Option<String>,
    #[serde(rename = "Result_Date_Time", default)]
    pub result_date_time: Option<String>,
    #[serde(rename = "Sending_Facility", default)]
    pub sending_facility: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct LabResult {
    #[serde(rename = "Notes", default)]
    pub notes: Vec<Value>,
    #[serde(rename = "Result_Data", default)]
    pub rows: Vec<ResultRow>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct LabOrder {
    #[serde(rename = "Order_Key", deserialize_with = "deserialize_opt_string", default)]
    pub order_key: Option<String>,
    #[serde(rename = "Notes", default)]
    pub notes: Vec<Value>,
    #[serde(rename = "PDFs", default)]
    pub pdfs: Vec<Value>,
    #[serde(rename = "Results", default)]
    pub results: Vec<LabResult>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct LabPatient {
    #[serde(rename = "Patient_Id", deserialize_with = "deserialize_opt_string", default)]
    pub patient_id: Option<String>,
    #[serde(rename = "Notes", default)]
    pub notes: Vec<Value>,
    #[serde(rename = "Orders", default)]
    pub orders: Vec<LabOrder>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct LabResultsBatch {
    #[serde(rename = "hasResults", default)]
    pub has_results: bool,
    #[serde(rename = "data", default)]
    pub patients: Vec<LabPatient>,
}

#[async_trait]
pub trait LabResultsClient: Send + Sync + 'static {
    /// Retrieve every pending result batch.
    async fn get_results(&self) -> Result<LabResultsBatch, ClientError>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    instance_url: Option<String>,
}

/// REST client for the lab provider. Tokens are cached for the lifetime of
/// the client; construct it once per process and share it.
pub struct ReqwestLabClient {
    config: LabConfig,
    instance_host: RwLock<String>,
    token: TokenCache,
    scheme: String,
    client: reqwest::Client,
}

impl ReqwestLabClient {
    pub fn new(config: LabConfig) -> Self {
        Self::with_scheme(config, "https")
    }

    /// Build a client that talks plain `scheme://` to the configured hosts.
    pub fn with_scheme(config: LabConfig, scheme: &str) -> Self {
        let instance_host = RwLock::new(config.instance_url.clone());
        Self {
            config,
            instance_host,
            token: TokenCache::new(),
            scheme: scheme.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Return the cached token or run the password grant.
    pub async fn authenticate(&self) -> Result<SecretString, ClientError> {
        if let Some(token) = self.token.get().await {
            tracing::debug!("using cached lab token");
            return Ok(token);
        }

        tracing::info!(base = %self.config.base_url, "authenticating with lab provider");
        let url = format!(
            "{}://{}/services/oauth2/token",
            self.scheme, self.config.base_url
        );
        let params = [
            ("grant_type", "password"),
            ("client_id", self.config.consumer_key.as_str()),
            ("client_secret", self.config.consumer_secret.expose_secret()),
            ("username", self.config.username.as_str()),
            ("password", self.config.password.expose_secret()),
        ];
        let resp = self
            .client
            .post(&url)
            .query(&params)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Auth(format!("{status} - {body}")));
        }
        let body: TokenResponse = resp.json().await?;

        if let Some(instance) = body.instance_url {
            let host = instance
                .trim_start_matches("https://")
                .trim_start_matches("http://")
                .trim_end_matches('/')
                .to_string();
            *self.instance_host.write().await = host;
        }

        let token = SecretString::new(body.access_token.into());
        self.token
            .store(SecretString::new(token.expose_secret().into()), TOKEN_TTL)
            .await;
        Ok(token)
    }

    /// POST an authenticated call to a scheduling endpoint.
    async fn api_call(&self, endpoint: &str, body: &Value) -> Result<Value, ClientError> {
        let token = self.authenticate().await?;
        let host = self.instance_host.read().await.clone();
        let url = format!(
            "{}://{}/services/apexrest/PSCScheduling/{}",
            self.scheme, host, endpoint
        );
        tracing::debug!(%endpoint, "lab api call");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(token.expose_secret())
            .json(body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            if status.as_u16() == 401 {
                self.token.clear().await;
            }
            return Err(ClientError::from_status(status.as_u16(), text));
        }
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl LabResultsClient for ReqwestLabClient {
    async fn get_results(&self) -> Result<LabResultsBatch, ClientError> {
        let payload = json!({
            "Partner_Id": self.config.partner_id,
            "Activity_Id": self.config.activity_id,
        });
        let value = self.api_call("Results/v1", &payload).await?;
        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }
}
