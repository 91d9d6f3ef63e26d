use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use wellness_client::config::{HealthDataConfig, LabConfig};
use wellness_client::http_client::GraphqlHealthClient;
use wellness_client::lab::ReqwestLabClient;
use wellness_client::units::UnitCatalog;
use wellness_client::{AttributeStore, ClientError, HealthDataClient};

use crate::config::ServiceSettings;
use crate::error::{ServiceError, ServiceResult};
use crate::middleware::LoggingMiddleware;
use crate::services::{LabSyncService, ScoreService};

/// Shared state behind every route. A service is `None` when its provider
/// credentials were missing at startup; its routes then answer 500.
pub struct AppState {
    pub settings: ServiceSettings,
    pub scores: Option<ScoreService>,
    pub lab_sync: Option<LabSyncService>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(settings: ServiceSettings) -> Self {
        Self {
            settings,
            scores: None,
            lab_sync: None,
            metrics: None,
        }
    }

    /// Build the provider clients from the environment. Missing credentials
    /// leave the dependent service unset and are logged, not fatal.
    pub fn from_env(settings: ServiceSettings) -> Self {
        let health = match HealthDataConfig::from_env() {
            Ok(config) => Arc::new(LoggingMiddleware::new(GraphqlHealthClient::from_config(&config))),
            Err(e) => {
                tracing::warn!(error = %e, "health data provider not configured; score and sync routes disabled");
                return Self::new(settings);
            }
        };
        let health_client: Arc<dyn HealthDataClient> = health.clone();
        let attributes: Arc<dyn AttributeStore> = health;

        let scores = ScoreService::new(health_client.clone(), settings.plan_dir.clone());
        let state = Self::new(settings).with_scores(scores);

        match LabConfig::from_env() {
            Ok(config) => state.with_lab_sync(LabSyncService::new(
                Arc::new(ReqwestLabClient::new(config)),
                health_client,
                attributes,
                Arc::new(UnitCatalog::new()),
            )),
            Err(e) => {
                tracing::warn!(error = %e, "lab provider not configured; sync disabled");
                state
            }
        }
    }

    pub fn with_scores(mut self, scores: ScoreService) -> Self {
        self.scores = Some(scores);
        self
    }

    pub fn with_lab_sync(mut self, lab_sync: LabSyncService) -> Self {
        self.lab_sync = Some(lab_sync);
        self
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    pub fn scores(&self) -> ServiceResult<&ScoreService> {
        self.scores.as_ref().ok_or_else(|| {
            ServiceError::Upstream(ClientError::Config(
                "GRAPHQL_ENDPOINT and GRAPHQL_API_TOKEN must be set".to_string(),
            ))
        })
    }

    pub fn lab_sync(&self) -> ServiceResult<&LabSyncService> {
        self.lab_sync.as_ref().ok_or_else(|| {
            ServiceError::Upstream(ClientError::Config(
                "LAB_* credentials must be set".to_string(),
            ))
        })
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
