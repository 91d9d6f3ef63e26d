//! Middleware layer for cross-cutting concerns around the health-data client.
//!
//! Every call is timed, logged at debug level and counted in the
//! `health_client_calls_total` metric by outcome.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;
use wellness_client::{
    AttributeStore, BiomarkerReport, BiomarkerUnit, ClientError, DateRange, HealthDataClient,
    MetricSeries, WeightSeries,
};

/// Wraps a [`HealthDataClient`] with timing, logging and call metrics.
#[derive(Clone)]
pub struct LoggingMiddleware<C: HealthDataClient> {
    inner: Arc<C>,
}

impl<C: HealthDataClient> LoggingMiddleware<C> {
    pub fn new(client: C) -> Self {
        Self {
            inner: Arc::new(client),
        }
    }

    async fn with_logging<F, Fut, T>(&self, operation: F, name: &'static str) -> Result<T, ClientError>
    where
        F: FnOnce(Arc<C>) -> Fut,
        Fut: std::future::Future<Output = Result<T, ClientError>>,
    {
        let start = Instant::now();
        debug!("Starting operation: {}", name);

        let result = operation(self.inner.clone()).await;

        let duration = start.elapsed();
        let outcome = match &result {
            Ok(_) => {
                debug!("Operation completed: {} in {:?}", name, duration);
                "ok"
            }
            Err(e) => {
                debug!("Operation failed: {} in {:?} - error: {}", name, duration, e);
                "error"
            }
        };
        metrics::counter!("health_client_calls_total", "operation" => name, "outcome" => outcome)
            .increment(1);
        metrics::histogram!("health_client_call_seconds", "operation" => name)
            .record(duration.as_secs_f64());

        result
    }
}

#[async_trait]
impl<C: HealthDataClient> HealthDataClient for LoggingMiddleware<C> {
    async fn get_sleep_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        self.with_logging(
            |client| async move { client.get_sleep_data(user_id, range).await },
            "get_sleep_data",
        )
        .await
    }

    async fn get_sleep_quality_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        self.with_logging(
            |client| async move { client.get_sleep_quality_data(user_id, range).await },
            "get_sleep_quality_data",
        )
        .await
    }

    async fn get_steps_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        self.with_logging(
            |client| async move { client.get_steps_data(user_id, range).await },
            "get_steps_data",
        )
        .await
    }

    async fn get_exercise_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        self.with_logging(
            |client| async move { client.get_exercise_data(user_id, range).await },
            "get_exercise_data",
        )
        .await
    }

    async fn get_meals_logged(&self, user_id: &str, range: &DateRange) -> Result<u32, ClientError> {
        self.with_logging(
            |client| async move { client.get_meals_logged(user_id, range).await },
            "get_meals_logged",
        )
        .await
    }

    async fn get_weight_data(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> Result<WeightSeries, ClientError> {
        self.with_logging(
            |client| async move { client.get_weight_data(user_id, range).await },
            "get_weight_data",
        )
        .await
    }

    async fn add_biomarker_results(
        &self,
        user_id: &str,
        report: &BiomarkerReport,
    ) -> Result<bool, ClientError> {
        self.with_logging(
            |client| async move { client.add_biomarker_results(user_id, report).await },
            "add_biomarker_results",
        )
        .await
    }

    async fn get_biomarker_units(&self) -> Result<Vec<BiomarkerUnit>, ClientError> {
        self.with_logging(
            |client| async move { client.get_biomarker_units().await },
            "get_biomarker_units",
        )
        .await
    }
}

#[async_trait]
impl<C: HealthDataClient + AttributeStore> AttributeStore for LoggingMiddleware<C> {
    async fn get_attribute(
        &self,
        user_id: &str,
        name: &str,
    ) -> Result<Option<String>, ClientError> {
        self.with_logging(
            |client| async move { client.get_attribute(user_id, name).await },
            "get_attribute",
        )
        .await
    }

    async fn set_attribute(
        &self,
        user_id: &str,
        name: &str,
        value: &str,
        category: Option<&str>,
    ) -> Result<bool, ClientError> {
        self.with_logging(
            |client| async move { client.set_attribute(user_id, name, value, category).await },
            "set_attribute",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockHealthClient;

    #[tokio::test]
    async fn passes_results_through() {
        let middleware = LoggingMiddleware::new(MockHealthClient::healthy());
        let range = DateRange::last_days(7);
        let sleep = middleware.get_sleep_data("u", &range).await.expect("sleep");
        assert_eq!(sleep.len(), 7);
        assert_eq!(middleware.get_meals_logged("u", &range).await.unwrap(), 21);
    }

    #[tokio::test]
    async fn passes_errors_through() {
        let middleware = LoggingMiddleware::new(MockHealthClient::new().fail("steps_data"));
        let err = middleware
            .get_steps_data("u", &DateRange::last_days(7))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::GraphQl(_)));
    }
}
