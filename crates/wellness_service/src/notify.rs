//! Best-effort notification that new lab results arrived.
//!
//! Summaries carry counts only, never measured values.

use async_trait::async_trait;
use serde::Serialize;

use crate::domains::biomarkers::ParsedBiomarker;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub user_id: String,
    pub order_key: String,
    pub total_biomarkers: usize,
    pub abnormal_count: usize,
    pub has_abnormal_results: bool,
    pub collection_date: Option<String>,
    pub result_date: Option<String>,
}

impl ResultSummary {
    pub fn from_biomarkers(user_id: &str, order_key: &str, biomarkers: &[ParsedBiomarker]) -> Self {
        let abnormal_count = biomarkers.iter().filter(|b| b.is_abnormal()).count();
        let first = biomarkers.first();
        Self {
            user_id: user_id.to_string(),
            order_key: order_key.to_string(),
            total_biomarkers: biomarkers.len(),
            abnormal_count,
            has_abnormal_results: abnormal_count > 0,
            collection_date: first.and_then(|b| b.collection_date_time.clone()),
            result_date: first.and_then(|b| b.result_date_time.clone()),
        }
    }

    /// `action_needed` when anything is out of range, else `all_normal`.
    pub fn status(&self) -> &'static str {
        if self.has_abnormal_results {
            "action_needed"
        } else {
            "all_normal"
        }
    }
}

#[async_trait]
pub trait ResultNotifier: Send + Sync + 'static {
    async fn notify(&self, summary: &ResultSummary) -> anyhow::Result<()>;
}

/// Logs the summary. Used when no delivery channel is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

#[async_trait]
impl ResultNotifier for TracingNotifier {
    async fn notify(&self, summary: &ResultSummary) -> anyhow::Result<()> {
        tracing::info!(
            user_id = %summary.user_id,
            order_key = %summary.order_key,
            total = summary.total_biomarkers,
            abnormal = summary.abnormal_count,
            status = summary.status(),
            "lab results received"
        );
        Ok(())
    }
}
