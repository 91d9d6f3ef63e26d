//! Per-user record of lab orders already ingested.
//!
//! The set lives in a provider custom attribute as a JSON array of order keys.
//! Keys are only ever appended.

use std::sync::Arc;

use wellness_client::{AttributeStore, ClientError};

pub const LEDGER_ATTRIBUTE: &str = "synced_lab_orders";
pub const LEDGER_CATEGORY: &str = "lab_results";

#[derive(Clone)]
pub struct SyncLedger {
    store: Arc<dyn AttributeStore>,
}

impl SyncLedger {
    pub fn new(store: Arc<dyn AttributeStore>) -> Self {
        Self { store }
    }

    /// Order keys recorded for `user_id`. An unparseable attribute reads as
    /// empty.
    pub async fn synced_orders(&self, user_id: &str) -> Result<Vec<String>, ClientError> {
        let Some(raw) = self.store.get_attribute(user_id, LEDGER_ATTRIBUTE).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(keys) => Ok(keys),
            Err(e) => {
                tracing::warn!(%user_id, error = %e, "sync ledger is not a JSON string array");
                Ok(Vec::new())
            }
        }
    }

    pub async fn has_been_synced(&self, user_id: &str, order_key: &str) -> Result<bool, ClientError> {
        Ok(self
            .synced_orders(user_id)
            .await?
            .iter()
            .any(|k| k == order_key))
    }

    /// Append `order_key`. Marking a key twice leaves a single entry and
    /// reports success without writing.
    pub async fn mark_synced(&self, user_id: &str, order_key: &str) -> Result<bool, ClientError> {
        let mut keys = self.synced_orders(user_id).await?;
        if keys.iter().any(|k| k == order_key) {
            return Ok(true);
        }
        keys.push(order_key.to_string());
        let value = serde_json::to_string(&keys).map_err(|e| ClientError::Decode(e.to_string()))?;
        self.store
            .set_attribute(user_id, LEDGER_ATTRIBUTE, &value, Some(LEDGER_CATEGORY))
            .await
    }
}
