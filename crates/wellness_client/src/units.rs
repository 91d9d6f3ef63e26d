//! Biomarker unit catalog, fetched once and reused for the process lifetime.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::{BiomarkerUnit, ClientError, HealthDataClient};

#[derive(Debug, Default)]
pub struct UnitTable {
    by_name: HashMap<String, String>,
}

impl UnitTable {
    pub fn new(units: Vec<BiomarkerUnit>) -> Self {
        let by_name = units
            .into_iter()
            .map(|u| (normalize_unit(&u.name), u.id))
            .collect();
        Self { by_name }
    }

    /// Provider unit id for a lab-reported unit string, if one matches.
    pub fn resolve(&self, unit: &str) -> Option<&str> {
        let key = normalize_unit(unit);
        if key.is_empty() {
            return None;
        }
        self.by_name.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Lowercase and drop whitespace so `"mg/dL"` and `"MG / DL"` match.
pub fn normalize_unit(unit: &str) -> String {
    unit.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lazily populated unit table. A failed fetch leaves the cell empty so the
/// next caller tries again.
#[derive(Default)]
pub struct UnitCatalog {
    cell: OnceCell<Arc<UnitTable>>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, client: &dyn HealthDataClient) -> Result<Arc<UnitTable>, ClientError> {
        self.cell
            .get_or_try_init(|| async {
                let units = client.get_biomarker_units().await?;
                tracing::info!(count = units.len(), "loaded biomarker unit catalog");
                Ok::<_, ClientError>(Arc::new(UnitTable::new(units)))
            })
            .await
            .cloned()
    }
}
