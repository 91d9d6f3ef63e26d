//! Shared test doubles for the client traits used by unit tests.
//!
//! Keep this module `#[cfg(test)]`-only.
#![cfg(test)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use wellness_client::lab::{LabResultsBatch, LabResultsClient};
use wellness_client::{
    AttributeStore, BiomarkerReport, BiomarkerUnit, ClientError, DateRange, HealthDataClient,
    MetricPoint, MetricSeries, WeightSeries,
};

use crate::domains::messages::PoolPicker;

/// Canned health data with per-call failure injection.
///
/// Failure keys match the method names without the `get_` prefix:
/// `sleep_data`, `sleep_quality_data`, `steps_data`, `exercise_data`,
/// `meals_logged`, `weight_data`, `biomarker_units`, `add_biomarker_results`.
#[derive(Default)]
pub struct MockHealthClient {
    pub sleep: MetricSeries,
    pub sleep_quality: MetricSeries,
    pub steps: MetricSeries,
    pub exercise: MetricSeries,
    pub meals_logged: u32,
    pub weight: WeightSeries,
    pub units: Vec<BiomarkerUnit>,
    /// Value returned by a successful `add_biomarker_results`.
    pub reject_reports: bool,
    pub(crate) failing: HashSet<&'static str>,
    pub(crate) reports: Mutex<Vec<(String, BiomarkerReport)>>,
}

impl MockHealthClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A week of healthy readings: 8h sleep, 10k steps, 30 minutes of
    /// exercise and 21 meals.
    pub fn healthy() -> Self {
        let days: Vec<String> = (1..=7).map(|d| format!("2025-12-{d:02}")).collect();
        let series = |v: f64| {
            MetricSeries::new(days.iter().map(|d| MetricPoint::new(d.clone(), v)).collect())
        };
        Self {
            sleep: series(480.0),
            steps: series(10_000.0),
            exercise: series(30.0),
            meals_logged: 21,
            ..Self::default()
        }
    }

    pub fn fail(mut self, call: &'static str) -> Self {
        self.failing.insert(call);
        self
    }

    pub fn stored_reports(&self) -> Vec<(String, BiomarkerReport)> {
        self.reports.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn check(&self, call: &'static str) -> Result<(), ClientError> {
        if self.failing.contains(call) {
            Err(ClientError::GraphQl(format!("{call} unavailable")))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl HealthDataClient for MockHealthClient {
    async fn get_sleep_data(&self, _u: &str, _r: &DateRange) -> Result<MetricSeries, ClientError> {
        self.check("sleep_data")?;
        Ok(self.sleep.clone())
    }

    async fn get_sleep_quality_data(
        &self,
        _u: &str,
        _r: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        self.check("sleep_quality_data")?;
        Ok(self.sleep_quality.clone())
    }

    async fn get_steps_data(&self, _u: &str, _r: &DateRange) -> Result<MetricSeries, ClientError> {
        self.check("steps_data")?;
        Ok(self.steps.clone())
    }

    async fn get_exercise_data(
        &self,
        _u: &str,
        _r: &DateRange,
    ) -> Result<MetricSeries, ClientError> {
        self.check("exercise_data")?;
        Ok(self.exercise.clone())
    }

    async fn get_meals_logged(&self, _u: &str, _r: &DateRange) -> Result<u32, ClientError> {
        self.check("meals_logged")?;
        Ok(self.meals_logged)
    }

    async fn get_weight_data(&self, _u: &str, _r: &DateRange) -> Result<WeightSeries, ClientError> {
        self.check("weight_data")?;
        Ok(self.weight.clone())
    }

    async fn add_biomarker_results(
        &self,
        user_id: &str,
        report: &BiomarkerReport,
    ) -> Result<bool, ClientError> {
        self.check("add_biomarker_results")?;
        if self.reject_reports {
            return Ok(false);
        }
        if let Ok(mut reports) = self.reports.lock() {
            reports.push((user_id.to_string(), report.clone()));
        }
        Ok(true)
    }

    async fn get_biomarker_units(&self) -> Result<Vec<BiomarkerUnit>, ClientError> {
        self.check("biomarker_units")?;
        Ok(self.units.clone())
    }
}

/// In-memory attribute map keyed by `(user, name)`.
#[derive(Default)]
pub struct MemoryAttributeStore {
    values: Mutex<HashMap<(String, String), (String, Option<String>)>>,
    writes: AtomicUsize,
    fail: bool,
    fail_writes: bool,
}

impl MemoryAttributeStore {
    /// Every call returns an error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Reads succeed, writes return an error.
    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn insert(&self, user_id: &str, name: &str, value: &str) {
        if let Ok(mut map) = self.values.lock() {
            map.insert(
                (user_id.to_string(), name.to_string()),
                (value.to_string(), None),
            );
        }
    }

    pub fn value(&self, user_id: &str, name: &str) -> Option<String> {
        let map = self.values.lock().ok()?;
        map.get(&(user_id.to_string(), name.to_string()))
            .map(|(v, _)| v.clone())
    }

    pub fn category(&self, user_id: &str, name: &str) -> Option<String> {
        let map = self.values.lock().ok()?;
        map.get(&(user_id.to_string(), name.to_string()))
            .and_then(|(_, c)| c.clone())
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AttributeStore for MemoryAttributeStore {
    async fn get_attribute(&self, user_id: &str, name: &str) -> Result<Option<String>, ClientError> {
        if self.fail {
            return Err(ClientError::GraphQl("attribute store offline".into()));
        }
        Ok(self.value(user_id, name))
    }

    async fn set_attribute(
        &self,
        user_id: &str,
        name: &str,
        value: &str,
        category: Option<&str>,
    ) -> Result<bool, ClientError> {
        if self.fail || self.fail_writes {
            return Err(ClientError::GraphQl("attribute store offline".into()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut map) = self.values.lock() {
            map.insert(
                (user_id.to_string(), name.to_string()),
                (value.to_string(), category.map(str::to_string)),
            );
        }
        Ok(true)
    }
}

/// Lab client returning a fixed batch, or an error when `batch` is `None`.
pub struct MockLabClient {
    pub batch: Option<LabResultsBatch>,
}

#[async_trait]
impl LabResultsClient for MockLabClient {
    async fn get_results(&self) -> Result<LabResultsBatch, ClientError> {
        self.batch
            .clone()
            .ok_or_else(|| ClientError::Auth("400 - invalid_grant".into()))
    }
}

/// Always picks the first line of a pool.
pub struct FirstPicker;

impl PoolPicker for FirstPicker {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}
