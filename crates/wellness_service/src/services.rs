use std::path::PathBuf;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use wellness_client::lab::{LabOrder, LabPatient, LabResultsClient};
use wellness_client::units::{UnitCatalog, UnitTable};
use wellness_client::{AttributeStore, ClientError, DateRange, HealthDataClient};

use crate::domains::biomarkers::{build_report, metadata_attribute, order_metadata, parse_biomarkers};
use crate::domains::ledger::{LEDGER_CATEGORY, SyncLedger};
use crate::domains::messages::{MessageContext, PoolPicker, ThreadRngPicker, select_message};
use crate::domains::overall::{OverallPolicy, overall_score, round_to_tenth};
use crate::domains::pillars::{
    Pillar, PillarScores, SleepBand, mindfulness_score, movement_score, nutrition_score,
    sleep_score,
};
use crate::domains::plans::{PlanLibrary, Program};
use crate::domains::pools::NO_DATA_MESSAGE;
use crate::domains::profile::{Profile, Signals};
use crate::domains::weight::weight_score;
use crate::error::ServiceResult;
use crate::notify::{ResultNotifier, ResultSummary, TracingNotifier};
use crate::transforms::{daily_activity, raw_data};
use crate::types::{
    DailyActivity, LegacyPillars, LegacyScore, PlanSummary, RawData, ScoreValue, Scores,
    SyncDetail, SyncReport, SyncStatus, UserScore,
};

/// Days in the scoring window.
pub const SCORE_WINDOW_DAYS: i64 = 7;

/// Replace a failed signal fetch with its default and record the failure.
fn degrade<T: Default>(signal: &'static str, user_id: &str, result: Result<T, ClientError>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(%user_id, signal, error = %e, "signal fetch failed, using default");
            metrics::counter!("wellness_signal_fetch_failures_total", "signal" => signal)
                .increment(1);
            T::default()
        }
    }
}

#[derive(Clone)]
pub struct ScoreService {
    health: Arc<dyn HealthDataClient>,
    plan_dir: PathBuf,
    picker: Arc<dyn PoolPicker>,
}

impl ScoreService {
    pub fn new(health: Arc<dyn HealthDataClient>, plan_dir: impl Into<PathBuf>) -> Self {
        Self {
            health,
            plan_dir: plan_dir.into(),
            picker: Arc::new(ThreadRngPicker),
        }
    }

    pub fn with_picker(mut self, picker: Arc<dyn PoolPicker>) -> Self {
        self.picker = picker;
        self
    }

    /// Fetch every scoring signal concurrently. A failed fetch contributes an
    /// empty series or zero meals; it never fails the whole request.
    pub async fn fetch_signals(&self, user_id: &str, range: &DateRange) -> Signals {
        let h = &self.health;
        let (sleep, sleep_quality, steps, exercise, meals) = tokio::join!(
            h.get_sleep_data(user_id, range),
            h.get_sleep_quality_data(user_id, range),
            h.get_steps_data(user_id, range),
            h.get_exercise_data(user_id, range),
            h.get_meals_logged(user_id, range),
        );
        let signals = Signals {
            sleep: degrade("sleep", user_id, sleep),
            sleep_quality: degrade("sleep_quality", user_id, sleep_quality),
            steps: degrade("steps", user_id, steps),
            exercise: degrade("exercise", user_id, exercise),
            meals_logged: degrade("meals", user_id, meals),
            days: range.days(),
        };
        tracing::debug!(
            %user_id,
            sleep_entries = signals.sleep.len(),
            sleep_quality_entries = signals.sleep_quality.len(),
            steps_entries = signals.steps.len(),
            exercise_entries = signals.exercise.len(),
            meals_logged = signals.meals_logged,
            "signals fetched"
        );
        signals
    }

    pub fn pillar_scores(profile: &Profile, plans: &PlanLibrary) -> PillarScores {
        for pillar in [Pillar::Movement, Pillar::Mindfulness] {
            if let Some(goals) = plans.for_pillar(pillar).and_then(|p| p.document.goals()) {
                tracing::debug!(?pillar, ?goals, "plan goals noted, thresholds unchanged");
            }
        }
        let band = plans.sleep_band();
        if band != SleepBand::default() {
            tracing::debug!(min = band.min, max = band.max, "sleep target from plan");
        }

        PillarScores {
            sleep: sleep_score(profile.sleep_minutes, profile.sleep_quality, &band),
            movement: movement_score(profile.steps, profile.exercise_minutes),
            mindfulness: mindfulness_score(),
            nutrition: nutrition_score(profile.meal_compliance),
        }
    }

    /// Weekly wellness score for `user_id`, with a message and the averages
    /// it was computed from.
    pub async fn user_score(&self, user_id: &str, programs: &[Program]) -> UserScore {
        metrics::counter!("wellness_score_requests_total", "route" => "user").increment(1);
        let range = DateRange::last_days(SCORE_WINDOW_DAYS);
        tracing::info!(%user_id, start = %range.start_date(), end = %range.end_date(), "calculating score");

        let signals = self.fetch_signals(user_id, &range).await;
        let profile = Profile::build(&signals);

        if !profile.has_tracking_data() {
            tracing::info!(%user_id, "no tracking data");
            return UserScore {
                profile_id: user_id.to_string(),
                scores: Scores::not_available(),
                message: NO_DATA_MESSAGE.to_string(),
                no_data: Some(true),
                raw_data: RawData::default(),
                plan_data: Vec::new(),
            };
        }

        let plans = PlanLibrary::load(&self.plan_dir, programs).await;
        let scores = Self::pillar_scores(&profile, &plans);
        let overall = overall_score(&scores.values(), OverallPolicy::Defined);
        let message = select_message(
            overall,
            &scores,
            &MessageContext::from_profile(&profile),
            self.picker.as_ref(),
        );
        tracing::info!(%user_id, overall, "score calculated");

        UserScore {
            profile_id: user_id.to_string(),
            scores: Scores {
                overall: ScoreValue::Score(overall),
                sleep: ScoreValue::Score(scores.sleep),
                movement: ScoreValue::Score(scores.movement),
                mindfulness: ScoreValue::Score(scores.mindfulness),
                nutrition: ScoreValue::Score(scores.nutrition),
            },
            message,
            no_data: None,
            raw_data: raw_data(&profile),
            plan_data: plans
                .plans()
                .iter()
                .map(|p| PlanSummary {
                    pillar: p.pillar,
                    title: p.document.title.clone(),
                })
                .collect(),
        }
    }

    /// Five-pillar score including weight. Zero pillars are left out of the
    /// overall average and every figure is rounded to one decimal.
    pub async fn legacy_score(&self, user_id: &str) -> LegacyScore {
        metrics::counter!("wellness_score_requests_total", "route" => "legacy").increment(1);
        let range = DateRange::last_days(SCORE_WINDOW_DAYS);
        let (signals, weight) = tokio::join!(
            self.fetch_signals(user_id, &range),
            self.health.get_weight_data(user_id, &range),
        );
        let weight = degrade("weight", user_id, weight);
        let profile = Profile::build(&signals);
        let scores = Self::pillar_scores(&profile, &PlanLibrary::default());
        let weight = weight_score(&weight);

        let all = [
            Some(weight),
            Some(scores.sleep),
            Some(scores.movement),
            Some(scores.mindfulness),
            Some(scores.nutrition),
        ];
        let overall = overall_score(&all, OverallPolicy::PositiveOnly);
        tracing::info!(%user_id, overall, "legacy score calculated");

        LegacyScore {
            overall,
            pillars: LegacyPillars {
                weight: round_to_tenth(weight),
                sleep: round_to_tenth(scores.sleep),
                movement: round_to_tenth(scores.movement),
                mindfulness: round_to_tenth(scores.mindfulness),
                nutrition: round_to_tenth(scores.nutrition),
            },
            last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            user_id: user_id.to_string(),
        }
    }

    /// Per-day steps and exercise minutes over `range`.
    pub async fn daily_activity(&self, user_id: &str, range: &DateRange) -> Vec<DailyActivity> {
        let (steps, exercise) = tokio::join!(
            self.health.get_steps_data(user_id, range),
            self.health.get_exercise_data(user_id, range),
        );
        daily_activity(
            &degrade("steps", user_id, steps),
            &degrade("exercise", user_id, exercise),
        )
    }
}

/// Pulls pending lab results and stores them as provider biomarkers, one
/// order at a time.
#[derive(Clone)]
pub struct LabSyncService {
    lab: Arc<dyn LabResultsClient>,
    health: Arc<dyn HealthDataClient>,
    attributes: Arc<dyn AttributeStore>,
    ledger: SyncLedger,
    units: Arc<UnitCatalog>,
    notifier: Arc<dyn ResultNotifier>,
}

impl LabSyncService {
    pub fn new(
        lab: Arc<dyn LabResultsClient>,
        health: Arc<dyn HealthDataClient>,
        attributes: Arc<dyn AttributeStore>,
        units: Arc<UnitCatalog>,
    ) -> Self {
        Self {
            lab,
            health,
            ledger: SyncLedger::new(attributes.clone()),
            attributes,
            units,
            notifier: Arc::new(TracingNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn ResultNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// One sync pass. Only a failure to fetch the batch fails the pass; every
    /// order's outcome is recorded in the report.
    pub async fn run(&self) -> ServiceResult<SyncReport> {
        tracing::info!("starting lab results sync");
        let batch = self.lab.get_results().await?;
        if !batch.has_results {
            tracing::info!("no new lab results");
            return Ok(SyncReport {
                success: true,
                message: "No new results to sync".to_string(),
                synced_count: 0,
                details: Vec::new(),
            });
        }

        let units = match self.units.get(self.health.as_ref()).await {
            Ok(table) => table,
            Err(e) => {
                tracing::warn!(error = %e, "unit catalog unavailable, sending results without unit ids");
                Arc::new(UnitTable::default())
            }
        };

        let mut details = Vec::new();
        for patient in &batch.patients {
            let user_id = patient.patient_id.as_deref().filter(|id| !id.trim().is_empty());
            for order in &patient.orders {
                let detail = match user_id {
                    Some(user_id) => self.sync_order(user_id, patient, order, &units).await,
                    None => SyncDetail {
                        user_id: None,
                        order_key: order.order_key.clone(),
                        biomarker_count: 0,
                        status: SyncStatus::Error,
                        error: Some("patient has no Patient_Id".to_string()),
                    },
                };
                metrics::counter!("lab_sync_orders_total", "status" => detail.status.as_str())
                    .increment(1);
                details.push(detail);
            }
        }

        let synced_count = details
            .iter()
            .filter(|d| d.status == SyncStatus::Synced)
            .count();
        tracing::info!(synced_count, orders = details.len(), "lab results sync finished");
        Ok(SyncReport {
            success: true,
            message: format!("Synced results for {synced_count} orders"),
            synced_count,
            details,
        })
    }

    async fn sync_order(
        &self,
        user_id: &str,
        patient: &LabPatient,
        order: &LabOrder,
        units: &UnitTable,
    ) -> SyncDetail {
        let mut detail = SyncDetail {
            user_id: Some(user_id.to_string()),
            order_key: order.order_key.clone(),
            biomarker_count: 0,
            status: SyncStatus::Error,
            error: None,
        };
        let Some(order_key) = order.order_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            detail.error = Some("order has no Order_Key".to_string());
            return detail;
        };

        let biomarkers = parse_biomarkers(&order.results);
        detail.biomarker_count = biomarkers.len();
        if biomarkers.is_empty() {
            tracing::info!(%user_id, %order_key, "no recognised biomarkers in order");
            detail.status = SyncStatus::SkippedEmpty;
            return detail;
        }

        match self.ledger.has_been_synced(user_id, order_key).await {
            Ok(true) => {
                tracing::info!(%user_id, %order_key, "order already synced");
                detail.status = SyncStatus::AlreadySynced;
                return detail;
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(%user_id, %order_key, error = %e, "sync ledger unreadable, ingesting anyway");
            }
        }

        let report = build_report(order_key, &biomarkers, units, Utc::now().timestamp_millis());
        match self.health.add_biomarker_results(user_id, &report).await {
            Ok(true) => {}
            Ok(false) => {
                detail.error = Some("provider rejected the biomarker report".to_string());
                return detail;
            }
            Err(e) => {
                tracing::error!(%user_id, %order_key, error = %e, "storing biomarkers failed");
                detail.error = Some(e.to_string());
                return detail;
            }
        }

        let metadata = order_metadata(order_key, order, patient, &biomarkers, Utc::now().to_rfc3339());
        match serde_json::to_string(&metadata) {
            Ok(json) => {
                let stored = self
                    .attributes
                    .set_attribute(user_id, &metadata_attribute(order_key), &json, Some(LEDGER_CATEGORY))
                    .await;
                if !matches!(stored, Ok(true)) {
                    tracing::warn!(%user_id, %order_key, ?stored, "could not store order metadata");
                }
            }
            Err(e) => tracing::warn!(%order_key, error = %e, "order metadata not serializable"),
        }

        match self.ledger.mark_synced(user_id, order_key).await {
            Ok(true) => {}
            Ok(false) => tracing::warn!(%user_id, %order_key, "sync ledger update rejected"),
            Err(e) => tracing::warn!(%user_id, %order_key, error = %e, "sync ledger update failed"),
        }

        let summary = ResultSummary::from_biomarkers(user_id, order_key, &biomarkers);
        if let Err(e) = self.notifier.notify(&summary).await {
            tracing::warn!(%user_id, %order_key, error = %e, "result notification failed");
        }

        tracing::info!(%user_id, %order_key, count = biomarkers.len(), "synced biomarkers");
        detail.status = SyncStatus::Synced;
        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::ledger::LEDGER_ATTRIBUTE;
    use crate::domains::pools;
    use crate::test_utils::{FirstPicker, MemoryAttributeStore, MockHealthClient, MockLabClient};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use wellness_client::lab::LabResultsBatch;
    use wellness_client::{BiomarkerUnit, MetricPoint, MetricSeries};

    fn service(client: MockHealthClient) -> ScoreService {
        ScoreService::new(Arc::new(client), "/nonexistent").with_picker(Arc::new(FirstPicker))
    }

    #[tokio::test]
    async fn healthy_week_scores_high() {
        let score = service(MockHealthClient::healthy()).user_score("u1", &[]).await;
        // sleep 5, movement 5, mindfulness 2.5, nutrition 5
        assert_eq!(score.scores.overall, ScoreValue::Score(4.4));
        assert_eq!(score.scores.mindfulness, ScoreValue::Score(2.5));
        assert_eq!(score.raw_data.steps, 10_000);
        assert_eq!(score.raw_data.meal_compliance, 100);
        assert!(score.no_data.is_none());
        // best pillar ties between movement, sleep and nutrition; nutrition is last
        assert_eq!(score.message, "100% meal plan compliance! You're crushing it! 🥗");
    }

    #[tokio::test]
    async fn failed_exercise_fetch_degrades_to_zero() {
        let client = MockHealthClient::healthy().fail("exercise_data");
        let score = service(client).user_score("u1", &[]).await;
        assert_eq!(score.scores.movement, ScoreValue::Score(2.0));
        assert_eq!(score.raw_data.exercise, 0);
    }

    #[tokio::test]
    async fn every_fetch_failing_is_no_data() {
        let client = MockHealthClient::new()
            .fail("sleep_data")
            .fail("sleep_quality_data")
            .fail("steps_data")
            .fail("exercise_data")
            .fail("meals_logged");
        let score = service(client).user_score("u1", &[]).await;
        assert_eq!(score.no_data, Some(true));
        assert_eq!(score.scores.overall, ScoreValue::NotAvailable);
        assert_eq!(score.message, pools::NO_DATA_MESSAGE);
        assert_eq!(score.raw_data, RawData::default());
    }

    #[tokio::test]
    async fn sleep_plan_moves_target_band() {
        let dir = tempfile::tempdir().expect("tempdir");
        let plan = json!({
            "title": "Sleep Week 1",
            "sections": [{"title": "Overall Goals", "items": ["from 4-5 hours to 5-6 hours"]}]
        });
        std::fs::write(dir.path().join("Sleep-1-1.json"), plan.to_string()).expect("write");
        let client = MockHealthClient {
            sleep: MetricSeries::new(vec![MetricPoint::new("2025-12-01", 330.0)]),
            ..MockHealthClient::new()
        };
        let svc = ScoreService::new(Arc::new(client), dir.path()).with_picker(Arc::new(FirstPicker));
        let programs = [Program {
            name: "Sleep Reset".into(),
            category: None,
        }];
        let score = svc.user_score("u1", &programs).await;
        assert_eq!(score.scores.sleep, ScoreValue::Score(5.0));
        assert_eq!(score.plan_data.len(), 1);
        assert_eq!(score.plan_data[0].title.as_deref(), Some("Sleep Week 1"));
    }

    #[tokio::test]
    async fn movement_plan_goals_leave_thresholds_alone() {
        let dir = tempfile::tempdir().expect("tempdir");
        let plan = json!({
            "title": "Movement Week 1",
            "sections": [{"title": "Overall Goals", "items": [
                "Walk 12,000 steps every day",
                "Exercise for 45 minutes"
            ]}]
        });
        std::fs::write(dir.path().join("Movement-1-1.json"), plan.to_string()).expect("write");
        let client = MockHealthClient {
            steps: MetricSeries::new(vec![MetricPoint::new("2025-12-01T20:00:00Z", 8_000.0)]),
            exercise: MetricSeries::new(vec![MetricPoint::new("2025-12-01T18:00:00Z", 12.0)]),
            ..MockHealthClient::new()
        };
        let svc = ScoreService::new(Arc::new(client), dir.path()).with_picker(Arc::new(FirstPicker));
        let programs = [Program {
            name: "Movement Basics".into(),
            category: None,
        }];
        let score = svc.user_score("u1", &programs).await;

        assert_eq!(score.plan_data.len(), 1);
        assert_eq!(score.plan_data[0].pillar, Pillar::Movement);
        let ScoreValue::Score(movement) = score.scores.movement else {
            panic!("movement should be scored");
        };
        assert_eq!(movement, movement_score(8_000.0, 12.0));
        assert!((movement - 2.8).abs() < 1e-9);
    }

    #[tokio::test]
    async fn legacy_score_includes_weight_and_skips_zeros() {
        let client = MockHealthClient {
            weight: serde_json::from_value(json!({
                "entries": [{"date": "2025-12-01", "value": 80.0}],
                "tendency": {"type": "UP", "difference": 0.3}
            }))
            .expect("weight"),
            ..MockHealthClient::new()
        };
        let score = service(client).legacy_score("u1").await;
        // weight = 1/7 * 2.5 + 1.5 ~= 1.857, sleep 0.5, mindfulness 2.5
        assert_eq!(score.pillars.weight, 1.9);
        assert_eq!(score.pillars.sleep, 0.5);
        assert_eq!(score.pillars.movement, 0.0);
        assert_eq!(score.pillars.nutrition, 0.0);
        assert_eq!(score.overall, 1.6);
        assert_eq!(score.user_id, "u1");
    }

    #[tokio::test]
    async fn daily_activity_survives_a_failed_signal() {
        let client = MockHealthClient {
            steps: MetricSeries::new(vec![MetricPoint::new("2025-12-01T09:00:00Z", 5_000.0)]),
            ..MockHealthClient::new()
        }
        .fail("exercise_data");
        let rows = service(client)
            .daily_activity("u1", &DateRange::last_days(7))
            .await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].steps, 5_000.0);
        assert_eq!(rows[0].exercise_minutes, 0.0);
    }

    fn batch() -> LabResultsBatch {
        serde_json::from_value(json!({
            "hasResults": true,
            "data": [{
                "Patient_Id": "user-1",
                "Orders": [
                    {"Order_Key": "ORD-1", "Results": [{"Result_Data": [
                        {"Test_Name": "496", "Value": "5.9", "Units": "%", "Abnormal_Flag": "H"},
                        {"Test_Name": "866", "Value": "90", "Units": "mg/dL"}
                    ]}]},
                    {"Order_Key": "ORD-2", "Results": [{"Result_Data": [
                        {"Test_Name": "12345", "Value": "1"}
                    ]}]}
                ]
            }]
        }))
        .expect("batch")
    }

    struct Fixture {
        health: Arc<MockHealthClient>,
        store: Arc<MemoryAttributeStore>,
        sync: LabSyncService,
    }

    fn fixture(health: MockHealthClient, store: MemoryAttributeStore, batch: Option<LabResultsBatch>) -> Fixture {
        let health = Arc::new(health);
        let store = Arc::new(store);
        let sync = LabSyncService::new(
            Arc::new(MockLabClient { batch }),
            health.clone(),
            store.clone(),
            Arc::new(UnitCatalog::new()),
        );
        Fixture { health, store, sync }
    }

    fn units() -> Vec<BiomarkerUnit> {
        vec![BiomarkerUnit {
            id: "u-mgdl".into(),
            name: "mg/dL".into(),
        }]
    }

    #[tokio::test]
    async fn sync_stores_marks_and_skips_duplicates() {
        let f = fixture(
            MockHealthClient {
                units: units(),
                ..MockHealthClient::new()
            },
            MemoryAttributeStore::default(),
            Some(batch()),
        );

        let first = f.sync.run().await.expect("first pass");
        assert_eq!(first.synced_count, 1);
        assert_eq!(first.details[0].status, SyncStatus::Synced);
        assert_eq!(first.details[0].biomarker_count, 2);
        assert_eq!(first.details[1].status, SyncStatus::SkippedEmpty);
        assert_eq!(first.message, "Synced results for 1 orders");

        let reports = f.health.stored_reports();
        assert_eq!(reports.len(), 1);
        let (user, report) = &reports[0];
        assert_eq!(user, "user-1");
        assert!(report.lab_test_report_id.starts_with("LAB_ORD-1_"));
        assert!(report.biomarkers[0].alert);
        assert_eq!(report.biomarkers[1].biomarker_unit_id.as_deref(), Some("u-mgdl"));

        assert_eq!(
            f.store.value("user-1", LEDGER_ATTRIBUTE).as_deref(),
            Some("[\"ORD-1\"]")
        );
        assert!(f.store.value("user-1", "lab_results_ORD-1").is_some());

        let second = f.sync.run().await.expect("second pass");
        assert_eq!(second.synced_count, 0);
        assert_eq!(second.details[0].status, SyncStatus::AlreadySynced);
        assert_eq!(f.health.stored_reports().len(), 1);
    }

    #[tokio::test]
    async fn store_failure_is_recorded_per_order() {
        let f = fixture(
            MockHealthClient::new().fail("add_biomarker_results"),
            MemoryAttributeStore::default(),
            Some(batch()),
        );
        let report = f.sync.run().await.expect("pass");
        assert!(report.success);
        assert_eq!(report.synced_count, 0);
        assert_eq!(report.details[0].status, SyncStatus::Error);
        assert!(report.details[0].error.is_some());
        assert!(f.store.value("user-1", LEDGER_ATTRIBUTE).is_none());
    }

    #[tokio::test]
    async fn rejected_report_is_an_error() {
        let f = fixture(
            MockHealthClient {
                reject_reports: true,
                ..MockHealthClient::new()
            },
            MemoryAttributeStore::default(),
            Some(batch()),
        );
        let report = f.sync.run().await.expect("pass");
        assert_eq!(report.details[0].status, SyncStatus::Error);
    }

    #[tokio::test]
    async fn ledger_write_failure_does_not_fail_the_order() {
        let f = fixture(
            MockHealthClient::new(),
            MemoryAttributeStore::read_only(),
            Some(batch()),
        );
        let report = f.sync.run().await.expect("pass");
        assert_eq!(report.details[0].status, SyncStatus::Synced);
        assert_eq!(report.synced_count, 1);
    }

    #[tokio::test]
    async fn unit_catalog_failure_omits_unit_ids() {
        let f = fixture(
            MockHealthClient::new().fail("biomarker_units"),
            MemoryAttributeStore::default(),
            Some(batch()),
        );
        let report = f.sync.run().await.expect("pass");
        assert_eq!(report.synced_count, 1);
        let (_, stored) = &f.health.stored_reports()[0];
        assert!(stored.biomarkers.iter().all(|b| b.biomarker_unit_id.is_none()));
    }

    #[tokio::test]
    async fn empty_batch_and_fetch_failure() {
        let f = fixture(
            MockHealthClient::new(),
            MemoryAttributeStore::default(),
            Some(LabResultsBatch::default()),
        );
        let report = f.sync.run().await.expect("pass");
        assert_eq!(report.message, "No new results to sync");
        assert!(report.details.is_empty());

        let f = fixture(MockHealthClient::new(), MemoryAttributeStore::default(), None);
        assert!(f.sync.run().await.is_err());
    }

    struct FailingNotifier(Mutex<u32>);

    #[async_trait]
    impl ResultNotifier for FailingNotifier {
        async fn notify(&self, _summary: &ResultSummary) -> anyhow::Result<()> {
            if let Ok(mut n) = self.0.lock() {
                *n += 1;
            }
            anyhow::bail!("mail relay down")
        }
    }

    #[tokio::test]
    async fn notification_failure_is_swallowed() {
        let notifier = Arc::new(FailingNotifier(Mutex::new(0)));
        let f = fixture(
            MockHealthClient::new(),
            MemoryAttributeStore::default(),
            Some(batch()),
        );
        let sync = f.sync.clone().with_notifier(notifier.clone());
        let report = sync.run().await.expect("pass");
        assert_eq!(report.details[0].status, SyncStatus::Synced);
        assert_eq!(*notifier.0.lock().unwrap(), 1);
    }
}
