use chrono::NaiveDate;
use secrecy::SecretString;
use wellness_client::http_client::GraphqlHealthClient;
use wellness_client::{
    AttributeStore, BiomarkerInput, BiomarkerReport, BiomarkerValue, ClientError, DateRange,
    HealthDataClient, TendencyKind,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn range() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 22).unwrap(),
    )
}

fn client(server: &MockServer) -> GraphqlHealthClient {
    GraphqlHealthClient::new(
        &format!("{}/graphql", server.uri()),
        SecretString::new("tok".into()),
    )
}

#[tokio::test]
async fn sleep_query_sends_bearer_and_parses_edges() {
    let server = MockServer::start().await;
    let body = serde_json::json!({
        "data": {"member": {"sleepTimes": {"edges": [
            {"node": {"date": "2025-12-15", "value": 420}},
            {"node": {"date": "2025-12-16", "value": 480}}
        ]}}}
    });
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer tok"))
        .and(body_string_contains("sleepTimes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let series = client(&server)
        .get_sleep_data("user-1", &range())
        .await
        .expect("sleep");
    assert_eq!(series.len(), 2);
    assert_eq!(series.points[1].value, Some(480.0));

    let received = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(sent["variables"]["start"], "2025-12-15T00:00:00Z");
    assert_eq!(sent["variables"]["end"], "2025-12-22T23:59:59Z");
    assert_eq!(sent["variables"]["id"], "user-1");
}

#[tokio::test]
async fn steps_and_exercise_map_to_metric_points() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("stepsCounter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"member": {"stepsCounter": {"edges": [
                {"node": {"datetime": "2025-12-15T08:00:00Z", "steps": 8200}}
            ]}}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("exerciseTracker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"member": {"exerciseTracker": {"edges": [
                {"node": {"datetime": "2025-12-15T18:00:00Z", "durationMinutes": 25}},
                {"node": {"datetime": "2025-12-15T19:00:00Z", "durationMinutes": 10}}
            ]}}}
        })))
        .mount(&server)
        .await;

    let c = client(&server);
    let steps = c.get_steps_data("u", &range()).await.expect("steps");
    assert_eq!(steps.points[0].value, Some(8200.0));
    assert_eq!(steps.points[0].date.as_deref(), Some("2025-12-15T08:00:00Z"));

    let exercise = c.get_exercise_data("u", &range()).await.expect("exercise");
    assert_eq!(exercise.len(), 2);
    assert_eq!(exercise.points[0].value, Some(25.0));
}

#[tokio::test]
async fn graphql_errors_become_client_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": null,
            "errors": [{"message": "member not found"}]
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_sleep_quality_data("u", &range())
        .await
        .unwrap_err();
    match err {
        ClientError::GraphQl(msg) => assert_eq!(msg, "member not found"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn http_401_maps_to_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
        .mount(&server)
        .await;

    let err = client(&server).get_meals_logged("u", &range()).await.unwrap_err();
    assert!(matches!(err, ClientError::Auth(_)));
}

#[tokio::test]
async fn meals_logged_defaults_to_zero_without_tracker() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"member": {"mealTracker": null}}
        })))
        .mount(&server)
        .await;

    let n = client(&server).get_meals_logged("u", &range()).await.expect("meals");
    assert_eq!(n, 0);
}

#[tokio::test]
async fn weight_data_parses_tendency() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("weightTracker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"weightTracker": {
                "entries": [{"date": "2025-12-15", "value": 81.2}],
                "tendency": {"type": "DOWN", "difference": -0.4}
            }}
        })))
        .mount(&server)
        .await;

    let w = client(&server).get_weight_data("u", &range()).await.expect("weight");
    assert_eq!(w.entries.len(), 1);
    assert_eq!(w.tendency.unwrap().kind, TendencyKind::Down);
}

#[tokio::test]
async fn custom_attribute_lookup_accepts_key_or_name() {
    let server = MockServer::start().await;
    let attrs = serde_json::json!([
        {"key": "synced_lab_orders", "value": "[\"A\"]"},
        {"name": "favorite_color", "value": "green"}
    ])
    .to_string();
    Mock::given(method("POST"))
        .and(body_string_contains("customAttributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"myProfile": {"id": "p1", "customAttributes": attrs}}
        })))
        .mount(&server)
        .await;

    let c = client(&server);
    assert_eq!(
        c.get_attribute("u", "synced_lab_orders").await.unwrap().as_deref(),
        Some("[\"A\"]")
    );
    assert_eq!(
        c.get_attribute("u", "favorite_color").await.unwrap().as_deref(),
        Some("green")
    );
    assert!(c.get_attribute("u", "missing").await.unwrap().is_none());
}

#[tokio::test]
async fn set_attribute_reports_mutation_errors_as_false() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("createProfileCustomAttributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"createProfileCustomAttributes": {
                "success": false,
                "errors": [{"field": "value", "messages": ["too long"]}]
            }}
        })))
        .mount(&server)
        .await;

    let ok = client(&server)
        .set_attribute("u", "synced_lab_orders", "[]", Some("lab"))
        .await
        .expect("call");
    assert!(!ok);
}

#[tokio::test]
async fn add_biomarker_results_sends_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("addBiomarkerResults"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"addBiomarkerResults": {"success": true, "message": "ok"}}
        })))
        .mount(&server)
        .await;

    let report = BiomarkerReport {
        lab_test_report_id: "LAB_ORD-1_1".into(),
        biomarkers: vec![BiomarkerInput {
            biomarker_id: "glucose".into(),
            biomarker_unit_id: Some("u1".into()),
            result: BiomarkerValue {
                value: 92.0,
                unit: "mg/dL".into(),
            },
            date: Some("2025-12-15".into()),
            alert: false,
            alert_text: None,
            display_value: "92 mg/dL".into(),
        }],
    };
    let ok = client(&server)
        .add_biomarker_results("u", &report)
        .await
        .expect("store");
    assert!(ok);

    let received = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    let input = &sent["variables"]["input"];
    assert_eq!(input["labTestReportId"], "LAB_ORD-1_1");
    assert_eq!(input["biomarkers"][0]["biomarkerUnitId"], "u1");
}

#[tokio::test]
async fn biomarker_units_decode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("biomarkerUnits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"biomarkerUnits": {"edges": [
                {"node": {"id": "u1", "name": "mg/dL"}},
                {"node": {"id": "u2", "name": "%"}}
            ]}}
        })))
        .mount(&server)
        .await;

    let units = client(&server).get_biomarker_units().await.expect("units");
    assert_eq!(units.len(), 2);
    assert_eq!(units[1].name, "%");
}
