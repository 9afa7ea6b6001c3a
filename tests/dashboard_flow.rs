use std::time::{Duration, Instant};
use serde_json::{json, Value};
use warp::http::StatusCode;
use vertexpoint::services::status_classifier::classify;
use crate::common::{create_session, start_dashboard, test_config, WebhookCapture};

async fn analyze(client: &reqwest::Client, base: &str, id: &str, body: Value) -> (reqwest::StatusCode, Value) {
    let response = client
        .post(format!("{}/api/sessions/{}/analyze", base, id))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

async fn submit(client: &reqwest::Client, base: &str, id: &str, email: &str) -> (reqwest::StatusCode, Value) {
    let response = client
        .post(format!("{}/api/sessions/{}/submit", base, id))
        .json(&json!({ "email": email }))
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn analyze_and_submit_delivers_the_payload() {
    let hook = WebhookCapture::start(StatusCode::OK);
    let config = test_config(Some(&hook.url), Duration::from_millis(10));
    let (mut server, base) = start_dashboard(&config).await;
    let client = reqwest::Client::new();

    let id = create_session(&client, &base).await;
    let (status, analyzed) = analyze(&client, &base, &id, json!({ "url": "https://store.example.com" })).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(analyzed["data"]["analysis"], "ready");
    let report = analyzed["data"]["dashboard"]["report"].clone();
    assert_eq!(report["url"], "https://store.example.com");

    let (status, submitted) = submit(&client, &base, &id, "you@company.com").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(submitted["data"]["submission"], "sent");

    let received = hook.received();
    assert_eq!(received.len(), 1);
    let (content_type, payload) = &received[0];
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(payload["email"], "you@company.com");
    assert_eq!(payload["url"], "https://store.example.com");

    let score = report["score"].as_f64().unwrap();
    assert_eq!(payload["technical_score"].as_u64().unwrap(), (score * 10.0).round() as u64);
    assert_eq!(payload["seo_score"], report["technical"]["seoScore"]);
    assert_eq!(payload["performance_data"]["LCP"], report["technical"]["loadSpeed"]);

    let expected_speed = match classify(report["technical"]["loadSpeed"].as_str().unwrap()).as_str() {
        "success" => "Fast",
        "warning" => "Average",
        _ => "Slow",
    };
    assert_eq!(payload["performance_data"]["speed"], expected_speed);
    assert_eq!(payload["roadmap"], report["roadmap_30_days"]);

    let (status, _) = submit(&client, &base, &id, "you@company.com").await;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(hook.received().len(), 1);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn rejected_delivery_marks_the_submission_failed() {
    let hook = WebhookCapture::start(StatusCode::INTERNAL_SERVER_ERROR);
    let config = test_config(Some(&hook.url), Duration::from_millis(10));
    let (mut server, base) = start_dashboard(&config).await;
    let client = reqwest::Client::new();

    let id = create_session(&client, &base).await;
    analyze(&client, &base, &id, json!({ "url": "https://example.com" })).await;
    let (status, submitted) = submit(&client, &base, &id, "you@company.com").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(submitted["data"]["submission"], "failed");
    assert!(submitted["data"]["error"].as_str().unwrap().contains("couldn't send"));
    assert_eq!(hook.received().len(), 1);

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn submit_without_report_or_email_never_calls_the_webhook() {
    let hook = WebhookCapture::start(StatusCode::OK);
    let config = test_config(Some(&hook.url), Duration::from_millis(10));
    let (mut server, base) = start_dashboard(&config).await;
    let client = reqwest::Client::new();

    let id = create_session(&client, &base).await;
    let (status, _) = submit(&client, &base, &id, "you@company.com").await;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);

    analyze(&client, &base, &id, json!({ "url": "https://example.com" })).await;
    let (status, body) = submit(&client, &base, &id, "").await;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    assert!(hook.received().is_empty());
    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn analysis_takes_at_least_the_configured_delay() {
    let config = test_config(None, Duration::from_millis(150));
    let (mut server, base) = start_dashboard(&config).await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &base).await;

    let started = Instant::now();
    let (_, analyzed) = analyze(&client, &base, &id, json!({ "url": "https://example.com" })).await;
    assert!(started.elapsed() >= Duration::from_millis(150));
    assert_eq!(analyzed["data"]["analysis"], "ready");

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn consent_gate_blocks_analysis() {
    let mut config = test_config(None, Duration::from_millis(10));
    config.server.require_consent = true;
    let (mut server, base) = start_dashboard(&config).await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &base).await;

    let (status, _) = analyze(&client, &base, &id, json!({ "url": "https://example.com" })).await;
    assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);

    let (status, body) = analyze(&client, &base, &id, json!({ "url": "https://example.com", "consent": true })).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body["data"]["analysis"], "ready");

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn each_analysis_replaces_the_previous_report() {
    let config = test_config(None, Duration::from_millis(10));
    let (mut server, base) = start_dashboard(&config).await;
    let client = reqwest::Client::new();
    let id = create_session(&client, &base).await;

    analyze(&client, &base, &id, json!({ "url": "https://first.example" })).await;
    let (_, second) = analyze(&client, &base, &id, json!({ "url": "https://second.example" })).await;
    assert_eq!(second["data"]["dashboard"]["report"]["url"], "https://second.example");

    let fetched: Value = client
        .get(format!("{}/api/sessions/{}", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["data"]["url"], "https://second.example");
    assert_eq!(fetched["data"]["dashboard"]["report"]["url"], "https://second.example");

    server.shutdown().await.unwrap();
}

#[tokio::test]
async fn classify_endpoint_uses_the_threshold_table() {
    let config = test_config(None, Duration::from_millis(10));
    let (mut server, base) = start_dashboard(&config).await;
    let client = reqwest::Client::new();

    for (duration, expected, badge) in [
        ("2.5s", "success", "Optimized"),
        ("2.51s", "warning", "Warning"),
        ("4.01s", "critical", "Critical"),
    ] {
        let body: Value = client
            .get(format!("{}/api/classify/{}", base, duration))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["data"]["status"], expected);
        assert_eq!(body["data"]["badge"], badge);
    }

    server.shutdown().await.unwrap();
}
