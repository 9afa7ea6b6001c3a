use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use serde::Serialize;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::Filter;
use crate::config::constants::{
    MAX_SESSION_ID_LENGTH, SERVER_SHUTDOWN_GRACE_PERIOD_MS, SESSION_CLEANUP_INTERVAL_SECS, SESSION_TTL_MINUTES,
    sleep_duration_millis,
};
use crate::errors::{AuditError, AuditResult};
use crate::services::audit_service::AuditService;
use crate::structs::api_response::ApiResponse;
use crate::structs::dashboard::requests::{AnalyzeRequest, ClassifyResponse, SubmitRequest};

const MAX_BODY_BYTES: u64 = 16 * 1024;

pub struct DashboardServer {
    service: Arc<AuditService>,
    address: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    cleanup_task: Option<JoinHandle<()>>,
}

impl DashboardServer {
    pub fn new(service: Arc<AuditService>) -> Self {
        Self {
            service,
            address: None,
            shutdown_tx: None,
            cleanup_task: None,
        }
    }

    pub fn address(&self) -> Option<SocketAddr> {
        self.address
    }

    /// Binds and serves in the background. Port 0 picks a free port; the
    /// bound address is returned.
    pub async fn start(&mut self, host: &str, port: u16) -> AuditResult<SocketAddr> {
        let ip: IpAddr = host.parse().map_err(|_| {
            AuditError::validation_error("server.host", host, "must be an IP address", Some("Use 127.0.0.1 or 0.0.0.0"))
        })?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let routes = routes(Arc::clone(&self.service));

        let (address, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown((ip, port), async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| AuditError::system_error("bind dashboard server", &e.to_string()))?;

        tokio::spawn(server);
        self.cleanup_task = Some(spawn_session_cleanup(Arc::clone(&self.service)));
        self.shutdown_tx = Some(shutdown_tx);
        self.address = Some(address);

        log::info!("🌐 Dashboard server started on http://{}", address);
        Ok(address)
    }

    pub async fn shutdown(&mut self) -> AuditResult<()> {
        log::info!("🛑 Shutting down dashboard server...");

        if let Some(task) = self.cleanup_task.take() {
            task.abort();
        }

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx
                .send(())
                .map_err(|_| AuditError::system_error("shutdown", "Failed to send shutdown signal"))?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Dashboard server shutdown complete");
        Ok(())
    }
}

fn spawn_session_cleanup(service: Arc<AuditService>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(SESSION_CLEANUP_INTERVAL_SECS));
        interval.tick().await;
        loop {
            interval.tick().await;
            service
                .sessions()
                .cleanup_expired_sessions(chrono::Duration::minutes(SESSION_TTL_MINUTES));
        }
    })
}

pub fn routes(service: Arc<AuditService>) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map(move || Arc::clone(&service));

    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(include_str!("static/index.html")));

    let create_session = warp::path!("api" / "sessions")
        .and(warp::post())
        .and(service_filter.clone())
        .and_then(create_session_handler);

    let get_session = warp::path!("api" / "sessions" / String)
        .and(warp::get())
        .and(service_filter.clone())
        .and_then(get_session_handler);

    let analyze = warp::path!("api" / "sessions" / String / "analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(analyze_handler);

    let submit = warp::path!("api" / "sessions" / String / "submit")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(service_filter.clone())
        .and_then(submit_handler);

    let classify = warp::path!("api" / "classify" / String)
        .and(warp::get())
        .and(service_filter)
        .and_then(classify_handler);

    index
        .or(create_session)
        .or(get_session)
        .or(analyze)
        .or(submit)
        .or(classify)
        .with(warp::log("vertexpoint::dashboard"))
}

fn sanitize_session_id(session_id: &str) -> String {
    session_id
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_SESSION_ID_LENGTH)
        .collect()
}

fn json_reply<T: Serialize>(body: &ApiResponse<T>, status: StatusCode) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(body), status)
}

fn error_reply(error: &AuditError) -> WithStatus<Json> {
    let status = match error {
        AuditError::ValidationError { .. } => StatusCode::BAD_REQUEST,
        AuditError::SessionNotFound { .. } => StatusCode::NOT_FOUND,
        AuditError::ConfigurationError { .. } => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    json_reply(&ApiResponse::<()>::error(&error.to_string()), status)
}

fn invalid_session_reply() -> WithStatus<Json> {
    json_reply(&ApiResponse::<()>::error("Invalid session ID"), StatusCode::BAD_REQUEST)
}

async fn create_session_handler(service: Arc<AuditService>) -> Result<WithStatus<Json>, Infallible> {
    let session_id = service.create_session();
    match service.snapshot(&session_id) {
        Ok(view) => Ok(json_reply(&ApiResponse::ok(view, "Session created"), StatusCode::CREATED)),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn get_session_handler(session_id: String, service: Arc<AuditService>) -> Result<WithStatus<Json>, Infallible> {
    let session_id = sanitize_session_id(&session_id);
    if session_id.is_empty() {
        return Ok(invalid_session_reply());
    }

    match service.snapshot(&session_id) {
        Ok(view) => Ok(json_reply(&ApiResponse::ok(view, "Session found"), StatusCode::OK)),
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn analyze_handler(
    session_id: String,
    body: AnalyzeRequest,
    service: Arc<AuditService>,
) -> Result<WithStatus<Json>, Infallible> {
    let session_id = sanitize_session_id(&session_id);
    if session_id.is_empty() {
        return Ok(invalid_session_reply());
    }

    match service.analyze(&session_id, &body.url, body.consent).await {
        Ok(view) => {
            let message = view.error.clone().unwrap_or_else(|| "Analysis complete".to_string());
            Ok(json_reply(&ApiResponse::ok(view, &message), StatusCode::OK))
        }
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn submit_handler(
    session_id: String,
    body: SubmitRequest,
    service: Arc<AuditService>,
) -> Result<WithStatus<Json>, Infallible> {
    let session_id = sanitize_session_id(&session_id);
    if session_id.is_empty() {
        return Ok(invalid_session_reply());
    }

    match service.submit(&session_id, &body.email).await {
        Ok(view) => {
            let message = view.error.clone().unwrap_or_else(|| "Report sent".to_string());
            Ok(json_reply(&ApiResponse::ok(view, &message), StatusCode::OK))
        }
        Err(e) => Ok(error_reply(&e)),
    }
}

async fn classify_handler(duration: String, service: Arc<AuditService>) -> Result<WithStatus<Json>, Infallible> {
    let status = service.classifier().classify(&duration);
    let response = ClassifyResponse {
        badge: status.badge_label().to_string(),
        status,
        duration,
    };
    Ok(json_reply(&ApiResponse::ok(response, "Classified"), StatusCode::OK))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::services::report_generator::SimulatedReportSource;
    use crate::services::report_submitter::ReportSubmitter;
    use crate::services::status_classifier::StatusClassifier;
    use crate::structs::config::generator_config::GeneratorConfig;
    use crate::structs::config::webhook_config::WebhookConfig;
    use crate::ui::session_manager::SessionManager;

    fn service() -> Arc<AuditService> {
        let classifier = StatusClassifier::lcp().clone();
        let source = SimulatedReportSource::new(GeneratorConfig::with_delay(Duration::ZERO), classifier.clone());
        let webhook = WebhookConfig {
            url_env: "VERTEXPOINT_TEST_ROUTES_UNSET".to_string(),
            ..WebhookConfig::default()
        };
        Arc::new(AuditService::new(
            Arc::new(source),
            Arc::new(ReportSubmitter::new(webhook, classifier.clone())),
            Arc::new(SessionManager::new()),
            classifier,
        ))
    }

    #[test]
    fn session_ids_are_sanitized() {
        assert_eq!(sanitize_session_id("abc-123_x"), "abc-123_x");
        assert_eq!(sanitize_session_id("../../etc"), "etc");
        assert_eq!(sanitize_session_id(&"a".repeat(100)).len(), MAX_SESSION_ID_LENGTH);
    }

    #[tokio::test]
    async fn index_serves_the_dashboard() {
        let response = warp::test::request().method("GET").path("/").reply(&routes(service())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(String::from_utf8_lossy(response.body()).contains("VertexPoint"));
    }

    #[tokio::test]
    async fn classify_route_reports_the_band() {
        let routes = routes(service());
        for (duration, expected) in [("2.5s", "success"), ("4.0s", "warning"), ("abcs", "critical")] {
            let response = warp::test::request()
                .method("GET")
                .path(&format!("/api/classify/{}", duration))
                .reply(&routes)
                .await;
            let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
            assert_eq!(body["data"]["status"], expected);
        }
    }

    #[tokio::test]
    async fn analyze_then_fetch_session() {
        let routes = routes(service());

        let created = warp::test::request().method("POST").path("/api/sessions").reply(&routes).await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: serde_json::Value = serde_json::from_slice(created.body()).unwrap();
        let id = created["data"]["session_id"].as_str().unwrap().to_string();

        let analyzed = warp::test::request()
            .method("POST")
            .path(&format!("/api/sessions/{}/analyze", id))
            .json(&serde_json::json!({ "url": "https://example.com" }))
            .reply(&routes)
            .await;
        assert_eq!(analyzed.status(), StatusCode::OK);

        let fetched = warp::test::request()
            .method("GET")
            .path(&format!("/api/sessions/{}", id))
            .reply(&routes)
            .await;
        let body: serde_json::Value = serde_json::from_slice(fetched.body()).unwrap();
        assert_eq!(body["data"]["analysis"], "ready");
        assert_eq!(body["data"]["dashboard"]["report"]["url"], "https://example.com");
    }

    #[tokio::test]
    async fn bad_input_maps_to_client_errors() {
        let routes = routes(service());

        let missing = warp::test::request().method("GET").path("/api/sessions/unknown").reply(&routes).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let created = warp::test::request().method("POST").path("/api/sessions").reply(&routes).await;
        let created: serde_json::Value = serde_json::from_slice(created.body()).unwrap();
        let id = created["data"]["session_id"].as_str().unwrap().to_string();

        let bad_url = warp::test::request()
            .method("POST")
            .path(&format!("/api/sessions/{}/analyze", id))
            .json(&serde_json::json!({ "url": "example" }))
            .reply(&routes)
            .await;
        assert_eq!(bad_url.status(), StatusCode::BAD_REQUEST);

        let early_submit = warp::test::request()
            .method("POST")
            .path(&format!("/api/sessions/{}/submit", id))
            .json(&serde_json::json!({ "email": "you@company.com" }))
            .reply(&routes)
            .await;
        assert_eq!(early_submit.status(), StatusCode::BAD_REQUEST);
    }
}
