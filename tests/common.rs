use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use serde_json::Value;
use warp::http::StatusCode;
use warp::Filter;
use vertexpoint::structs::config::config::Config;
use vertexpoint::structs::config::generator_config::GeneratorConfig;
use vertexpoint::ui::dashboard_server::DashboardServer;
use vertexpoint::workers::command_runner::CommandRunner;

/// A received webhook call: the Content-Type header and the JSON body.
pub type Captured = (Option<String>, Value);

/// Local stand-in for the lead-capture endpoint.
pub struct WebhookCapture {
    pub url: String,
    received: Arc<Mutex<Vec<Captured>>>,
}

impl WebhookCapture {
    pub fn start(status: StatusCode) -> Self {
        let received: Arc<Mutex<Vec<Captured>>> = Arc::new(Mutex::new(Vec::new()));
        let store = Arc::clone(&received);

        let route = warp::path("hook")
            .and(warp::post())
            .and(warp::header::optional::<String>("content-type"))
            .and(warp::body::json())
            .map(move |content_type: Option<String>, body: Value| {
                store.lock().unwrap().push((content_type, body));
                warp::reply::with_status("ok", status)
            });

        let (address, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);

        Self {
            url: format!("http://{}/hook", address),
            received,
        }
    }

    pub fn received(&self) -> Vec<Captured> {
        self.received.lock().unwrap().clone()
    }
}

/// Config with a short delay, a fixed seed and an env override name nobody sets.
pub fn test_config(webhook_url: Option<&str>, delay: Duration) -> Config {
    let mut config = Config::default();
    config.generator = GeneratorConfig::with_delay(delay).with_seed(21);
    config.webhook.url = webhook_url.map(|u| u.to_string());
    config.webhook.url_env = "VERTEXPOINT_INTEGRATION_UNSET".to_string();
    config
}

pub async fn start_dashboard(config: &Config) -> (DashboardServer, String) {
    let service = Arc::new(CommandRunner::build_service(config));
    let mut server = DashboardServer::new(service);
    let address: SocketAddr = server.start("127.0.0.1", 0).await.unwrap();
    (server, format!("http://{}", address))
}

pub async fn create_session(client: &reqwest::Client, base: &str) -> String {
    let body: Value = client
        .post(format!("{}/api/sessions", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body["data"]["session_id"].as_str().unwrap().to_string()
}
