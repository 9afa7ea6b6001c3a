use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{AuditError, AuditResult, ErrorHandler};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_printer::ReportPrinter;
use crate::services::audit_service::AuditService;
use crate::services::report_generator::SimulatedReportSource;
use crate::services::report_submitter::ReportSubmitter;
use crate::services::status_classifier::StatusClassifier;
use crate::structs::config::config::Config;
use crate::traits::report_source::ReportSource;
use crate::ui::dashboard_server::DashboardServer;
use crate::ui::session_manager::SessionManager;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> AuditResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Analyze { url, seed, json, email } => self.analyze_command(url, seed, json, email).await,
            Commands::Classify { duration } => self.classify_command(&duration),
            Commands::Serve { port, open } => self.serve_command(port, open).await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> AuditResult<()> {
        log::info!("🚀 Initializing vertexpoint configuration...");
        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to set your webhook endpoint.", path.display());
        log::info!("🔧 Run 'vertexpoint validate' to check your configuration.");
        Ok(())
    }

    async fn analyze_command(&self, url: String, seed: Option<u64>, json: bool, email: Option<String>) -> AuditResult<()> {
        let mut config = ConfigManager::load()?;
        if let Some(seed) = seed {
            config.generator.seed = Some(seed);
        }

        let classifier = StatusClassifier::from_config(&config);
        let source = SimulatedReportSource::from_config(&config);

        let mut spinner = AnimatedLogger::new(&url);
        if !json {
            spinner.start();
        }

        let report = match source.generate(&url).await {
            Ok(report) => {
                spinner.stop("Analysis complete").await;
                report
            }
            Err(e) => {
                spinner.error("Analysis failed").await;
                return Err(e);
            }
        };

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            ReportPrinter::print_report(&report, &classifier);
        }

        if let Some(email) = email {
            let submitter = ReportSubmitter::new(config.webhook.clone(), classifier);
            match submitter.submit(&email, Some(&report)).await {
                Ok(()) => log::info!("📬 Report sent to the webhook for {}", email),
                Err(e) => {
                    ErrorHandler::handle_error(&e);
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    fn classify_command(&self, duration: &str) -> AuditResult<()> {
        let config = ConfigManager::load()?;
        let status = StatusClassifier::from_config(&config).classify(duration);
        println!("{} {} ({})", status.emoji(), status, status.badge_label());
        Ok(())
    }

    async fn serve_command(&self, port: Option<u16>, open: bool) -> AuditResult<()> {
        let config = ConfigManager::load()?;
        if let Err(errors) = ConfigManager::validate_config(&config) {
            ErrorHandler::handle_multiple_errors(&errors, "configuration validation");
            return Err(AuditError::config_error("Invalid configuration", None, Some("Run 'vertexpoint validate' for details")));
        }

        if config.webhook.resolve_url().is_none() {
            log::warn!("⚠️ No webhook endpoint configured; report submissions will fail until {} is set", config.webhook.url_env);
        }

        let service = Arc::new(Self::build_service(&config));
        let mut server = DashboardServer::new(service);
        let address = server.start(&config.server.host, port.unwrap_or(config.server.port)).await?;

        let url = format!("http://{}", address);
        log::info!("👉 Open {} in your browser (Ctrl+C to stop)", url);
        if open {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("Could not open a browser: {}", e);
            }
        }

        tokio::signal::ctrl_c().await?;
        server.shutdown().await
    }

    fn validate_command(&self) -> AuditResult<()> {
        log::info!("🔍 Validating configuration at {}", ConfigManager::config_path().display());
        let config = ConfigManager::load()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                match config.webhook.resolve_url() {
                    Some(url) => log::info!("📨 Webhook endpoint: {}", url),
                    None => log::warn!("⚠️ No webhook endpoint set ({} or [webhook] url)", config.webhook.url_env),
                }
                Ok(())
            }
            Err(errors) => {
                ErrorHandler::handle_multiple_errors(&errors, "configuration validation");
                Err(AuditError::config_error(
                    &format!("{} configuration problem(s) found", errors.len()),
                    None,
                    None,
                ))
            }
        }
    }

    pub fn build_service(config: &Config) -> AuditService {
        let classifier = StatusClassifier::from_config(config);
        let source: Arc<dyn ReportSource> = Arc::new(SimulatedReportSource::from_config(config));
        let submitter = Arc::new(ReportSubmitter::new(config.webhook.clone(), classifier.clone()));

        AuditService::new(source, submitter, Arc::new(SessionManager::new()), classifier)
            .with_consent_required(config.server.require_consent)
    }
}
