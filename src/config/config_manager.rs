use std::fs;
use std::path::{Path, PathBuf};
use reqwest::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::errors::{AuditError, AuditResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

const SAMPLE_CONFIG: &str = r#"# VertexPoint Audit Configuration

[generator]
# Simulated analysis time; a delay is drawn from [min_delay_ms, max_delay_ms]
min_delay_ms = 2500
max_delay_ms = 2500

# Uncomment to make every report reproducible
# seed = 42

[webhook]
# Lead-capture endpoint. The variable named by url_env takes precedence.
# url = "https://hook.eu1.make.com/your-scenario-id"
url_env = "VERTEXPOINT_WEBHOOK_URL"
consultant = "Jose Serna Acevedo"

# Extra headers sent with every submission
[webhook.headers]
# X-Source = "vertexpoint-dashboard"

[server]
host = "127.0.0.1"
port = 8080
require_consent = false

# Load-speed bands, checked in order; anything above the last bound is critical
[[thresholds]]
metric = "lcp"
upper_bound = 2.5
label = "success"

[[thresholds]]
metric = "lcp"
upper_bound = 4.0
label = "warning"
"#;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load() -> AuditResult<Config> {
        Self::load_from(&Self::config_path())
    }

    /// A missing file is not an error; defaults apply.
    pub fn load_from(path: &Path) -> AuditResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| AuditError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| AuditError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn create_sample_config() -> AuditResult<PathBuf> {
        let path = Self::config_path();
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> AuditResult<()> {
        if path.exists() {
            return Err(AuditError::config_error(
                &format!("Configuration already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it before running init"),
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<AuditError>> {
        let mut errors = Vec::new();

        let generator = &config.generator;
        if generator.min_delay_ms > generator.max_delay_ms {
            errors.push(AuditError::validation_error(
                "generator.min_delay_ms",
                &generator.min_delay_ms.to_string(),
                &format!("must not exceed max_delay_ms ({})", generator.max_delay_ms),
                None,
            ));
        }

        if let Some(url) = &config.webhook.url {
            if Url::parse(url).is_err() {
                errors.push(AuditError::validation_error("webhook.url", url, "must be an absolute URL", None));
            }
        }

        if config.server.host.trim().is_empty() {
            errors.push(AuditError::validation_error("server.host", &config.server.host, "required", None));
        }

        if config.thresholds.is_empty() {
            errors.push(AuditError::config_error(
                "At least one threshold band is required",
                Some("thresholds"),
                Some("Run 'vertexpoint init' to see the default bands"),
            ));
        }

        for pair in config.thresholds.windows(2) {
            if pair[0].metric == pair[1].metric && pair[0].upper_bound >= pair[1].upper_bound {
                errors.push(AuditError::validation_error(
                    "thresholds",
                    &format!("{} then {}", pair[0].upper_bound, pair[1].upper_bound),
                    "upper bounds must increase within a metric",
                    None,
                ));
            }
        }

        for rule in &config.thresholds {
            if !rule.upper_bound.is_finite() {
                errors.push(AuditError::validation_error("thresholds.upper_bound", &rule.upper_bound.to_string(), "must be finite", None));
            }
            if !rule.label.is_classifier_outcome() {
                errors.push(AuditError::validation_error(
                    "thresholds.label",
                    rule.label.as_str(),
                    "must be success, warning or critical",
                    None,
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
