use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct WebhookConfig {
    /// Endpoint used when the environment variable named by `url_env` is unset.
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "ConfigHelper::default_webhook_url_env")]
    pub url_env: String,

    #[serde(default = "ConfigHelper::default_consultant")]
    pub consultant: String,

    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            url_env: ConfigHelper::default_webhook_url_env(),
            consultant: ConfigHelper::default_consultant(),
            headers: HashMap::new(),
        }
    }
}

impl WebhookConfig {
    /// Resolves the endpoint at call time; the environment wins over the file.
    pub fn resolve_url(&self) -> Option<String> {
        std::env::var(&self.url_env)
            .ok()
            .or_else(|| self.url.clone())
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }
}
