use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::config::generator_config::GeneratorConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::webhook_config::WebhookConfig;
use crate::structs::threshold_rule::ThresholdRule;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub webhook: WebhookConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default = "ConfigHelper::default_thresholds")]
    pub thresholds: Vec<ThresholdRule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            webhook: WebhookConfig::default(),
            server: ServerConfig::default(),
            thresholds: ConfigHelper::default_thresholds(),
        }
    }
}
