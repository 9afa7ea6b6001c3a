use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GeneratorConfig {
    #[serde(default = "ConfigHelper::default_delay_ms")]
    pub min_delay_ms: u64,

    #[serde(default = "ConfigHelper::default_delay_ms")]
    pub max_delay_ms: u64,

    /// Fixes the random source so repeated runs produce the same reports.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: ConfigHelper::default_delay_ms(),
            max_delay_ms: ConfigHelper::default_delay_ms(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_delay(delay: Duration) -> Self {
        let millis = delay.as_millis() as u64;
        Self {
            min_delay_ms: millis,
            max_delay_ms: millis,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
