use crate::config::constants::{
    DEFAULT_ANALYSIS_DELAY_MS, DEFAULT_CONSULTANT, DEFAULT_DASHBOARD_HOST, DEFAULT_DASHBOARD_PORT,
    LCP_GOOD_UPPER_BOUND_SECS, LCP_METRIC, LCP_NEEDS_IMPROVEMENT_UPPER_BOUND_SECS, WEBHOOK_URL_ENV,
};
use crate::enums::status::Status;
use crate::structs::threshold_rule::ThresholdRule;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_delay_ms() -> u64 {
        DEFAULT_ANALYSIS_DELAY_MS
    }

    pub fn default_webhook_url_env() -> String {
        WEBHOOK_URL_ENV.to_string()
    }

    pub fn default_consultant() -> String {
        DEFAULT_CONSULTANT.to_string()
    }

    pub fn default_host() -> String {
        DEFAULT_DASHBOARD_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_DASHBOARD_PORT
    }

    /// Core Web Vitals LCP bands: good up to 2.5s, needs improvement up to 4.0s.
    pub fn default_thresholds() -> Vec<ThresholdRule> {
        vec![
            ThresholdRule::new(LCP_METRIC, LCP_GOOD_UPPER_BOUND_SECS, Status::Success),
            ThresholdRule::new(LCP_METRIC, LCP_NEEDS_IMPROVEMENT_UPPER_BOUND_SECS, Status::Warning),
        ]
    }
}
