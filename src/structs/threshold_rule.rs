use serde::{Deserialize, Serialize};
use crate::enums::status::Status;

/// One band of a classification table: values up to and including
/// `upper_bound` map to `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    pub metric: String,
    pub upper_bound: f64,
    pub label: Status,
}

impl ThresholdRule {
    pub fn new(metric: &str, upper_bound: f64, label: Status) -> Self {
        Self {
            metric: metric.to_string(),
            upper_bound,
            label,
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        value <= self.upper_bound
    }
}
