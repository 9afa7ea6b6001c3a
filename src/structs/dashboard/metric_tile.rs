use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTile {
    pub title: String,
    pub value: String,
    pub trend: String,
}

impl MetricTile {
    pub fn new(title: &str, value: String, trend: &str) -> Self {
        Self {
            title: title.to_string(),
            value,
            trend: trend.to_string(),
        }
    }
}
