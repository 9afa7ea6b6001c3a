use serde::{Deserialize, Serialize};
use crate::enums::platform::Platform;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalMetrics {
    pub platform: Platform,
    /// Simulated Largest Contentful Paint, e.g. `"3.2s"`.
    pub load_speed: String,
    pub seo_score: u8,
    pub ssl: String,
    pub mobile_responsive: bool,
}
