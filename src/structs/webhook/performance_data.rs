use serde::{Deserialize, Serialize};
use crate::enums::speed_label::SpeedLabel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    #[serde(rename = "LCP")]
    pub lcp: String,
    pub speed: SpeedLabel,
}
