use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiReadiness {
    pub schema_detected: bool,
    pub json_ld_type: String,
    pub aeo_score: u8,
    pub impact_label: String,
}
