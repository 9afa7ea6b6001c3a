use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingInsights {
    pub value_proposition: String,
    pub copy_tone: String,
    pub vip_recommendation: String,
}
