use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingSummary {
    pub value_prop: String,
    pub tone: String,
}
