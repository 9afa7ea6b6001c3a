use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustCheckItem {
    pub item: String,
    pub status: bool,
}
