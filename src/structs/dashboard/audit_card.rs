use serde::{Deserialize, Serialize};
use crate::enums::status::Status;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditCard {
    pub title: String,
    pub status: Status,
    pub description: String,
    pub badge: String,
    pub tone: String,
    pub icon: String,
}

impl AuditCard {
    pub fn new(title: &str, status: Status, description: String) -> Self {
        Self {
            title: title.to_string(),
            status,
            description,
            badge: status.badge_label().to_string(),
            tone: status.tone().to_string(),
            icon: status.icon().to_string(),
        }
    }
}
