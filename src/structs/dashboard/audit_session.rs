use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::analysis_state::AnalysisState;
use crate::enums::submission_state::SubmissionState;
use crate::structs::report::audit_report::AuditReport;

/// Transient per-visitor state: one report at most, replaced by each new analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditSession {
    pub id: String,
    pub url: Option<String>,
    pub analysis: AnalysisState,
    pub submission: SubmissionState,
    pub report: Option<AuditReport>,
    pub error: Option<String>,
    /// Bumped by every analysis request; only the latest one may publish.
    pub generation: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AuditSession {
    pub fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            url: None,
            analysis: AnalysisState::Idle,
            submission: SubmissionState::Idle,
            report: None,
            error: None,
            generation: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
