use serde::{Deserialize, Serialize};

/// `Idle -> Sending -> {Sent, Failed}`; resets to `Idle` whenever a new
/// analysis starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Sending,
    Sent,
    Failed,
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

impl SubmissionState {
    /// The lead form stays locked while a send is in flight or after it succeeded.
    pub fn accepts_submission(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed)
    }
}
