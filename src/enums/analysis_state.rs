use serde::{Deserialize, Serialize};

/// `Idle -> Analyzing -> {Ready, Failed}`; a new request re-enters `Analyzing`
/// from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    Idle,
    Analyzing,
    Ready,
    Failed,
}

impl Default for AnalysisState {
    fn default() -> Self {
        AnalysisState::Idle
    }
}

impl AnalysisState {
    pub fn is_busy(&self) -> bool {
        matches!(self, AnalysisState::Analyzing)
    }
}
