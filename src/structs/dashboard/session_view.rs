use serde::{Deserialize, Serialize};
use crate::enums::analysis_state::AnalysisState;
use crate::enums::submission_state::SubmissionState;
use crate::structs::dashboard::dashboard_view::DashboardView;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub session_id: String,
    pub url: Option<String>,
    pub analysis: AnalysisState,
    pub submission: SubmissionState,
    pub error: Option<String>,
    pub dashboard: Option<DashboardView>,
}
