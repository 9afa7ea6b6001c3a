use std::sync::Arc;
use crate::errors::{AuditError, AuditResult};
use crate::helpers::input_validator::InputValidator;
use crate::services::report_presenter::ReportPresenter;
use crate::services::report_submitter::ReportSubmitter;
use crate::services::status_classifier::StatusClassifier;
use crate::structs::dashboard::session_view::SessionView;
use crate::traits::report_source::ReportSource;
use crate::ui::session_manager::SessionManager;

const SUBMISSION_FAILED_MESSAGE: &str = "We couldn't send the report. Please try again.";
const ANALYSIS_FAILED_MESSAGE: &str = "The analysis could not be completed. Please submit the URL again.";

/// Drives one visitor's analyze / submit flow on top of the session store.
///
/// Input problems come back as `Err`; failures of the work itself are
/// recorded on the session and returned as a normal view in the `failed` state.
pub struct AuditService {
    source: Arc<dyn ReportSource>,
    submitter: Arc<ReportSubmitter>,
    sessions: Arc<SessionManager>,
    classifier: StatusClassifier,
    require_consent: bool,
}

impl AuditService {
    pub fn new(
        source: Arc<dyn ReportSource>,
        submitter: Arc<ReportSubmitter>,
        sessions: Arc<SessionManager>,
        classifier: StatusClassifier,
    ) -> Self {
        Self {
            source,
            submitter,
            sessions,
            classifier,
            require_consent: false,
        }
    }

    pub fn with_consent_required(mut self, required: bool) -> Self {
        self.require_consent = required;
        self
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    pub fn classifier(&self) -> &StatusClassifier {
        &self.classifier
    }

    pub fn create_session(&self) -> String {
        self.sessions.create_session()
    }

    pub fn snapshot(&self, session_id: &str) -> AuditResult<SessionView> {
        self.sessions
            .get_session(session_id)
            .map(|session| ReportPresenter::session(&session, &self.classifier))
            .ok_or_else(|| AuditError::session_not_found(session_id))
    }

    pub async fn analyze(&self, session_id: &str, url: &str, consent: Option<bool>) -> AuditResult<SessionView> {
        let url = InputValidator::validate_url(url)?;
        if self.require_consent && consent != Some(true) {
            return Err(AuditError::validation_error(
                "consent",
                &format!("{:?}", consent),
                "must be accepted",
                Some("Accept the privacy notice to run the audit"),
            ));
        }

        let generation = self.sessions.begin_analysis(session_id, &url)?;
        log::info!("🔍 Analyzing {} ({} source, session {})", url, self.source.name(), session_id);

        match self.source.generate(&url).await {
            Ok(report) => {
                if !self.sessions.complete_analysis(session_id, generation, report)? {
                    log::debug!("Analysis of {} superseded by a newer request", url);
                }
            }
            Err(e) => {
                log::error!("Analysis failed: {}", e.technical_details());
                self.sessions.fail_analysis(session_id, generation, ANALYSIS_FAILED_MESSAGE)?;
            }
        }

        self.snapshot(session_id)
    }

    pub async fn submit(&self, session_id: &str, email: &str) -> AuditResult<SessionView> {
        let email = InputValidator::validate_email(email)?;
        let (report, generation) = self.sessions.begin_submission(session_id)?;

        let outcome = self.submitter.submit(&email, Some(&report)).await;
        match &outcome {
            Ok(()) => {
                self.sessions.finish_submission(session_id, generation, Ok(()))?;
            }
            Err(e) => {
                log::error!("Failed to send report: {}", e.technical_details());
                self.sessions.finish_submission(session_id, generation, Err(SUBMISSION_FAILED_MESSAGE))?;
            }
        }

        self.snapshot(session_id)
    }
}
