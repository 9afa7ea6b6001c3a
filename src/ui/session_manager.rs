use std::sync::Arc;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;
use crate::enums::analysis_state::AnalysisState;
use crate::enums::submission_state::SubmissionState;
use crate::errors::{AuditError, AuditResult};
use crate::structs::dashboard::audit_session::AuditSession;
use crate::structs::report::audit_report::AuditReport;

/// Owns every dashboard session and enforces the two state machines.
///
/// Analysis: `Idle -> Analyzing -> {Ready, Failed}`. Submission:
/// `Idle -> Sending -> {Sent, Failed}`. Completions carry the generation they
/// were started under and are dropped when a newer analysis has begun.
pub struct SessionManager {
    sessions: Arc<DashMap<String, AuditSession>>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    pub fn create_session(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions.insert(session_id.clone(), AuditSession::new(session_id.clone()));
        log::debug!("Created session {}", session_id);
        session_id
    }

    pub fn get_session(&self, session_id: &str) -> Option<AuditSession> {
        self.sessions.get(session_id).map(|session| session.clone())
    }

    /// Starts a new analysis and returns its generation. The previous report
    /// and any submission outcome are cleared.
    pub fn begin_analysis(&self, session_id: &str, url: &str) -> AuditResult<u64> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| AuditError::session_not_found(session_id))?;

        if session.analysis.is_busy() {
            log::warn!("Session {} started a new analysis while one is in flight", session_id);
        }

        session.generation += 1;
        session.url = Some(url.to_string());
        session.analysis = AnalysisState::Analyzing;
        session.submission = SubmissionState::Idle;
        session.report = None;
        session.error = None;
        session.touch();

        Ok(session.generation)
    }

    /// Returns `false` when the result belongs to a superseded analysis.
    pub fn complete_analysis(&self, session_id: &str, generation: u64, report: AuditReport) -> AuditResult<bool> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| AuditError::session_not_found(session_id))?;

        if session.generation != generation {
            log::debug!("Dropping stale analysis {} for session {}", generation, session_id);
            return Ok(false);
        }

        session.analysis = AnalysisState::Ready;
        session.report = Some(report);
        session.touch();
        Ok(true)
    }

    pub fn fail_analysis(&self, session_id: &str, generation: u64, message: &str) -> AuditResult<bool> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| AuditError::session_not_found(session_id))?;

        if session.generation != generation {
            return Ok(false);
        }

        session.analysis = AnalysisState::Failed;
        session.error = Some(message.to_string());
        session.touch();
        Ok(true)
    }

    /// Moves the submission machine to `Sending` and hands back the report to
    /// send together with the analysis generation it belongs to.
    pub fn begin_submission(&self, session_id: &str) -> AuditResult<(AuditReport, u64)> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| AuditError::session_not_found(session_id))?;

        let report = match (&session.analysis, &session.report) {
            (AnalysisState::Ready, Some(report)) => report.clone(),
            _ => {
                return Err(AuditError::validation_error(
                    "report",
                    "none",
                    "an analysis must finish first",
                    Some("Analyze a URL before requesting the report"),
                ))
            }
        };

        if !session.submission.accepts_submission() {
            return Err(AuditError::validation_error(
                "submission",
                &format!("{:?}", session.submission),
                "the report is already being sent or was sent",
                None,
            ));
        }

        session.submission = SubmissionState::Sending;
        session.error = None;
        session.touch();
        Ok((report, session.generation))
    }

    pub fn finish_submission(&self, session_id: &str, generation: u64, outcome: Result<(), &str>) -> AuditResult<bool> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| AuditError::session_not_found(session_id))?;

        if session.generation != generation || session.submission != SubmissionState::Sending {
            return Ok(false);
        }

        match outcome {
            Ok(()) => {
                session.submission = SubmissionState::Sent;
                session.error = None;
            }
            Err(message) => {
                session.submission = SubmissionState::Failed;
                session.error = Some(message.to_string());
            }
        }
        session.touch();
        Ok(true)
    }

    /// Drops sessions untouched for longer than `ttl`; returns how many went.
    pub fn cleanup_expired_sessions(&self, ttl: Duration) -> usize {
        let cutoff = Utc::now() - ttl;
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.updated_at >= cutoff);
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            log::info!("🧹 Removed {} expired sessions", removed);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;
    use crate::services::report_generator::SimulatedReportSource;
    use crate::services::status_classifier::StatusClassifier;
    use crate::structs::config::generator_config::GeneratorConfig;

    fn report(url: &str) -> AuditReport {
        let config = GeneratorConfig::with_delay(StdDuration::ZERO);
        SimulatedReportSource::new(config, StatusClassifier::lcp().clone()).build_report(url)
    }

    #[test]
    fn analysis_moves_from_idle_to_ready() {
        let manager = SessionManager::new();
        let id = manager.create_session();
        assert_eq!(manager.get_session(&id).unwrap().analysis, AnalysisState::Idle);

        let generation = manager.begin_analysis(&id, "https://a.example").unwrap();
        assert_eq!(manager.get_session(&id).unwrap().analysis, AnalysisState::Analyzing);

        assert!(manager.complete_analysis(&id, generation, report("https://a.example")).unwrap());
        let session = manager.get_session(&id).unwrap();
        assert_eq!(session.analysis, AnalysisState::Ready);
        assert_eq!(session.report.unwrap().url, "https://a.example");
    }

    #[test]
    fn failed_analysis_keeps_no_report() {
        let manager = SessionManager::new();
        let id = manager.create_session();
        let generation = manager.begin_analysis(&id, "https://a.example").unwrap();
        assert!(manager.fail_analysis(&id, generation, "boom").unwrap());

        let session = manager.get_session(&id).unwrap();
        assert_eq!(session.analysis, AnalysisState::Failed);
        assert!(session.report.is_none());
        assert_eq!(session.error.as_deref(), Some("boom"));
    }

    #[test]
    fn stale_completion_cannot_overwrite_a_newer_request() {
        let manager = SessionManager::new();
        let id = manager.create_session();
        let first = manager.begin_analysis(&id, "https://first.example").unwrap();
        let second = manager.begin_analysis(&id, "https://second.example").unwrap();

        assert!(manager.complete_analysis(&id, second, report("https://second.example")).unwrap());
        assert!(!manager.complete_analysis(&id, first, report("https://first.example")).unwrap());
        assert!(!manager.fail_analysis(&id, first, "late failure").unwrap());

        let session = manager.get_session(&id).unwrap();
        assert_eq!(session.analysis, AnalysisState::Ready);
        assert_eq!(session.report.unwrap().url, "https://second.example");
    }

    #[test]
    fn submission_requires_a_ready_report() {
        let manager = SessionManager::new();
        let id = manager.create_session();
        assert!(manager.begin_submission(&id).is_err());

        manager.begin_analysis(&id, "https://a.example").unwrap();
        assert!(manager.begin_submission(&id).is_err());
        assert_eq!(manager.get_session(&id).unwrap().submission, SubmissionState::Idle);
    }

    #[test]
    fn submission_moves_from_sending_to_sent_and_locks() {
        let manager = SessionManager::new();
        let id = manager.create_session();
        let generation = manager.begin_analysis(&id, "https://a.example").unwrap();
        manager.complete_analysis(&id, generation, report("https://a.example")).unwrap();

        let (sent_report, submit_generation) = manager.begin_submission(&id).unwrap();
        assert_eq!(sent_report.url, "https://a.example");
        assert_eq!(manager.get_session(&id).unwrap().submission, SubmissionState::Sending);
        assert!(manager.begin_submission(&id).is_err());

        assert!(manager.finish_submission(&id, submit_generation, Ok(())).unwrap());
        assert_eq!(manager.get_session(&id).unwrap().submission, SubmissionState::Sent);
        assert!(manager.begin_submission(&id).is_err());
    }

    #[test]
    fn failed_submission_can_be_retried_by_the_user() {
        let manager = SessionManager::new();
        let id = manager.create_session();
        let generation = manager.begin_analysis(&id, "https://a.example").unwrap();
        manager.complete_analysis(&id, generation, report("https://a.example")).unwrap();

        let (_, g) = manager.begin_submission(&id).unwrap();
        manager.finish_submission(&id, g, Err("could not send")).unwrap();
        let session = manager.get_session(&id).unwrap();
        assert_eq!(session.submission, SubmissionState::Failed);
        assert_eq!(session.error.as_deref(), Some("could not send"));

        assert!(manager.begin_submission(&id).is_ok());
    }

    #[test]
    fn new_analysis_resets_submission() {
        let manager = SessionManager::new();
        let id = manager.create_session();
        let generation = manager.begin_analysis(&id, "https://a.example").unwrap();
        manager.complete_analysis(&id, generation, report("https://a.example")).unwrap();
        let (_, g) = manager.begin_submission(&id).unwrap();

        manager.begin_analysis(&id, "https://b.example").unwrap();
        assert!(!manager.finish_submission(&id, g, Ok(())).unwrap());
        assert_eq!(manager.get_session(&id).unwrap().submission, SubmissionState::Idle);
    }

    #[test]
    fn unknown_session_is_an_error() {
        let manager = SessionManager::new();
        assert!(matches!(
            manager.begin_analysis("missing", "https://a.example"),
            Err(AuditError::SessionNotFound { .. })
        ));
    }

    #[test]
    fn cleanup_drops_only_expired_sessions() {
        let manager = SessionManager::new();
        let old = manager.create_session();
        let fresh = manager.create_session();
        if let Some(mut session) = manager.sessions.get_mut(&old) {
            session.updated_at = Utc::now() - Duration::hours(3);
        }

        assert_eq!(manager.cleanup_expired_sessions(Duration::hours(1)), 1);
        assert!(manager.get_session(&old).is_none());
        assert!(manager.get_session(&fresh).is_some());
    }
}
