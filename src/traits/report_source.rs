use async_trait::async_trait;
use crate::errors::AuditResult;
use crate::structs::report::audit_report::AuditReport;

/// Anything that can produce an audit report for a URL.
///
/// The dashboard and CLI only see this trait, so the simulated generator can
/// be swapped for a real crawler without touching either.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn generate(&self, url: &str) -> AuditResult<AuditReport>;

    fn name(&self) -> &'static str;
}
