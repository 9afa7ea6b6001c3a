use crate::enums::status::Status;
use crate::services::status_classifier::StatusClassifier;
use crate::structs::dashboard::audit_card::AuditCard;
use crate::structs::dashboard::audit_session::AuditSession;
use crate::structs::dashboard::dashboard_view::DashboardView;
use crate::structs::dashboard::metric_tile::MetricTile;
use crate::structs::dashboard::session_view::SessionView;
use crate::structs::report::audit_report::AuditReport;

pub struct ReportPresenter;

impl ReportPresenter {
    pub fn header(report: &AuditReport) -> Vec<MetricTile> {
        vec![
            MetricTile::new("Technical Score", format!("{}/100", report.technical_score()), "+12%"),
            MetricTile::new("SEO Health", format!("{}%", report.technical.seo_score), "+5%"),
            MetricTile::new("Trust Signals", "High".to_string(), "Stable"),
        ]
    }

    pub fn technical_cards(report: &AuditReport, classifier: &StatusClassifier) -> Vec<AuditCard> {
        vec![
            AuditCard::new(
                "Platform",
                Status::Success,
                format!("Detected {}.", report.technical.platform),
            ),
            AuditCard::new(
                "Performance (LCP)",
                classifier.classify(&report.technical.load_speed),
                format!("Largest Contentful Paint: {}.", report.technical.load_speed),
            ),
        ]
    }

    pub fn marketing_cards(report: &AuditReport) -> Vec<AuditCard> {
        vec![
            AuditCard::new("Value Prop", Status::Info, report.marketing.value_proposition.clone()),
            AuditCard::new("VIP Rec", Status::Critical, report.marketing.vip_recommendation.clone()),
        ]
    }

    pub fn dashboard(report: &AuditReport, classifier: &StatusClassifier) -> DashboardView {
        DashboardView {
            header: Self::header(report),
            technical_cards: Self::technical_cards(report, classifier),
            marketing_cards: Self::marketing_cards(report),
            report: report.clone(),
        }
    }

    pub fn session(session: &AuditSession, classifier: &StatusClassifier) -> SessionView {
        SessionView {
            session_id: session.id.clone(),
            url: session.url.clone(),
            analysis: session.analysis,
            submission: session.submission,
            error: session.error.clone(),
            dashboard: session.report.as_ref().map(|report| Self::dashboard(report, classifier)),
        }
    }
}
