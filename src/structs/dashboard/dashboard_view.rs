use serde::{Deserialize, Serialize};
use crate::structs::dashboard::audit_card::AuditCard;
use crate::structs::dashboard::metric_tile::MetricTile;
use crate::structs::report::audit_report::AuditReport;

/// Everything the dashboard renders for a finished report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub header: Vec<MetricTile>,
    pub technical_cards: Vec<AuditCard>,
    pub marketing_cards: Vec<AuditCard>,
    pub report: AuditReport,
}
