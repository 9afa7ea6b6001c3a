use serde::{Deserialize, Serialize};
use crate::structs::report::ai_readiness::AiReadiness;
use crate::structs::report::marketing_insights::MarketingInsights;
use crate::structs::report::revenue_impact::RevenueImpact;
use crate::structs::report::roadmap_item::RoadmapItem;
use crate::structs::report::technical_metrics::TechnicalMetrics;
use crate::structs::report::trust_check_item::TrustCheckItem;

/// Synthetic audit record produced once per analysis request.
///
/// Fields are filled by independent draws; `score` is not derived from
/// `technical` or `marketing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub url: String,
    pub score: f64,
    pub technical: TechnicalMetrics,
    pub marketing: MarketingInsights,
    pub ai_readiness: AiReadiness,
    pub revenue_impact: RevenueImpact,
    pub roadmap_30_days: Vec<RoadmapItem>,
    pub trust_checklist: Vec<TrustCheckItem>,
}

impl AuditReport {
    /// Score on the 0-100 scale shown in the dashboard header and sent to the webhook.
    pub fn technical_score(&self) -> u32 {
        (self.score * 10.0).round() as u32
    }
}
