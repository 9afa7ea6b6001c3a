use serde::{Deserialize, Serialize};
use crate::structs::report::revenue_impact::RevenueImpact;
use crate::structs::report::roadmap_item::RoadmapItem;
use crate::structs::webhook::marketing_summary::MarketingSummary;
use crate::structs::webhook::performance_data::PerformanceData;
use crate::structs::webhook::submission_metadata::SubmissionMetadata;

/// Body posted to the lead-capture webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub email: String,
    pub url: String,
    pub technical_score: u32,
    pub seo_score: u8,
    pub platform: String,
    pub performance_data: PerformanceData,
    pub marketing_insights: MarketingSummary,
    pub growth_opportunity: String,
    pub revenue_impact: RevenueImpact,
    pub roadmap: Vec<RoadmapItem>,
    pub metadata: SubmissionMetadata,
}
