pub mod ai_readiness;
pub mod audit_report;
pub mod marketing_insights;
pub mod revenue_impact;
pub mod roadmap_item;
pub mod technical_metrics;
pub mod trust_check_item;
