pub mod marketing_summary;
pub mod performance_data;
pub mod submission_metadata;
pub mod submission_payload;
