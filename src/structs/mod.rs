pub mod api_response;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod report;
pub mod threshold_rule;
pub mod webhook;
