pub mod audit_service;
pub mod report_generator;
pub mod report_presenter;
pub mod report_submitter;
pub mod status_classifier;
