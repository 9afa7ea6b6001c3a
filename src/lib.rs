//! Audit dashboard engine.
//!
//! A [`ReportSource`](traits::report_source::ReportSource) fabricates an
//! [`AuditReport`](structs::report::audit_report::AuditReport) for a URL, the
//! [`StatusClassifier`](services::status_classifier::StatusClassifier) turns its
//! load speed into a display status, and the dashboard server lets a visitor
//! send the finished report to a lead-capture webhook.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
