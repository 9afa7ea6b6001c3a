pub mod audit_card;
pub mod audit_session;
pub mod dashboard_view;
pub mod metric_tile;
pub mod requests;
pub mod session_view;
