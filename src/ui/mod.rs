pub mod dashboard_server;
pub mod session_manager;
