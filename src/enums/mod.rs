pub mod analysis_state;
pub mod commands;
pub mod platform;
pub mod priority;
pub mod speed_label;
pub mod status;
pub mod submission_state;
