pub mod config;
pub mod generator_config;
pub mod server_config;
pub mod webhook_config;
