mod common;
mod cli;
mod dashboard_flow;
