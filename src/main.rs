use anyhow::Context;
use clap::Parser;
use vertexpoint::structs::cli::Cli;
use vertexpoint::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    CommandRunner::new()
        .run_command(cli.command)
        .await
        .context("vertexpoint command failed")
}
