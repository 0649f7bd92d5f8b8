use std::process::ExitCode;

use clap::Parser;
use retype_llms::{run, Cli, GithubActionsHost, Host};
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    // Local runs may keep inputs in a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!("CLI application startup: tracing initialised, inputs parsed");

    let host = GithubActionsHost::from_env();
    match run(cli, &host).await {
        Ok(output) => {
            tracing::info!(output = %output, "CLI completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "CLI exited with error");
            host.set_failed(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
