//! Main entry point for the portfolio form submission CLI

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use core_lib::{ConsoleSurface, Notifier, PortfolioClient};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let args = Cli::parse();
    let config = cli::load_config(args.config.as_deref(), args.base_url)?;

    info!("API base URL: {}", config.api.base_url);

    let client = PortfolioClient::new(config.api.clone())?;
    let notifier = Notifier::new(ConsoleSurface, config.notifications.clone());

    let result = cli::run(&client, &notifier, args.command, !args.no_wait).await?;

    Ok(ExitCode::from(cli::exit_status(&result)))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };

        format!(
            "{}={},core_lib={},reqwest=warn,hyper=warn",
            env!("CARGO_CRATE_NAME").replace('-', "_"),
            default_level,
            default_level
        )
        .into()
    });

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.compact())
            .init();
    }
}
