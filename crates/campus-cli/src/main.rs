//! campus - CLI for LMS administration.
//!
//! This is a thin wrapper over the `campus-client` library, intended
//! for operating an LMS backend from the terminal: session management
//! and the read-only dashboard views.

mod cli;
mod commands;
mod output;
mod render;
mod session;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use campus_client::ApiClient;
use campus_core::ApiUrl;
use cli::{Cli, Commands};
use session::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let client = build_client(&cli.server)?;

    match cli.command {
        Commands::Login(args) => commands::login::run(&client, args).await,
        Commands::Register(args) => commands::register::run(&client, args).await,
        Commands::GoogleLogin(args) => commands::google_login::run(&client, args).await,
        Commands::Logout(args) => commands::logout::run(&client, args).await,
        Commands::Whoami(args) => commands::whoami::run(&client, args).await,
        Commands::Check(args) => commands::check::run(&client, args).await,
        Commands::Refresh(args) => commands::refresh::run(&client, args).await,
        Commands::Dashboard(args) => commands::dashboard::run(&client, args).await,
    }
}

fn build_client(server: &str) -> Result<ApiClient> {
    let server = ApiUrl::new(server).context("Invalid server URL")?;
    let store = FileStore::open().context("Failed to open session store")?;
    Ok(ApiClient::new(server, Arc::new(store)))
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
