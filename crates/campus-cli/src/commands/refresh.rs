//! Refresh command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use campus_client::ApiClient;

use crate::commands::describe;
use crate::output;

#[derive(Args, Debug)]
pub struct RefreshArgs {}

pub async fn run(client: &ApiClient, _args: RefreshArgs) -> Result<()> {
    if !client.is_authenticated() {
        bail!("No active session. Run 'campus login' first.");
    }

    eprintln!("{}", "Refreshing session...".dimmed());

    client.refresh_session().await.map_err(describe)?;

    output::success("Session refreshed");
    Ok(())
}
