//! Session check command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use campus_client::ApiClient;

use crate::commands::describe;
use crate::output;

#[derive(Args, Debug)]
pub struct CheckArgs {}

pub async fn run(client: &ApiClient, _args: CheckArgs) -> Result<()> {
    if !client.is_authenticated() {
        bail!("No active session. Run 'campus login' first.");
    }

    eprintln!("{}", "Checking session...".dimmed());

    if client.check_session().await.map_err(describe)? {
        output::success("Session is valid");
        Ok(())
    } else {
        bail!("Session expired. Run 'campus login' to sign in again.");
    }
}
