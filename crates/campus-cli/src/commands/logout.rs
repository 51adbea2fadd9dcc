//! Logout command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use campus_client::ApiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(client: &ApiClient, _args: LogoutArgs) -> Result<()> {
    if !client.is_authenticated() {
        output::warning("No active session");
        return Ok(());
    }

    eprintln!("{}", "Signing out...".dimmed());

    // Best-effort backend notification; the local session is cleared
    // regardless of the outcome.
    client.logout().await;

    output::success("Signed out");
    Ok(())
}
