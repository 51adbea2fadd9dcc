//! Google sign-in command implementation.
//!
//! Takes an identity token minted by Google's sign-in flow; obtaining
//! one interactively is out of scope for the CLI.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use campus_client::ApiClient;

use crate::commands::describe_signin;
use crate::output;

#[derive(Args, Debug)]
pub struct GoogleLoginArgs {
    /// Google identity token (JWT credential from the sign-in flow)
    #[arg(long)]
    pub credential: String,
}

pub async fn run(client: &ApiClient, args: GoogleLoginArgs) -> Result<()> {
    eprintln!("{}", "Signing in via Google...".dimmed());

    let user = client.google_login(&args.credential).await.map_err(describe_signin)?;

    output::success("Signed in successfully");
    println!();
    output::field(
        "User",
        user.name
            .as_deref()
            .or(user.email.as_deref())
            .unwrap_or("unknown"),
    );
    output::field("Server", client.server().as_str());

    Ok(())
}
