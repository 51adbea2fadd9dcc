//! Login command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use campus_client::ApiClient;
use campus_core::Credentials;

use crate::commands::describe_signin;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Email address to sign in with
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(client: &ApiClient, args: LoginArgs) -> Result<()> {
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Signing in...".dimmed());

    let user = client.login(&credentials).await.map_err(describe_signin)?;

    output::success("Signed in successfully");
    println!();
    output::field("User", user.name.as_deref().unwrap_or(&args.email));
    if let Some(user_type) = user.user_type.as_deref() {
        output::field("Role", user_type);
    }
    output::field("Server", client.server().as_str());

    if let Some(path) = client.store().take_redirect_path() {
        output::field("Return to", &path);
    }

    Ok(())
}
