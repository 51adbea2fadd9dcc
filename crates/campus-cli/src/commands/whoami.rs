//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use campus_client::ApiClient;

use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(client: &ApiClient, _args: WhoamiArgs) -> Result<()> {
    let user = client
        .current_user()
        .context("No active session. Run 'campus login' first.")?;

    if let Some(name) = user.name.as_deref() {
        output::field("Name", name);
    }
    if let Some(email) = user.email.as_deref() {
        output::field("Email", email);
    }
    if let Some(user_type) = user.user_type.as_deref() {
        output::field("Role", user_type);
    }
    output::field("Server", client.server().as_str());

    Ok(())
}
