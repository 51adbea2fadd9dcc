//! Register command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use campus_client::{ApiClient, RegisterRequest};
use campus_core::validate::{sanitize_country_code, sanitize_phone};

use crate::commands::describe_signin;
use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Email address for the new account
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Display name
    #[arg(long)]
    pub name: String,

    /// Contact phone number (10 digits)
    #[arg(long)]
    pub phone: Option<String>,

    /// Country calling code, e.g. +91
    #[arg(long)]
    pub country_code: Option<String>,

    /// Course category of interest
    #[arg(long)]
    pub category: Option<String>,
}

pub async fn run(client: &ApiClient, args: RegisterArgs) -> Result<()> {
    let request = RegisterRequest {
        email: args.email.clone(),
        password: args.password,
        name: args.name,
        platform: Some("web".to_string()),
        category: args.category,
        contact_number: args.phone.as_deref().map(sanitize_phone),
        country_code: args.country_code.as_deref().map(sanitize_country_code),
    };

    eprintln!("{}", "Registering...".dimmed());

    let user = client.register(&request).await.map_err(describe_signin)?;

    output::success("Account created");
    println!();
    output::field("User", user.name.as_deref().unwrap_or(&args.email));
    output::field("Server", client.server().as_str());

    Ok(())
}
