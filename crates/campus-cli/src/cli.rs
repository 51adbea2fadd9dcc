//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::check::CheckArgs;
use crate::commands::dashboard::DashboardCommand;
use crate::commands::google_login::GoogleLoginArgs;
use crate::commands::login::LoginArgs;
use crate::commands::logout::LogoutArgs;
use crate::commands::refresh::RefreshArgs;
use crate::commands::register::RegisterArgs;
use crate::commands::whoami::WhoamiArgs;

/// CLI for campus LMS administration.
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(author, version = env!("CAMPUS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Backend server base URL
    #[arg(long, global = true, default_value = "http://localhost:8000")]
    pub server: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password
    Login(LoginArgs),
    /// Create an account
    Register(RegisterArgs),
    /// Sign in with a Google identity token
    GoogleLogin(GoogleLoginArgs),
    /// Sign out and clear the stored session
    Logout(LogoutArgs),
    /// Show the signed-in user
    Whoami(WhoamiArgs),
    /// Probe the backend to verify the stored session
    Check(CheckArgs),
    /// Exchange the refresh token for a new access token
    Refresh(RefreshArgs),
    /// Dashboard views
    Dashboard(DashboardCommand),
}
