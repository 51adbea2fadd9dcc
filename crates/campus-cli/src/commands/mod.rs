//! Command implementations.

pub mod check;
pub mod dashboard;
pub mod google_login;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod whoami;

use anyhow::anyhow;

use campus_core::Error;

/// Translate a client failure into a CLI-facing error.
///
/// The client only signals a typed session-expired outcome; deciding
/// where to send the user happens here.
pub fn describe(err: Error) -> anyhow::Error {
    if err.is_session_expired() {
        anyhow!("Session expired. Run 'campus login' to sign in again.")
    } else {
        anyhow!(err.user_message())
    }
}

/// Translate a sign-in failure into a CLI-facing error.
///
/// A rejected sign-in also trips the session-expired path when the
/// store was empty, so here the backend's explanation wins over the
/// sign-in hint.
pub fn describe_signin(err: Error) -> anyhow::Error {
    anyhow!(err.user_message())
}
