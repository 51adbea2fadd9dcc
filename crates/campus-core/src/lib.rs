//! campus-core - Core types for the campus LMS client toolkit.
//!
//! This crate holds the session primitives shared by the HTTP client and
//! the CLI: bearer tokens, login credentials, the credential store
//! abstraction, the unified error type, and the form-field validators.

pub mod credentials;
pub mod error;
pub mod session;
pub mod store;
pub mod tokens;
pub mod types;
pub mod validate;

pub use credentials::Credentials;
pub use error::{ApiError, AuthError, Error, InvalidInputError, TransportError};
pub use session::{Session, UserProfile};
pub use store::{CredentialStore, MemoryStore};
pub use tokens::{AccessToken, RefreshToken};
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
