//! File-backed credential store.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use campus_core::{AccessToken, CredentialStore, RefreshToken, Session, UserProfile};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    access: Option<String>,
    refresh: Option<String>,
    user: Option<UserProfile>,
    redirect_path: Option<String>,
}

impl StoredState {
    fn is_empty(&self) -> bool {
        self.access.is_none()
            && self.refresh.is_none()
            && self.user.is_none()
            && self.redirect_path.is_none()
    }
}

/// Credential store persisted as a JSON file in the platform data
/// directory.
///
/// Every mutation is written through to disk so a session survives
/// across CLI invocations. Write failures are logged rather than
/// surfaced: the in-memory state stays authoritative for the running
/// process either way.
pub struct FileStore {
    path: PathBuf,
    state: RwLock<StoredState>,
}

impl FileStore {
    /// Open the store at the default platform location.
    pub fn open() -> Result<Self> {
        let dirs =
            ProjectDirs::from("", "", "campus").context("Could not determine config directory")?;

        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;

        Self::at_path(data_dir.join("session.json"))
    }

    /// Open a store at an explicit path.
    pub fn at_path(path: PathBuf) -> Result<Self> {
        let state = if path.exists() {
            let json = fs::read_to_string(&path).context("Failed to read session file")?;
            serde_json::from_str(&json).context("Invalid session file")?
        } else {
            StoredState::default()
        };

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Write the current state through to disk.
    fn persist(&self, state: &StoredState) {
        if state.is_empty() {
            if self.path.exists()
                && let Err(err) = fs::remove_file(&self.path)
            {
                warn!(error = %err, "Failed to remove session file");
            }
            return;
        }

        let json = match serde_json::to_string_pretty(state) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "Failed to serialize session");
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, &json) {
            warn!(error = %err, "Failed to write session file");
            return;
        }

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let restrict = fs::metadata(&self.path).and_then(|meta| {
                let mut perms = meta.permissions();
                perms.set_mode(0o600);
                fs::set_permissions(&self.path, perms)
            });
            if let Err(err) = restrict {
                warn!(error = %err, "Failed to restrict session file permissions");
            }
        }
    }
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("path", &self.path)
            .field("state", &"[REDACTED]")
            .finish()
    }
}

impl CredentialStore for FileStore {
    fn access_token(&self) -> Option<AccessToken> {
        let state = self.state.read().unwrap();
        state.access.as_deref().map(AccessToken::new)
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        let state = self.state.read().unwrap();
        state.refresh.as_deref().map(RefreshToken::new)
    }

    fn user_profile(&self) -> Option<UserProfile> {
        self.state.read().unwrap().user.clone()
    }

    fn store_session(&self, session: &Session) {
        let mut state = self.state.write().unwrap();
        state.access = Some(session.access.as_str().to_string());
        state.refresh = Some(session.refresh.as_str().to_string());
        state.user = Some(session.user.clone());
        self.persist(&state);
    }

    fn set_access_token(&self, token: AccessToken) {
        let mut state = self.state.write().unwrap();
        state.access = Some(token.as_str().to_string());
        self.persist(&state);
    }

    fn set_redirect_path(&self, path: &str) {
        let mut state = self.state.write().unwrap();
        state.redirect_path = Some(path.to_string());
        self.persist(&state);
    }

    fn take_redirect_path(&self) -> Option<String> {
        let mut state = self.state.write().unwrap();
        let path = state.redirect_path.take();
        if path.is_some() {
            self.persist(&state);
        }
        path
    }

    fn clear(&self) {
        let mut state = self.state.write().unwrap();
        *state = StoredState::default();
        self.persist(&state);
    }
}
