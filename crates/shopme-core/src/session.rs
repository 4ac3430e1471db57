//! Session token storage.
//!
//! The session is the single source of truth for "is a user authenticated".
//! It keeps the token in memory and mirrors it to `<SHOPME_HOME>/session.json`
//! with restricted permissions (0600) so a restart picks it back up.
//! Tokens are never logged or displayed.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// On-disk shape of the persisted session.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Durable storage for the session token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under `SHOPME_HOME`.
    pub fn default_location() -> Self {
        Self::new(paths::session_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted token, `None` if nothing was stored.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {}", self.path.display()))?;
        let stored: StoredSession = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", self.path.display()))?;

        Ok(Some(stored.token).filter(|t| !t.is_empty()))
    }

    /// Persists the token with restricted permissions.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(&StoredSession {
            token: token.to_string(),
        })
        .context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Removes the persisted token. Missing file is fine.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove session at {}", self.path.display())),
        }
    }
}

/// Process-wide session. Share it as `Arc<Session>`.
#[derive(Debug)]
pub struct Session {
    token: RwLock<Option<String>>,
    store: Option<SessionStore>,
}

impl Session {
    /// Restores a session from durable storage.
    ///
    /// Best-effort: an unreadable file is logged and treated as logged out.
    pub fn restore(store: SessionStore) -> Self {
        let token = match store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable session file");
                None
            }
        };
        tracing::debug!(authenticated = token.is_some(), "session restored");
        Self {
            token: RwLock::new(token),
            store: Some(store),
        }
    }

    /// A session that lives only in memory.
    pub fn ephemeral() -> Self {
        Self {
            token: RwLock::new(None),
            store: None,
        }
    }

    /// Stores the token in memory and in durable storage.
    ///
    /// The in-memory token is set even if persisting fails.
    ///
    /// # Errors
    /// Returns an error if the token could not be written to disk.
    pub fn login(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        let persisted = match &self.store {
            Some(store) => store.save(&token),
            None => Ok(()),
        };
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token);
        tracing::info!("session started");
        persisted
    }

    /// Clears the token from memory and durable storage.
    ///
    /// # Errors
    /// Returns an error if the persisted token could not be removed.
    pub fn logout(&self) -> Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        tracing::info!("session ended");
        match &self.store {
            Some(store) => store.clear(),
            None => Ok(()),
        }
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_restore_without_file_is_logged_out() {
        let dir = tempdir().unwrap();
        let session = Session::restore(SessionStore::new(dir.path().join("session.json")));
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_persists_across_restore() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let session = Session::restore(SessionStore::new(&path));
        session.login("abc").unwrap();
        assert_eq!(session.token().as_deref(), Some("abc"));

        let restored = Session::restore(SessionStore::new(&path));
        assert_eq!(restored.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_logout_clears_memory_and_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session::restore(SessionStore::new(&path));
        session.login("abc").unwrap();
        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert!(!path.exists());
        assert!(!Session::restore(SessionStore::new(&path)).is_authenticated());
    }

    #[test]
    fn test_logout_without_file_is_ok() {
        let dir = tempdir().unwrap();
        let session = Session::restore(SessionStore::new(dir.path().join("session.json")));
        assert!(session.logout().is_ok());
    }

    #[test]
    fn test_corrupt_file_is_treated_as_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let session = Session::restore(SessionStore::new(&path));
        assert!(!session.is_authenticated());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.save("abc").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_ephemeral_session_login_logout() {
        let session = Session::ephemeral();
        session.login("t").unwrap();
        assert!(session.is_authenticated());
        session.logout().unwrap();
        assert!(!session.is_authenticated());
    }
}
