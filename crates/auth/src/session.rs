//! Persisted session storage.

use crate::error::SessionError;
use crate::identity::UserIdentity;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores the signed-in identity as a JSON file so a later run can restore it.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store backed by `path`. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the session file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored identity.
    ///
    /// # Returns
    /// `None` when no session has been saved.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or does not hold an identity.
    pub async fn load(&self) -> Result<Option<UserIdentity>, SessionError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let identity = serde_json::from_slice(&bytes)?;
        debug!(path = %self.path.display(), "Session restored");
        Ok(Some(identity))
    }

    /// Saves `identity`, replacing any stored session.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub async fn save(&self, identity: &UserIdentity) -> Result<(), SessionError> {
        let json = serde_json::to_vec_pretty(identity)?;
        tokio::fs::write(&self.path, json).await?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Removes the stored session. Clearing an absent session is not an error.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
