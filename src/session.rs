//! Session ownership and persisted credentials.
//!
//! The mobile shell owns platform credential storage (keychain, encrypted
//! prefs); this module models it as the [`CredentialStore`] trait so the
//! core stays testable. Key properties:
//! - Session lives in memory, loaded from the store on startup
//! - Established on successful login, persisted through the store
//! - Cleared on logout AND on any authorization-denied response

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::models::Role;

// ═══════════════════════════════════════════════════════════
// Session + stored form
// ═══════════════════════════════════════════════════════════

/// In-memory session: bearer token plus the role the backend reported.
/// A token without a parseable role still authenticates (the gate then
/// shows the authenticated-but-roleless minimum).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Option<Role>,
}

/// What actually goes into the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub token: String,
    pub role: Option<Role>,
    pub saved_at: DateTime<Utc>,
}

// ═══════════════════════════════════════════════════════════
// CredentialStore implementations
// ═══════════════════════════════════════════════════════════

/// Key-value persistence seam for the session. Implementations must treat
/// `clear` on an empty store as a no-op.
pub trait CredentialStore: Send {
    fn load(&self) -> Result<Option<StoredCredentials>, ClientError>;
    fn save(&mut self, credentials: &StoredCredentials) -> Result<(), ClientError>;
    fn clear(&mut self) -> Result<(), ClientError>;
}

/// Non-persisting store. Default for tests and for shells that plug in
/// their own platform storage at a different layer.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<StoredCredentials>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<Option<StoredCredentials>, ClientError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, credentials: &StoredCredentials) -> Result<(), ClientError> {
        self.slot = Some(credentials.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ClientError> {
        self.slot = None;
        Ok(())
    }
}

/// JSON-file store for desktop/dev shells. Token is stored in the clear;
/// platform shells should prefer their own secure storage.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location under the app data dir.
    pub fn at_default_path() -> Self {
        Self::new(crate::config::credentials_path())
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Result<Option<StoredCredentials>, ClientError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClientError::CredentialStore(e.to_string())),
        };
        let credentials = serde_json::from_str(&raw)
            .map_err(|e| ClientError::CredentialStore(format!("corrupt credentials file: {e}")))?;
        Ok(Some(credentials))
    }

    fn save(&mut self, credentials: &StoredCredentials) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::CredentialStore(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(credentials)
            .map_err(|e| ClientError::CredentialStore(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| ClientError::CredentialStore(e.to_string()))
    }

    fn clear(&mut self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::CredentialStore(e.to_string())),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// SessionManager
// ═══════════════════════════════════════════════════════════

/// Owns the current session and keeps the credential store in sync.
/// Shared between the shell and the HTTP client via `Arc<Mutex<...>>`.
pub struct SessionManager {
    store: Box<dyn CredentialStore>,
    current: Option<Session>,
}

impl SessionManager {
    /// Create a manager, restoring any persisted session. A store that
    /// fails to load (corrupt file, locked keychain) starts logged out
    /// rather than failing the whole app.
    pub fn new(store: Box<dyn CredentialStore>) -> Self {
        let current = match store.load() {
            Ok(Some(saved)) => Some(Session {
                token: saved.token,
                role: saved.role,
            }),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to restore persisted session: {e}");
                None
            }
        };
        Self { store, current }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Persist a fresh session after a successful login.
    pub fn establish(&mut self, token: String, role: Option<Role>) -> Result<(), ClientError> {
        let session = Session {
            token: token.clone(),
            role,
        };
        self.store.save(&StoredCredentials {
            token,
            role,
            saved_at: Utc::now(),
        })?;
        self.current = Some(session);
        Ok(())
    }

    /// Wipe memory and store. Called on logout and on authorization-denied
    /// responses; a store failure is logged but never propagated, since the
    /// in-memory session is already gone.
    pub fn clear(&mut self) {
        self.current = None;
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear persisted credentials: {e}");
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn bearer_token(&self) -> Option<String> {
        self.current.as_ref().map(|s| s.token.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().and_then(|s| s.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_manager_is_logged_out() {
        let manager = SessionManager::in_memory();
        assert!(!manager.is_authenticated());
        assert!(manager.bearer_token().is_none());
        assert!(manager.role().is_none());
    }

    #[test]
    fn establish_persists_and_exposes_session() {
        let mut manager = SessionManager::in_memory();
        manager
            .establish("tok-123".into(), Some(Role::Doctor))
            .unwrap();

        assert!(manager.is_authenticated());
        assert_eq!(manager.bearer_token().as_deref(), Some("tok-123"));
        assert_eq!(manager.role(), Some(Role::Doctor));
    }

    #[test]
    fn clear_wipes_memory_and_store() {
        let mut store = MemoryStore::new();
        store
            .save(&StoredCredentials {
                token: "tok".into(),
                role: Some(Role::Admin),
                saved_at: Utc::now(),
            })
            .unwrap();

        let mut manager = SessionManager::new(Box::new(store));
        assert!(manager.is_authenticated(), "restored from store");

        manager.clear();
        assert!(!manager.is_authenticated());
    }

    #[test]
    fn restores_persisted_session() {
        let mut store = MemoryStore::new();
        store
            .save(&StoredCredentials {
                token: "persisted".into(),
                role: Some(Role::SuperAdmin),
                saved_at: Utc::now(),
            })
            .unwrap();

        let manager = SessionManager::new(Box::new(store));
        assert_eq!(manager.bearer_token().as_deref(), Some("persisted"));
        assert_eq!(manager.role(), Some(Role::SuperAdmin));
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("credentials.json");
        let mut store = FileStore::new(path.clone());

        assert!(store.load().unwrap().is_none());

        store
            .save(&StoredCredentials {
                token: "file-tok".into(),
                role: Some(Role::Patient),
                saved_at: Utc::now(),
            })
            .unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, "file-tok");
        assert_eq!(loaded.role, Some(Role::Patient));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn file_store_clear_on_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("absent.json"));
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_reports_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(path);
        assert!(store.load().is_err());

        // Manager degrades to logged-out instead of failing.
        let manager = SessionManager::new(Box::new(FileStore::new(
            dir.path().join("credentials.json"),
        )));
        assert!(!manager.is_authenticated());
    }
}
