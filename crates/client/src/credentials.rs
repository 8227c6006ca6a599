//! Credential store supplying the bearer token.
//!
//! The storefront components only ever *read* the credential (checkout
//! attaches it to the request); writes happen at login/logout. The store
//! is injected as an explicit dependency so components never reach into
//! ambient global state and tests can substitute a fake.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use squiirshop_core::BearerToken;
use thiserror::Error;

/// Errors from persisting or clearing a credential.
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    /// Underlying storage failed.
    #[error("credential storage error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read/write access to the session credential.
///
/// `get` returning `None` means "not signed in" - a precondition failure
/// for checkout, never a storage error.
pub trait CredentialStore {
    /// The current credential, if a session exists.
    fn get(&self) -> Option<BearerToken>;

    /// Store a credential (called at login).
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the write.
    fn set(&self, token: BearerToken) -> Result<(), CredentialStoreError>;

    /// Drop the credential (called at logout).
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage rejects the removal.
    fn clear(&self) -> Result<(), CredentialStoreError>;
}

/// In-memory credential store for tests and short-lived sessions.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<BearerToken>>,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a token.
    #[must_use]
    pub fn with_token(token: BearerToken) -> Self {
        Self {
            token: Mutex::new(Some(token)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<BearerToken> {
        self.token.lock().ok()?.clone()
    }

    fn set(&self, token: BearerToken) -> Result<(), CredentialStoreError> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token);
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialStoreError> {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
        Ok(())
    }
}

/// File-backed credential store.
///
/// Persists the token across CLI invocations, playing the role browser
/// local storage plays for the web client. The file holds the raw token
/// string and nothing else.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<BearerToken> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            return None;
        }
        Some(BearerToken::new(token))
    }

    fn set(&self, token: BearerToken) -> Result<(), CredentialStoreError> {
        fs::write(&self.path, token.expose_for_storage())?;
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
