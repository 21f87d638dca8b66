use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AuthError;

const KEYRING_USER: &str = "session-jwt";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Environment variable consulted after the keyring.
pub const TOKEN_ENV: &str = "TURISMO_AUTH__TOKEN";

/// Where a loaded token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    Keyring,
    Env,
    File,
}

/// Persistent session token storage.
///
/// Load priority: OS keychain → `TURISMO_AUTH__TOKEN` → credentials file
/// (`~/.turismo/credentials`, mode 0600).
#[derive(Debug, Clone)]
pub struct TokenStore {
    keyring_service: Option<String>,
    credentials_path: Option<PathBuf>,
}

impl TokenStore {
    /// Keychain-backed store with the home-directory file as fallback.
    #[must_use]
    pub fn new(keyring_service: &str) -> Self {
        Self {
            keyring_service: Some(keyring_service.to_string()),
            credentials_path: dirs::home_dir()
                .map(|h| h.join(".turismo").join(CREDENTIALS_FILE_NAME)),
        }
    }

    /// File-only store at an explicit path. Never touches the keychain.
    #[must_use]
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            keyring_service: None,
            credentials_path: Some(path.into()),
        }
    }

    fn keyring_entry(&self) -> Option<keyring::Entry> {
        let service = self.keyring_service.as_deref()?;
        match keyring::Entry::new(service, KEYRING_USER) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }

    fn credentials_path(&self) -> Result<&Path, AuthError> {
        self.credentials_path.as_deref().ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found; cannot store credentials".into())
        })
    }

    /// Store a JWT in the keychain, falling back to the credentials file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if both keychain and file fail.
    pub fn store(&self, jwt: &str) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry() {
            match entry.set_password(jwt) {
                Ok(()) if self.keyring_holds(jwt) => return Ok(()),
                Ok(()) => {
                    tracing::warn!("keyring did not persist the token; falling back to file");
                }
                Err(error) => {
                    tracing::warn!(%error, "keyring store failed; falling back to file");
                }
            }
        }
        self.store_file(jwt)
    }

    /// Read back through a fresh entry. Without a platform backend, keyring
    /// accepts writes into a per-entry mock that no later process can see.
    fn keyring_holds(&self, jwt: &str) -> bool {
        self.keyring_entry()
            .and_then(|entry| entry.get_password().ok())
            .is_some_and(|stored| stored == jwt)
    }

    /// Load the stored JWT, if any.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.load_with_source().map(|(token, _)| token)
    }

    /// Load the stored JWT together with the tier it came from.
    #[must_use]
    pub fn load_with_source(&self) -> Option<(String, TokenSource)> {
        if let Some(token) = self
            .keyring_entry()
            .and_then(|entry| entry.get_password().ok())
            .filter(|t| !t.is_empty())
        {
            return Some((token, TokenSource::Keyring));
        }

        if let Some(token) = std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty()) {
            return Some((token, TokenSource::Env));
        }

        self.load_file().map(|token| (token, TokenSource::File))
    }

    #[must_use]
    pub fn detect_source(&self) -> Option<TokenSource> {
        self.load_with_source().map(|(_, source)| source)
    }

    /// Delete stored credentials from keychain and file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the credentials file cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.keyring_entry() {
            if let Err(error) = entry.delete_credential() {
                tracing::debug!(%error, "no keyring credential deleted");
            }
        }

        if let Some(path) = &self.credentials_path {
            if path.exists() {
                fs::remove_file(path).map_err(|e| {
                    AuthError::TokenStoreError(format!("failed to delete {}: {e}", path.display()))
                })?;
            }
        }
        Ok(())
    }

    fn store_file(&self, jwt: &str) -> Result<(), AuthError> {
        let path = self.credentials_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, jwt)
            .map_err(|e| AuthError::TokenStoreError(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", path.display()))
            })?;
        }

        Ok(())
    }

    fn load_file(&self) -> Option<String> {
        let path = self.credentials_path.as_deref()?;
        fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}
