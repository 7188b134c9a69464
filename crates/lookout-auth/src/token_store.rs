use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lookout_config::{AuthConfig, StoreKind};
use lookout_core::{CREDENTIAL_KEY, Credential, CredentialStore, MemoryCredentialStore, StoreError};

/// Credential kept as a plain-text `token` file.
///
/// The directory is created `0700` and the file written `0600` on Unix.
/// Whitespace-only content reads as no credential.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store backed by `<dir>/token`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CREDENTIAL_KEY),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<Credential> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Credential::from)
    }

    fn set(&self, credential: &Credential) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::File(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        fs::write(&self.path, credential.as_str())
            .map_err(|e| StoreError::File(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|e| StoreError::File(format!("chmod {}: {e}", self.path.display())))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::File(format!(
                "failed to delete {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}

/// Credential kept in the OS keychain, with the file store as fallback.
///
/// Writes fall back to the file when the keychain rejects them; reads try the
/// keychain first. `clear` removes both so a stale file never resurrects a
/// logged-out session.
#[derive(Debug, Clone)]
pub struct KeyringCredentialStore {
    service: String,
    fallback: FileCredentialStore,
}

impl KeyringCredentialStore {
    #[must_use]
    pub fn new(service: impl Into<String>, fallback: FileCredentialStore) -> Self {
        Self {
            service: service.into(),
            fallback,
        }
    }

    fn entry(&self) -> Option<keyring::Entry> {
        match keyring::Entry::new(&self.service, CREDENTIAL_KEY) {
            Ok(entry) => Some(entry),
            Err(error) => {
                tracing::debug!(%error, "keyring unavailable");
                None
            }
        }
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn get(&self) -> Option<Credential> {
        self.entry()
            .and_then(|entry| entry.get_password().ok())
            .filter(|token| !token.trim().is_empty())
            .map(Credential::from)
            .or_else(|| self.fallback.get())
    }

    fn set(&self, credential: &Credential) -> Result<(), StoreError> {
        let Some(entry) = self.entry() else {
            tracing::warn!("keyring unavailable; falling back to file");
            return self.fallback.set(credential);
        };

        match entry.set_password(credential.as_str()) {
            // Drop the copy left behind by an earlier fallback write.
            Ok(()) => self.fallback.clear(),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.fallback.set(credential)
            }
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.fallback.clear()?;

        let Some(entry) = self.entry() else {
            return Ok(());
        };
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(StoreError::Keyring(error.to_string())),
        }
    }

    fn backend(&self) -> &'static str {
        "keyring"
    }
}

/// Build the credential store selected by `config.store`.
///
/// # Errors
///
/// Returns [`StoreError::Unavailable`] if a file-backed store is requested and
/// no credentials directory can be resolved (no home directory).
pub fn open_store(config: &AuthConfig) -> Result<Arc<dyn CredentialStore>, StoreError> {
    let file = || {
        config.credentials_dir().map(FileCredentialStore::new).ok_or_else(|| {
            StoreError::Unavailable(
                "home directory not found; set auth.credentials_dir".into(),
            )
        })
    };

    let store: Arc<dyn CredentialStore> = match config.store {
        StoreKind::File => Arc::new(file()?),
        StoreKind::Keyring => Arc::new(KeyringCredentialStore::new(
            config.keyring_service.clone(),
            file()?,
        )),
        StoreKind::Memory => Arc::new(MemoryCredentialStore::new()),
    };

    tracing::debug!(backend = store.backend(), "credential store opened");
    Ok(store)
}
