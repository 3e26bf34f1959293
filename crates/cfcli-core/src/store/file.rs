// # File Credential Store
//
// File-based implementation of CredentialStore.
//
// ## File Format
//
// ```json
// {
//   "x_auth_email": "user@example.com",
//   "x_auth_key": "c2547eb745079dac9320b638f5e225cf483cc5cfdda41"
// }
// ```
//
// ## Writes
//
// - Parent directories are created if absent
// - New content goes to a `.tmp` sibling first, then is renamed over the
//   real file, so a crash never leaves a half-written credential behind

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::Error;
use crate::config::{Credential, default_credential_path};
use crate::traits::CredentialStore;

/// File-based credential store
///
/// # Example
///
/// ```rust,no_run
/// use cfcli_core::config::Credential;
/// use cfcli_core::store::FileCredentialStore;
/// use cfcli_core::traits::CredentialStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = FileCredentialStore::at_home()?;
///
///     store.save(&Credential::new("user@example.com", "key")).await?;
///     let credential = store.load().await?;
///     assert_eq!(credential.auth_email, "user@example.com");
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Create a store backed by an explicit path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a store backed by `$HOME/.cf_cli_config`
    ///
    /// Fails with `Error::Io` if the home directory cannot be determined.
    pub fn at_home() -> Result<Self, Error> {
        Ok(Self::new(default_credential_path()?))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get path to temporary file for atomic writes
    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        PathBuf::from(temp)
    }

    async fn ensure_parent_dir(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::io(format!(
                    "failed to open security configuration file, cause: {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Result<Credential, Error> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            Error::io(format!(
                "failed to open security configuration, cause: {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let credential: Credential = serde_json::from_str(&content).map_err(|e| {
            Error::io(format!(
                "failed to parse security configuration, cause: {}",
                e
            ))
        })?;

        tracing::debug!("Loaded credential from {}", self.path.display());
        Ok(credential)
    }

    async fn save(&self, credential: &Credential) -> Result<(), Error> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(credential)?;

        let temp_path = self.temp_path();
        {
            let mut file = fs::File::create(&temp_path).await.map_err(|e| {
                Error::io(format!(
                    "failed to open security configuration file, cause: {}: {}",
                    temp_path.display(),
                    e
                ))
            })?;

            file.write_all(json.as_bytes()).await.map_err(|e| {
                Error::io(format!(
                    "failed to write security configuration, cause: {}",
                    e
                ))
            })?;
            file.write_all(b"\n").await.map_err(|e| {
                Error::io(format!(
                    "failed to write security configuration, cause: {}",
                    e
                ))
            })?;

            file.flush().await.map_err(|e| {
                Error::io(format!(
                    "failed to write security configuration, cause: {}",
                    e
                ))
            })?;
        }

        fs::rename(&temp_path, &self.path).await.map_err(|e| {
            Error::io(format!(
                "failed to replace {} with {}: {}",
                self.path.display(),
                temp_path.display(),
                e
            ))
        })?;

        tracing::info!("Credential written to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
