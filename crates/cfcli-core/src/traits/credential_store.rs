// # Credential Store Trait
//
// Defines the interface for loading and saving the authentication record.
//
// ## Lifecycle
//
// - `setup` writes the credential once
// - every other command reads it once at startup
//
// A single process never does both, so implementations need no locking
// beyond what `Send + Sync` already requires.
//
// ## Implementations
//
// - File-based: JSON file under the user's home directory
// - Memory: tests and embedding

use async_trait::async_trait;

use crate::config::Credential;

/// Trait for credential store implementations
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the stored credential
    ///
    /// # Returns
    ///
    /// - `Ok(Credential)`: The stored credential
    /// - `Err(Error::Io)`: Missing, unreadable, or malformed store
    async fn load(&self) -> Result<Credential, crate::Error>;

    /// Persist a credential, replacing whatever was stored before
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Successfully written
    /// - `Err(Error::Io)`: Storage error
    async fn save(&self, credential: &Credential) -> Result<(), crate::Error>;

    /// Human-readable location of the store (for logging)
    fn location(&self) -> String;
}
