// # Memory Credential Store
//
// In-memory implementation of CredentialStore. Nothing survives the
// process; used by tests and by embedders that source credentials
// elsewhere.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::Error;
use crate::config::Credential;
use crate::traits::CredentialStore;

/// In-memory credential store
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<RwLock<Option<Credential>>>,
}

impl MemoryCredentialStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `credential`
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(credential))),
        }
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_none()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Result<Credential, Error> {
        self.inner
            .read()
            .await
            .clone()
            .ok_or_else(|| Error::io("failed to open security configuration, cause: not set"))
    }

    async fn save(&self, credential: &Credential) -> Result<(), Error> {
        *self.inner.write().await = Some(credential.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok, block_on};

    #[tokio::test]
    async fn test_memory_store_basic() {
        let store = MemoryCredentialStore::new();
        assert!(store.is_empty().await);
        assert!(matches!(store.load().await, Err(Error::Io(_))));

        let credential = Credential::new("user@example.com", "key");
        assert_ok!(store.save(&credential).await);

        assert!(!store.is_empty().await);
        assert_eq!(store.load().await.unwrap(), credential);
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_state() {
        let store = MemoryCredentialStore::new();
        let other = store.clone();

        store
            .save(&Credential::new("user@example.com", "key"))
            .await
            .unwrap();
        assert!(!other.is_empty().await);
    }

    #[test]
    fn test_memory_store_location_and_seeded_load() {
        let store = MemoryCredentialStore::with_credential(Credential::new("a@example.com", "k"));
        assert_eq!(store.location(), "memory");

        let loaded = assert_ok!(block_on(store.load()));
        assert_eq!(loaded.auth_email, "a@example.com");
        assert_err!(block_on(MemoryCredentialStore::new().load()));
    }
}
