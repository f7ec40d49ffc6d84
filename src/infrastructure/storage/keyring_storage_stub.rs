//! Stub key storage for builds without keyring support.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::AccessKey;
use crate::domain::errors::SecretError;
use crate::domain::ports::AccessKeyStoragePort;

/// Stub key storage that stores nothing.
/// Used when the `keyring` feature is disabled.
pub struct KeyringKeyStorage;

impl KeyringKeyStorage {
    /// Creates new stub storage.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates storage with custom names (no-op in stub).
    #[must_use]
    pub fn with_names(_service: impl Into<String>, _user: impl Into<String>) -> Self {
        Self
    }
}

impl Default for KeyringKeyStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccessKeyStoragePort for KeyringKeyStorage {
    async fn get_key(&self) -> Result<Option<AccessKey>, SecretError> {
        debug!("Keyring feature disabled - no key storage available");
        Ok(None)
    }

    async fn store_key(&self, _key: &AccessKey) -> Result<(), SecretError> {
        debug!("Keyring feature disabled - cannot store key");
        Err(SecretError::StorageFailed(
            "built without keyring support".to_string(),
        ))
    }

    async fn delete_key(&self) -> Result<(), SecretError> {
        debug!("Keyring feature disabled - nothing to delete");
        Ok(())
    }
}
