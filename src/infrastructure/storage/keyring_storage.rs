//! Keyring-based access key storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::AccessKey;
use crate::domain::errors::SecretError;
use crate::domain::ports::AccessKeyStoragePort;

const KEYRING_SERVICE: &str = "photofeed";
const KEYRING_USER: &str = "access_key";

/// System keyring access key storage adapter.
pub struct KeyringKeyStorage {
    service: String,
    user: String,
}

impl KeyringKeyStorage {
    /// Creates new storage with default names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
            user: KEYRING_USER.to_string(),
        }
    }

    /// Creates storage with custom names.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, SecretError> {
        Entry::new(&self.service, &self.user)
            .map_err(|e| SecretError::AccessFailed(format!("failed to access keyring: {e}")))
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
        debug!(service = %self.service, "Retrieving access key from keyring");

        let entry = self.entry()?;

        match entry.get_password() {
            Ok(password) => {
                debug!("Access key found in keyring");
                Ok(AccessKey::new(password))
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No access key stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve access key from keyring");
                Err(SecretError::RetrievalFailed(e.to_string()))
            }
        }
    }

    async fn store_key(&self, key: &AccessKey) -> Result<(), SecretError> {
        debug!(service = %self.service, "Storing access key in keyring");

        let entry = self.entry()?;

        entry.set_password(key.as_str()).map_err(|e| {
            warn!(error = %e, "Failed to store access key in keyring");
            SecretError::StorageFailed(e.to_string())
        })?;

        debug!("Access key stored successfully");
        Ok(())
    }

    async fn delete_key(&self) -> Result<(), SecretError> {
        debug!(service = %self.service, "Deleting access key from keyring");

        let entry = self.entry()?;

        match entry.delete_credential() {
            Ok(()) => {
                debug!("Access key deleted from keyring");
                Ok(())
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No access key to delete");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete access key from keyring");
                Err(SecretError::DeletionFailed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires system keyring"]
    async fn test_store_and_retrieve_key() {
        let storage = KeyringKeyStorage::with_names("photofeed-test", "test-key");
        let key = AccessKey::new_unchecked("Abc123_defGHI-456jklMNO789pqr");

        storage.store_key(&key).await.unwrap();

        let retrieved = storage.get_key().await.unwrap();
        assert_eq!(retrieved.unwrap().as_str(), key.as_str());

        storage.delete_key().await.unwrap();
        assert!(!storage.has_key().await.unwrap());
    }
}
