//! Access key storage port definition.

use async_trait::async_trait;

use crate::domain::entities::AccessKey;
use crate::domain::errors::SecretError;

/// Port for access key persistence in a secure store.
#[async_trait]
pub trait AccessKeyStoragePort: Send + Sync {
    /// Retrieves stored key.
    async fn get_key(&self) -> Result<Option<AccessKey>, SecretError>;

    /// Stores key securely.
    async fn store_key(&self, key: &AccessKey) -> Result<(), SecretError>;

    /// Deletes stored key.
    async fn delete_key(&self) -> Result<(), SecretError>;

    /// Checks if key exists.
    async fn has_key(&self) -> Result<bool, SecretError> {
        Ok(self.get_key().await?.is_some())
    }
}
