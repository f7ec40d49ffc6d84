//! Access key resolution use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::{KeySource, ResolvedAccessKey};
use crate::domain::entities::AccessKey;
use crate::domain::errors::{SearchError, SecretError};
use crate::domain::ports::AccessKeyStoragePort;

/// Resolves the search API access key from available sources.
pub struct ResolveAccessKeyUseCase {
    storage_port: Arc<dyn AccessKeyStoragePort>,
}

impl ResolveAccessKeyUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(storage_port: Arc<dyn AccessKeyStoragePort>) -> Self {
        Self { storage_port }
    }

    /// Resolves key from keyring or CLI/Env.
    ///
    /// Priority:
    /// 1. Keyring
    /// 2. CLI/Env (passed as argument)
    ///
    /// A keyring failure is logged and the next source is tried.
    ///
    /// # Errors
    /// Returns `MissingAccessKey` if no source yields a valid key.
    pub async fn execute(
        &self,
        cli_key: Option<String>,
    ) -> Result<ResolvedAccessKey, SearchError> {
        debug!("Checking keyring for stored access key");
        match self.storage_port.get_key().await {
            Ok(Some(key)) => {
                info!("Using access key from system keyring");
                return Ok(ResolvedAccessKey::new(key, KeySource::Keyring));
            }
            Ok(None) => {
                debug!("No access key found in keyring");
            }
            Err(e) => {
                debug!(error = %e, "Failed to check keyring");
            }
        }

        if let Some(raw) = cli_key.filter(|s| !s.trim().is_empty()) {
            debug!("Checking command-line/env access key");
            if let Some(key) = AccessKey::new(raw) {
                info!(key = %key, "Using access key from command line / environment");
                return Ok(ResolvedAccessKey::new(key, KeySource::CommandLine));
            }
            warn!("Command-line access key has invalid format");
        }

        Err(SearchError::MissingAccessKey)
    }

    /// Stores `key` in the secure store for later runs.
    ///
    /// # Errors
    /// Returns error if the store rejects the write.
    pub async fn persist(&self, key: &AccessKey) -> Result<(), SecretError> {
        self.storage_port.store_key(key).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist access key");
            e
        })?;
        info!("Access key persisted to secure storage");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockAccessKeyStorage;

    fn make_valid_key() -> String {
        "Abc123_defGHI-456jklMNO789pqr".to_string()
    }

    #[tokio::test]
    async fn test_keyring_priority() {
        let storage = Arc::new(MockAccessKeyStorage::with_key(AccessKey::new_unchecked(
            make_valid_key(),
        )));
        let use_case = ResolveAccessKeyUseCase::new(storage);

        let result = use_case
            .execute(Some("another-valid-key-0000".to_string()))
            .await
            .unwrap();

        assert_eq!(result.source, KeySource::Keyring);
        assert_eq!(result.key.as_str(), make_valid_key());
    }

    #[tokio::test]
    async fn test_cli_fallback() {
        let storage = Arc::new(MockAccessKeyStorage::new());
        let use_case = ResolveAccessKeyUseCase::new(storage);

        let result = use_case.execute(Some(make_valid_key())).await.unwrap();

        assert_eq!(result.source, KeySource::CommandLine);
    }

    #[tokio::test]
    async fn test_keyring_failure_falls_back_to_cli() {
        let storage = Arc::new(MockAccessKeyStorage::failing());
        let use_case = ResolveAccessKeyUseCase::new(storage);

        let result = use_case.execute(Some(make_valid_key())).await.unwrap();

        assert_eq!(result.source, KeySource::CommandLine);
    }

    #[tokio::test]
    async fn test_invalid_cli_key_is_missing() {
        let storage = Arc::new(MockAccessKeyStorage::new());
        let use_case = ResolveAccessKeyUseCase::new(storage);

        let result = use_case.execute(Some("short".to_string())).await;

        assert!(matches!(result, Err(SearchError::MissingAccessKey)));
    }

    #[tokio::test]
    async fn test_no_key_found() {
        let storage = Arc::new(MockAccessKeyStorage::new());
        let use_case = ResolveAccessKeyUseCase::new(storage);

        assert!(matches!(
            use_case.execute(None).await,
            Err(SearchError::MissingAccessKey)
        ));
    }

    #[tokio::test]
    async fn test_persist_then_resolve_from_keyring() {
        let storage = Arc::new(MockAccessKeyStorage::new());
        let use_case = ResolveAccessKeyUseCase::new(storage.clone());

        use_case
            .persist(&AccessKey::new_unchecked(make_valid_key()))
            .await
            .unwrap();

        assert!(storage.has_key().await.unwrap());
        let result = use_case.execute(None).await.unwrap();
        assert_eq!(result.source, KeySource::Keyring);
    }
}
