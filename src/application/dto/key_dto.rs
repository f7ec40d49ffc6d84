//! Access key DTOs.

use crate::domain::entities::AccessKey;

/// Where the access key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// System keyring.
    Keyring,
    /// Command-line flag or environment variable.
    CommandLine,
}

impl KeySource {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Keyring => "system keyring",
            Self::CommandLine => "command line / environment",
        }
    }
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Resolved key with its source.
#[derive(Debug, Clone)]
pub struct ResolvedAccessKey {
    /// The access key.
    pub key: AccessKey,
    /// Source of the key.
    pub source: KeySource,
}

impl ResolvedAccessKey {
    /// Creates new resolved key.
    #[must_use]
    pub const fn new(key: AccessKey, source: KeySource) -> Self {
        Self { key, source }
    }
}
