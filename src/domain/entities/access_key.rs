//! Search API access key value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Search API access key with validation and masking.
/// The buffer is wiped when the key is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AccessKey {
    value: String,
}

impl AccessKey {
    const MIN_KEY_LENGTH: usize = 16;

    /// Creates new key with format validation.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.len() < Self::MIN_KEY_LENGTH {
            return None;
        }

        if !value.chars().all(|c| c.is_ascii_graphic()) {
            return None;
        }

        Some(Self { value })
    }

    /// Creates key without validation.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns key as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns masked key for display.
    #[must_use]
    pub fn masked(&self) -> String {
        if self.value.chars().count() <= 10 {
            return "*".repeat(self.value.chars().count());
        }

        let chars: Vec<char> = self.value.chars().collect();
        let visible_prefix: String = chars[..4].iter().collect();
        let visible_suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{visible_prefix}...{visible_suffix}")
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessKey")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}
