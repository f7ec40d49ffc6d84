//! Domain error types.

mod search_error;
mod secret_error;

pub use search_error::SearchError;
pub use secret_error::SecretError;
