//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AccessKey, Photo, PhotoId, SearchPage};
pub use errors::{SearchError, SecretError};
pub use ports::{AccessKeyStoragePort, ImageFetchPort, SearchPort};
