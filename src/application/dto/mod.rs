//! Data transfer objects for the application layer.

mod key_dto;

pub use key_dto::{KeySource, ResolvedAccessKey};
