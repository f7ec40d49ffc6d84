//! Use case implementations.

mod resolve_access_key_use_case;

pub use resolve_access_key_use_case::ResolveAccessKeyUseCase;
