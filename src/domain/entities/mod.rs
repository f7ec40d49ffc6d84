//! Domain entity definitions.

mod access_key;
mod photo;

pub use access_key::AccessKey;
pub use photo::{Photo, PhotoId, SearchPage};
