mod access_key_storage_port;
mod image_fetch_port;
mod search_port;

pub use access_key_storage_port::AccessKeyStoragePort;
pub use image_fetch_port::{CacheError, CacheResult, ImageFetchPort};
pub use search_port::SearchPort;
