//! Photo search API adapter.

pub mod client;
pub mod dto;

pub use client::{UNSPLASH_API_BASE, UnsplashClient};
