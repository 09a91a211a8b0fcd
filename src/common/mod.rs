//! Shared helpers used across the crate

pub mod utils;

pub use utils::UrlUtils;
