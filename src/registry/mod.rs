//! Registry protocol modules: auth handshake, v2 API client, deletion workflow

pub mod auth;
pub mod client;
pub mod workflow;

pub use client::{RegistryClient, RegistryClientBuilder};
pub use workflow::{delete_tag, TagDeletionOutcome};

/// Basic credentials for the registry.
///
/// Owned by the caller and read-only for the lifetime of a run; passed by
/// reference into each request and never persisted.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}
