//! Error types for registry tag deletion

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeleterError>;

#[derive(Error, Debug)]
pub enum DeleterError {
    /// Probe response carried no usable WWW-Authenticate challenge
    #[error("Could not fetch authentication info from request with status {status}: {body}")]
    AuthDiscovery { status: u16, body: String },

    /// Token service rejected the basic-auth exchange
    #[error("Auth failed with status {status}: {body}")]
    TokenExchange { status: u16, body: String },

    /// Manifest GET or DELETE returned 404
    #[error("{0}")]
    TagNotFound(String),

    /// Manifest GET succeeded but the digest header was absent or empty
    #[error("Tag digest header of the manifest was empty")]
    MissingDigest,

    /// Manifest GET failed with a non-404 error status
    #[error("Fetching tag infos failed with status {status}: {body}")]
    ManifestFetch { status: u16, body: String },

    /// Manifest DELETE failed with a non-404 error status
    #[error("Deleting tag failed with status {status}: {body}")]
    TagDeletion { status: u16, body: String },

    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed response payload or header bytes
    #[error("Parse error: {0}")]
    Parse(String),

    /// Bad configuration input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl DeleterError {
    /// Whether this error is the distinguished missing-tag condition that
    /// callers may downgrade to a non-fatal outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DeleterError::TagNotFound(_))
    }
}
