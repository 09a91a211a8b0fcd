//! Tag deletion workflow: resolve the digest, then delete by digest

use crate::error::DeleterError;
use crate::registry::client::RegistryClient;

/// Outcome of one tag deletion attempt.
///
/// Callers pattern-match instead of catching a specific error type; the
/// not-found case is distinguished so it can be downgraded to a non-fatal
/// result by configuration.
#[derive(Debug)]
pub enum TagDeletionOutcome {
    /// The manifest behind the tag was deleted
    Deleted,
    /// The tag (or its digest) was absent from the registry
    NotFound(String),
    /// Any other failure along the way
    Failed(DeleterError),
}

/// Resolve the tag to its digest, then delete the manifest by that digest.
///
/// The digest is resolved once and passed verbatim into the deletion call.
/// A 404 from either step yields `NotFound`; everything else surfaces as
/// `Failed`. Both steps perform their own full auth handshake.
pub async fn delete_tag(
    client: &RegistryClient,
    repository: &str,
    tag: &str,
) -> TagDeletionOutcome {
    let digest = match client.resolve_digest(repository, tag).await {
        Ok(digest) => digest,
        Err(DeleterError::TagNotFound(message)) => return TagDeletionOutcome::NotFound(message),
        Err(err) => return TagDeletionOutcome::Failed(err),
    };

    match client.delete_by_digest(repository, &digest).await {
        Ok(()) => TagDeletionOutcome::Deleted,
        Err(DeleterError::TagNotFound(message)) => TagDeletionOutcome::NotFound(message),
        Err(err) => TagDeletionOutcome::Failed(err),
    }
}
