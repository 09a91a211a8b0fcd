//! URL string normalization helpers
//!
//! Registry addresses arrive from CI configuration in loose form ("myregistry.io/",
//! "/app/backend/"). These helpers bring them into the canonical shape the
//! registry client expects before any request is built.

/// URL normalization utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Normalize a raw registry address into a usable base URL.
    ///
    /// Strips one trailing slash, then prefixes `https://` unless the input
    /// already carries an HTTP(S)-family scheme. FTP schemes are tolerated in
    /// the check so that explicitly schemed inputs are never double-prefixed.
    pub fn prepare_registry_url(input: &str) -> String {
        let trimmed = input.strip_suffix('/').unwrap_or(input);

        const SCHEMES: &[&str] = &["http://", "https://", "ftp://", "ftps://"];
        if SCHEMES.iter().any(|scheme| trimmed.starts_with(scheme)) {
            trimmed.to_string()
        } else {
            format!("https://{}", trimmed)
        }
    }

    /// Strip exactly one leading and one trailing slash.
    ///
    /// Internal slashes are left untouched; repository paths keep their
    /// namespace separators.
    pub fn trim_slashes(input: &str) -> String {
        let trimmed = input.strip_prefix('/').unwrap_or(input);
        trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_registry_url_adds_scheme() {
        assert_eq!(
            UrlUtils::prepare_registry_url("myregistry.io"),
            "https://myregistry.io"
        );
    }

    #[test]
    fn test_prepare_registry_url_strips_trailing_slash() {
        assert_eq!(
            UrlUtils::prepare_registry_url("myregistry.io/"),
            "https://myregistry.io"
        );
        assert_eq!(
            UrlUtils::prepare_registry_url("https://myregistry.io/"),
            "https://myregistry.io"
        );
    }

    #[test]
    fn test_prepare_registry_url_keeps_existing_scheme() {
        assert_eq!(
            UrlUtils::prepare_registry_url("http://localhost:5000"),
            "http://localhost:5000"
        );
        assert_eq!(
            UrlUtils::prepare_registry_url("https://myregistry.io"),
            "https://myregistry.io"
        );
    }

    #[test]
    fn test_prepare_registry_url_idempotent() {
        let once = UrlUtils::prepare_registry_url("myregistry.io/");
        assert_eq!(UrlUtils::prepare_registry_url(&once), once);
    }

    #[test]
    fn test_trim_slashes() {
        assert_eq!(UrlUtils::trim_slashes("/a/b/"), "a/b");
        assert_eq!(UrlUtils::trim_slashes("a/b"), "a/b");
        assert_eq!(UrlUtils::trim_slashes("/app"), "app");
        assert_eq!(UrlUtils::trim_slashes("app/"), "app");
    }

    #[test]
    fn test_trim_slashes_removes_at_most_one() {
        assert_eq!(UrlUtils::trim_slashes("//a//"), "/a/");
    }
}
