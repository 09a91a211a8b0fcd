//! Configuration management module

use crate::cli::args::Args;
use crate::common::UrlUtils;
use crate::error::{DeleterError, Result};
use crate::registry::AuthConfig;

/// Normalized inputs for one tag deletion run.
///
/// Built from raw CLI arguments: the registry URL gets a scheme and loses its
/// trailing slash, the repository path and tag lose surrounding slashes.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct DeleteConfig {
    pub registry: String,
    pub repository: String,
    pub tag: String,
    pub credentials: AuthConfig,
    pub ignore_not_found: bool,
    pub skip_tls: bool,
    pub timeout: Option<u64>,
}

impl DeleteConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let username = args.username.clone().ok_or_else(|| {
            DeleterError::Validation(
                "Registry username is required (--username or TAG_DELETER_USERNAME)".to_string(),
            )
        })?;
        let password = args.password.clone().ok_or_else(|| {
            DeleterError::Validation(
                "Registry password is required (--password or TAG_DELETER_PASSWORD)".to_string(),
            )
        })?;

        let config = Self {
            registry: UrlUtils::prepare_registry_url(&args.registry),
            repository: UrlUtils::trim_slashes(&args.repository),
            tag: UrlUtils::trim_slashes(&args.tag),
            credentials: AuthConfig::new(username, password),
            ignore_not_found: args.ignore_not_found,
            skip_tls: args.skip_tls,
            timeout: args.timeout,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.registry.is_empty() {
            return Err(DeleterError::Validation(
                "Registry address cannot be empty".to_string(),
            ));
        }

        url::Url::parse(&self.registry).map_err(|e| {
            DeleterError::Validation(format!("Invalid registry address {}: {}", self.registry, e))
        })?;

        if self.repository.is_empty() {
            return Err(DeleterError::Validation(
                "Repository path cannot be empty".to_string(),
            ));
        }

        if self.tag.is_empty() {
            return Err(DeleterError::Validation(
                "Tag name cannot be empty".to_string(),
            ));
        }

        if self.credentials.username.is_empty() {
            return Err(DeleterError::Validation(
                "Username cannot be empty".to_string(),
            ));
        }

        if self.credentials.password.is_empty() {
            return Err(DeleterError::Validation(
                "Password cannot be empty".to_string(),
            ));
        }

        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(DeleterError::Validation(
                    "Timeout must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}
