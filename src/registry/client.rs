// This file contains the implementation of the RegistryClient struct,
// which handles authenticated communication with the Docker registry v2 API:
// resolving a tag to its manifest digest and deleting a manifest by digest.

use crate::error::{DeleterError, Result};
use crate::output::OutputManager;
use crate::registry::auth::Auth;
use crate::registry::AuthConfig;
use reqwest::{Client, Method, Response, StatusCode};
use std::time::Duration;

/// Accept header for manifest requests; the registry may answer with either
/// the Docker v2 or the OCI v1 media type.
pub const MANIFEST_ACCEPT: &str = "application/vnd.docker.distribution.manifest.v2+json, application/vnd.oci.image.manifest.v1+json";

const DIGEST_HEADER: &str = "docker-content-digest";

pub struct RegistryClientBuilder {
    address: String,
    auth_config: Option<AuthConfig>,
    skip_tls: bool,
    timeout: Option<u64>,
    output: Option<OutputManager>,
}

impl RegistryClientBuilder {
    pub fn new(address: String) -> Self {
        Self {
            address,
            auth_config: None,
            skip_tls: false,
            timeout: None,
            output: None,
        }
    }

    pub fn with_auth(mut self, auth_config: AuthConfig) -> Self {
        self.auth_config = Some(auth_config);
        self
    }

    pub fn with_skip_tls(mut self, skip_tls: bool) -> Self {
        self.skip_tls = skip_tls;
        self
    }

    /// Timeout in seconds for each network operation. Transport default when unset.
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_output(mut self, output: OutputManager) -> Self {
        self.output = Some(output);
        self
    }

    pub fn build(self) -> Result<RegistryClient> {
        let mut builder = Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        if self.skip_tls {
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        let client = builder
            .build()
            .map_err(|e| DeleterError::Validation(format!("Failed to create HTTP client: {}", e)))?;

        let auth_config = self.auth_config.ok_or_else(|| {
            DeleterError::Validation("Registry credentials are required".to_string())
        })?;

        Ok(RegistryClient {
            auth: Auth::new(client.clone()),
            client,
            address: self.address,
            auth_config,
            output: self.output.unwrap_or_else(|| OutputManager::new(false)),
        })
    }
}

pub struct RegistryClient {
    client: Client,
    address: String,
    auth_config: AuthConfig,
    auth: Auth,
    output: OutputManager,
}

impl RegistryClient {
    pub fn builder(address: String) -> RegistryClientBuilder {
        RegistryClientBuilder::new(address)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Shared authenticated-request primitive.
    ///
    /// Builds the full URL under the v2 API, runs the challenge and token
    /// exchange against that exact URL (the granted scope depends on it), and
    /// only then issues the real request with the bearer token attached.
    async fn request(
        &self,
        endpoint: &str,
        method: Method,
        accept: Option<&str>,
    ) -> Result<Response> {
        let url = format!("{}/v2/{}", self.address, endpoint);
        let token = self
            .auth
            .token_for(&url, &self.auth_config, &self.output)
            .await?;

        let mut request = self.client.request(method, &url).bearer_auth(token);
        if let Some(accept) = accept {
            request = request.header(reqwest::header::ACCEPT, accept);
        }

        Ok(request.send().await?)
    }

    /// Resolve a tag name to the immutable digest of its manifest.
    pub async fn resolve_digest(&self, repository: &str, tag: &str) -> Result<String> {
        self.output
            .step(&format!("Resolving digest for {}:{}", repository, tag));

        let response = self
            .request(
                &format!("{}/manifests/{}", repository, tag),
                Method::GET,
                Some(MANIFEST_ACCEPT),
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DeleterError::TagNotFound(format!(
                "Tag {} does not exist in {} of registry {}",
                tag, repository, self.address
            )));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(DeleterError::ManifestFetch { status, body });
        }

        let digest = response
            .headers()
            .get(DIGEST_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        if digest.is_empty() {
            return Err(DeleterError::MissingDigest);
        }

        self.output
            .detail(&format!("Resolved {}:{} to {}", repository, tag, digest));
        Ok(digest.to_string())
    }

    /// Delete the manifest identified by a previously resolved digest.
    pub async fn delete_by_digest(&self, repository: &str, digest: &str) -> Result<()> {
        self.output
            .step(&format!("Deleting manifest {} from {}", digest, repository));

        let response = self
            .request(
                &format!("{}/manifests/{}", repository, digest),
                Method::DELETE,
                None,
            )
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DeleterError::TagNotFound(format!(
                "Tag digest {} does not exist in {} of registry {}",
                digest, repository, self.address
            )));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(DeleterError::TagDeletion { status, body });
        }

        Ok(())
    }
}
