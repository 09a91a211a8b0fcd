//! Two-phase bearer-token authentication for Docker registry access
//!
//! Registry token scopes are resource-specific (e.g. `repository:app:pull`),
//! so the challenge is discovered against the actual target URL of each call
//! and the full probe-then-exchange handshake runs once per request. No token
//! is cached or reused across calls.

use crate::error::{DeleterError, Result};
use crate::output::OutputManager;
use crate::registry::AuthConfig;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

/// Parsed contents of a `WWW-Authenticate: Bearer ...` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthChallenge {
    pub realm: String,
    pub service: String,
    pub scope: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug)]
pub struct Auth {
    client: Client,
}

impl Auth {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Run the full two-step handshake for one target URL and return the
    /// bearer token to present on the real request.
    pub async fn token_for(
        &self,
        target_url: &str,
        credentials: &AuthConfig,
        output: &OutputManager,
    ) -> Result<String> {
        let challenge = self.discover_challenge(target_url, output).await?;
        self.exchange_token(&challenge, credentials, output).await
    }

    /// Probe the target URL without authentication and parse the challenge
    /// the registry answers with.
    async fn discover_challenge(
        &self,
        target_url: &str,
        output: &OutputManager,
    ) -> Result<AuthChallenge> {
        output.detail(&format!("Probing {} for auth challenge", target_url));

        let response = self.client.get(target_url).send().await?;
        let status = response.status().as_u16();

        let header = match response.headers().get("www-authenticate") {
            Some(value) => value
                .to_str()
                .map_err(|e| DeleterError::Parse(format!("Invalid WWW-Authenticate header: {}", e)))?
                .to_string(),
            None => {
                let body = read_body(response).await;
                return Err(DeleterError::AuthDiscovery { status, body });
            }
        };

        match parse_challenge(&header) {
            Some(challenge) => {
                output.detail(&format!(
                    "Auth challenge received: realm={}, service={}, scope={}",
                    challenge.realm, challenge.service, challenge.scope
                ));
                Ok(challenge)
            }
            None => {
                let body = read_body(response).await;
                Err(DeleterError::AuthDiscovery { status, body })
            }
        }
    }

    /// Exchange basic credentials against the challenge's realm for a
    /// short-lived bearer token.
    async fn exchange_token(
        &self,
        challenge: &AuthChallenge,
        credentials: &AuthConfig,
        output: &OutputManager,
    ) -> Result<String> {
        // Service and scope come from the registry itself and are inserted
        // verbatim, not percent-encoded.
        let url = format!(
            "{}?service={}&scope={}",
            challenge.realm, challenge.service, challenge.scope
        );
        output.detail(&format!("Requesting token from: {}", url));

        let response = self
            .client
            .get(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = read_body(response).await;
            return Err(DeleterError::TokenExchange { status, body });
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| DeleterError::Parse(format!("Failed to parse token response: {}", e)))?;

        Ok(token_response.token)
    }
}

/// Parse a `Bearer realm="...",service="...",scope="..."` challenge header.
///
/// All three keys are required; anything less means the registry does not
/// conform to the expected challenge protocol.
fn parse_challenge(header: &str) -> Option<AuthChallenge> {
    let params_str = header.strip_prefix("Bearer ")?;
    let mut params = HashMap::new();

    for param in params_str.split(',') {
        let param = param.trim();
        if let Some(eq_pos) = param.find('=') {
            let key = param[..eq_pos].trim();
            let value = param[eq_pos + 1..].trim().trim_matches('"');
            params.insert(key, value);
        }
    }

    Some(AuthChallenge {
        realm: params.get("realm")?.to_string(),
        service: params.get("service")?.to_string(),
        scope: params.get("scope")?.to_string(),
    })
}

async fn read_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error response".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_challenge_full_header() {
        let header = r#"Bearer realm="https://auth.example/token",service="registry",scope="repository:x:pull""#;
        let challenge = parse_challenge(header).expect("challenge should parse");

        assert_eq!(
            challenge,
            AuthChallenge {
                realm: "https://auth.example/token".to_string(),
                service: "registry".to_string(),
                scope: "repository:x:pull".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_challenge_tolerates_spacing() {
        let header = r#"Bearer realm="https://auth.example/token", service="registry", scope="repository:x:pull""#;
        let challenge = parse_challenge(header).expect("challenge should parse");
        assert_eq!(challenge.service, "registry");
        assert_eq!(challenge.scope, "repository:x:pull");
    }

    #[test]
    fn test_parse_challenge_missing_scope() {
        let header = r#"Bearer realm="https://auth.example/token",service="registry""#;
        assert!(parse_challenge(header).is_none());
    }

    #[test]
    fn test_parse_challenge_not_bearer() {
        assert!(parse_challenge(r#"Basic realm="registry""#).is_none());
    }
}
