use std::time::Duration;

use http::Method;
use reqwest::Client;
use serde_json::Value;

use crate::auth::error::TokenError;
use crate::auth::source::CredentialSource;
use crate::auth::token_manager::TokenManager;
use crate::config::types::KeycloakConfig;
use crate::keycloak::error::AdminError;
use crate::utils::constants::FALLBACK_REALM;

/// Returns `explicit` if non-empty, else the configured default realm if
/// non-empty, else the fixed fallback realm.
pub fn resolve_realm<'a>(explicit: &'a str, configured: &'a str) -> &'a str {
    if !explicit.is_empty() {
        explicit
    } else if !configured.is_empty() {
        configured
    } else {
        FALLBACK_REALM
    }
}

/// Admin API client wrapping the REST surface with automatic token
/// injection and realm resolution.
pub struct AdminClient {
    http: Client,
    base_url: String,
    tokens: TokenManager,
    default_realm: String,
}

impl AdminClient {
    pub fn new(cfg: KeycloakConfig, http: Client) -> Self {
        let base_url = cfg.url.trim_end_matches('/').to_owned();
        let default_realm = cfg.default_realm.clone();
        let safety_margin = Duration::from_secs(cfg.safety_margin_seconds);
        let source = CredentialSource::new(cfg, http.clone());
        Self {
            http,
            base_url,
            tokens: TokenManager::new(Box::new(source), safety_margin),
            default_realm,
        }
    }

    /// Returns the provided realm or falls back to the configured default.
    pub fn resolve_realm<'a>(&'a self, explicit: &'a str) -> &'a str {
        resolve_realm(explicit, &self.default_realm)
    }

    /// Returns a valid access token string.
    pub async fn token(&self) -> Result<String, TokenError> {
        self.tokens.token().await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<reqwest::Response, AdminError> {
        let token = self.tokens.token().await?;
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self.http.request(method, &url).bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdminError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    pub(crate) async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        let response = self.send(Method::GET, path, query, None).await?;
        response
            .json()
            .await
            .map_err(|err| AdminError::Decode(err.to_string()))
    }

    /// POST with create semantics; returns the new resource id when the
    /// server provides one in the `Location` header.
    pub(crate) async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<String>, AdminError> {
        let response = self.send(Method::POST, path, &[], body).await?;
        Ok(created_id(&response))
    }

    /// POST whose response body is a JSON document.
    pub(crate) async fn post_json(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, AdminError> {
        let response = self.send(Method::POST, path, &[], body).await?;
        response
            .json()
            .await
            .map_err(|err| AdminError::Decode(err.to_string()))
    }

    pub(crate) async fn put(&self, path: &str, body: Option<&Value>) -> Result<(), AdminError> {
        self.send(Method::PUT, path, &[], body).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str, body: Option<&Value>) -> Result<(), AdminError> {
        self.send(Method::DELETE, path, &[], body).await?;
        Ok(())
    }
}

/// Keycloak create endpoints answer 201 with a `Location` header whose last
/// segment is the new resource id.
fn created_id(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|location| location.rsplit('/').next())
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
}
