use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::auth::error::AuthError;
use crate::config::types::{AuthMode, KeycloakConfig};

/// A bearer token plus its server-declared lifetime in seconds.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: u64,
}

/// One authentication exchange. Stateless per call; repeated calls simply
/// re-authenticate.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn authenticate(&self) -> Result<IssuedToken, AuthError>;
}

/// Exchanges the configured credentials for a bearer token at the realm's
/// OpenID Connect token endpoint.
#[derive(Debug, Clone)]
pub struct CredentialSource {
    cfg: KeycloakConfig,
    client: Client,
}

impl CredentialSource {
    pub fn new(cfg: KeycloakConfig, client: Client) -> Self {
        Self { cfg, client }
    }

    fn token_url(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.cfg.url.trim_end_matches('/'),
            self.cfg.realm
        )
    }

    fn grant_form(&self) -> Result<Vec<(&'static str, String)>, AuthError> {
        match self.cfg.auth_mode {
            AuthMode::ClientCredentials => {
                let secret = self
                    .cfg
                    .client_secret
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .ok_or(AuthError::MissingCredentials("client_secret"))?;
                Ok(vec![
                    ("grant_type", "client_credentials".to_owned()),
                    ("client_id", self.cfg.client_id.clone()),
                    ("client_secret", secret.to_owned()),
                ])
            }
            AuthMode::Password => {
                let password = self
                    .cfg
                    .admin_password
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .ok_or(AuthError::MissingCredentials("admin_password"))?;
                Ok(vec![
                    ("grant_type", "password".to_owned()),
                    ("client_id", self.cfg.client_id.clone()),
                    ("username", self.cfg.admin_user.clone()),
                    ("password", password.to_owned()),
                ])
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[async_trait]
impl TokenSource for CredentialSource {
    async fn authenticate(&self) -> Result<IssuedToken, AuthError> {
        let form = self.grant_form()?;
        let response = self
            .client
            .post(self.token_url())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(AuthError::TokenEndpoint {
                status: status.as_u16(),
                body,
            });
        }

        let payload: TokenResponse = serde_json::from_str(&body)
            .map_err(|err| AuthError::InvalidResponse(err.to_string()))?;
        if payload.access_token.is_empty() {
            return Err(AuthError::InvalidResponse(
                "missing access_token in token response".into(),
            ));
        }

        Ok(IssuedToken {
            access_token: payload.access_token,
            expires_in: payload.expires_in,
        })
    }
}
