use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::types::{AuthMode, ServiceConfig};
use crate::utils::constants::{AUTH_MODE_CLIENT_CREDENTIALS, AUTH_MODE_PASSWORD};

/// Load config from a YAML file (when present), apply environment
/// overrides, and validate. Secret material is env-only.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ServiceConfig> {
    let path = path.as_ref();
    let mut config: ServiceConfig = if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?
    } else {
        ServiceConfig::default()
    };

    apply_env(&mut config)?;
    validate(&config)?;
    Ok(config)
}

fn apply_env(config: &mut ServiceConfig) -> Result<()> {
    let kc = &mut config.keycloak;
    if let Ok(url) = env::var("KEYCLOAK_URL") {
        kc.url = url;
    }
    if let Ok(realm) = env::var("KEYCLOAK_REALM") {
        kc.realm = realm;
    }
    if let Ok(mode) = env::var("KEYCLOAK_AUTH_MODE") {
        kc.auth_mode = parse_auth_mode(&mode)?;
    }
    if let Ok(user) = env::var("KEYCLOAK_ADMIN_USER") {
        kc.admin_user = user;
    }
    if let Ok(client_id) = env::var("KEYCLOAK_CLIENT_ID") {
        kc.client_id = client_id;
    }
    if let Ok(realm) = env::var("KEYCLOAK_DEFAULT_REALM") {
        kc.default_realm = realm;
    }
    if let Ok(margin) = env::var("KEYCLOAK_TOKEN_SAFETY_MARGIN") {
        kc.safety_margin_seconds = margin
            .parse()
            .context("KEYCLOAK_TOKEN_SAFETY_MARGIN must be a number of seconds")?;
    }
    kc.admin_password = env::var("KEYCLOAK_ADMIN_PASSWORD")
        .ok()
        .filter(|v| !v.is_empty());
    kc.client_secret = env::var("KEYCLOAK_CLIENT_SECRET")
        .ok()
        .filter(|v| !v.is_empty());
    Ok(())
}

fn parse_auth_mode(raw: &str) -> Result<AuthMode> {
    match raw {
        AUTH_MODE_PASSWORD => Ok(AuthMode::Password),
        AUTH_MODE_CLIENT_CREDENTIALS => Ok(AuthMode::ClientCredentials),
        other => bail!("Unsupported auth mode '{other}'"),
    }
}

fn validate(config: &ServiceConfig) -> Result<()> {
    let kc = &config.keycloak;
    if kc.url.is_empty() {
        bail!("keycloak.url must not be empty");
    }
    match kc.auth_mode {
        AuthMode::Password if kc.admin_password.is_none() => {
            bail!("password auth mode requires KEYCLOAK_ADMIN_PASSWORD");
        }
        AuthMode::ClientCredentials if kc.client_secret.is_none() => {
            bail!("client_credentials auth mode requires KEYCLOAK_CLIENT_SECRET");
        }
        _ => Ok(()),
    }
}
