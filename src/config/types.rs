use serde::Deserialize;

use crate::utils::constants::{
    DEFAULT_ADMIN_USER, DEFAULT_AUTH_REALM, DEFAULT_CLIENT_ID, DEFAULT_SAFETY_MARGIN_SECS,
    DEFAULT_URL,
};

/// ================================
/// Full service configuration
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    #[serde(default)]
    pub keycloak: KeycloakConfig,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

/// ================================
/// Keycloak connection & credentials
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct KeycloakConfig {
    /// Base URL of the Keycloak server
    #[serde(default = "default_url")]
    pub url: String,
    /// Realm the agent authenticates against
    #[serde(default = "default_auth_realm")]
    pub realm: String,
    #[serde(default)]
    pub auth_mode: AuthMode,
    /// Administrative username for password auth
    #[serde(default = "default_admin_user")]
    pub admin_user: String,
    /// Supplied via KEYCLOAK_ADMIN_PASSWORD only, never file-borne
    #[serde(skip)]
    pub admin_password: Option<String>,
    /// Client used for the token exchange
    #[serde(default = "default_client_id")]
    pub client_id: String,
    /// Supplied via KEYCLOAK_CLIENT_SECRET only, never file-borne
    #[serde(skip)]
    pub client_secret: Option<String>,
    /// Realm used by operations when the caller omits one
    #[serde(default)]
    pub default_realm: String,
    /// Subtracted from the server-declared token lifetime to force early refresh
    #[serde(default = "default_safety_margin")]
    pub safety_margin_seconds: u64,
}

impl Default for KeycloakConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            realm: default_auth_realm(),
            auth_mode: AuthMode::default(),
            admin_user: default_admin_user(),
            admin_password: None,
            client_id: default_client_id(),
            client_secret: None,
            default_realm: String::new(),
            safety_margin_seconds: default_safety_margin(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Password,
    ClientCredentials,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// allowed: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

fn default_url() -> String {
    DEFAULT_URL.to_owned()
}

fn default_auth_realm() -> String {
    DEFAULT_AUTH_REALM.to_owned()
}

fn default_admin_user() -> String {
    DEFAULT_ADMIN_USER.to_owned()
}

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_owned()
}

fn default_safety_margin() -> u64 {
    DEFAULT_SAFETY_MARGIN_SECS
}

fn default_log_level() -> String {
    "info".to_owned()
}
