//! Shared constants and invariants

pub const FALLBACK_REALM: &str = "master";

pub const DEFAULT_URL: &str = "http://localhost:8080";
pub const DEFAULT_AUTH_REALM: &str = "master";
pub const DEFAULT_ADMIN_USER: &str = "admin";
pub const DEFAULT_CLIENT_ID: &str = "admin-cli";
pub const DEFAULT_SAFETY_MARGIN_SECS: u64 = 30;
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

// Supported authentication modes
pub const AUTH_MODE_PASSWORD: &str = "password";
pub const AUTH_MODE_CLIENT_CREDENTIALS: &str = "client_credentials";
