//! Shared test doubles and helpers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::{sleep, Duration};

use crate::auth::error::AuthError;
use crate::auth::source::{IssuedToken, TokenSource};
use crate::config::types::KeycloakConfig;

/// Keycloak config pointed at a mock server, password mode.
pub fn test_keycloak_config(base_url: &str) -> KeycloakConfig {
    KeycloakConfig {
        url: base_url.to_owned(),
        admin_password: Some("s3cret".to_owned()),
        ..KeycloakConfig::default()
    }
}

/// Source that mints "token-<n>" values and counts completed exchanges.
pub struct CountingSource {
    pub calls: Arc<AtomicUsize>,
    expires_in: u64,
    delay: Duration,
}

impl CountingSource {
    pub fn new(expires_in: u64) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            expires_in,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(expires_in: u64, delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new(expires_in)
        }
    }
}

#[async_trait]
impl TokenSource for CountingSource {
    async fn authenticate(&self) -> Result<IssuedToken, AuthError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(IssuedToken {
            access_token: format!("token-{n}"),
            expires_in: self.expires_in,
        })
    }
}

/// Source whose first exchange fails with a 401; later exchanges succeed.
pub struct FailOnceSource {
    pub calls: Arc<AtomicUsize>,
}

impl FailOnceSource {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl TokenSource for FailOnceSource {
    async fn authenticate(&self) -> Result<IssuedToken, AuthError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n == 1 {
            return Err(AuthError::TokenEndpoint {
                status: 401,
                body: "invalid credentials".to_owned(),
            });
        }
        Ok(IssuedToken {
            access_token: format!("token-{n}"),
            expires_in: 3600,
        })
    }
}

/// Source whose first exchange never completes; later exchanges succeed.
/// Used to drive caller-side cancellation.
pub struct HangOnceSource {
    pub calls: Arc<AtomicUsize>,
}

impl HangOnceSource {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl TokenSource for HangOnceSource {
    async fn authenticate(&self) -> Result<IssuedToken, AuthError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if n == 1 {
            std::future::pending::<()>().await;
            unreachable!();
        }
        Ok(IssuedToken {
            access_token: "token-after-cancel".to_owned(),
            expires_in: 3600,
        })
    }
}
