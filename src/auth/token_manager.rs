use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::auth::error::TokenError;
use crate::auth::source::TokenSource;

/// A published token and the instant from which it counts as expired.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Shared bearer-token cache with exactly-one-refresh coordination.
///
/// Any number of callers may hold the same `TokenManager`; the fast path is
/// an uncontended shared read, and an expired or absent entry is refreshed
/// by at most one caller while the rest wait on the write guard and then
/// observe the freshly published value.
pub struct TokenManager {
    source: Box<dyn TokenSource>,
    safety_margin: Duration,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenManager {
    pub fn new(source: Box<dyn TokenSource>, safety_margin: Duration) -> Self {
        Self {
            source,
            safety_margin,
            cached: RwLock::new(None),
        }
    }

    /// Returns a valid access token, re-authenticating if the cached one is
    /// absent or past its safety-margin expiry.
    pub async fn token(&self) -> Result<String, TokenError> {
        {
            let cached = self.cached.read().await;
            if let Some(entry) = cached.as_ref() {
                if Instant::now() < entry.expires_at {
                    return Ok(entry.access_token.clone());
                }
            }
        }

        let mut cached = self.cached.write().await;

        // Re-check: another caller may have refreshed while this one was
        // waiting for the write guard.
        if let Some(entry) = cached.as_ref() {
            if Instant::now() < entry.expires_at {
                return Ok(entry.access_token.clone());
            }
        }

        let issued = self.source.authenticate().await?;
        let expires_at = expires_at(Instant::now(), issued.expires_in, self.safety_margin);
        debug!(expires_in = issued.expires_in, "token acquired");

        *cached = Some(CachedToken {
            access_token: issued.access_token.clone(),
            expires_at,
        });
        Ok(issued.access_token)
    }
}

/// Expiry is the declared lifetime minus the safety margin. A margin at or
/// above the lifetime yields an already-expired entry, so every call
/// re-authenticates.
fn expires_at(now: Instant, expires_in: u64, margin: Duration) -> Instant {
    (now + Duration::from_secs(expires_in))
        .checked_sub(margin)
        .unwrap_or(now)
}
