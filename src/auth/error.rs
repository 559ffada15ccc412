use thiserror::Error;

/// Failure of a single authentication exchange against the identity server.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token endpoint returned {status}: {body}")]
    TokenEndpoint { status: u16, body: String },
    #[error("invalid token response: {0}")]
    InvalidResponse(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("missing credential material: {0}")]
    MissingCredentials(&'static str),
}

/// Returned by [`crate::auth::token_manager::TokenManager::token`] when a
/// refresh was needed and the exchange failed. The cache entry is left
/// untouched so the next call retries cleanly.
#[derive(Debug, Error)]
#[error("token acquisition failed: {0}")]
pub struct TokenError(#[from] pub AuthError);
