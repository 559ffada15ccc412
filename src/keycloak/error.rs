use thiserror::Error;

use crate::auth::error::TokenError;

/// Failure of one admin API call.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error("admin API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid admin API response: {0}")]
    Decode(String),
}
