//! Token acquisition and caching.
//!
//! `CredentialSource` performs a single authentication exchange against the
//! identity server; `TokenManager` caches the result and coordinates
//! refreshes so concurrent callers never authenticate redundantly.

pub mod error;
pub mod source;
pub mod token_manager;
