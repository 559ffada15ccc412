//! # Keycloak Admin Agent Library
//!
//! Exposes Keycloak administrative operations (realms, users, groups,
//! clients, roles, sessions, authorization policy) as individually
//! invocable tools, authenticating every downstream call with a cached
//! bearer token.
//!
//! Modules:
//! - `config` — service configuration, env overrides, validation
//! - `auth` — credential source and the shared token cache
//! - `keycloak` — admin REST client with token injection and realm resolution
//! - `tools` — tool registry and the per-domain tool surface

pub mod auth;
pub mod config;
pub mod keycloak;
pub mod tools;
pub mod utils;
pub mod tests;

pub use crate::config::types::ServiceConfig;
pub use crate::keycloak::client::AdminClient;
