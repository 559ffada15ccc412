//! Keycloak Admin REST client.
//!
//! [`client::AdminClient`] owns the HTTP client, the token cache, and the
//! configured default realm. The per-domain files add the mechanical
//! endpoint wrappers; representations flow through as untyped JSON.

pub mod client;
pub mod error;

mod authz;
mod clients;
mod groups;
mod realms;
mod roles;
mod server_info;
mod sessions;
mod users;
