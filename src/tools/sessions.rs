//! Session administration tools.

use std::sync::Arc;

use serde::Deserialize;

use crate::keycloak::client::AdminClient;
use crate::tools::{push_param, Registry, ToolReply};

#[derive(Debug, Deserialize)]
struct ClientSessionsArgs {
    #[serde(default)]
    realm: String,
    /// Internal client UUID
    client_id: String,
    #[serde(default)]
    first: Option<i32>,
    #[serde(default)]
    max: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct SessionArgs {
    #[serde(default)]
    realm: String,
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct RevokeConsentArgs {
    #[serde(default)]
    realm: String,
    user_id: String,
    /// Public clientId whose consent is revoked
    client_id: String,
}

pub fn register(registry: &mut Registry) {
    registry.register(
        "get_client_sessions",
        "List the active user sessions of a client",
        |kc: Arc<AdminClient>, args: ClientSessionsArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let mut query = Vec::new();
            push_param(&mut query, "first", &args.first);
            push_param(&mut query, "max", &args.max);
            let sessions = kc
                .client_user_sessions(&realm, &args.client_id, &query)
                .await?;
            Ok(ToolReply::json(&sessions))
        },
    );

    registry.register(
        "get_client_offline_sessions",
        "List the offline sessions of a client",
        |kc: Arc<AdminClient>, args: ClientSessionsArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let mut query = Vec::new();
            push_param(&mut query, "first", &args.first);
            push_param(&mut query, "max", &args.max);
            let sessions = kc
                .client_offline_sessions(&realm, &args.client_id, &query)
                .await?;
            Ok(ToolReply::json(&sessions))
        },
    );

    registry.register(
        "logout_user_session",
        "Invalidate one specific session",
        |kc: Arc<AdminClient>, args: SessionArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_session(&realm, &args.session_id).await?;
            Ok(ToolReply::success("session invalidated"))
        },
    );

    registry.register(
        "revoke_user_consents",
        "Revoke a user's consent for a client",
        |kc: Arc<AdminClient>, args: RevokeConsentArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.revoke_user_consent(&realm, &args.user_id, &args.client_id)
                .await?;
            Ok(ToolReply::success("consent revoked"))
        },
    );
}
