//! Client administration tools.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::tools::{push_param, Registry, ToolReply};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListClientsArgs {
    realm: String,
    /// Public clientId filter (not the internal UUID)
    client_id: Option<String>,
    first: Option<i32>,
    max: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ClientArgs {
    #[serde(default)]
    realm: String,
    /// Internal client UUID
    client_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateClientArgs {
    #[serde(default)]
    realm: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct UpdateClientArgs {
    #[serde(default)]
    realm: String,
    client_id: String,
    representation: Value,
}

pub fn register(registry: &mut Registry) {
    registry.register(
        "list_clients",
        "List clients in a realm, optionally filtered by clientId",
        |kc: Arc<AdminClient>, args: ListClientsArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let mut query = Vec::new();
            push_param(&mut query, "clientId", &args.client_id);
            push_param(&mut query, "first", &args.first);
            push_param(&mut query, "max", &args.max);
            let clients = kc.list_clients(&realm, &query).await?;
            Ok(ToolReply::json(&clients))
        },
    );

    registry.register(
        "get_client",
        "Get a client by its internal UUID",
        |kc: Arc<AdminClient>, args: ClientArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let client = kc.get_client(&realm, &args.client_id).await?;
            Ok(ToolReply::json(&client))
        },
    );

    registry.register(
        "create_client",
        "Create a client from a client representation",
        |kc: Arc<AdminClient>, args: CreateClientArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            match kc.create_client(&realm, &args.representation).await? {
                Some(id) => Ok(ToolReply::success(format!("client created: {id}"))),
                None => Ok(ToolReply::success("client created")),
            }
        },
    );

    registry.register(
        "update_client",
        "Update a client from a client representation",
        |kc: Arc<AdminClient>, args: UpdateClientArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.update_client(&realm, &args.client_id, &args.representation)
                .await?;
            Ok(ToolReply::success("client updated"))
        },
    );

    registry.register(
        "delete_client",
        "Delete a client by its internal UUID",
        |kc: Arc<AdminClient>, args: ClientArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_client(&realm, &args.client_id).await?;
            Ok(ToolReply::success("client deleted"))
        },
    );

    registry.register(
        "get_client_secret",
        "Get a client's current secret",
        |kc: Arc<AdminClient>, args: ClientArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let secret = kc.client_secret(&realm, &args.client_id).await?;
            Ok(ToolReply::json(&secret))
        },
    );

    registry.register(
        "regenerate_client_secret",
        "Generate a new secret for a client",
        |kc: Arc<AdminClient>, args: ClientArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let secret = kc.regenerate_client_secret(&realm, &args.client_id).await?;
            Ok(ToolReply::json(&secret))
        },
    );

    registry.register(
        "get_client_service_account",
        "Get the service-account user of a client",
        |kc: Arc<AdminClient>, args: ClientArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let user = kc.client_service_account(&realm, &args.client_id).await?;
            Ok(ToolReply::json(&user))
        },
    );
}
