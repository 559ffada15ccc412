//! Realm-role and client-role administration tools.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::tools::{push_param, Registry, ToolReply};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListRealmRolesArgs {
    realm: String,
    search: Option<String>,
    first: Option<i32>,
    max: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct RealmRoleArgs {
    #[serde(default)]
    realm: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreateRealmRoleArgs {
    #[serde(default)]
    realm: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct UpdateRealmRoleArgs {
    #[serde(default)]
    realm: String,
    name: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct UsersByRealmRoleArgs {
    #[serde(default)]
    realm: String,
    name: String,
    #[serde(default)]
    first: Option<i32>,
    #[serde(default)]
    max: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ClientRolesArgs {
    #[serde(default)]
    realm: String,
    /// Internal client UUID
    client_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateClientRoleArgs {
    #[serde(default)]
    realm: String,
    client_id: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct ClientRoleArgs {
    #[serde(default)]
    realm: String,
    client_id: String,
    name: String,
}

pub fn register(registry: &mut Registry) {
    registry.register(
        "list_realm_roles",
        "List realm roles, with optional search and pagination",
        |kc: Arc<AdminClient>, args: ListRealmRolesArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let mut query = Vec::new();
            push_param(&mut query, "search", &args.search);
            push_param(&mut query, "first", &args.first);
            push_param(&mut query, "max", &args.max);
            let roles = kc.list_realm_roles(&realm, &query).await?;
            Ok(ToolReply::json(&roles))
        },
    );

    registry.register(
        "get_realm_role",
        "Get a realm role by name",
        |kc: Arc<AdminClient>, args: RealmRoleArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let role = kc.get_realm_role(&realm, &args.name).await?;
            Ok(ToolReply::json(&role))
        },
    );

    registry.register(
        "create_realm_role",
        "Create a realm role from a role representation",
        |kc: Arc<AdminClient>, args: CreateRealmRoleArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            match kc.create_realm_role(&realm, &args.representation).await? {
                Some(id) => Ok(ToolReply::success(format!("realm role created: {id}"))),
                None => Ok(ToolReply::success("realm role created")),
            }
        },
    );

    registry.register(
        "update_realm_role",
        "Update a realm role from a role representation",
        |kc: Arc<AdminClient>, args: UpdateRealmRoleArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.update_realm_role(&realm, &args.name, &args.representation)
                .await?;
            Ok(ToolReply::success("realm role updated"))
        },
    );

    registry.register(
        "delete_realm_role",
        "Delete a realm role by name",
        |kc: Arc<AdminClient>, args: RealmRoleArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_realm_role(&realm, &args.name).await?;
            Ok(ToolReply::success("realm role deleted"))
        },
    );

    registry.register(
        "get_users_by_realm_role",
        "List the users that have a realm role",
        |kc: Arc<AdminClient>, args: UsersByRealmRoleArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let mut query = Vec::new();
            push_param(&mut query, "first", &args.first);
            push_param(&mut query, "max", &args.max);
            let users = kc.users_by_realm_role(&realm, &args.name, &query).await?;
            Ok(ToolReply::json(&users))
        },
    );

    registry.register(
        "list_client_roles",
        "List the roles of a client",
        |kc: Arc<AdminClient>, args: ClientRolesArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let roles = kc.list_client_roles(&realm, &args.client_id).await?;
            Ok(ToolReply::json(&roles))
        },
    );

    registry.register(
        "create_client_role",
        "Create a client role from a role representation",
        |kc: Arc<AdminClient>, args: CreateClientRoleArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            match kc
                .create_client_role(&realm, &args.client_id, &args.representation)
                .await?
            {
                Some(id) => Ok(ToolReply::success(format!("client role created: {id}"))),
                None => Ok(ToolReply::success("client role created")),
            }
        },
    );

    registry.register(
        "delete_client_role",
        "Delete a client role by name",
        |kc: Arc<AdminClient>, args: ClientRoleArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_client_role(&realm, &args.client_id, &args.name)
                .await?;
            Ok(ToolReply::success("client role deleted"))
        },
    );
}
