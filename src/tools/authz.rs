//! Authorization-services tools (resource server, resources, policies,
//! permissions, scopes).

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::tools::{push_param, Registry, ToolReply};

#[derive(Debug, Deserialize)]
struct ResourceServerArgs {
    #[serde(default)]
    realm: String,
    /// Internal UUID of the client owning the resource server
    client_id: String,
}

#[derive(Debug, Deserialize)]
struct ListAuthzArgs {
    #[serde(default)]
    realm: String,
    client_id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    first: Option<i32>,
    #[serde(default)]
    max: Option<i32>,
}

impl ListAuthzArgs {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "name", &self.name);
        push_param(&mut query, "first", &self.first);
        push_param(&mut query, "max", &self.max);
        query
    }
}

#[derive(Debug, Deserialize)]
struct CreateAuthzArgs {
    #[serde(default)]
    realm: String,
    client_id: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct DeleteResourceArgs {
    #[serde(default)]
    realm: String,
    client_id: String,
    resource_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateTypedAuthzArgs {
    #[serde(default)]
    realm: String,
    client_id: String,
    /// Policy or permission type, e.g. "role", "client", "resource", "scope"
    r#type: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct DeletePolicyArgs {
    #[serde(default)]
    realm: String,
    client_id: String,
    policy_id: String,
}

#[derive(Debug, Deserialize)]
struct DeleteScopeArgs {
    #[serde(default)]
    realm: String,
    client_id: String,
    scope_id: String,
}

pub fn register(registry: &mut Registry) {
    registry.register(
        "get_resource_server",
        "Get a client's resource-server settings",
        |kc: Arc<AdminClient>, args: ResourceServerArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let settings = kc.resource_server(&realm, &args.client_id).await?;
            Ok(ToolReply::json(&settings))
        },
    );

    registry.register(
        "list_resources",
        "List the resources of a resource server",
        |kc: Arc<AdminClient>, args: ListAuthzArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let resources = kc
                .list_resources(&realm, &args.client_id, &args.query())
                .await?;
            Ok(ToolReply::json(&resources))
        },
    );

    registry.register(
        "create_resource",
        "Create a resource from a resource representation",
        |kc: Arc<AdminClient>, args: CreateAuthzArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let resource = kc
                .create_resource(&realm, &args.client_id, &args.representation)
                .await?;
            Ok(ToolReply::json(&resource))
        },
    );

    registry.register(
        "delete_resource",
        "Delete a resource by ID",
        |kc: Arc<AdminClient>, args: DeleteResourceArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_resource(&realm, &args.client_id, &args.resource_id)
                .await?;
            Ok(ToolReply::success("resource deleted"))
        },
    );

    registry.register(
        "list_policies",
        "List the policies of a resource server",
        |kc: Arc<AdminClient>, args: ListAuthzArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let policies = kc
                .list_policies(&realm, &args.client_id, &args.query())
                .await?;
            Ok(ToolReply::json(&policies))
        },
    );

    registry.register(
        "create_policy",
        "Create a policy of the given type from a policy representation",
        |kc: Arc<AdminClient>, args: CreateTypedAuthzArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let policy = kc
                .create_policy(&realm, &args.client_id, &args.r#type, &args.representation)
                .await?;
            Ok(ToolReply::json(&policy))
        },
    );

    registry.register(
        "delete_policy",
        "Delete a policy by ID",
        |kc: Arc<AdminClient>, args: DeletePolicyArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_policy(&realm, &args.client_id, &args.policy_id)
                .await?;
            Ok(ToolReply::success("policy deleted"))
        },
    );

    registry.register(
        "list_permissions",
        "List the permissions of a resource server",
        |kc: Arc<AdminClient>, args: ListAuthzArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let permissions = kc
                .list_permissions(&realm, &args.client_id, &args.query())
                .await?;
            Ok(ToolReply::json(&permissions))
        },
    );

    registry.register(
        "create_permission",
        "Create a permission of the given type from a permission representation",
        |kc: Arc<AdminClient>, args: CreateTypedAuthzArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let permission = kc
                .create_permission(&realm, &args.client_id, &args.r#type, &args.representation)
                .await?;
            Ok(ToolReply::json(&permission))
        },
    );

    registry.register(
        "list_auth_scopes",
        "List the authorization scopes of a resource server",
        |kc: Arc<AdminClient>, args: ListAuthzArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let scopes = kc
                .list_auth_scopes(&realm, &args.client_id, &args.query())
                .await?;
            Ok(ToolReply::json(&scopes))
        },
    );

    registry.register(
        "create_auth_scope",
        "Create an authorization scope from a scope representation",
        |kc: Arc<AdminClient>, args: CreateAuthzArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let scope = kc
                .create_auth_scope(&realm, &args.client_id, &args.representation)
                .await?;
            Ok(ToolReply::json(&scope))
        },
    );

    registry.register(
        "delete_auth_scope",
        "Delete an authorization scope by ID",
        |kc: Arc<AdminClient>, args: DeleteScopeArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_auth_scope(&realm, &args.client_id, &args.scope_id)
                .await?;
            Ok(ToolReply::success("authorization scope deleted"))
        },
    );
}
