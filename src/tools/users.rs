//! User administration tools.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::tools::{push_param, Registry, ToolReply};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListUsersArgs {
    realm: String,
    search: Option<String>,
    username: Option<String>,
    email: Option<String>,
    enabled: Option<bool>,
    first: Option<i32>,
    max: Option<i32>,
}

impl ListUsersArgs {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_param(&mut query, "search", &self.search);
        push_param(&mut query, "username", &self.username);
        push_param(&mut query, "email", &self.email);
        push_param(&mut query, "enabled", &self.enabled);
        push_param(&mut query, "first", &self.first);
        push_param(&mut query, "max", &self.max);
        query
    }
}

#[derive(Debug, Deserialize)]
struct UserArgs {
    #[serde(default)]
    realm: String,
    user_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateUserArgs {
    #[serde(default)]
    realm: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct UpdateUserArgs {
    #[serde(default)]
    realm: String,
    user_id: String,
    representation: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CountUsersArgs {
    realm: String,
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SetUserPasswordArgs {
    #[serde(default)]
    realm: String,
    user_id: String,
    password: String,
    #[serde(default)]
    temporary: bool,
}

#[derive(Debug, Deserialize)]
struct UserGroupArgs {
    #[serde(default)]
    realm: String,
    user_id: String,
    group_id: String,
}

#[derive(Debug, Deserialize)]
struct UserRolesArgs {
    #[serde(default)]
    realm: String,
    user_id: String,
    /// Array of role representations (as returned by the role endpoints)
    roles: Value,
}

pub fn register(registry: &mut Registry) {
    registry.register(
        "list_users",
        "List users in a realm, with optional filters and pagination",
        |kc: Arc<AdminClient>, args: ListUsersArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let users = kc.list_users(&realm, &args.query()).await?;
            Ok(ToolReply::json(&users))
        },
    );

    registry.register(
        "get_user",
        "Get a user by ID",
        |kc: Arc<AdminClient>, args: UserArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let user = kc.get_user(&realm, &args.user_id).await?;
            Ok(ToolReply::json(&user))
        },
    );

    registry.register(
        "create_user",
        "Create a user from a user representation",
        |kc: Arc<AdminClient>, args: CreateUserArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            match kc.create_user(&realm, &args.representation).await? {
                Some(id) => Ok(ToolReply::success(format!("user created: {id}"))),
                None => Ok(ToolReply::success("user created")),
            }
        },
    );

    registry.register(
        "update_user",
        "Update a user from a user representation",
        |kc: Arc<AdminClient>, args: UpdateUserArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.update_user(&realm, &args.user_id, &args.representation)
                .await?;
            Ok(ToolReply::success("user updated"))
        },
    );

    registry.register(
        "delete_user",
        "Delete a user by ID",
        |kc: Arc<AdminClient>, args: UserArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_user(&realm, &args.user_id).await?;
            Ok(ToolReply::success("user deleted"))
        },
    );

    registry.register(
        "count_users",
        "Count users in a realm, optionally filtered by a search string",
        |kc: Arc<AdminClient>, args: CountUsersArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let mut query = Vec::new();
            push_param(&mut query, "search", &args.search);
            let count = kc.count_users(&realm, &query).await?;
            Ok(ToolReply::json(&count))
        },
    );

    registry.register(
        "set_user_password",
        "Set a user's password, optionally marking it temporary",
        |kc: Arc<AdminClient>, args: SetUserPasswordArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.set_user_password(&realm, &args.user_id, &args.password, args.temporary)
                .await?;
            Ok(ToolReply::success("password updated"))
        },
    );

    registry.register(
        "get_user_groups",
        "List the groups a user belongs to",
        |kc: Arc<AdminClient>, args: UserArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let groups = kc.user_groups(&realm, &args.user_id).await?;
            Ok(ToolReply::json(&groups))
        },
    );

    registry.register(
        "add_user_to_group",
        "Add a user to a group",
        |kc: Arc<AdminClient>, args: UserGroupArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.add_user_to_group(&realm, &args.user_id, &args.group_id)
                .await?;
            Ok(ToolReply::success("user added to group"))
        },
    );

    registry.register(
        "remove_user_from_group",
        "Remove a user from a group",
        |kc: Arc<AdminClient>, args: UserGroupArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.remove_user_from_group(&realm, &args.user_id, &args.group_id)
                .await?;
            Ok(ToolReply::success("user removed from group"))
        },
    );

    registry.register(
        "get_user_realm_roles",
        "List the realm roles mapped to a user",
        |kc: Arc<AdminClient>, args: UserArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let roles = kc.user_realm_roles(&realm, &args.user_id).await?;
            Ok(ToolReply::json(&roles))
        },
    );

    registry.register(
        "add_user_realm_roles",
        "Map realm roles to a user",
        |kc: Arc<AdminClient>, args: UserRolesArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.add_user_realm_roles(&realm, &args.user_id, &args.roles)
                .await?;
            Ok(ToolReply::success("realm roles added"))
        },
    );

    registry.register(
        "remove_user_realm_roles",
        "Unmap realm roles from a user",
        |kc: Arc<AdminClient>, args: UserRolesArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.remove_user_realm_roles(&realm, &args.user_id, &args.roles)
                .await?;
            Ok(ToolReply::success("realm roles removed"))
        },
    );

    registry.register(
        "get_user_sessions",
        "List a user's active sessions",
        |kc: Arc<AdminClient>, args: UserArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let sessions = kc.user_sessions(&realm, &args.user_id).await?;
            Ok(ToolReply::json(&sessions))
        },
    );

    registry.register(
        "logout_user_all_sessions",
        "Invalidate all sessions of a user",
        |kc: Arc<AdminClient>, args: UserArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.logout_user(&realm, &args.user_id).await?;
            Ok(ToolReply::success("user sessions invalidated"))
        },
    );
}
