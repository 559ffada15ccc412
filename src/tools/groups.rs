//! Group administration tools.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::tools::{push_param, Registry, ToolReply};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListGroupsArgs {
    realm: String,
    search: Option<String>,
    first: Option<i32>,
    max: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct GroupArgs {
    #[serde(default)]
    realm: String,
    group_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateGroupArgs {
    #[serde(default)]
    realm: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct CreateChildGroupArgs {
    #[serde(default)]
    realm: String,
    parent_id: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct UpdateGroupArgs {
    #[serde(default)]
    realm: String,
    group_id: String,
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct GroupMembersArgs {
    #[serde(default)]
    realm: String,
    group_id: String,
    #[serde(default)]
    first: Option<i32>,
    #[serde(default)]
    max: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CountGroupsArgs {
    realm: String,
    search: Option<String>,
}

pub fn register(registry: &mut Registry) {
    registry.register(
        "list_groups",
        "List groups in a realm, with optional search and pagination",
        |kc: Arc<AdminClient>, args: ListGroupsArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let mut query = Vec::new();
            push_param(&mut query, "search", &args.search);
            push_param(&mut query, "first", &args.first);
            push_param(&mut query, "max", &args.max);
            let groups = kc.list_groups(&realm, &query).await?;
            Ok(ToolReply::json(&groups))
        },
    );

    registry.register(
        "get_group",
        "Get a group by ID",
        |kc: Arc<AdminClient>, args: GroupArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let group = kc.get_group(&realm, &args.group_id).await?;
            Ok(ToolReply::json(&group))
        },
    );

    registry.register(
        "create_group",
        "Create a top-level group from a group representation",
        |kc: Arc<AdminClient>, args: CreateGroupArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            match kc.create_group(&realm, &args.representation).await? {
                Some(id) => Ok(ToolReply::success(format!("group created: {id}"))),
                None => Ok(ToolReply::success("group created")),
            }
        },
    );

    registry.register(
        "create_child_group",
        "Create a child group under an existing group",
        |kc: Arc<AdminClient>, args: CreateChildGroupArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            match kc
                .create_child_group(&realm, &args.parent_id, &args.representation)
                .await?
            {
                Some(id) => Ok(ToolReply::success(format!("group created: {id}"))),
                None => Ok(ToolReply::success("group created")),
            }
        },
    );

    registry.register(
        "update_group",
        "Update a group from a group representation",
        |kc: Arc<AdminClient>, args: UpdateGroupArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.update_group(&realm, &args.group_id, &args.representation)
                .await?;
            Ok(ToolReply::success("group updated"))
        },
    );

    registry.register(
        "delete_group",
        "Delete a group by ID",
        |kc: Arc<AdminClient>, args: GroupArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_group(&realm, &args.group_id).await?;
            Ok(ToolReply::success("group deleted"))
        },
    );

    registry.register(
        "get_group_members",
        "List the members of a group",
        |kc: Arc<AdminClient>, args: GroupMembersArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let mut query = Vec::new();
            push_param(&mut query, "first", &args.first);
            push_param(&mut query, "max", &args.max);
            let members = kc.group_members(&realm, &args.group_id, &query).await?;
            Ok(ToolReply::json(&members))
        },
    );

    registry.register(
        "count_groups",
        "Count groups in a realm",
        |kc: Arc<AdminClient>, args: CountGroupsArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let mut query = Vec::new();
            push_param(&mut query, "search", &args.search);
            let count = kc.count_groups(&realm, &query).await?;
            Ok(ToolReply::json(&count))
        },
    );
}
