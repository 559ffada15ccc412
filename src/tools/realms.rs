//! Realm administration tools.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::tools::{Registry, ToolReply};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NoArgs {}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RealmArgs {
    realm: String,
}

#[derive(Debug, Deserialize)]
struct CreateRealmArgs {
    representation: Value,
}

#[derive(Debug, Deserialize)]
struct UpdateRealmArgs {
    #[serde(default)]
    realm: String,
    representation: Value,
}

pub fn register(registry: &mut Registry) {
    registry.register(
        "list_realms",
        "List all realms",
        |kc: Arc<AdminClient>, _args: NoArgs| async move {
            let realms = kc.list_realms().await?;
            Ok(ToolReply::json(&realms))
        },
    );

    registry.register(
        "get_realm",
        "Get a realm's full representation",
        |kc: Arc<AdminClient>, args: RealmArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            let representation = kc.get_realm(&realm).await?;
            Ok(ToolReply::json(&representation))
        },
    );

    registry.register(
        "create_realm",
        "Create a realm from a realm representation",
        |kc: Arc<AdminClient>, args: CreateRealmArgs| async move {
            match kc.create_realm(&args.representation).await? {
                Some(id) => Ok(ToolReply::success(format!("realm created: {id}"))),
                None => Ok(ToolReply::success("realm created")),
            }
        },
    );

    registry.register(
        "update_realm",
        "Update a realm from a realm representation",
        |kc: Arc<AdminClient>, args: UpdateRealmArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.update_realm(&realm, &args.representation).await?;
            Ok(ToolReply::success("realm updated"))
        },
    );

    registry.register(
        "delete_realm",
        "Delete a realm",
        |kc: Arc<AdminClient>, args: RealmArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.delete_realm(&realm).await?;
            Ok(ToolReply::success("realm deleted"))
        },
    );

    registry.register(
        "clear_realm_cache",
        "Clear the realm cache",
        |kc: Arc<AdminClient>, args: RealmArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.clear_realm_cache(&realm).await?;
            Ok(ToolReply::success("realm cache cleared"))
        },
    );

    registry.register(
        "clear_user_cache",
        "Clear the user cache",
        |kc: Arc<AdminClient>, args: RealmArgs| async move {
            let realm = kc.resolve_realm(&args.realm).to_owned();
            kc.clear_user_cache(&realm).await?;
            Ok(ToolReply::success("user cache cleared"))
        },
    );
}
