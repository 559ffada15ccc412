//! Server info tool.

use std::sync::Arc;

use serde::Deserialize;

use crate::keycloak::client::AdminClient;
use crate::tools::{Registry, ToolReply};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NoArgs {}

pub fn register(registry: &mut Registry) {
    registry.register(
        "get_server_info",
        "Get Keycloak server info including system, memory, providers, and themes",
        |kc: Arc<AdminClient>, _args: NoArgs| async move {
            let info = kc.server_info().await?;
            Ok(ToolReply::json(&info))
        },
    );
}
