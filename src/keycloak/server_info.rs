use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::keycloak::error::AdminError;

impl AdminClient {
    /// Server info: system, memory, providers, themes.
    pub async fn server_info(&self) -> Result<Value, AdminError> {
        self.get("admin/serverinfo", &[]).await
    }
}
