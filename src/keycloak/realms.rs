//! Realm administration endpoints.

use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::keycloak::error::AdminError;

impl AdminClient {
    pub async fn list_realms(&self) -> Result<Value, AdminError> {
        self.get("admin/realms", &[]).await
    }

    pub async fn get_realm(&self, realm: &str) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}"), &[]).await
    }

    pub async fn create_realm(&self, representation: &Value) -> Result<Option<String>, AdminError> {
        self.post("admin/realms", Some(representation)).await
    }

    pub async fn update_realm(
        &self,
        realm: &str,
        representation: &Value,
    ) -> Result<(), AdminError> {
        self.put(&format!("admin/realms/{realm}"), Some(representation))
            .await
    }

    pub async fn delete_realm(&self, realm: &str) -> Result<(), AdminError> {
        self.delete(&format!("admin/realms/{realm}"), None).await
    }

    pub async fn clear_realm_cache(&self, realm: &str) -> Result<(), AdminError> {
        self.post(&format!("admin/realms/{realm}/clear-realm-cache"), None)
            .await
            .map(|_| ())
    }

    pub async fn clear_user_cache(&self, realm: &str) -> Result<(), AdminError> {
        self.post(&format!("admin/realms/{realm}/clear-user-cache"), None)
            .await
            .map(|_| ())
    }
}
