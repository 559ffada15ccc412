//! Realm-role and client-role administration endpoints.

use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::keycloak::error::AdminError;

impl AdminClient {
    pub async fn list_realm_roles(
        &self,
        realm: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/roles"), query).await
    }

    pub async fn get_realm_role(&self, realm: &str, name: &str) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/roles/{name}"), &[])
            .await
    }

    pub async fn create_realm_role(
        &self,
        realm: &str,
        representation: &Value,
    ) -> Result<Option<String>, AdminError> {
        self.post(&format!("admin/realms/{realm}/roles"), Some(representation))
            .await
    }

    pub async fn update_realm_role(
        &self,
        realm: &str,
        name: &str,
        representation: &Value,
    ) -> Result<(), AdminError> {
        self.put(
            &format!("admin/realms/{realm}/roles/{name}"),
            Some(representation),
        )
        .await
    }

    pub async fn delete_realm_role(&self, realm: &str, name: &str) -> Result<(), AdminError> {
        self.delete(&format!("admin/realms/{realm}/roles/{name}"), None)
            .await
    }

    pub async fn users_by_realm_role(
        &self,
        realm: &str,
        name: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/roles/{name}/users"), query)
            .await
    }

    pub async fn list_client_roles(
        &self,
        realm: &str,
        client_id: &str,
    ) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/clients/{client_id}/roles"), &[])
            .await
    }

    pub async fn create_client_role(
        &self,
        realm: &str,
        client_id: &str,
        representation: &Value,
    ) -> Result<Option<String>, AdminError> {
        self.post(
            &format!("admin/realms/{realm}/clients/{client_id}/roles"),
            Some(representation),
        )
        .await
    }

    pub async fn delete_client_role(
        &self,
        realm: &str,
        client_id: &str,
        name: &str,
    ) -> Result<(), AdminError> {
        self.delete(
            &format!("admin/realms/{realm}/clients/{client_id}/roles/{name}"),
            None,
        )
        .await
    }
}
