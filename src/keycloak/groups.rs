//! Group administration endpoints.

use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::keycloak::error::AdminError;

impl AdminClient {
    pub async fn list_groups(
        &self,
        realm: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/groups"), query)
            .await
    }

    pub async fn get_group(&self, realm: &str, group_id: &str) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/groups/{group_id}"), &[])
            .await
    }

    pub async fn create_group(
        &self,
        realm: &str,
        representation: &Value,
    ) -> Result<Option<String>, AdminError> {
        self.post(&format!("admin/realms/{realm}/groups"), Some(representation))
            .await
    }

    pub async fn create_child_group(
        &self,
        realm: &str,
        parent_id: &str,
        representation: &Value,
    ) -> Result<Option<String>, AdminError> {
        self.post(
            &format!("admin/realms/{realm}/groups/{parent_id}/children"),
            Some(representation),
        )
        .await
    }

    pub async fn update_group(
        &self,
        realm: &str,
        group_id: &str,
        representation: &Value,
    ) -> Result<(), AdminError> {
        self.put(
            &format!("admin/realms/{realm}/groups/{group_id}"),
            Some(representation),
        )
        .await
    }

    pub async fn delete_group(&self, realm: &str, group_id: &str) -> Result<(), AdminError> {
        self.delete(&format!("admin/realms/{realm}/groups/{group_id}"), None)
            .await
    }

    pub async fn group_members(
        &self,
        realm: &str,
        group_id: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(
            &format!("admin/realms/{realm}/groups/{group_id}/members"),
            query,
        )
        .await
    }

    pub async fn count_groups(
        &self,
        realm: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/groups/count"), query)
            .await
    }
}
