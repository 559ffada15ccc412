//! User administration endpoints.

use serde_json::{json, Value};

use crate::keycloak::client::AdminClient;
use crate::keycloak::error::AdminError;

impl AdminClient {
    pub async fn list_users(
        &self,
        realm: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/users"), query).await
    }

    pub async fn get_user(&self, realm: &str, user_id: &str) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/users/{user_id}"), &[])
            .await
    }

    pub async fn create_user(
        &self,
        realm: &str,
        representation: &Value,
    ) -> Result<Option<String>, AdminError> {
        self.post(&format!("admin/realms/{realm}/users"), Some(representation))
            .await
    }

    pub async fn update_user(
        &self,
        realm: &str,
        user_id: &str,
        representation: &Value,
    ) -> Result<(), AdminError> {
        self.put(
            &format!("admin/realms/{realm}/users/{user_id}"),
            Some(representation),
        )
        .await
    }

    pub async fn delete_user(&self, realm: &str, user_id: &str) -> Result<(), AdminError> {
        self.delete(&format!("admin/realms/{realm}/users/{user_id}"), None)
            .await
    }

    pub async fn count_users(
        &self,
        realm: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/users/count"), query)
            .await
    }

    pub async fn set_user_password(
        &self,
        realm: &str,
        user_id: &str,
        password: &str,
        temporary: bool,
    ) -> Result<(), AdminError> {
        let credential = json!({
            "type": "password",
            "value": password,
            "temporary": temporary,
        });
        self.put(
            &format!("admin/realms/{realm}/users/{user_id}/reset-password"),
            Some(&credential),
        )
        .await
    }

    pub async fn user_groups(&self, realm: &str, user_id: &str) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/users/{user_id}/groups"), &[])
            .await
    }

    pub async fn add_user_to_group(
        &self,
        realm: &str,
        user_id: &str,
        group_id: &str,
    ) -> Result<(), AdminError> {
        self.put(
            &format!("admin/realms/{realm}/users/{user_id}/groups/{group_id}"),
            None,
        )
        .await
    }

    pub async fn remove_user_from_group(
        &self,
        realm: &str,
        user_id: &str,
        group_id: &str,
    ) -> Result<(), AdminError> {
        self.delete(
            &format!("admin/realms/{realm}/users/{user_id}/groups/{group_id}"),
            None,
        )
        .await
    }

    pub async fn user_realm_roles(&self, realm: &str, user_id: &str) -> Result<Value, AdminError> {
        self.get(
            &format!("admin/realms/{realm}/users/{user_id}/role-mappings/realm"),
            &[],
        )
        .await
    }

    pub async fn add_user_realm_roles(
        &self,
        realm: &str,
        user_id: &str,
        roles: &Value,
    ) -> Result<(), AdminError> {
        self.post(
            &format!("admin/realms/{realm}/users/{user_id}/role-mappings/realm"),
            Some(roles),
        )
        .await
        .map(|_| ())
    }

    pub async fn remove_user_realm_roles(
        &self,
        realm: &str,
        user_id: &str,
        roles: &Value,
    ) -> Result<(), AdminError> {
        self.delete(
            &format!("admin/realms/{realm}/users/{user_id}/role-mappings/realm"),
            Some(roles),
        )
        .await
    }

    pub async fn user_sessions(&self, realm: &str, user_id: &str) -> Result<Value, AdminError> {
        self.get(
            &format!("admin/realms/{realm}/users/{user_id}/sessions"),
            &[],
        )
        .await
    }

    /// Invalidates every session of the user.
    pub async fn logout_user(&self, realm: &str, user_id: &str) -> Result<(), AdminError> {
        self.post(&format!("admin/realms/{realm}/users/{user_id}/logout"), None)
            .await
            .map(|_| ())
    }
}
