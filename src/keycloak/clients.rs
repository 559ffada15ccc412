//! Client administration endpoints.
//!
//! `client_id` here is the internal UUID, not the public clientId; listing
//! with a `clientId` filter is how callers map one to the other.

use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::keycloak::error::AdminError;

impl AdminClient {
    pub async fn list_clients(
        &self,
        realm: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/clients"), query)
            .await
    }

    pub async fn get_client(&self, realm: &str, client_id: &str) -> Result<Value, AdminError> {
        self.get(&format!("admin/realms/{realm}/clients/{client_id}"), &[])
            .await
    }

    pub async fn create_client(
        &self,
        realm: &str,
        representation: &Value,
    ) -> Result<Option<String>, AdminError> {
        self.post(
            &format!("admin/realms/{realm}/clients"),
            Some(representation),
        )
        .await
    }

    pub async fn update_client(
        &self,
        realm: &str,
        client_id: &str,
        representation: &Value,
    ) -> Result<(), AdminError> {
        self.put(
            &format!("admin/realms/{realm}/clients/{client_id}"),
            Some(representation),
        )
        .await
    }

    pub async fn delete_client(&self, realm: &str, client_id: &str) -> Result<(), AdminError> {
        self.delete(&format!("admin/realms/{realm}/clients/{client_id}"), None)
            .await
    }

    pub async fn client_secret(&self, realm: &str, client_id: &str) -> Result<Value, AdminError> {
        self.get(
            &format!("admin/realms/{realm}/clients/{client_id}/client-secret"),
            &[],
        )
        .await
    }

    pub async fn regenerate_client_secret(
        &self,
        realm: &str,
        client_id: &str,
    ) -> Result<Value, AdminError> {
        self.post_json(
            &format!("admin/realms/{realm}/clients/{client_id}/client-secret"),
            None,
        )
        .await
    }

    pub async fn client_service_account(
        &self,
        realm: &str,
        client_id: &str,
    ) -> Result<Value, AdminError> {
        self.get(
            &format!("admin/realms/{realm}/clients/{client_id}/service-account-user"),
            &[],
        )
        .await
    }
}
