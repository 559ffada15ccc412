//! Session administration endpoints.

use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::keycloak::error::AdminError;

impl AdminClient {
    pub async fn client_user_sessions(
        &self,
        realm: &str,
        client_id: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(
            &format!("admin/realms/{realm}/clients/{client_id}/user-sessions"),
            query,
        )
        .await
    }

    pub async fn client_offline_sessions(
        &self,
        realm: &str,
        client_id: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(
            &format!("admin/realms/{realm}/clients/{client_id}/offline-sessions"),
            query,
        )
        .await
    }

    /// Invalidates one specific session.
    pub async fn delete_session(&self, realm: &str, session_id: &str) -> Result<(), AdminError> {
        self.delete(&format!("admin/realms/{realm}/sessions/{session_id}"), None)
            .await
    }

    pub async fn revoke_user_consent(
        &self,
        realm: &str,
        user_id: &str,
        client_id: &str,
    ) -> Result<(), AdminError> {
        self.delete(
            &format!("admin/realms/{realm}/users/{user_id}/consents/{client_id}"),
            None,
        )
        .await
    }
}
