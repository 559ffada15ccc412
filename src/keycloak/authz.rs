//! Authorization-services endpoints (resource server, resources, policies,
//! permissions, scopes), all scoped to one client's resource server.

use serde_json::Value;

use crate::keycloak::client::AdminClient;
use crate::keycloak::error::AdminError;

fn authz_path(realm: &str, client_id: &str, tail: &str) -> String {
    let base = format!("admin/realms/{realm}/clients/{client_id}/authz/resource-server");
    if tail.is_empty() {
        base
    } else {
        format!("{base}/{tail}")
    }
}

impl AdminClient {
    pub async fn resource_server(&self, realm: &str, client_id: &str) -> Result<Value, AdminError> {
        self.get(&authz_path(realm, client_id, ""), &[]).await
    }

    pub async fn list_resources(
        &self,
        realm: &str,
        client_id: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&authz_path(realm, client_id, "resource"), query)
            .await
    }

    pub async fn create_resource(
        &self,
        realm: &str,
        client_id: &str,
        representation: &Value,
    ) -> Result<Value, AdminError> {
        self.post_json(&authz_path(realm, client_id, "resource"), Some(representation))
            .await
    }

    pub async fn delete_resource(
        &self,
        realm: &str,
        client_id: &str,
        resource_id: &str,
    ) -> Result<(), AdminError> {
        self.delete(
            &authz_path(realm, client_id, &format!("resource/{resource_id}")),
            None,
        )
        .await
    }

    pub async fn list_policies(
        &self,
        realm: &str,
        client_id: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&authz_path(realm, client_id, "policy"), query).await
    }

    pub async fn create_policy(
        &self,
        realm: &str,
        client_id: &str,
        policy_type: &str,
        representation: &Value,
    ) -> Result<Value, AdminError> {
        self.post_json(
            &authz_path(realm, client_id, &format!("policy/{policy_type}")),
            Some(representation),
        )
        .await
    }

    pub async fn delete_policy(
        &self,
        realm: &str,
        client_id: &str,
        policy_id: &str,
    ) -> Result<(), AdminError> {
        self.delete(
            &authz_path(realm, client_id, &format!("policy/{policy_id}")),
            None,
        )
        .await
    }

    pub async fn list_permissions(
        &self,
        realm: &str,
        client_id: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&authz_path(realm, client_id, "permission"), query)
            .await
    }

    pub async fn create_permission(
        &self,
        realm: &str,
        client_id: &str,
        permission_type: &str,
        representation: &Value,
    ) -> Result<Value, AdminError> {
        self.post_json(
            &authz_path(realm, client_id, &format!("permission/{permission_type}")),
            Some(representation),
        )
        .await
    }

    pub async fn list_auth_scopes(
        &self,
        realm: &str,
        client_id: &str,
        query: &[(&str, String)],
    ) -> Result<Value, AdminError> {
        self.get(&authz_path(realm, client_id, "scope"), query).await
    }

    pub async fn create_auth_scope(
        &self,
        realm: &str,
        client_id: &str,
        representation: &Value,
    ) -> Result<Value, AdminError> {
        self.post_json(&authz_path(realm, client_id, "scope"), Some(representation))
            .await
    }

    pub async fn delete_auth_scope(
        &self,
        realm: &str,
        client_id: &str,
        scope_id: &str,
    ) -> Result<(), AdminError> {
        self.delete(
            &authz_path(realm, client_id, &format!("scope/{scope_id}")),
            None,
        )
        .await
    }
}
