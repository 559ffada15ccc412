#[cfg(test)]
mod test {
    use std::sync::Arc;

    use httpmock::prelude::*;
    use httpmock::Mock;
    use reqwest::Client;
    use serde_json::json;

    use crate::config::types::KeycloakConfig;
    use crate::keycloak::client::AdminClient;
    use crate::tests::common::test_keycloak_config;
    use crate::tools::Registry;

    fn test_client(server: &MockServer) -> Arc<AdminClient> {
        Arc::new(AdminClient::new(
            test_keycloak_config(&server.base_url()),
            Client::new(),
        ))
    }

    async fn mock_token_endpoint(server: &MockServer) -> Mock<'_> {
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/master/protocol/openid-connect/token");
                then.status(200).json_body(json!({
                    "access_token": "test-token",
                    "expires_in": 300,
                }));
            })
            .await
    }

    #[tokio::test]
    async fn list_users_forwards_query_and_returns_json() {
        let server = MockServer::start_async().await;
        let token_mock = mock_token_endpoint(&server).await;
        let users_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/admin/realms/acme/users")
                    .query_param("search", "ali")
                    .header("authorization", "Bearer test-token");
                then.status(200)
                    .json_body(json!([{"id": "u1", "username": "alice"}]));
            })
            .await;

        let registry = Registry::with_all_tools();
        let reply = registry
            .invoke(
                test_client(&server),
                "list_users",
                json!({"realm": "acme", "search": "ali"}),
            )
            .await
            .unwrap();

        assert!(!reply.is_error);
        assert!(reply.text.contains("alice"));
        users_mock.assert_async().await;
        token_mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn token_is_shared_across_tool_invocations() {
        let server = MockServer::start_async().await;
        let token_mock = mock_token_endpoint(&server).await;
        let realms_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/admin/realms");
                then.status(200).json_body(json!([{"realm": "master"}]));
            })
            .await;

        let client = test_client(&server);
        let registry = Registry::with_all_tools();
        registry
            .invoke(Arc::clone(&client), "list_realms", json!({}))
            .await
            .unwrap();
        registry
            .invoke(client, "list_realms", json!({}))
            .await
            .unwrap();

        realms_mock.assert_hits_async(2).await;
        token_mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn omitted_realm_resolves_through_the_configured_default() {
        let server = MockServer::start_async().await;
        mock_token_endpoint(&server).await;
        let realm_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/admin/realms/acme");
                then.status(200).json_body(json!({"realm": "acme"}));
            })
            .await;

        let cfg = KeycloakConfig {
            default_realm: "acme".to_owned(),
            ..test_keycloak_config(&server.base_url())
        };
        let client = Arc::new(AdminClient::new(cfg, Client::new()));
        let registry = Registry::with_all_tools();
        let reply = registry.invoke(client, "get_realm", json!({})).await.unwrap();

        assert!(!reply.is_error);
        realm_mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_user_forwards_representation_and_reports_location_id() {
        let server = MockServer::start_async().await;
        mock_token_endpoint(&server).await;
        let create_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/admin/realms/acme/users")
                    .json_body(json!({"username": "bob"}));
                then.status(201).header(
                    "Location",
                    format!("{}/admin/realms/acme/users/new-id", server.base_url()),
                );
            })
            .await;

        let registry = Registry::with_all_tools();
        let reply = registry
            .invoke(
                test_client(&server),
                "create_user",
                json!({"realm": "acme", "representation": {"username": "bob"}}),
            )
            .await
            .unwrap();

        assert!(!reply.is_error);
        assert!(reply.text.contains("new-id"));
        create_mock.assert_async().await;
    }

    #[tokio::test]
    async fn downstream_error_becomes_error_reply() {
        let server = MockServer::start_async().await;
        mock_token_endpoint(&server).await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/admin/realms/acme/users/missing");
                then.status(404).json_body(json!({"error": "User not found"}));
            })
            .await;

        let registry = Registry::with_all_tools();
        let reply = registry
            .invoke(
                test_client(&server),
                "get_user",
                json!({"realm": "acme", "user_id": "missing"}),
            )
            .await
            .unwrap();

        assert!(reply.is_error);
        assert!(reply.text.contains("404"));
    }

    #[tokio::test]
    async fn failed_token_acquisition_becomes_error_reply() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/master/protocol/openid-connect/token");
                then.status(401).body("invalid_grant");
            })
            .await;

        let registry = Registry::with_all_tools();
        let reply = registry
            .invoke(test_client(&server), "list_realms", json!({}))
            .await
            .unwrap();

        assert!(reply.is_error);
        assert!(reply.text.contains("token acquisition failed"));
    }

    #[tokio::test]
    async fn invalid_arguments_become_error_reply() {
        let server = MockServer::start_async().await;
        let registry = Registry::with_all_tools();

        let reply = registry
            .invoke(test_client(&server), "get_user", json!({"user_id": 42}))
            .await
            .unwrap();

        assert!(reply.is_error);
        assert!(reply.text.contains("invalid arguments"));
    }

    #[tokio::test]
    async fn unknown_tool_is_an_invocation_error() {
        let server = MockServer::start_async().await;
        let registry = Registry::with_all_tools();

        let err = registry
            .invoke(test_client(&server), "does_not_exist", json!({}))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("unknown tool"));
    }

    #[tokio::test]
    async fn registry_covers_every_admin_domain() {
        let registry = Registry::with_all_tools();
        let names: Vec<&str> = registry.tools().map(|tool| tool.name).collect();

        for expected in [
            "list_realms",
            "list_users",
            "list_groups",
            "list_clients",
            "list_realm_roles",
            "get_client_sessions",
            "list_policies",
            "get_server_info",
        ] {
            assert!(names.contains(&expected), "missing tool {expected}");
        }
        assert!(!registry.is_empty());
    }
}
