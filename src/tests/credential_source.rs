#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use reqwest::Client;
    use serde_json::json;

    use crate::auth::error::AuthError;
    use crate::auth::source::{CredentialSource, TokenSource};
    use crate::config::types::{AuthMode, KeycloakConfig};
    use crate::tests::common::test_keycloak_config;

    fn client_credentials_config(base_url: &str) -> KeycloakConfig {
        KeycloakConfig {
            url: base_url.to_owned(),
            auth_mode: AuthMode::ClientCredentials,
            client_id: "agent".to_owned(),
            client_secret: Some("top-secret".to_owned()),
            ..KeycloakConfig::default()
        }
    }

    #[tokio::test]
    async fn password_grant_sends_expected_form() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/master/protocol/openid-connect/token")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body_includes("grant_type=password")
                    .body_includes("client_id=admin-cli")
                    .body_includes("username=admin")
                    .body_includes("password=s3cret");
                then.status(200)
                    .json_body(json!({"access_token": "tok", "expires_in": 60}));
            })
            .await;

        let source = CredentialSource::new(test_keycloak_config(&server.base_url()), Client::new());
        let issued = source.authenticate().await.unwrap();

        assert_eq!(issued.access_token, "tok");
        assert_eq!(issued.expires_in, 60);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn client_credentials_grant_sends_expected_form() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/master/protocol/openid-connect/token")
                    .body_includes("grant_type=client_credentials")
                    .body_includes("client_id=agent")
                    .body_includes("client_secret=top-secret");
                then.status(200)
                    .json_body(json!({"access_token": "tok", "expires_in": 60}));
            })
            .await;

        let source =
            CredentialSource::new(client_credentials_config(&server.base_url()), Client::new());
        source.authenticate().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn authentication_scopes_to_the_configured_realm() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/infra/protocol/openid-connect/token");
                then.status(200)
                    .json_body(json!({"access_token": "tok", "expires_in": 60}));
            })
            .await;

        let cfg = KeycloakConfig {
            realm: "infra".to_owned(),
            ..test_keycloak_config(&server.base_url())
        };
        let source = CredentialSource::new(cfg, Client::new());
        source.authenticate().await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_credentials_surface_status_and_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/master/protocol/openid-connect/token");
                then.status(401).body("invalid_grant");
            })
            .await;

        let source = CredentialSource::new(test_keycloak_config(&server.base_url()), Client::new());
        let err = source.authenticate().await.unwrap_err();

        match err {
            AuthError::TokenEndpoint { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("invalid_grant"));
            }
            other => panic!("expected TokenEndpoint error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_response_body_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/master/protocol/openid-connect/token");
                then.status(200).body("not json at all");
            })
            .await;

        let source = CredentialSource::new(test_keycloak_config(&server.base_url()), Client::new());
        let err = source.authenticate().await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn missing_lifetime_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/master/protocol/openid-connect/token");
                then.status(200).json_body(json!({"access_token": "tok"}));
            })
            .await;

        let source = CredentialSource::new(test_keycloak_config(&server.base_url()), Client::new());
        let err = source.authenticate().await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn empty_access_token_is_invalid_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/master/protocol/openid-connect/token");
                then.status(200)
                    .json_body(json!({"access_token": "", "expires_in": 60}));
            })
            .await;

        let source = CredentialSource::new(test_keycloak_config(&server.base_url()), Client::new());
        let err = source.authenticate().await.unwrap_err();

        match err {
            AuthError::InvalidResponse(message) => {
                assert!(message.contains("missing access_token"));
            }
            other => panic!("expected InvalidResponse error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_secret_material_fails_before_any_request() {
        let cfg = KeycloakConfig {
            url: "http://localhost:1".to_owned(),
            ..KeycloakConfig::default()
        };
        let source = CredentialSource::new(cfg, Client::new());
        let err = source.authenticate().await.unwrap_err();

        assert!(matches!(err, AuthError::MissingCredentials("admin_password")));
    }
}
