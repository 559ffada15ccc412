#[cfg(test)]
mod test {
    use std::error::Error;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde_json::json;
    use tokio::time::{advance, pause, timeout};

    use crate::auth::source::CredentialSource;
    use crate::auth::token_manager::TokenManager;
    use crate::tests::common::{
        test_keycloak_config, CountingSource, FailOnceSource, HangOnceSource,
    };

    #[tokio::test]
    async fn cached_token_is_reused_within_its_lifetime() {
        let source = CountingSource::new(3600);
        let calls = source.calls.clone();
        let manager = TokenManager::new(Box::new(source), Duration::from_secs(30));

        let first = manager.token().await.unwrap();
        let second = manager.token().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn sixty_second_lifetime_with_thirty_second_margin_refreshes_at_thirty() {
        pause();
        let source = CountingSource::new(60);
        let calls = source.calls.clone();
        let manager = TokenManager::new(Box::new(source), Duration::from_secs(30));

        let first = manager.token().await.unwrap();
        advance(Duration::from_secs(20)).await;
        let second = manager.token().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // 35 seconds after the first call: past the 30-second effective
        // validity, so a second exchange happens.
        advance(Duration::from_secs(15)).await;
        let third = manager.token().await.unwrap();
        assert_ne!(first, third);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_callers_trigger_exactly_one_exchange() {
        let source = CountingSource::with_delay(3600, Duration::from_millis(50));
        let calls = source.calls.clone();
        let manager = Arc::new(TokenManager::new(Box::new(source), Duration::from_secs(30)));

        let mut handles = Vec::new();
        for _ in 0..50 {
            let manager = Arc::clone(&manager);
            handles.push(tokio::spawn(async move { manager.token().await.unwrap() }));
        }

        let mut tokens = Vec::new();
        for handle in handles {
            tokens.push(handle.await.unwrap());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(tokens.iter().all(|token| token == &tokens[0]));
    }

    #[tokio::test]
    async fn margin_at_least_lifetime_forces_refresh_on_every_call() {
        let source = CountingSource::new(10);
        let calls = source.calls.clone();
        let manager = TokenManager::new(Box::new(source), Duration::from_secs(30));

        for _ in 0..3 {
            manager.token().await.unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn failed_refresh_leaves_cache_clean_for_retry() {
        let source = FailOnceSource::new();
        let calls = source.calls.clone();
        let manager = TokenManager::new(Box::new(source), Duration::from_secs(30));

        let err = manager.token().await.unwrap_err();
        assert!(err.to_string().contains("token acquisition failed"));
        assert!(err.to_string().contains("401"));
        assert!(err.source().is_some());

        // The failure was not cached; the next call retries from scratch.
        let token = manager.token().await.unwrap();
        assert_eq!(token, "token-2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn canceled_acquire_leaves_cache_usable() {
        let source = HangOnceSource::new();
        let calls = source.calls.clone();
        let manager = TokenManager::new(Box::new(source), Duration::from_secs(30));

        // The caller's deadline fires while the exchange is in flight.
        let result = timeout(Duration::from_millis(50), manager.token()).await;
        assert!(result.is_err());

        // Nothing was published and nothing is poisoned; the next caller
        // performs a fresh exchange.
        let token = timeout(Duration::from_secs(1), manager.token())
            .await
            .expect("second acquire must not block")
            .unwrap();
        assert_eq!(token, "token-after-cancel");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn manager_over_credential_source_hits_token_endpoint_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/realms/master/protocol/openid-connect/token");
                then.status(200).json_body(json!({
                    "access_token": "abc",
                    "expires_in": 300,
                    "token_type": "Bearer",
                }));
            })
            .await;

        let source = CredentialSource::new(
            test_keycloak_config(&server.base_url()),
            reqwest::Client::new(),
        );
        let manager = TokenManager::new(Box::new(source), Duration::from_secs(30));

        assert_eq!(manager.token().await.unwrap(), "abc");
        assert_eq!(manager.token().await.unwrap(), "abc");
        mock.assert_hits_async(1).await;
    }
}
