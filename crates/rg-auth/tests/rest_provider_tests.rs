//! Integration tests for the REST identity provider using wiremock

use rg_auth::{IdentityProvider, RestIdentityProvider};
use rg_core::IdentityMode;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path, query_param},
};

#[tokio::test]
async fn test_anonymous_sign_in_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "anon-user-1",
            "idToken": "abc"
        })))
        .mount(&mock_server)
        .await;

    let provider = RestIdentityProvider::new(&mock_server.uri(), "test-key");
    let signed_in = provider.sign_in(None).await.unwrap();

    assert_eq!(signed_in.identity.as_str(), "anon-user-1");
    assert_eq!(signed_in.mode, IdentityMode::Anonymous);
}

#[tokio::test]
async fn test_token_sign_in_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithCustomToken"))
        .and(body_string_contains("issued-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "token-user-1"
        })))
        .mount(&mock_server)
        .await;

    let provider = RestIdentityProvider::new(&mock_server.uri(), "test-key");
    let signed_in = provider.sign_in(Some("issued-token")).await.unwrap();

    assert_eq!(signed_in.identity.as_str(), "token-user-1");
    assert_eq!(signed_in.mode, IdentityMode::Token);
}

#[tokio::test]
async fn test_token_rejection_falls_back_to_anonymous_visibly() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithCustomToken"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "INVALID_CUSTOM_TOKEN" }
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "fallback-user"
        })))
        .mount(&mock_server)
        .await;

    let provider = RestIdentityProvider::new(&mock_server.uri(), "test-key");
    let signed_in = provider.sign_in(Some("expired-token")).await.unwrap();

    assert_eq!(signed_in.identity.as_str(), "fallback-user");
    assert_eq!(signed_in.mode, IdentityMode::AnonymousFallback);
    assert!(signed_in.mode.is_fallback());
}

#[tokio::test]
async fn test_provider_error_surfaces_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": { "message": "API_KEY_INVALID" }
        })))
        .mount(&mock_server)
        .await;

    let provider = RestIdentityProvider::new(&mock_server.uri(), "bad-key");
    let result = provider.sign_in(None).await;

    assert!(result.is_err());
    let err = result.unwrap_err().to_string();
    assert!(err.contains("403"));
    assert!(err.contains("API_KEY_INVALID"));
}

#[tokio::test]
async fn test_missing_local_id_is_malformed_not_a_panic() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "idToken": "abc"
        })))
        .mount(&mock_server)
        .await;

    let provider = RestIdentityProvider::new(&mock_server.uri(), "test-key");
    let result = provider.sign_in(None).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("localId"));
}
