//! Integration tests for the generation client using wiremock mock server

use rg_core::Settings;
use rg_gen::prompt::build_prompt;
use rg_gen::{GenerationService, HttpGenerationClient};

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path, query_param},
};

fn client_for(server: &MockServer) -> HttpGenerationClient {
    HttpGenerationClient::new(
        &server.uri(),
        "test-key",
        "gemini-2.5-flash-preview-05-20",
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_generate_success_extracts_reply_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/v1beta/models/gemini-2.5-flash-preview-05-20:generateContent",
        ))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Hello" }] } }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.generate("draft a reply").await.unwrap();

    assert_eq!(reply, "Hello");
}

#[tokio::test]
async fn test_request_body_carries_prompt_in_contents_parts() {
    let mock_server = MockServer::start().await;

    let settings = Settings {
        mission: String::from("We make widgets."),
        sender_name: String::from("Widget Team"),
        sender_email: String::from("team@widgets.example"),
    };
    let prompt = build_prompt(&settings, "How much do widgets cost?");

    Mock::given(method("POST"))
        .and(body_string_contains("We make widgets."))
        .and(body_string_contains("How much do widgets cost?"))
        .and(body_string_contains("Widget Team <team@widgets.example>"))
        .and(body_string_contains("\"role\":\"user\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Widgets cost five dollars." }] } }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let reply = client.generate(&prompt).await.unwrap();

    assert_eq!(reply, "Widgets cost five dollars.");
}

#[tokio::test]
async fn test_empty_candidates_is_empty_result_not_a_crash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.generate("draft a reply").await;

    assert!(result.is_err());
    assert!(result.unwrap_err().status().is_none());
}

#[tokio::test]
async fn test_candidate_without_parts_is_empty_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [] } }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.generate("draft a reply").await.is_err());
}

#[tokio::test]
async fn test_http_500_surfaces_service_error_with_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.generate("draft a reply").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("500"));
}
