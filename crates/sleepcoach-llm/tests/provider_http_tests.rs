//! HTTP-level tests for the remote providers against a mock server

use serde_json::json;
use sleepcoach_config::PromptConfig;
use sleepcoach_core::{build_prompt, PromptKind, PromptRequest, PromptText};
use sleepcoach_llm::{
    InferenceProvider, ModelOutput, OllamaProvider, UpstreamError, WorkersAiProvider,
};
use wiremock::matchers::{bearer_token, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "@cf/google/gemma-3-12b-it";
const RUN_PATH: &str = "/accounts/acct-123/ai/run/@cf/google/gemma-3-12b-it";

fn urge_prompt() -> PromptText {
    let request = PromptRequest::new(PromptKind::Urge).with_local_hour(23);
    build_prompt(&request, &PromptConfig::default()).unwrap()
}

fn workers_ai(server: &MockServer) -> WorkersAiProvider {
    WorkersAiProvider::new(
        server.uri(),
        "acct-123".to_string(),
        "secret-token".to_string(),
        MODEL.to_string(),
        Some(5),
    )
}

#[tokio::test]
async fn test_workers_ai_sends_prompt_with_bearer_token() {
    let server = MockServer::start().await;
    let prompt = urge_prompt();

    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .and(bearer_token("secret-token"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "prompt": prompt.as_str(),
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "response": "Time to rest." },
            "success": true,
            "errors": [],
            "messages": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = workers_ai(&server).run(&prompt).await.unwrap();
    assert_eq!(
        output,
        ModelOutput::Field {
            name: "response",
            text: "Time to rest.".to_string()
        }
    );
}

#[tokio::test]
async fn test_workers_ai_reads_alternate_fields() {
    for name in ["output", "output_text", "text"] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(RUN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": { name: "Sleep well." },
                "success": true,
                "errors": []
            })))
            .mount(&server)
            .await;

        let output = workers_ai(&server).run(&urge_prompt()).await.unwrap();
        assert_eq!(output.text(), "Sleep well.", "field {name}");
    }
}

#[tokio::test]
async fn test_workers_ai_unknown_shape_is_serialized() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "choices": ["a"] },
            "success": true,
            "errors": []
        })))
        .mount(&server)
        .await;

    let output = workers_ai(&server).run(&urge_prompt()).await.unwrap();
    assert!(output.is_raw());
    assert_eq!(output.text(), r#"{"choices":["a"]}"#);
}

#[tokio::test]
async fn test_workers_ai_rejected_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": null,
            "success": false,
            "errors": [{ "code": 7003, "message": "Could not route to /accounts" }]
        })))
        .mount(&server)
        .await;

    let err = workers_ai(&server).run(&urge_prompt()).await.unwrap_err();
    match err {
        UpstreamError::Rejected(message) => {
            assert!(message.contains("Could not route"));
            assert!(message.contains("7003"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_workers_ai_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = workers_ai(&server).run(&urge_prompt()).await.unwrap_err();
    match err {
        UpstreamError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "upstream exploded");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_workers_ai_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = workers_ai(&server).run(&urge_prompt()).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Decode(_)));
}

#[tokio::test]
async fn test_workers_ai_connection_refused() {
    let provider = WorkersAiProvider::new(
        "http://127.0.0.1:1".to_string(),
        "acct-123".to_string(),
        "secret-token".to_string(),
        MODEL.to_string(),
        Some(2),
    );

    let err = provider.run(&urge_prompt()).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Http(_)));
}

#[tokio::test]
async fn test_ollama_generate() {
    let server = MockServer::start().await;
    let prompt = urge_prompt();

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "model": "gemma3:12b",
            "prompt": prompt.as_str(),
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "gemma3:12b",
            "response": "Lights out soon.",
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = OllamaProvider::new(server.uri(), "gemma3:12b".to_string(), None);
    let output = provider.run(&prompt).await.unwrap();
    assert_eq!(output.text(), "Lights out soon.");
}
