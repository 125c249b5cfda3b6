// End-to-end gateway tests against a mocked upstream

use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use mockito::Matcher;
use oai2gemini::config::AppConfig;
use oai2gemini::gemini::GeminiClient;
use oai2gemini::server::create_router;
use serde_json::{json, Value};
use tower::ServiceExt;

fn gateway(base_url: String) -> Router {
    let mut config = AppConfig::default();
    config.gemini.api_base_url = base_url;
    let client = GeminiClient::new(&config.gemini).unwrap();
    create_router(config, client).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "https://example.com")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn test_buffered_completion_is_translated() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-pro:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .with_status(200)
        .with_body(
            r#"{"candidates":[{"content":{"parts":[{"text":"hi"}]},"finishReason":"STOP"}],"usageMetadata":{"promptTokenCount":3,"candidatesTokenCount":1,"totalTokenCount":4}}"#,
        )
        .create_async()
        .await;

    let app = gateway(server.url());
    let mut request = json_request(
        "POST",
        "/v1/chat/completions",
        json!({
            "model": "models/gemini-2.5-pro",
            "messages": [{"role": "user", "content": "hello"}]
        }),
    );
    request.headers_mut().insert(
        header::AUTHORIZATION,
        "Bearer test-key".parse().unwrap(),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_ENCODING)
            .map(|v| v.to_str().unwrap()),
        Some("identity")
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );

    let body = body_json(response).await;
    assert_eq!(body["object"], "chat.completion");
    assert_eq!(body["model"], "gemini-2.5-pro");
    assert!(body["id"].as_str().unwrap().starts_with("chatcmpl-"));
    assert_eq!(body["choices"][0]["message"]["role"], "assistant");
    assert_eq!(body["choices"][0]["message"]["content"], "hi");
    assert_eq!(body["choices"][0]["finish_reason"], "STOP");
    assert_eq!(body["usage"]["prompt_tokens"], 3);
    assert_eq!(body["usage"]["completion_tokens"], 1);
    assert_eq!(body["usage"]["total_tokens"], 4);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_error_is_relayed_verbatim() {
    let error_body = r#"{"error":{"code":429,"message":"Resource has been exhausted"}}"#;

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(429)
        .with_body(error_body)
        .create_async()
        .await;

    let app = gateway(server.url());
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/chat/completions",
            json!({
                "model": "gemini-2.5-flash",
                "messages": [{"role": "user", "content": "hello"}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 429);
    assert_eq!(body_bytes(response).await, error_body.as_bytes());
}

#[tokio::test]
async fn test_candidateless_body_is_relayed_verbatim() {
    let odd_body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(200)
        .with_body(odd_body)
        .create_async()
        .await;

    let app = gateway(server.url());
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/chat/completions",
            json!({
                "model": "gemini-2.5-flash",
                "messages": [{"role": "user", "content": "hello"}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(body_bytes(response).await, odd_body.as_bytes());
}

#[tokio::test]
async fn test_failed_image_download_never_reaches_generation() {
    let mut server = mockito::Server::new_async().await;
    let image_mock = server
        .mock("GET", "/gone.png")
        .with_status(404)
        .create_async()
        .await;
    let generation_mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .expect(0)
        .create_async()
        .await;

    let app = gateway(server.url());
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/chat/completions",
            json!({
                "model": "gemini-2.5-flash",
                "messages": [{
                    "role": "user",
                    "content": [
                        {"type": "text", "text": "describe this"},
                        {"type": "image_url", "image_url": {"url": format!("{}/gone.png", server.url())}}
                    ]
                }]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body = body_json(response).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("image download failed"));

    image_mock.assert_async().await;
    generation_mock.assert_async().await;
}

#[tokio::test]
async fn test_streaming_response_is_relayed_unmodified() {
    let sse_body = "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"hi\"}]}}]}\n\n";

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:streamGenerateContent")
        .match_query(Matcher::UrlEncoded("alt".into(), "sse".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sse_body)
        .create_async()
        .await;

    let app = gateway(server.url());
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/chat/completions",
            json!({
                "model": "gemini-2.5-flash",
                "stream": true,
                "messages": [{"role": "user", "content": "hello"}]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap()),
        Some("text/event-stream")
    );
    // Framing passes through untouched.
    assert_eq!(body_bytes(response).await, sse_body.as_bytes());
}

#[tokio::test]
async fn test_embeddings_roundtrip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/text-embedding-004:batchEmbedContents")
        .match_body(Matcher::PartialJson(json!({
            "requests": [{
                "model": "models/text-embedding-004",
                "content": {"parts": [{"text": "hello"}]}
            }]
        })))
        .with_status(200)
        .with_body(r#"{"embeddings":[{"values":[0.25,-0.5]}]}"#)
        .create_async()
        .await;

    let app = gateway(server.url());
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/embeddings",
            json!({"model": "text-embedding-004", "input": "hello"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(response).await;
    assert_eq!(body["object"], "list");
    assert_eq!(body["model"], "text-embedding-004");
    assert_eq!(body["data"][0]["object"], "embedding");
    assert_eq!(body["data"][0]["index"], 0);
    assert_eq!(body["data"][0]["embedding"], json!([0.25, -0.5]));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_embeddings_require_model() {
    // Never reaches upstream, so an unroutable base URL is fine.
    let app = gateway("http://127.0.0.1:9".to_string());
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/embeddings",
            json!({"input": "hello"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body = body_json(response).await;
    assert!(body["error"]["message"].as_str().unwrap().contains("model"));
}

#[tokio::test]
async fn test_model_listing_is_translated() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1beta/models")
        .with_status(200)
        .with_body(r#"{"models":[{"name":"models/gemini-2.5-pro"},{"name":"models/gemini-2.5-flash"}]}"#)
        .create_async()
        .await;

    let app = gateway(server.url());
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/models")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(response).await;
    assert_eq!(body["object"], "list");
    assert_eq!(body["data"][0]["id"], "gemini-2.5-pro");
    assert_eq!(body["data"][0]["object"], "model");
    assert_eq!(body["data"][0]["created"], 0);
    assert_eq!(body["data"][0]["owned_by"], "");
    assert_eq!(body["data"][1]["id"], "gemini-2.5-flash");
}
