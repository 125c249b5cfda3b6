// HTTP request handlers

use super::routes::AppState;
use crate::error::{GatewayError, Result};
use crate::models::gemini::{BatchEmbedResponse, ListModelsResponse};
use crate::models::mapping::{resolve_chat_model, resolve_embedding_model};
use crate::models::openai::{ChatCompletionRequest, EmbeddingRequest};
use crate::translation::{
    build_embedding_request, build_generation_request, translate_embedding_response,
    translate_generation_response, translate_model_list,
};
use crate::utils::id::completion_id;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, info};

/// Pull the upstream API key out of the `authorization` header, if any.
///
/// Absence is not an error; the upstream rejects unauthenticated calls
/// itself.
fn bearer_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Capture a non-success upstream response for verbatim relay.
async fn upstream_error(response: reqwest::Response) -> GatewayError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    GatewayError::Upstream { status, body }
}

/// Handler for /v1/chat/completions (OpenAI-compatible)
pub async fn chat_completions_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ChatCompletionRequest>,
) -> Result<Response> {
    let api_key = bearer_key(&headers);
    let stream = req.stream.unwrap_or(false);

    let resolved = resolve_chat_model(req.model.as_deref(), &state.config.gemini.default_model);

    info!(
        "Chat completion request: model={}, upstream={}, messages={}, stream={}",
        req.model.as_deref().unwrap_or("<default>"),
        resolved.upstream,
        req.messages.len(),
        stream
    );

    let upstream_req =
        build_generation_request(state.client.http(), &req, resolved.search_grounding).await?;

    let response = state
        .client
        .generate_content(&upstream_req, &resolved.upstream, api_key.as_deref(), stream)
        .await?;

    if !response.status().is_success() {
        return Err(upstream_error(response).await);
    }

    if stream {
        return relay_event_stream(response);
    }

    let status = response.status();
    let raw = response.text().await?;
    let id = completion_id();
    let created = chrono::Utc::now().timestamp();

    match translate_generation_response(&raw, &resolved.upstream, id, created) {
        Some(completion) => Ok(Json(completion).into_response()),
        // Unexpected upstream shape: surface the original text unchanged so
        // the caller can still parse it.
        None => Ok(passthrough(status.as_u16(), raw)),
    }
}

/// Handler for /v1/embeddings (OpenAI-compatible)
pub async fn embeddings_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<EmbeddingRequest>,
) -> Result<Response> {
    let api_key = bearer_key(&headers);

    let request_model = req
        .model
        .as_deref()
        .filter(|model| !model.is_empty())
        .ok_or_else(|| GatewayError::InvalidRequest("request must specify a model".to_string()))?
        .to_string();

    let model_path = resolve_embedding_model(
        &request_model,
        &state.config.gemini.default_embedding_model,
    );

    debug!(
        "Embedding request: model={}, resolved={}, inputs={}",
        request_model,
        model_path,
        req.input.texts().len()
    );

    let upstream_req = build_embedding_request(&req, &model_path);

    let response = state
        .client
        .batch_embed(&upstream_req, &model_path, api_key.as_deref())
        .await?;

    if !response.status().is_success() {
        return Err(upstream_error(response).await);
    }

    let upstream: BatchEmbedResponse = response.json().await?;

    Ok(Json(translate_embedding_response(upstream, &request_model)).into_response())
}

/// Handler for /v1/models (OpenAI-compatible)
pub async fn models_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response> {
    let api_key = bearer_key(&headers);

    let response = state.client.list_models(api_key.as_deref()).await?;

    if !response.status().is_success() {
        return Err(upstream_error(response).await);
    }

    let upstream: ListModelsResponse = response.json().await?;

    Ok(Json(translate_model_list(upstream)).into_response())
}

/// Relay the upstream SSE byte stream unmodified, with the content type
/// rewritten to the event-stream media type. Dropping the body on client
/// disconnect drops the upstream response and cancels the transfer.
fn relay_event_stream(response: reqwest::Response) -> Result<Response> {
    let body = Body::from_stream(response.bytes_stream());

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(body)
        .map_err(|e| GatewayError::Internal(format!("Failed to build relay response: {}", e)))
}

/// Build a response carrying the upstream body verbatim.
fn passthrough(status: u16, body: String) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
