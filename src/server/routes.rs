// HTTP routes configuration

use super::handlers::{chat_completions_handler, embeddings_handler, models_handler};
use crate::config::AppConfig;
use crate::error::Result;
use crate::gemini::GeminiClient;
use axum::http::{header, HeaderValue};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub client: Arc<GeminiClient>,
}

pub fn create_router(config: AppConfig, client: GeminiClient) -> Result<Router> {
    let state = AppState {
        config,
        client: Arc::new(client),
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions_handler))
        .route("/v1/embeddings", post(embeddings_handler))
        .route("/v1/models", get(models_handler))
        // Allow large request bodies for base64-encoded images
        .layer(tower_http::limit::RequestBodyLimitLayer::new(50 * 1024 * 1024))
        // Bodies are relayed without re-compression
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_ENCODING,
            HeaderValue::from_static("identity"),
        ))
        // Any origin may call the gateway; preflight included
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state);

    Ok(app)
}
