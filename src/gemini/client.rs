// Generative Language API client

use crate::config::GeminiConfig;
use crate::error::{GatewayError, Result};
use crate::models::gemini::{BatchEmbedRequest, GenerateContentRequest};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Client-identifier header value, sent on every upstream call.
const API_CLIENT: &str = concat!("oai2gemini/", env!("CARGO_PKG_VERSION"));

const API_CLIENT_HEADER: &str = "x-goog-api-client";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the Google Generative Language API.
///
/// Issues exactly one upstream request per call; no retries, and no
/// timeouts beyond what reqwest applies by default. The raw response is
/// handed back so callers branch on status (buffered) or relay the byte
/// stream (streaming).
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let http = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// The shared HTTP client, reused for image fetches.
    pub fn http(&self) -> &Client {
        &self.http
    }

    fn model_url(&self, model: &str, task: &str) -> String {
        format!(
            "{}/{}/models/{}:{}",
            self.config.api_base_url, self.config.api_version, model, task
        )
    }

    fn with_headers(
        &self,
        builder: reqwest::RequestBuilder,
        api_key: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let builder = builder.header(API_CLIENT_HEADER, API_CLIENT);
        match api_key {
            Some(key) => builder.header(API_KEY_HEADER, key),
            None => builder,
        }
    }

    /// Call `generateContent` (buffered) or `streamGenerateContent` with
    /// SSE framing (streaming).
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
        model: &str,
        api_key: Option<&str>,
        stream: bool,
    ) -> Result<Response> {
        let url = if stream {
            format!("{}?alt=sse", self.model_url(model, "streamGenerateContent"))
        } else {
            self.model_url(model, "generateContent")
        };

        debug!(
            "Calling {} for model: {}",
            if stream {
                "streamGenerateContent"
            } else {
                "generateContent"
            },
            model
        );

        let response = self
            .with_headers(self.http.post(&url), api_key)
            .json(request)
            .send()
            .await?;

        Ok(response)
    }

    /// Call `batchEmbedContents` for an already-resolved `models/...` path.
    pub async fn batch_embed(
        &self,
        request: &BatchEmbedRequest,
        model_path: &str,
        api_key: Option<&str>,
    ) -> Result<Response> {
        let url = format!(
            "{}/{}/{}:batchEmbedContents",
            self.config.api_base_url, self.config.api_version, model_path
        );

        debug!("Calling batchEmbedContents for {}", model_path);

        let response = self
            .with_headers(self.http.post(&url), api_key)
            .json(request)
            .send()
            .await?;

        Ok(response)
    }

    /// Fetch the upstream model listing.
    pub async fn list_models(&self, api_key: Option<&str>) -> Result<Response> {
        let url = format!(
            "{}/{}/models",
            self.config.api_base_url, self.config.api_version
        );

        debug!("Listing upstream models");

        let response = self.with_headers(self.http.get(&url), api_key).send().await?;

        Ok(response)
    }
}
