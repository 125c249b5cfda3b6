//! OpenAI-compatible API type definitions.
//!
//! These types deserialize incoming requests from OpenAI-style clients and
//! serialize the responses sent back to them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Chat completion request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Requested model; a default is substituted when absent or unrecognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Input messages.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,

    /// Whether to stream the response as server-sent events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,

    /// The maximum number of tokens to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Amount of randomness injected into the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Provider-specific fields, forwarded opaquely to the upstream API.
    #[serde(flatten)]
    pub extensions: ProviderExtensions,
}

/// Provider-specific side-channel fields.
///
/// Copied field-by-field into the upstream request; their internal shape is
/// not validated beyond presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderExtensions {
    /// Upstream safety settings, forwarded as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_settings: Option<Value>,

    /// Handle of a previously cached content entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_content: Option<String>,

    /// Thinking configuration, forwarded into `generationConfig`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<Value>,
}

/// A single message in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender. Forwarded, not interpreted.
    #[serde(default)]
    pub role: String,

    /// The content of the message.
    pub content: MessageContent,
}

/// Message content - can be simple text or structured parts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// Content part types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// A text content part.
    Text {
        #[serde(default)]
        text: String,
    },

    /// An image reference, resolved to inline data before forwarding.
    ImageUrl {
        #[serde(default)]
        image_url: ImageRef,
    },

    /// Any part type this gateway does not understand. Dropped silently.
    #[serde(other)]
    Unknown,
}

/// Image reference - a bare URL string or the `{url}` object form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    Url(String),
    Object { url: String },
}

impl ImageRef {
    pub fn url(&self) -> &str {
        match self {
            ImageRef::Url(url) => url,
            ImageRef::Object { url } => url,
        }
    }
}

impl Default for ImageRef {
    fn default() -> Self {
        ImageRef::Url(String::new())
    }
}

/// Chat completion response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Opaque completion identifier.
    pub id: String,

    /// Object type (always "chat.completion").
    pub object: String,

    /// Creation time in whole seconds since the epoch.
    pub created: i64,

    /// The model that handled the request.
    pub model: String,

    /// Generated completion alternatives, index-ordered.
    pub choices: Vec<ChatChoice>,

    /// Token usage, omitted when upstream reported none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// One generated completion alternative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatChoice {
    pub index: u32,
    pub message: AssistantMessage,
    pub finish_reason: String,
}

/// The generated message inside a choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantMessage {
    /// Always "assistant".
    pub role: String,
    pub content: String,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Embedding request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Required; a missing model is a validation error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Text input - a bare string is treated as a one-element batch.
    pub input: EmbeddingInput,

    /// Optional output dimensionality hint, forwarded upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,
}

/// Embedding input - a single string or a sequence of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Batch(Vec<String>),
}

impl EmbeddingInput {
    /// The input coerced to a sequence.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            EmbeddingInput::Single(text) => vec![text.as_str()],
            EmbeddingInput::Batch(texts) => texts.iter().map(String::as_str).collect(),
        }
    }
}

/// Embedding response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// Always "list".
    pub object: String,
    pub data: Vec<EmbeddingObject>,
    /// The original (un-resolved) request model string.
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingObject {
    /// Always "embedding".
    pub object: String,
    pub index: u32,
    pub embedding: Vec<f32>,
}

/// Model listing response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelList {
    /// Always "list".
    pub object: String,
    pub data: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    pub id: String,
    /// Always "model".
    pub object: String,
    pub created: i64,
    pub owned_by: String,
}
