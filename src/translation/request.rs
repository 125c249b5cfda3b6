// Request translation (OpenAI → Generative Language API)

use crate::error::Result;
use crate::models::gemini::{Content, GenerateContentRequest, GenerationConfig, Part, Tool};
use crate::models::openai::{ChatCompletionRequest, ContentPart, MessageContent};
use crate::vision::resolve_image_ref;
use futures::future;
use tracing::debug;

pub const DEFAULT_MAX_TOKENS: u32 = 2048;
pub const DEFAULT_TEMPERATURE: f32 = 0.9;

/// A part before image resolution.
enum PartSource {
    Text(String),
    Image(String),
}

/// Build the upstream generation request from an OpenAI-shaped chat request.
///
/// All message content flattens into a single "user" turn; the caller's
/// multi-turn role structure is not preserved.
pub async fn build_generation_request(
    client: &reqwest::Client,
    req: &ChatCompletionRequest,
    search_grounding: bool,
) -> Result<GenerateContentRequest> {
    let sources = collect_part_sources(req);

    // Image fetches run concurrently; try_join_all reassembles results in
    // input order, which fixes each image's position relative to the
    // surrounding text.
    let mut parts = future::try_join_all(sources.into_iter().map(|source| async move {
        match source {
            PartSource::Text(text) => Ok(Part::Text { text }),
            PartSource::Image(reference) => resolve_image_ref(client, &reference)
                .await
                .map(|inline_data| Part::InlineData { inline_data }),
        }
    }))
    .await?;

    // The upstream API rejects an empty parts array.
    if parts.is_empty() {
        parts.push(Part::Text {
            text: String::new(),
        });
    }

    debug!("Built upstream request with {} part(s)", parts.len());

    let generation_config = GenerationConfig {
        max_output_tokens: req.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        temperature: req.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        thinking_config: req.extensions.thinking_config.clone(),
    };

    let tools = search_grounding.then(|| vec![Tool::search()]);

    Ok(GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts,
        }],
        generation_config: Some(generation_config),
        tools,
        safety_settings: req.extensions.safety_settings.clone(),
        cached_content: req.extensions.cached_content.clone(),
    })
}

/// Walk messages in order and collect the parts to forward.
///
/// Empty and unrecognized parts are dropped silently.
fn collect_part_sources(req: &ChatCompletionRequest) -> Vec<PartSource> {
    let mut sources = Vec::new();

    for message in &req.messages {
        match &message.content {
            MessageContent::Text(text) => sources.push(PartSource::Text(text.clone())),
            MessageContent::Parts(parts) => {
                for part in parts {
                    match part {
                        ContentPart::Text { text } if !text.is_empty() => {
                            sources.push(PartSource::Text(text.clone()));
                        }
                        ContentPart::ImageUrl { image_url } if !image_url.url().is_empty() => {
                            sources.push(PartSource::Image(image_url.url().to_string()));
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    sources
}
