// Response translation (Generative Language API → OpenAI)

use crate::models::gemini::GenerateContentResponse;
use crate::models::openai::{AssistantMessage, ChatChoice, ChatCompletionResponse, Usage};
use tracing::warn;

const DEFAULT_FINISH_REASON: &str = "stop";

/// Translate a buffered upstream body into an OpenAI chat completion.
///
/// Returns `None` when the body does not parse or carries no `candidates`
/// field; the caller relays the original text unchanged in that case
/// rather than synthesizing an error.
///
/// `id` and `created` come from the caller so translation stays free of
/// clock and entropy dependencies.
pub fn translate_generation_response(
    raw: &str,
    model: &str,
    id: String,
    created: i64,
) -> Option<ChatCompletionResponse> {
    let parsed: GenerateContentResponse = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Unparseable upstream generation response, relaying as-is: {}", e);
            return None;
        }
    };

    let Some(candidates) = parsed.candidates else {
        warn!("Upstream generation response has no candidates, relaying as-is");
        return None;
    };

    let choices = candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            let content = candidate
                .content
                .map(|content| {
                    content
                        .parts
                        .iter()
                        .filter_map(|part| part.as_text())
                        .collect::<String>()
                })
                .unwrap_or_default();

            ChatChoice {
                index: index as u32,
                message: AssistantMessage {
                    role: "assistant".to_string(),
                    content,
                },
                finish_reason: candidate
                    .finish_reason
                    .unwrap_or_else(|| DEFAULT_FINISH_REASON.to_string()),
            }
        })
        .collect();

    let usage = parsed.usage_metadata.map(|usage| Usage {
        prompt_tokens: usage.prompt_token_count.unwrap_or(0),
        completion_tokens: usage.candidates_token_count.unwrap_or(0),
        total_tokens: usage.total_token_count.unwrap_or(0),
    });

    Some(ChatCompletionResponse {
        id,
        object: "chat.completion".to_string(),
        created,
        model: model.to_string(),
        choices,
        usage,
    })
}
