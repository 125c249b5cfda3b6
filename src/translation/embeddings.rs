// Embedding translation (OpenAI ↔ Generative Language API)

use crate::models::gemini::{
    BatchEmbedRequest, BatchEmbedResponse, EmbedContent, EmbedContentRequest, Part,
};
use crate::models::openai::{EmbeddingObject, EmbeddingRequest, EmbeddingResponse};

/// Build a batch embedding request.
///
/// Each input text becomes one batch entry referencing the resolved
/// `models/...` path, with the optional dimensionality hint repeated.
pub fn build_embedding_request(req: &EmbeddingRequest, model_path: &str) -> BatchEmbedRequest {
    BatchEmbedRequest {
        requests: req
            .input
            .texts()
            .into_iter()
            .map(|text| EmbedContentRequest {
                model: model_path.to_string(),
                content: EmbedContent {
                    parts: vec![Part::Text {
                        text: text.to_string(),
                    }],
                },
                output_dimensionality: req.dimensions,
            })
            .collect(),
    }
}

/// Map the upstream embeddings into the OpenAI list shape, preserving
/// input order. `model` echoes the original request model string.
pub fn translate_embedding_response(
    upstream: BatchEmbedResponse,
    request_model: &str,
) -> EmbeddingResponse {
    EmbeddingResponse {
        object: "list".to_string(),
        data: upstream
            .embeddings
            .into_iter()
            .enumerate()
            .map(|(index, embedding)| EmbeddingObject {
                object: "embedding".to_string(),
                index: index as u32,
                embedding: embedding.values,
            })
            .collect(),
        model: request_model.to_string(),
    }
}
