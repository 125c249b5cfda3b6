// Model listing translation (Generative Language API → OpenAI)

use crate::models::gemini::ListModelsResponse;
use crate::models::openai::{ModelEntry, ModelList};

/// Map the upstream model listing into the OpenAI list shape.
///
/// Resource names lose their `models/` prefix; `created` and `owned_by`
/// have no upstream counterpart and are synthesized.
pub fn translate_model_list(upstream: ListModelsResponse) -> ModelList {
    ModelList {
        object: "list".to_string(),
        data: upstream
            .models
            .into_iter()
            .map(|model| ModelEntry {
                id: model
                    .name
                    .strip_prefix("models/")
                    .unwrap_or(&model.name)
                    .to_string(),
                object: "model".to_string(),
                created: 0,
                owned_by: String::new(),
            })
            .collect(),
    }
}
