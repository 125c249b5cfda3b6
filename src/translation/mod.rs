// Translation module - OpenAI ↔ Generative Language API translation

pub mod embeddings;
pub mod models_list;
pub mod request;
pub mod response;

pub use embeddings::{build_embedding_request, translate_embedding_response};
pub use models_list::translate_model_list;
pub use request::build_generation_request;
pub use response::translate_generation_response;
