// oai2gemini - OpenAI-compatible gateway for the Google Generative Language API

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod server;
pub mod translation;
pub mod utils;
pub mod vision;
