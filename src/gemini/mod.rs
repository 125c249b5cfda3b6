// Generative Language API client module

mod client;

pub use client::GeminiClient;
