//! Utility functions and helpers for the oai2gemini gateway.
//!
//! # Submodules
//!
//! - `id`: Opaque completion identifier generation.
//! - `logging`: Tracing and logging initialization.

pub mod id;
pub mod logging;
