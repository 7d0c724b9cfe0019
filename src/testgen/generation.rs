//! Batch generation module
//!
//! This module contains the orchestration logic tying the pixel source,
//! equalization engine, assembler and serializers into one configurable
//! pipeline.

mod pipeline;
mod types;

pub use pipeline::BatchGenerator;
pub use types::{GenerationConfig, GenerationConfigBuilder, OutputFormat};
