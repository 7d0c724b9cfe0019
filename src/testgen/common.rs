//! Common utilities module
//!
//! This module contains the error type shared across the generation pipeline.

pub mod error;

pub use error::{GenerationError, Result};
