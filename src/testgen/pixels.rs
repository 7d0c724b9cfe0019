//! Random pixel sourcing module
//!
//! This module provides the randomness seam of the pipeline: a trait for
//! drawing image dimensions and pixel arrays, and its uniform rand-backed
//! implementation.

mod source;
mod uniform;

pub use source::PixelSource;
pub use uniform::UniformPixelSource;
