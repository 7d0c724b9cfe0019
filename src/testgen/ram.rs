//! RAM image module
//!
//! This module provides the memory-image model: validated image dimensions
//! and the assembled, immutable RAM content a circuit under test reads and
//! writes.

pub mod types;

pub use types::{Dimensions, RamImage, MAX_DIMENSION};
