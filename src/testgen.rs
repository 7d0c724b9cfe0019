//! Test-vector generation module
//!
//! This module provides the full pipeline for producing randomized test
//! vectors for the image-equalization circuit: random pixel sourcing, the
//! reference equalization transform, RAM image assembly, and the serializers
//! that emit the simulator-facing output formats.

pub mod common;
pub mod equalize;
pub mod generation;
pub mod pixels;
pub mod ram;
pub mod serialize;

pub use common::{
    GenerationError,
    Result,
};

pub use pixels::{
    PixelSource,
    UniformPixelSource,
};

pub use equalize::equalize;

pub use ram::{
    Dimensions,
    RamImage,
};

pub use serialize::{
    RamWriter,
    PlainDumpWriter,
    ListingWriter,
    RawBatchWriter,
    TestbenchWriter,
};

pub use generation::{
    BatchGenerator,
    GenerationConfig,
    GenerationConfigBuilder,
    OutputFormat,
};
