use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid image dimensions: width={width}, height={height} (bound is 1..={bound})")]
    InvalidDimension {
        width: usize,
        height: usize,
        bound: usize,
    },

    #[error("Cannot equalize an empty pixel array")]
    EmptyImage,

    #[error("Pixel region and equalized region differ in length: {pixels} vs {equalized}")]
    LengthMismatch { pixels: usize, equalized: usize },

    #[error("Pixel array length {actual} does not match dimensions ({expected} expected)")]
    WrongPixelCount { expected: usize, actual: usize },

    #[error("Failed to write output file: {0}")]
    SinkUnavailable(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
