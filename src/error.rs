use thiserror::Error;

/// Errors raised at the pipeline boundary.
///
/// Every variant describes malformed input. Missing structure is never an
/// error: the detector returns an empty rectangle list instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("pixel buffer holds {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("unsupported channel count {0} (expected 3 or 4)")]
    UnsupportedChannels(usize),
}

pub type Result<T> = std::result::Result<T, DetectError>;
