use thiserror::Error;

#[derive(Error, Debug)]
pub enum RendiffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Dimension mismatch: {expected_width}x{expected_height} vs {actual_width}x{actual_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Empty frame sequence: start frame {start} is past end frame {end}")]
    EmptySequence { start: u32, end: u32 },

    #[error("Invalid version label '{0}': expected 'original_VS_test'")]
    InvalidVersionLabel(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, RendiffError>;
