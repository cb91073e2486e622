use thiserror::Error;

pub type RulerResult<T> = Result<T, RulerError>;

#[derive(Debug, Error)]
pub enum RulerError {
    #[error("invalid image dimensions: width={width}, height={height}")]
    InvalidImage { width: u32, height: u32 },

    #[error("invalid container bounds: width={width}, height={height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
