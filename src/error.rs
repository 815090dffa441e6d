use crate::camera::Float;
use thiserror::Error;

/// Camera configuration rejected before any pixel work starts
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("image width must be at least 1 pixel")]
    ImageWidth,

    #[error("samples per pixel must be at least 1")]
    SamplesPerPixel,

    #[error("aspect ratio must be finite and positive, got {0}")]
    AspectRatio(Float),

    #[error("focus distance must be finite and positive, got {0}")]
    FocusDistance(Float),

    #[error("look-from and look-at coincide or the up vector is parallel to the view direction")]
    DegenerateView,
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
