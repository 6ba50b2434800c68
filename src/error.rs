pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(thiserror::Error, Debug)]
pub enum RasterError {
    #[error("invalid framebuffer dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    #[error("ppm error: {0}")]
    Ppm(#[from] PpmError),

    #[error("scene parse error: {0}")]
    SceneParse(#[from] ron::error::SpannedError),

    #[error("scene serialize error: {0}")]
    SceneSerialize(#[from] ron::Error),

    #[error("image export error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Problems found while reading a P3 image.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PpmError {
    #[error("expected magic \"P3\", found {0:?}")]
    BadMagic(String),

    #[error("unexpected end of input while reading {0}")]
    MissingToken(&'static str),

    #[error("invalid {field}: {token:?}")]
    InvalidToken { field: &'static str, token: String },

    #[error("max value must be in 1..=65535, got {0}")]
    InvalidMaxValue(u32),

    #[error("channel value {value} exceeds max value {max}")]
    ValueOutOfRange { value: u32, max: u32 },

    #[error("unexpected data after last pixel: {0:?}")]
    TrailingData(String),
}
