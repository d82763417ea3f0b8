//! Error types for the wallpaper studio

use thiserror::Error;

/// Result type alias for studio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing or exporting a wallpaper
#[derive(Error, Debug)]
pub enum Error {
    /// Input was not a `#rgb` or `#rrggbb` hex color
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Custom width or height outside the accepted range.
    ///
    /// The message is shown to the user verbatim.
    #[error("Enter valid dimensions (100-10000)")]
    InvalidDimensions,

    /// Failed to rasterize the wallpaper
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to encode the raster as PNG
    #[error("Encoding failed: {0}")]
    EncodeError(String),

    /// The download surface rejected the payload
    #[error("Download failed: {0}")]
    DownloadError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::EncodeError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_error_carries_user_message() {
        assert_eq!(
            Error::InvalidDimensions.to_string(),
            "Enter valid dimensions (100-10000)"
        );
    }
}
