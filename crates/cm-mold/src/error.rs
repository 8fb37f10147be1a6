use std::path::PathBuf;

/// Failure of a coin mold invocation. No plates are produced when any stage fails.
#[derive(Debug, thiserror::Error)]
pub enum MoldError {
    #[error("source image not found or unreadable: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: Option<image::ImageError>,
    },

    #[error(
        "front and back images must be the same size after scaling: front {}x{}, back {}x{}",
        .front.0, .front.1, .back.0, .back.1
    )]
    DimensionMismatch {
        front: (usize, usize),
        back: (usize, usize),
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("raster error: {0}")]
    Raster(#[from] cm_core::Error),

    #[error("failed to write plate {}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl MoldError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
