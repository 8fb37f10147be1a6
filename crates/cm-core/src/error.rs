use core::fmt;

/// Failures raised while constructing or combining rasters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer length does not cover the requested layout.
    SizeMismatch { expected: usize, actual: usize },
    /// Two rasters that must align have different `(width, height)`.
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    OutOfBounds,
    /// Row stride smaller than the row width.
    InvalidStride,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "raster buffer holds {actual} samples, layout needs {expected}")
            }
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "raster is {}x{}, expected {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Self::OutOfBounds => f.write_str("region lies outside the raster"),
            Self::InvalidStride => f.write_str("row stride is smaller than the row width"),
        }
    }
}

impl std::error::Error for Error {}
