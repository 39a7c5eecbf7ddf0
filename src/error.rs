use std::{fmt, io, path::PathBuf};

/// Error produced while drawing shapes or saving a canvas
#[derive(Debug)]
pub enum RasterError {
    /// Shape would write outside of the canvas, nothing was drawn
    OutOfBounds { shape: &'static str },
    /// Shape parameters are inconsistent, nothing was drawn
    InvalidGeometry {
        shape: &'static str,
        reason: &'static str,
    },
    /// Canvas can not be created with this size
    InvalidDimensions { width: usize, height: usize },
    /// Destination can not be opened or written
    Write { path: PathBuf, source: io::Error },
    /// JSON error
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::OutOfBounds { shape } => write!(f, "{shape} is out of bounds"),
            RasterError::InvalidGeometry { shape, reason } => {
                write!(f, "{shape} has invalid geometry: {reason}")
            }
            RasterError::InvalidDimensions { width, height } => {
                write!(f, "canvas dimensions must be positive: {width}x{height}")
            }
            RasterError::Write { path, source } => {
                write!(f, "the {} file could not be written: {source}", path.display())
            }
            #[cfg(feature = "serde")]
            RasterError::Json(error) => write!(f, "invalid scene: {error}"),
        }
    }
}

impl std::error::Error for RasterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterError::Write { source, .. } => Some(source),
            #[cfg(feature = "serde")]
            RasterError::Json(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for RasterError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

impl From<RasterError> for io::Error {
    fn from(error: RasterError) -> Self {
        match error {
            RasterError::Write { source, .. } => source,
            _ => Self::new(io::ErrorKind::InvalidData, error),
        }
    }
}
