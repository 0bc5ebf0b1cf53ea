use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Geometry that can't support the requested operation, such as scaling a point cloud with no
/// horizontal extent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGeometry {
    #[error("not enough points")]
    NotEnoughPoints,

    #[error("points have zero chord (max x equals min x), cannot scale")]
    ZeroChord,

    #[error("chord or scale factor is not finite, cannot scale")]
    NonFiniteChord,
}

/// Failure to convert a line that looked like a coordinate pair.
#[derive(Debug, Error)]
pub enum LineError {
    #[error("expected 2 coordinate tokens, found {0}")]
    TokenCount(usize),

    #[error("invalid number {token:?}")]
    Number {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, Error)]
pub enum DatError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read dat input")]
    Stream(#[source] std::io::Error),

    #[error("line {line}: {text:?}")]
    Line {
        line: usize,
        text: String,
        #[source]
        source: LineError,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("dxf output failed")]
    Dxf(#[from] dxf::DxfError),

    #[error("json output failed")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Top level error, naming the pipeline stage which failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("read stage failed")]
    Read(#[from] DatError),

    #[error("normalize stage failed")]
    Normalize(#[from] InvalidGeometry),

    #[error("write stage failed for {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ExportError,
    },
}
