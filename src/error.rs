use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("axis/score length mismatch: {axes} axes, {scores} scores")]
    AxisScoreLengthMismatch { axes: usize, scores: usize },

    #[error("unknown mount point: `{0}`")]
    UnknownMountPoint(String),

    #[error("mount point `{0}` is already registered")]
    DuplicateMountPoint(String),

    #[error("no rendered scene to export for chart `{0}`")]
    NothingToExport(String),
}
