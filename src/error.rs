use crate::Coord;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Debug, Error, PartialEq)]
pub enum LifeError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimension { rows: i64, cols: i64 },
    #[error("cell {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: i64, cols: i64 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("scan margin must be at least 1, got {0}")]
    InvalidMargin(i64),
    #[error(
        "unknown pattern `{0}`, expected one of: {}",
        crate::Pattern::names().collect::<Vec<_>>().join(", ")
    )]
    UnknownPattern(String),
    #[error("malformed RLE: {0}")]
    InvalidRle(String),
}
