//! Error type shared by shape constructors and mutators.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure raised while building or mutating a shape.
///
/// Every variant is an input error: the receiver is left in its last valid
/// state and the caller has to fix the arguments before retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// A scalar parameter is out of range (negative radius or side, foci too
    /// far apart for the semi-major axis, negative size).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// The vertices do not span an area.
    #[error("degenerate shape: {0}")]
    DegenerateShape(String),
    /// A triangle vertex index outside `0..3`.
    #[error("vertex index out of range: {index} (expected 0, 1 or 2)")]
    IndexOutOfRange { index: usize },
}

impl ShapeError {
    /// Stable machine-readable code for the error kind.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter(_) => "E_INVALID_PARAMETER",
            Self::DegenerateShape(_) => "E_DEGENERATE_SHAPE",
            Self::IndexOutOfRange { .. } => "E_INDEX_OUT_OF_RANGE",
        }
    }
}
