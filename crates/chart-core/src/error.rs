// File: crates/chart-core/src/error.rs
// Summary: Boundary errors (input/config validation) and non-fatal render notes.

use thiserror::Error;

/// Errors raised while turning external data or configuration into chart inputs.
/// Rendering itself never fails; these only come from the parsing/validation edge.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid sample at row {row}: {reason}")]
    InvalidSample { row: usize, reason: String },
    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        ChartError::InvalidInput(e.to_string())
    }
}

/// Degenerate-but-valid conditions met while rendering. Recorded on the
/// resulting graphic so callers can inspect them; never surfaced as errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderNote {
    /// Zero samples: only the axes are drawn.
    EmptyInput,
    /// First and last timestamps are equal; every point maps to the left edge.
    DegenerateDomain,
    /// Some samples carried no usable value and left gaps in the line.
    MissingValues { count: usize },
}
