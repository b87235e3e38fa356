// ---------------------------------------------------------------------------
// PercolationError: typed errors for invalid constructor/coordinate input
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors raised when a caller violates a constructor or coordinate
/// contract.
///
/// Every variant is an invalid-argument condition: it is raised
/// synchronously at the call that passed the bad value and there is no
/// recovery path — callers are expected to pass valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    /// Grid constructor was given a zero side length.
    GridSize { n: usize },
    /// A row/col pair fell outside `[1, n]`.
    SiteOutOfBounds { row: usize, col: usize, n: usize },
    /// Experiment constructor was given a zero trial count.
    TrialCount { trials: usize },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PercolationError::GridSize { n } => {
                write!(f, "grid size must be positive, got {n}")
            }
            PercolationError::SiteOutOfBounds { row, col, n } => {
                write!(
                    f,
                    "site ({row}, {col}) outside the {n}×{n} grid (rows and cols are 1-indexed)"
                )
            }
            PercolationError::TrialCount { trials } => {
                write!(f, "trial count must be positive, got {trials}")
            }
        }
    }
}

impl std::error::Error for PercolationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_value() {
        let err = PercolationError::SiteOutOfBounds {
            row: 0,
            col: 7,
            n: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("(0, 7)"), "message was: {msg}");
        assert!(msg.contains("5×5"), "message was: {msg}");
    }
}
