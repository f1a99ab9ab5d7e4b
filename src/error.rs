// Error taxonomy for the solver core
//
// Unsolvable puzzles are not errors: they surface as `Outcome::Unsolvable`.
// Everything here is a caller mistake that must be rejected before search starts.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Board text or tile sequence does not describe a valid NxN board.
    MalformedInput { reason: String },
    /// Board size, worker count or another search parameter is out of range.
    Configuration { reason: String },
    /// A board reached a code path that requires exactly one blank.
    InvariantViolation { reason: String },
}

impl PuzzleError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        PuzzleError::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        PuzzleError::Configuration {
            reason: reason.into(),
        }
    }

    pub fn invariant(reason: impl Into<String>) -> Self {
        PuzzleError::InvariantViolation {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::MalformedInput { reason } => write!(f, "malformed input: {reason}"),
            PuzzleError::Configuration { reason } => write!(f, "configuration error: {reason}"),
            PuzzleError::InvariantViolation { reason } => {
                write!(f, "invariant violation: {reason}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}
