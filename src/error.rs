//! Error taxonomy shared by the notation parser, the cube engine and the solver.

use crate::solver::Phase;
use thiserror::Error;

/// Every failure the crate can report.
///
/// None of these are retried internally. Move sequences are order dependent,
/// so a bad token aborts the whole call before any state is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// The token does not have the shape of a move at all (empty, bad suffix, extra characters).
    #[error("malformed move token {0:?}")]
    InvalidNotation(String),
    /// The token is shaped like a move but names no known face or rotation axis.
    #[error("unrecognized face or rotation in move token {0:?}")]
    InvalidMove(String),
    /// A permutation array no longer contains a piece it must contain.
    #[error("piece not found: {0}")]
    PieceNotFound(String),
    /// A solver phase ran past the step bound derived from its case analysis.
    #[error("solver phase {phase} exceeded its bound of {bound} steps")]
    SolverInternal { phase: Phase, bound: usize },
}
