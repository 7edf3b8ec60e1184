//! # Beginner Cube Library
//!
//! This library models a 3x3x3 Rubik's Cube and solves it with the
//! layer-by-layer beginner method: a deterministic seven-phase pipeline of
//! short fixed algorithms, followed by a pass that merges redundant moves.
//!
//! It is used by three binaries:
//! - `solve_cube`: Takes a scramble (inline, from a file, or seeded) and prints the solution.
//! - `solver_benchmark`: Solves a batch of seeded scrambles and reports solution length statistics.
//! - `cube_player`: Lets a user turn the cube interactively from the terminal, undo, and ask for a solve.
//!
//! ## Modules
//! - `notation`: Move tokens (`R`, `U'`, `F2`, `y`, ...), their parsing and formatting.
//! - `engine`: The permutation model (`CubeState`) the solver works on, and the piece and colour types.
//! - `geometry`: The 27-cubie spatial model a renderer consumes, and per-move turn geometry.
//! - `solver`: The `solve` and `solve_state` functions.
//! - `simplify`: Cancels and merges adjacent same-face moves.
//! - `session`: History and animation-queue bookkeeping around a single cube.
//! - `utils`: Seeded scrambles and move-file parsing.
//! - `error`: The `CubeError` type shared by all of the above.

pub mod engine;
pub mod error;
pub mod geometry;
pub mod notation;
pub mod session;
pub mod simplify;
pub mod solver;
pub mod utils;

pub use error::CubeError;
