//! Bookkeeping between the engine and a presentation layer.
//!
//! A renderer animates one move at a time while the logical cube is updated
//! immediately. [`CubeSession`] keeps both sides in step: every move lands in
//! the history (from which solutions are computed) and in a pending queue the
//! renderer drains with [`CubeSession::advance`].
use crate::engine::CubeState;
use crate::error::CubeError;
use crate::geometry::GeometricCube;
use crate::notation::{parse_moves, Move};
use crate::solver::solve;
use crate::utils::random_scramble;
use log::{debug, info};
use rand::Rng;
use std::collections::VecDeque;

/// Manages one cube from solved: its move history, the animation queue and
/// the model the animation has reached so far.
///
/// # Examples
/// ```
/// use beginner_cube::session::CubeSession;
///
/// let mut session = CubeSession::new();
/// session.queue_notation("R U R' U'").unwrap();
/// let solution = session.solve().unwrap();
/// assert!(!solution.is_empty());
/// assert!(session.logical_state().is_solved());
///
/// // The renderer catches up move by move.
/// while let Some(mv) = session.advance() {
///     println!("animating {}", mv);
/// }
/// assert!(session.visual().is_solved());
/// ```
#[derive(Clone, Debug)]
pub struct CubeSession {
    history: Vec<Move>,
    pending: VecDeque<Move>,
    state: CubeState,
    visual: GeometricCube,
}

impl CubeSession {
    /// A solved cube with nothing queued.
    pub fn new() -> Self {
        CubeSession {
            history: Vec::new(),
            pending: VecDeque::new(),
            state: CubeState::solved(),
            visual: GeometricCube::solved(),
        }
    }

    /// Every move applied since the cube was solved, including queued ones.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Moves the renderer has not shown yet, oldest first.
    pub fn pending(&self) -> &VecDeque<Move> {
        &self.pending
    }

    /// The state after the whole history, animated or not.
    pub fn logical_state(&self) -> &CubeState {
        &self.state
    }

    /// The geometric model as far as the animation has progressed.
    pub fn visual(&self) -> &GeometricCube {
        &self.visual
    }

    /// Returns `true` when the renderer has caught up with the history.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Appends `moves` to the history and to the animation queue.
    pub fn queue_moves(&mut self, moves: &[Move]) {
        self.state.apply_moves(moves);
        self.history.extend_from_slice(moves);
        self.pending.extend(moves.iter().copied());
    }

    /// Parses `text` and queues it. Nothing is queued if any token is invalid.
    ///
    /// # Returns
    /// The number of moves queued.
    pub fn queue_notation(&mut self, text: &str) -> Result<usize, CubeError> {
        let moves = parse_moves(text)?;
        self.queue_moves(&moves);
        Ok(moves.len())
    }

    /// Queues `length` random face turns and returns them.
    pub fn scramble(&mut self, rng: &mut impl Rng, length: usize) -> Vec<Move> {
        let moves = random_scramble(rng, length);
        debug!("scramble of {} moves queued", moves.len());
        self.queue_moves(&moves);
        moves
    }

    /// Solves the cube reached by the history and queues the solution.
    ///
    /// The solution becomes part of the history, so a later scramble and
    /// solve starts from the right state.
    pub fn solve(&mut self) -> Result<Vec<Move>, CubeError> {
        let solution = solve(&self.history)?;
        info!(
            "solution of {} moves for a history of {}",
            solution.len(),
            self.history.len()
        );
        self.queue_moves(&solution);
        Ok(solution)
    }

    /// Shows the next pending move on the geometric model.
    pub fn advance(&mut self) -> Option<Move> {
        let mv = self.pending.pop_front()?;
        self.visual.apply_move(mv);
        Some(mv)
    }

    /// Drains the queue. Returns how many moves were shown.
    pub fn advance_all(&mut self) -> usize {
        let mut shown = 0;
        while self.advance().is_some() {
            shown += 1;
        }
        shown
    }

    /// Removes the last move from the history and queues its inverse for the renderer.
    ///
    /// # Returns
    /// * `Some(inverse)` with the queued move.
    /// * `None` if the history is empty.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        let inverse = last.inverse();
        self.state.apply_move(inverse);
        self.pending.push_back(inverse);
        Some(inverse)
    }

    /// Back to a solved cube with an empty queue.
    pub fn reset(&mut self) {
        *self = CubeSession::new();
    }
}

impl Default for CubeSession {
    fn default() -> Self {
        CubeSession::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{format_moves, Face};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_session_is_idle_and_solved() {
        let session = CubeSession::new();
        assert!(session.is_idle());
        assert!(session.is_solved());
        assert!(session.history().is_empty());
        assert!(session.visual().is_solved());
    }

    #[test]
    fn test_queue_notation_is_all_or_nothing() {
        let mut session = CubeSession::new();
        assert_eq!(session.queue_notation("R U"), Ok(2));
        assert!(session.queue_notation("F M").is_err());
        assert_eq!(format_moves(session.history()), "R U");
        assert_eq!(session.pending().len(), 2);
    }

    #[test]
    fn test_advance_follows_queue_order() {
        let mut session = CubeSession::new();
        session.queue_notation("R U'").unwrap();
        assert_eq!(session.advance(), Some(Move::cw(Face::R)));
        assert!(!session.is_idle());
        assert_eq!(session.advance(), Some(Move::ccw(Face::U)));
        assert_eq!(session.advance(), None);
        assert!(session.is_idle());
    }

    #[test]
    fn test_scramble_then_solve() {
        let mut session = CubeSession::new();
        let mut rng = SmallRng::seed_from_u64(514514);
        let scramble = session.scramble(&mut rng, 20);
        assert_eq!(scramble.len(), 20);
        assert!(!session.is_solved());

        let solution = session.solve().unwrap();
        assert!(session.is_solved());
        assert_eq!(session.history().len(), 20 + solution.len());
        assert_eq!(session.advance_all(), 20 + solution.len());
        assert!(session.visual().is_solved());
    }

    #[test]
    fn test_visual_matches_projection_after_catch_up() {
        let mut session = CubeSession::new();
        session.queue_notation("R U x F' y2 L2 D'").unwrap();
        session.advance_all();
        assert_eq!(
            GeometricCube::project(session.logical_state()),
            session.visual().clone()
        );
    }

    #[test]
    fn test_undo_last_move() {
        let mut session = CubeSession::new();
        assert_eq!(session.undo_last_move(), None);

        session.queue_notation("R U2").unwrap();
        assert_eq!(session.undo_last_move(), Some(Move::half(Face::U)));
        assert_eq!(format_moves(session.history()), "R");
        assert_eq!(session.logical_state(), &CubeState::from_moves(&[Move::cw(Face::R)]));
        // The renderer still shows R U2 and then the undo.
        assert_eq!(format_moves(&session.pending().iter().copied().collect::<Vec<_>>()), "R U2 U2");

        session.advance_all();
        assert_eq!(GeometricCube::project(session.logical_state()), *session.visual());
    }

    #[test]
    fn test_reset() {
        let mut session = CubeSession::new();
        session.queue_notation("R U F").unwrap();
        session.reset();
        assert!(session.is_idle());
        assert!(session.history().is_empty());
        assert!(session.is_solved());
    }
}
