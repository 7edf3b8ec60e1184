//! Move-list simplifier.
use crate::notation::{Move, Turn};

/// Cancels and merges adjacent moves on the same face (or about the same axis).
///
/// A single left-to-right stack scan: when the incoming move shares a layer
/// with the top of the stack their signed quarter turns are added mod 4; a
/// zero sum pops the top, any other sum replaces it. Merging can expose an
/// older same-layer move, which the next incoming move is compared against.
///
/// The result reaches the same state, is never longer than the input, has
/// no two adjacent same-layer moves, and simplifying it again changes nothing.
///
/// # Examples
///
/// ```
/// use beginner_cube::notation::{format_moves, parse_moves};
/// use beginner_cube::simplify::simplify;
///
/// let moves = parse_moves("R U U' R F F F y y2").unwrap();
/// assert_eq!(format_moves(&simplify(&moves)), "R2 F' y'");
/// ```
pub fn simplify(moves: &[Move]) -> Vec<Move> {
    let mut stack: Vec<Move> = Vec::with_capacity(moves.len());
    for &mv in moves {
        match stack.last() {
            Some(top) if top.same_layer(&mv) => {
                let quarters = top.turn().signed() as i32 + mv.turn().signed() as i32;
                let merged = Turn::from_quarter_turns(quarters).map(|turn| mv.with_turn(turn));
                stack.pop();
                if let Some(merged) = merged {
                    stack.push(merged);
                }
            }
            _ => stack.push(mv),
        }
    }
    stack
}
