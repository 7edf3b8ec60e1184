use crate::engine::{Corner, CubeState, Edge};
use crate::error::CubeError;
use crate::notation::{format_moves, parse_moves, Axis, Face, Move, Turn};
use crate::simplify::simplify;
use log::{debug, trace};
use std::fmt;

use crate::notation::Face::{B, D, F, L, R, U};

/// U turns needed to bring any U-layer piece above any side.
pub const ALIGN_BOUND: usize = 3;
/// `R U R' U'` has order 6, and a corner above its slot is placed within 5 applications.
pub const CORNER_REPETITION_BOUND: usize = 5;
/// Insertions per cross or middle-layer edge once it has been aligned.
pub const INSERTION_BOUND: usize = 1;
/// Dot becomes line, line becomes cross.
pub const TOP_CROSS_BOUND: usize = 2;
/// Adjacent swap becomes opposite swap, opposite swap becomes solved.
pub const TOP_EDGE_BOUND: usize = 2;
/// No corner placed, then one placed, then all four.
pub const TOP_CORNER_PERMUTATION_BOUND: usize = 3;
/// `R' D' R D` twists the URF corner, order 3 on orientation, 6 overall.
pub const TWIST_BOUND: usize = 4;

/// The seven stages of the layer-by-layer method, in solving order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Cross,
    FirstLayerCorners,
    MiddleLayerEdges,
    TopCross,
    TopEdges,
    TopCornerPermutation,
    TopCornerOrientation,
}

impl Phase {
    pub const ALL: [Phase; 7] = [
        Phase::Cross,
        Phase::FirstLayerCorners,
        Phase::MiddleLayerEdges,
        Phase::TopCross,
        Phase::TopEdges,
        Phase::TopCornerPermutation,
        Phase::TopCornerOrientation,
    ];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Cross => "cross",
            Phase::FirstLayerCorners => "first-layer corners",
            Phase::MiddleLayerEdges => "middle-layer edges",
            Phase::TopCross => "top cross",
            Phase::TopEdges => "top edges",
            Phase::TopCornerPermutation => "top corner permutation",
            Phase::TopCornerOrientation => "top corner orientation",
        };
        write!(f, "{}", name)
    }
}

/// Represents a solution found by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The simplified move sequence. Applying it after the scramble solves the cube.
    pub moves: Vec<Move>,
    /// Number of moves the phases emitted before simplification.
    pub unsimplified_len: usize,
    /// Moves emitted by each phase, before simplification, in solving order.
    pub phase_moves: Vec<(Phase, usize)>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_moves(&self.moves))
    }
}

/// Computes a move list that solves the cube reached by `history` from solved.
///
/// Deterministic: the same history always gives the same answer. The result
/// is simplified, and empty for an already solved cube.
///
/// # Arguments
///
/// * `history` - Every move applied since the cube was solved, in order.
///
/// # Returns
///
/// The solving moves, or `SolverInternal` if a phase overran its bound
/// (which a consistent cube state never does).
///
/// # Examples
///
/// ```
/// use beginner_cube::engine::CubeState;
/// use beginner_cube::notation::parse_moves;
/// use beginner_cube::solver::solve;
///
/// let scramble = parse_moves("R U R' U' F2 D L'").unwrap();
/// let solution = solve(&scramble).unwrap();
///
/// let mut cube = CubeState::from_moves(&scramble);
/// cube.apply_moves(&solution);
/// assert!(cube.is_solved());
/// ```
pub fn solve(history: &[Move]) -> Result<Vec<Move>, CubeError> {
    solve_state(&CubeState::from_moves(history)).map(|solution| solution.moves)
}

/// Solves a copy of `state` and reports the per-phase breakdown.
///
/// Face turns in the result are named in the frame of `state`, so they can
/// be applied to `state` directly.
pub fn solve_state(state: &CubeState) -> Result<Solution, CubeError> {
    let mut solver = BeginnerSolver::new(state.clone());
    let mut phase_moves = Vec::with_capacity(Phase::ALL.len());
    for phase in Phase::ALL {
        let before = solver.moves.len();
        solver.run(phase)?;
        let emitted = solver.moves.len() - before;
        debug!("{}: {} moves", phase, emitted);
        phase_moves.push((phase, emitted));
    }
    let moves = simplify(&solver.moves);
    debug!(
        "solved in {} moves ({} before simplification)",
        moves.len(),
        solver.moves.len()
    );
    Ok(Solution {
        moves,
        unsimplified_len: solver.moves.len(),
        phase_moves,
    })
}

/// Returns the logical slot holding the edge whose stickers are `colours`,
/// together with the stickers in slot order.
fn find_edge(cube: &CubeState, colours: [Face; 2]) -> Result<([Face; 2], [Face; 2]), CubeError> {
    for edge in Edge::ALL {
        let [a, b] = edge.faces();
        let stickers = cube.edge_stickers(a, b)?;
        if colours.iter().all(|c| stickers.contains(c)) {
            return Ok(([a, b], stickers));
        }
    }
    Err(CubeError::PieceNotFound(format!(
        "edge {}{}",
        colours[0], colours[1]
    )))
}

/// Corner counterpart of [`find_edge`]. The slot's first face is always U or D.
fn find_corner(cube: &CubeState, colours: [Face; 3]) -> Result<([Face; 3], [Face; 3]), CubeError> {
    for corner in Corner::ALL {
        let [a, b, c] = corner.faces();
        let stickers = cube.corner_stickers(a, b, c)?;
        if colours.iter().all(|colour| stickers.contains(colour)) {
            return Ok(([a, b, c], stickers));
        }
    }
    Err(CubeError::PieceNotFound(format!(
        "corner {}{}{}",
        colours[0], colours[1], colours[2]
    )))
}

fn edge_solved(cube: &CubeState, a: Face, b: Face) -> Result<bool, CubeError> {
    Ok(cube.edge_stickers(a, b)? == [a, b])
}

fn corner_solved(cube: &CubeState, a: Face, b: Face, c: Face) -> Result<bool, CubeError> {
    Ok(cube.corner_stickers(a, b, c)? == [a, b, c])
}

/// Top-layer corner between `side` and its right neighbour is in its slot, twisted or not.
fn top_corner_placed(cube: &CubeState, side: Face) -> Result<bool, CubeError> {
    let r = side.right_of();
    let stickers = cube.corner_stickers(U, side, r)?;
    Ok([U, side, r].iter().all(|f| stickers.contains(f)))
}

/// Side faces whose top edge shows U on top.
fn top_edges_oriented(cube: &CubeState) -> Result<Vec<Face>, CubeError> {
    let mut good = Vec::new();
    for side in [R, F, L, B] {
        if cube.edge_stickers(U, side)?[0] == U {
            good.push(side);
        }
    }
    Ok(good)
}

/// Side faces whose top edge is fully solved.
fn top_edges_matched(cube: &CubeState) -> Result<Vec<Face>, CubeError> {
    let mut matched = Vec::new();
    for side in Face::SIDES {
        if edge_solved(cube, U, side)? {
            matched.push(side);
        }
    }
    Ok(matched)
}

/// Drives a private cube through the seven phases, recording every move.
struct BeginnerSolver {
    cube: CubeState,
    moves: Vec<Move>,
    phase: Phase,
}

impl BeginnerSolver {
    fn new(cube: CubeState) -> Self {
        BeginnerSolver {
            cube,
            moves: Vec::new(),
            phase: Phase::Cross,
        }
    }

    fn run(&mut self, phase: Phase) -> Result<(), CubeError> {
        self.phase = phase;
        match phase {
            Phase::Cross => self.solve_cross(),
            Phase::FirstLayerCorners => self.solve_first_layer_corners(),
            Phase::MiddleLayerEdges => self.solve_middle_layer_edges(),
            Phase::TopCross => self.solve_top_cross(),
            Phase::TopEdges => self.solve_top_edges(),
            Phase::TopCornerPermutation => self.solve_top_corner_permutation(),
            Phase::TopCornerOrientation => self.solve_top_corner_orientation(),
        }
    }

    fn exceeded(&self, bound: usize) -> CubeError {
        CubeError::SolverInternal {
            phase: self.phase,
            bound,
        }
    }

    fn apply(&mut self, moves: &[Move]) {
        trace!("{}: {}", self.phase, format_moves(moves));
        self.cube.apply_moves(moves);
        self.moves.extend_from_slice(moves);
    }

    fn play(&mut self, notation: &str) -> Result<(), CubeError> {
        let moves = parse_moves(notation)?;
        self.apply(&moves);
        Ok(())
    }

    /// Applies `algorithm` until `done` holds, at most `bound` times.
    fn repeat_until<P>(&mut self, algorithm: &[Move], bound: usize, mut done: P) -> Result<usize, CubeError>
    where
        P: FnMut(&CubeState) -> Result<bool, CubeError>,
    {
        let mut count = 0;
        while !done(&self.cube)? {
            if count == bound {
                return Err(self.exceeded(bound));
            }
            self.apply(algorithm);
            count += 1;
        }
        Ok(count)
    }

    fn turn_top_until<P>(&mut self, bound: usize, done: P) -> Result<usize, CubeError>
    where
        P: FnMut(&CubeState) -> Result<bool, CubeError>,
    {
        self.repeat_until(&[Move::cw(U)], bound, done)
    }

    fn rotate_until<P>(&mut self, done: P) -> Result<usize, CubeError>
    where
        P: FnMut(&CubeState) -> Result<bool, CubeError>,
    {
        self.repeat_until(&[Move::Rotate(Axis::Y, Turn::Clockwise)], ALIGN_BOUND, done)
    }

    fn ensure(&self, holds: bool, bound: usize) -> Result<(), CubeError> {
        if holds {
            Ok(())
        } else {
            Err(self.exceeded(bound))
        }
    }

    /// Phase 1: the four D edges, matched with their side centers.
    fn solve_cross(&mut self) -> Result<(), CubeError> {
        for side in Face::SIDES {
            if edge_solved(&self.cube, D, side)? {
                continue;
            }
            let ([a, b], _) = find_edge(&self.cube, [D, side])?;
            if a == D {
                self.apply(&[Move::half(b)]);
            } else if a != U {
                // Middle slot `a b` with `b` the R or L face: lift it into U without
                // disturbing the D layer.
                let lift = if a.right_of() == b {
                    Move::cw(b)
                } else {
                    Move::ccw(b)
                };
                self.apply(&[lift, Move::cw(U), lift.inverse()]);
            }

            self.turn_top_until(ALIGN_BOUND, |cube| {
                Ok(find_edge(cube, [D, side])?.0 == [U, side])
            })?;

            let (_, stickers) = find_edge(&self.cube, [D, side])?;
            if stickers[0] == D {
                self.apply(&[Move::half(side)]);
            } else {
                let r = side.right_of();
                self.apply(&[Move::ccw(U), Move::ccw(r), Move::cw(side), Move::cw(r)]);
            }
            let placed = edge_solved(&self.cube, D, side)?;
            self.ensure(placed, INSERTION_BOUND)?;
        }
        Ok(())
    }

    /// `R U R' U'` for the corner slot between `side` and its right neighbour.
    fn corner_algorithm(side: Face) -> [Move; 4] {
        let r = side.right_of();
        [Move::cw(r), Move::cw(U), Move::ccw(r), Move::ccw(U)]
    }

    /// Phase 2: the four D corners.
    fn solve_first_layer_corners(&mut self) -> Result<(), CubeError> {
        for side in Face::SIDES {
            let r = side.right_of();
            if corner_solved(&self.cube, D, side, r)? {
                continue;
            }
            let (slot, _) = find_corner(&self.cube, [D, side, r])?;
            if slot[0] == D {
                let [_, x, y] = slot;
                let slot_side = if x.right_of() == y { x } else { y };
                self.apply(&Self::corner_algorithm(slot_side));
            }

            self.turn_top_until(ALIGN_BOUND, |cube| {
                let (slot, _) = find_corner(cube, [D, side, r])?;
                Ok(slot[0] == U && slot.contains(&side) && slot.contains(&r))
            })?;

            self.repeat_until(
                &Self::corner_algorithm(side),
                CORNER_REPETITION_BOUND,
                |cube| corner_solved(cube, D, side, r),
            )?;
        }
        Ok(())
    }

    /// `U R U' R' U' F' U F`: drops the U edge above `face` into the slot on its right.
    fn insert_right(&mut self, face: Face, side: Face) {
        self.apply(&[
            Move::cw(U),
            Move::cw(side),
            Move::ccw(U),
            Move::ccw(side),
            Move::ccw(U),
            Move::ccw(face),
            Move::cw(U),
            Move::cw(face),
        ]);
    }

    /// `U' L' U L U F U' F'`: drops the U edge above `face` into the slot on its left.
    fn insert_left(&mut self, face: Face, side: Face) {
        self.apply(&[
            Move::ccw(U),
            Move::ccw(side),
            Move::cw(U),
            Move::cw(side),
            Move::cw(U),
            Move::cw(face),
            Move::ccw(U),
            Move::ccw(face),
        ]);
    }

    /// Phase 3: the four middle-layer edges.
    fn solve_middle_layer_edges(&mut self) -> Result<(), CubeError> {
        for side in Face::SIDES {
            let r = side.right_of();
            if edge_solved(&self.cube, side, r)? {
                continue;
            }
            let ([a, b], _) = find_edge(&self.cube, [side, r])?;
            if a != U {
                // Stuck in the wrong slot or flipped: push it out with any edge from U.
                let x = if a.right_of() == b { a } else { b };
                self.insert_right(x, x.right_of());
            }

            self.turn_top_until(ALIGN_BOUND, |cube| {
                let ([a, b], stickers) = find_edge(cube, [side, r])?;
                Ok(a == U && stickers[1] == b)
            })?;

            let ([_, face], stickers) = find_edge(&self.cube, [side, r])?;
            let top = stickers[0];
            if top == face.right_of() {
                self.insert_right(face, top);
            } else {
                self.insert_left(face, top);
            }
            let placed = edge_solved(&self.cube, side, r)?;
            self.ensure(placed, INSERTION_BOUND)?;
        }
        Ok(())
    }

    /// Phase 4: orient the U edges.
    fn solve_top_cross(&mut self) -> Result<(), CubeError> {
        let mut applications = 0;
        loop {
            let good = top_edges_oriented(&self.cube)?;
            if good.len() == 4 {
                return Ok(());
            }
            if applications == TOP_CROSS_BOUND {
                return Err(self.exceeded(TOP_CROSS_BOUND));
            }
            match good.as_slice() {
                [] => self.play("F R U R' U' F'")?,
                &[first, second] if first.opposite() == second => {
                    self.turn_top_until(1, |cube| {
                        Ok(cube.edge_stickers(U, L)?[0] == U && cube.edge_stickers(U, R)?[0] == U)
                    })?;
                    self.play("F R U R' U' F'")?;
                }
                [_, _] => {
                    self.turn_top_until(ALIGN_BOUND, |cube| {
                        Ok(cube.edge_stickers(U, B)?[0] == U && cube.edge_stickers(U, L)?[0] == U)
                    })?;
                    self.play("F U R U' R' F'")?;
                }
                // An odd number of flipped edges cannot happen on a reachable cube.
                _ => return Err(self.exceeded(TOP_CROSS_BOUND)),
            }
            applications += 1;
        }
    }

    /// Phase 5: permute the U edges.
    fn solve_top_edges(&mut self) -> Result<(), CubeError> {
        let mut applications = 0;
        loop {
            // Try all four U positions on a scratch copy and keep the first best one.
            let mut scratch = self.cube.clone();
            let (mut best, mut best_turns) = (0, 0);
            for turns in 0..=ALIGN_BOUND {
                let matched = top_edges_matched(&scratch)?.len();
                if matched > best {
                    best = matched;
                    best_turns = turns;
                }
                scratch.apply_move(Move::cw(U));
            }
            self.apply(&vec![Move::cw(U); best_turns]);

            if best == 4 {
                return Ok(());
            }
            if best < 2 || applications == TOP_EDGE_BOUND {
                return Err(self.exceeded(TOP_EDGE_BOUND));
            }
            let matched = top_edges_matched(&self.cube)?;
            if matched[0].opposite() == matched[1] {
                self.play("R U R' U R U2 R'")?;
            } else {
                self.rotate_until(|cube| {
                    Ok(edge_solved(cube, U, B)? && edge_solved(cube, U, R)?)
                })?;
                self.play("R U R' U R U2 R' U")?;
            }
            applications += 1;
        }
    }

    /// Phase 6: put the U corners in their slots.
    fn solve_top_corner_permutation(&mut self) -> Result<(), CubeError> {
        let mut applications = 0;
        loop {
            let mut placed = 0;
            for side in Face::SIDES {
                if top_corner_placed(&self.cube, side)? {
                    placed += 1;
                }
            }
            if placed == 4 {
                return Ok(());
            }
            if applications == TOP_CORNER_PERMUTATION_BOUND {
                return Err(self.exceeded(TOP_CORNER_PERMUTATION_BOUND));
            }
            if placed > 0 {
                self.rotate_until(|cube| top_corner_placed(cube, F))?;
            }
            self.play("U R U' L' U R' U' L")?;
            applications += 1;
        }
    }

    /// Phase 7: twist the U corners in place, then line up the U layer.
    fn solve_top_corner_orientation(&mut self) -> Result<(), CubeError> {
        let twist = parse_moves("R' D' R D")?;
        for _ in 0..4 {
            self.repeat_until(&twist, TWIST_BOUND, |cube| {
                Ok(cube.corner_stickers(U, F, R)?[0] == U)
            })?;
            self.apply(&[Move::cw(U)]);
        }
        self.turn_top_until(ALIGN_BOUND, |cube| edge_solved(cube, U, F))?;
        let solved = self.cube.is_solved();
        self.ensure(solved, ALIGN_BOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scramble_with_seed;

    fn assert_solves(history: &[Move]) -> Solution {
        let mut cube = CubeState::from_moves(history);
        let solution = solve_state(&cube).unwrap();
        cube.apply_moves(&solution.moves);
        assert!(cube.is_solved(), "history {}", format_moves(history));
        solution
    }

    #[test]
    fn test_solve_solved_cube() {
        assert!(solve(&[]).unwrap().is_empty());
        let solution = assert_solves(&[]);
        assert_eq!(solution.phase_moves.len(), 7);
        // Only the four U turns of the last phase are emitted; they cancel.
        assert_eq!(solution.unsimplified_len, 4);
    }

    #[test]
    fn test_solve_double_front_turn() {
        let history = parse_moves("F F").unwrap();
        assert_eq!(solve(&history).unwrap(), vec![Move::half(F)]);
    }

    #[test]
    fn test_solve_single_moves() {
        for face in Face::ALL {
            for mv in [Move::cw(face), Move::ccw(face), Move::half(face)] {
                assert_solves(&[mv]);
            }
        }
    }

    #[test]
    fn test_solve_random_scrambles() {
        for seed in 0..100 {
            let scramble = scramble_with_seed(seed, 20);
            let solution = assert_solves(&scramble);
            assert_eq!(
                solution.phase_moves.iter().map(|(_, n)| n).sum::<usize>(),
                solution.unsimplified_len
            );
            assert!(solution.moves.len() <= solution.unsimplified_len);
        }
    }

    #[test]
    fn test_solve_with_rotations_in_history() {
        let history = parse_moves("R U x F' y2 L D z' B2 U' y R").unwrap();
        assert_solves(&history);
        let mut cube = CubeState::from_moves(&history);
        cube.apply_moves(&solve(&history).unwrap());
        assert!(cube.is_solved());
    }

    #[test]
    fn test_solver_is_deterministic() {
        let scramble = scramble_with_seed(99, 25);
        assert_eq!(solve(&scramble).unwrap(), solve(&scramble).unwrap());
    }

    #[test]
    fn test_solution_has_no_adjacent_same_layer_moves() {
        let solution = solve(&scramble_with_seed(5, 20)).unwrap();
        for pair in solution.windows(2) {
            assert!(!pair[0].same_layer(&pair[1]), "{} {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_phases_leave_their_invariants() {
        let mut solver = BeginnerSolver::new(CubeState::from_moves(&scramble_with_seed(17, 20)));
        solver.run(Phase::Cross).unwrap();
        for side in Face::SIDES {
            assert!(edge_solved(&solver.cube, D, side).unwrap());
        }
        solver.run(Phase::FirstLayerCorners).unwrap();
        solver.run(Phase::MiddleLayerEdges).unwrap();
        for side in Face::SIDES {
            let r = side.right_of();
            assert!(corner_solved(&solver.cube, D, side, r).unwrap());
            assert!(edge_solved(&solver.cube, side, r).unwrap());
        }
        solver.run(Phase::TopCross).unwrap();
        assert_eq!(top_edges_oriented(&solver.cube).unwrap().len(), 4);
        solver.run(Phase::TopEdges).unwrap();
        assert_eq!(top_edges_matched(&solver.cube).unwrap().len(), 4);
        solver.run(Phase::TopCornerPermutation).unwrap();
        for side in Face::SIDES {
            assert!(top_corner_placed(&solver.cube, side).unwrap());
        }
        solver.run(Phase::TopCornerOrientation).unwrap();
        assert!(solver.cube.is_solved());
    }

    #[test]
    fn test_unreachable_state_fails_fast() {
        // A lone flipped edge leaves three oriented top edges, which no algorithm can fix.
        let cube = CubeState::with_flipped_edge(Edge::UF);
        assert!(!cube.is_reachable());
        assert_eq!(
            solve_state(&cube),
            Err(CubeError::SolverInternal {
                phase: Phase::TopCross,
                bound: TOP_CROSS_BOUND
            })
        );
    }
}
