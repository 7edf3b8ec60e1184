//! Permutation cube engine.
//!
//! This module defines the canonical combinatorial cube state:
//! - `Color`: the six sticker colours, one per face center.
//! - `Corner` / `Edge`: the canonical piece identities and their facelet order.
//! - `Frame`: which physical face each logical face name currently denotes.
//! - `CubeState`: corner/edge permutation and orientation plus the frame,
//!   mutated by composing fixed per-face permutation tables.
use crate::error::CubeError;
use crate::notation::{parse_moves, Axis, Face, Move};
use std::fmt;

/// Sticker colour. Each face center has a fixed colour that never moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Orange,
    Red,
    Green,
    Blue,
}

impl Color {
    /// The colour of the center of `face` on a cube held in the reference orientation.
    ///
    /// # Examples
    ///
    /// ```
    /// use beginner_cube::engine::Color;
    /// use beginner_cube::notation::Face;
    /// assert_eq!(Color::of_face(Face::U), Color::White);
    /// assert_eq!(Color::of_face(Face::F), Color::Green);
    /// ```
    pub fn of_face(face: Face) -> Color {
        match face {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::L => Color::Orange,
            Face::R => Color::Red,
            Face::F => Color::Green,
            Face::B => Color::Blue,
        }
    }

    /// The face whose center carries this colour. Inverse of [`Color::of_face`].
    pub fn home_face(self) -> Face {
        match self {
            Color::White => Face::U,
            Color::Yellow => Face::D,
            Color::Orange => Face::L,
            Color::Red => Face::R,
            Color::Green => Face::F,
            Color::Blue => Face::B,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

/// Corner identities. The discriminant is both the piece id and its home slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    URF,
    UFL,
    ULB,
    UBR,
    DFR,
    DLF,
    DBL,
    DRB,
}

impl Corner {
    pub const ALL: [Corner; 8] = [
        Corner::URF,
        Corner::UFL,
        Corner::ULB,
        Corner::UBR,
        Corner::DFR,
        Corner::DLF,
        Corner::DBL,
        Corner::DRB,
    ];

    /// Facelets of this corner, clockwise starting from the U or D facelet.
    pub fn faces(self) -> [Face; 3] {
        CORNER_FACES[self as usize]
    }
}

/// Edge identities. The discriminant is both the piece id and its home slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    UR,
    UF,
    UL,
    UB,
    DR,
    DF,
    DL,
    DB,
    FR,
    FL,
    BL,
    BR,
}

impl Edge {
    pub const ALL: [Edge; 12] = [
        Edge::UR,
        Edge::UF,
        Edge::UL,
        Edge::UB,
        Edge::DR,
        Edge::DF,
        Edge::DL,
        Edge::DB,
        Edge::FR,
        Edge::FL,
        Edge::BL,
        Edge::BR,
    ];

    /// Facelets of this edge, U/D facelet first (F/B first for the middle layer).
    pub fn faces(self) -> [Face; 2] {
        EDGE_FACES[self as usize]
    }
}

use crate::notation::Face::{B as FB, D as FD, F as FF, L as FL, R as FR, U as FU};

const CORNER_FACES: [[Face; 3]; 8] = [
    [FU, FR, FF],
    [FU, FF, FL],
    [FU, FL, FB],
    [FU, FB, FR],
    [FD, FF, FR],
    [FD, FL, FF],
    [FD, FB, FL],
    [FD, FR, FB],
];

const EDGE_FACES: [[Face; 2]; 12] = [
    [FU, FR],
    [FU, FF],
    [FU, FL],
    [FU, FB],
    [FD, FR],
    [FD, FF],
    [FD, FL],
    [FD, FB],
    [FF, FR],
    [FF, FL],
    [FB, FL],
    [FB, FR],
];

/// One clockwise quarter turn of a face, in "replaced by" form:
/// after the turn, slot `i` holds what slot `cp[i]` held, twisted by `co[i]`.
struct FaceTurn {
    cp: [u8; 8],
    co: [u8; 8],
    ep: [u8; 12],
    eo: [u8; 12],
}

/// Quarter-turn tables indexed by `Face::index`. Only F and B flip edges.
const FACE_TURNS: [FaceTurn; 6] = [
    // U
    FaceTurn {
        cp: [3, 0, 1, 2, 4, 5, 6, 7],
        co: [0, 0, 0, 0, 0, 0, 0, 0],
        ep: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
        eo: [0; 12],
    },
    // R
    FaceTurn {
        cp: [4, 1, 2, 0, 7, 5, 6, 3],
        co: [2, 0, 0, 1, 1, 0, 0, 2],
        ep: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
        eo: [0; 12],
    },
    // F
    FaceTurn {
        cp: [1, 5, 2, 3, 0, 4, 6, 7],
        co: [1, 2, 0, 0, 2, 1, 0, 0],
        ep: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
        eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    },
    // D
    FaceTurn {
        cp: [0, 1, 2, 3, 5, 6, 7, 4],
        co: [0, 0, 0, 0, 0, 0, 0, 0],
        ep: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
        eo: [0; 12],
    },
    // L
    FaceTurn {
        cp: [0, 2, 6, 3, 4, 1, 5, 7],
        co: [0, 1, 2, 0, 0, 2, 1, 0],
        ep: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
        eo: [0; 12],
    },
    // B
    FaceTurn {
        cp: [0, 1, 3, 7, 4, 5, 2, 6],
        co: [0, 0, 1, 2, 0, 0, 2, 1],
        ep: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
        eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    },
];

/// Maps logical face names to the physical faces they currently denote.
///
/// Physical faces are the ones pieces are named after; logical faces are the
/// ones move tokens name. Whole-cube rotations only change this mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Frame {
    physical: [Face; 6],
}

impl Frame {
    pub fn identity() -> Self {
        Frame { physical: Face::ALL }
    }

    /// The physical face currently called `logical`.
    pub fn physical(&self, logical: Face) -> Face {
        self.physical[logical.index()]
    }

    /// The logical name of `physical`. Inverse of [`Frame::physical`].
    pub fn logical(&self, physical: Face) -> Face {
        Face::ALL
            .into_iter()
            .find(|&f| self.physical(f) == physical)
            .unwrap_or(physical)
    }

    pub fn is_identity(&self) -> bool {
        self.physical == Face::ALL
    }

    /// One clockwise quarter rotation of the whole cube about `axis`.
    ///
    /// After `y` the face that was on the right is called front, after `x`
    /// the former front is called up, after `z` the former up is called right.
    fn rotate(&mut self, axis: Axis) {
        let cycle = match axis {
            // (new name, takes the face formerly named)
            Axis::X => [(FU, FF), (FF, FD), (FD, FB), (FB, FU)],
            Axis::Y => [(FF, FR), (FR, FB), (FB, FL), (FL, FF)],
            Axis::Z => [(FR, FU), (FU, FL), (FL, FD), (FD, FR)],
        };
        let old = self.physical;
        for (name, from) in cycle {
            self.physical[name.index()] = old[from.index()];
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Frame::identity()
    }
}

/// Combinatorial state of the cube.
///
/// `cp[i]`/`ep[i]` is the piece occupying slot `i`, `co[i]`/`eo[i]` its twist
/// or flip. For a reachable state the twists sum to 0 mod 3, the flips to 0
/// mod 2, and the corner and edge permutations have equal parity.
///
/// # Examples
///
/// ```
/// use beginner_cube::engine::CubeState;
/// use beginner_cube::notation::parse_moves;
///
/// let mut cube = CubeState::solved();
/// let sexy = parse_moves("R U R' U'").unwrap();
/// for _ in 0..6 {
///     cube.apply_moves(&sexy);
/// }
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CubeState {
    cp: [u8; 8],
    co: [u8; 8],
    ep: [u8; 12],
    eo: [u8; 12],
    frame: Frame,
}

impl CubeState {
    /// Identity permutations, zero orientations, identity frame.
    pub fn solved() -> Self {
        CubeState {
            cp: [0, 1, 2, 3, 4, 5, 6, 7],
            co: [0; 8],
            ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
            eo: [0; 12],
            frame: Frame::identity(),
        }
    }

    /// Replays `history` onto a fresh solved state.
    pub fn from_moves(history: &[Move]) -> Self {
        let mut state = CubeState::solved();
        state.apply_moves(history);
        state
    }

    pub fn corner_permutation(&self) -> &[u8; 8] {
        &self.cp
    }

    pub fn corner_orientation(&self) -> &[u8; 8] {
        &self.co
    }

    pub fn edge_permutation(&self) -> &[u8; 12] {
        &self.ep
    }

    pub fn edge_orientation(&self) -> &[u8; 12] {
        &self.eo
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Applies one move.
    ///
    /// A face turn is mapped through the frame to the physical face it names
    /// and composed `quarter_turns` times. A rotation only updates the frame;
    /// no piece changes slot.
    pub fn apply_move(&mut self, mv: Move) {
        match mv {
            Move::Face(face, turn) => {
                let table = &FACE_TURNS[self.frame.physical(face).index()];
                for _ in 0..turn.quarter_turns() {
                    self.compose(table);
                }
            }
            Move::Rotate(axis, turn) => {
                for _ in 0..turn.quarter_turns() {
                    self.frame.rotate(axis);
                }
            }
        }
    }

    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(mv);
        }
    }

    /// Parses `text` and applies it. Every token is parsed before the first
    /// one is applied, so on error the state is unchanged.
    pub fn apply_notation(&mut self, text: &str) -> Result<(), CubeError> {
        let moves = parse_moves(text)?;
        self.apply_moves(&moves);
        Ok(())
    }

    fn compose(&mut self, turn: &FaceTurn) {
        let (cp, co, ep, eo) = (self.cp, self.co, self.ep, self.eo);
        for i in 0..8 {
            let from = turn.cp[i] as usize;
            self.cp[i] = cp[from];
            self.co[i] = (co[from] + turn.co[i]) % 3;
        }
        for i in 0..12 {
            let from = turn.ep[i] as usize;
            self.ep[i] = ep[from];
            self.eo[i] = (eo[from] + turn.eo[i]) % 2;
        }
    }

    /// Finds the slot currently holding `piece` and the piece's twist there.
    pub fn locate_corner(&self, piece: Corner) -> Result<(usize, u8), CubeError> {
        self.cp
            .iter()
            .position(|&p| p == piece as u8)
            .map(|slot| (slot, self.co[slot]))
            .ok_or_else(|| CubeError::PieceNotFound(format!("corner {:?}", piece)))
    }

    /// Finds the slot currently holding `piece` and the piece's flip there.
    pub fn locate_edge(&self, piece: Edge) -> Result<(usize, u8), CubeError> {
        self.ep
            .iter()
            .position(|&p| p == piece as u8)
            .map(|slot| (slot, self.eo[slot]))
            .ok_or_else(|| CubeError::PieceNotFound(format!("edge {:?}", piece)))
    }

    /// Sticker colours of the edge between logical faces `a` and `b`.
    ///
    /// Each colour is reported as the logical face whose center it matches,
    /// in the order the faces were given. An edge in place shows `[a, b]`.
    pub fn edge_stickers(&self, a: Face, b: Face) -> Result<[Face; 2], CubeError> {
        let wanted = [self.frame.physical(a), self.frame.physical(b)];
        let slot = EDGE_FACES
            .iter()
            .position(|faces| faces.contains(&wanted[0]) && faces.contains(&wanted[1]) && wanted[0] != wanted[1])
            .ok_or_else(|| CubeError::PieceNotFound(format!("edge slot {}{}", a, b)))?;
        let piece = EDGE_FACES[self.ep[slot] as usize];
        let flip = self.eo[slot] as usize;
        let mut out = [a, b];
        for (colour, physical) in out.iter_mut().zip(wanted) {
            let k = position_of(&EDGE_FACES[slot], physical);
            *colour = self.frame.logical(piece[(k + 2 - flip) % 2]);
        }
        Ok(out)
    }

    /// Sticker colours of the corner between logical faces `a`, `b` and `c`.
    ///
    /// Same reporting convention as [`CubeState::edge_stickers`].
    pub fn corner_stickers(&self, a: Face, b: Face, c: Face) -> Result<[Face; 3], CubeError> {
        let wanted = [
            self.frame.physical(a),
            self.frame.physical(b),
            self.frame.physical(c),
        ];
        let slot = CORNER_FACES
            .iter()
            .position(|faces| wanted.iter().all(|w| faces.contains(w)))
            .filter(|_| wanted[0] != wanted[1] && wanted[1] != wanted[2] && wanted[0] != wanted[2])
            .ok_or_else(|| CubeError::PieceNotFound(format!("corner slot {}{}{}", a, b, c)))?;
        let piece = CORNER_FACES[self.cp[slot] as usize];
        let twist = self.co[slot] as usize;
        let mut out = [a, b, c];
        for (colour, physical) in out.iter_mut().zip(wanted) {
            let k = position_of(&CORNER_FACES[slot], physical);
            *colour = self.frame.logical(piece[(k + 3 - twist) % 3]);
        }
        Ok(out)
    }

    /// Identity permutations and zero orientations. The frame is ignored:
    /// a solved cube held in any orientation is solved.
    pub fn is_solved(&self) -> bool {
        self.cp.iter().enumerate().all(|(i, &p)| p as usize == i)
            && self.ep.iter().enumerate().all(|(i, &p)| p as usize == i)
            && self.co.iter().all(|&o| o == 0)
            && self.eo.iter().all(|&o| o == 0)
    }

    pub fn corner_twist_sum(&self) -> u32 {
        self.co.iter().map(|&o| o as u32).sum()
    }

    pub fn edge_flip_sum(&self) -> u32 {
        self.eo.iter().map(|&o| o as u32).sum()
    }

    /// `true` when the corner permutation is odd.
    pub fn corner_parity(&self) -> bool {
        permutation_parity(&self.cp)
    }

    /// `true` when the edge permutation is odd.
    pub fn edge_parity(&self) -> bool {
        permutation_parity(&self.ep)
    }

    /// Checks the four invariants every state produced by legal moves satisfies.
    pub fn is_reachable(&self) -> bool {
        is_permutation(&self.cp)
            && is_permutation(&self.ep)
            && self.corner_twist_sum() % 3 == 0
            && self.edge_flip_sum() % 2 == 0
            && self.corner_parity() == self.edge_parity()
    }

    /// A solved cube with one edge flipped in place. Not reachable by moves.
    #[cfg(test)]
    pub(crate) fn with_flipped_edge(edge: Edge) -> Self {
        let mut state = CubeState::solved();
        state.eo[edge as usize] = 1;
        state
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::solved()
    }
}

impl fmt::Display for CubeState {
    /// Prints the four arrays in slot order, e.g. `cp=[0 1 ...] co=[...] ep=[...] eo=[...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |xs: &[u8]| {
            xs.iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(
            f,
            "cp=[{}] co=[{}] ep=[{}] eo=[{}]",
            join(&self.cp),
            join(&self.co),
            join(&self.ep),
            join(&self.eo)
        )
    }
}

fn position_of(faces: &[Face], face: Face) -> usize {
    faces.iter().position(|&f| f == face).unwrap_or(0)
}

fn is_permutation(p: &[u8]) -> bool {
    let mut seen = vec![false; p.len()];
    for &x in p {
        match seen.get_mut(x as usize) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}

// Counts inversions; odd count means odd permutation.
fn permutation_parity(p: &[u8]) -> bool {
    let mut inversions = 0;
    for i in 0..p.len() {
        for j in i + 1..p.len() {
            if p[i] > p[j] {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Turn;
    use crate::utils::scramble_with_seed;

    fn face_moves() -> Vec<Move> {
        let mut moves = Vec::new();
        for face in Face::ALL {
            for turn in [Turn::Clockwise, Turn::Half, Turn::CounterClockwise] {
                moves.push(Move::Face(face, turn));
            }
        }
        moves
    }

    #[test]
    fn test_solved_state() {
        let cube = CubeState::solved();
        assert!(cube.is_solved());
        assert!(cube.is_reachable());
        assert!(cube.frame().is_identity());
        for corner in Corner::ALL {
            assert_eq!(cube.locate_corner(corner).unwrap(), (corner as usize, 0));
        }
        for edge in Edge::ALL {
            assert_eq!(cube.locate_edge(edge).unwrap(), (edge as usize, 0));
        }
    }

    #[test]
    fn test_every_face_turn_has_order_four() {
        let start = CubeState::from_moves(&scramble_with_seed(7, 20));
        for face in Face::ALL {
            let mut cube = start.clone();
            for _ in 0..4 {
                cube.apply_move(Move::cw(face));
            }
            assert_eq!(cube, start, "face {}", face);
        }
    }

    #[test]
    fn test_inverse_law() {
        let start = CubeState::from_moves(&scramble_with_seed(11, 20));
        for mv in face_moves() {
            let mut cube = start.clone();
            cube.apply_move(mv);
            assert_ne!(cube, start);
            cube.apply_move(mv.inverse());
            assert_eq!(cube, start, "move {}", mv);
        }
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let sexy = parse_moves("R U R' U'").unwrap();
        let mut cube = CubeState::solved();
        for i in 1..=6 {
            cube.apply_moves(&sexy);
            assert_eq!(cube.is_solved(), i == 6, "after {} repetitions", i);
        }
    }

    #[test]
    fn test_invariants_hold_after_random_moves() {
        for seed in 0..50 {
            let cube = CubeState::from_moves(&scramble_with_seed(seed, 30));
            assert_eq!(cube.corner_twist_sum() % 3, 0);
            assert_eq!(cube.edge_flip_sum() % 2, 0);
            assert_eq!(cube.corner_parity(), cube.edge_parity());
            assert!(cube.is_reachable(), "seed {}", seed);
        }
    }

    #[test]
    fn test_single_quarter_turn_is_odd() {
        let mut cube = CubeState::solved();
        cube.apply_move(Move::cw(Face::U));
        assert!(cube.corner_parity());
        assert!(cube.edge_parity());
        assert_eq!(cube.edge_flip_sum(), 0);

        let mut cube = CubeState::solved();
        cube.apply_move(Move::cw(Face::F));
        assert_eq!(cube.edge_flip_sum(), 4);
        assert_eq!(cube.corner_twist_sum(), 6);
    }

    #[test]
    fn test_r_turn_stickers() {
        // R lifts the DFR corner to URF: its D sticker lands on F, its F sticker on U.
        let mut cube = CubeState::solved();
        cube.apply_move(Move::cw(Face::R));
        assert_eq!(
            cube.corner_stickers(Face::U, Face::R, Face::F).unwrap(),
            [Face::F, Face::R, Face::D]
        );
        // The FR edge goes up to UR with its R sticker still on R.
        assert_eq!(cube.edge_stickers(Face::U, Face::R).unwrap(), [Face::F, Face::R]);
        assert_eq!(cube.locate_corner(Corner::DFR).unwrap().0, Corner::URF as usize);
    }

    #[test]
    fn test_f_turn_flips_edges() {
        let mut cube = CubeState::solved();
        cube.apply_move(Move::cw(Face::F));
        // The FL edge rises to UF showing its L sticker on top.
        assert_eq!(cube.edge_stickers(Face::U, Face::F).unwrap(), [Face::L, Face::F]);
        assert_eq!(cube.locate_edge(Edge::FL).unwrap(), (Edge::UF as usize, 1));
    }

    #[test]
    fn test_sticker_query_order_follows_arguments() {
        let mut cube = CubeState::solved();
        cube.apply_notation("R U F'").unwrap();
        let [a, b] = cube.edge_stickers(Face::F, Face::R).unwrap();
        assert_eq!(cube.edge_stickers(Face::R, Face::F).unwrap(), [b, a]);
        let [x, y, z] = cube.corner_stickers(Face::D, Face::L, Face::F).unwrap();
        assert_eq!(cube.corner_stickers(Face::F, Face::D, Face::L).unwrap(), [z, x, y]);
    }

    #[test]
    fn test_non_adjacent_slot_queries_fail() {
        let cube = CubeState::solved();
        assert!(matches!(
            cube.edge_stickers(Face::U, Face::D),
            Err(CubeError::PieceNotFound(_))
        ));
        assert!(cube.edge_stickers(Face::F, Face::F).is_err());
        assert!(cube.corner_stickers(Face::U, Face::R, Face::L).is_err());
    }

    #[test]
    fn test_rotations_change_only_the_frame() {
        let mut cube = CubeState::from_moves(&scramble_with_seed(3, 20));
        let before = cube.clone();
        cube.apply_notation("y x2 z'").unwrap();
        assert_eq!(cube.corner_permutation(), before.corner_permutation());
        assert_eq!(cube.edge_orientation(), before.edge_orientation());
        assert_ne!(cube.frame(), before.frame());
        cube.apply_notation("z x2 y'").unwrap();
        assert_eq!(cube, before);
    }

    #[test]
    fn test_face_turns_follow_the_frame() {
        // After y, the logical R face is the physical B face.
        let mut rotated = CubeState::solved();
        rotated.apply_notation("y R").unwrap();
        let mut direct = CubeState::solved();
        direct.apply_notation("B").unwrap();
        assert_eq!(rotated.corner_permutation(), direct.corner_permutation());
        assert_eq!(rotated.edge_orientation(), direct.edge_orientation());

        // After x, the logical U face is the physical F face.
        let mut rotated = CubeState::solved();
        rotated.apply_notation("x U").unwrap();
        let mut direct = CubeState::solved();
        direct.apply_notation("F").unwrap();
        assert_eq!(rotated.edge_permutation(), direct.edge_permutation());

        // After z, the logical R face is the physical U face.
        let mut rotated = CubeState::solved();
        rotated.apply_notation("z R").unwrap();
        let mut direct = CubeState::solved();
        direct.apply_notation("U").unwrap();
        assert_eq!(rotated.corner_orientation(), direct.corner_orientation());
        assert_eq!(rotated.corner_permutation(), direct.corner_permutation());
    }

    #[test]
    fn test_solved_in_any_orientation() {
        let mut cube = CubeState::solved();
        cube.apply_notation("x y2").unwrap();
        assert!(cube.is_solved());
        assert_eq!(cube.edge_stickers(Face::U, Face::F).unwrap(), [Face::U, Face::F]);
        assert_eq!(
            cube.corner_stickers(Face::D, Face::B, Face::L).unwrap(),
            [Face::D, Face::B, Face::L]
        );
    }

    #[test]
    fn test_apply_notation_is_all_or_nothing() {
        let mut cube = CubeState::solved();
        let err = cube.apply_notation("R U M U'").unwrap_err();
        assert_eq!(err, CubeError::InvalidMove("M".to_string()));
        assert!(cube.is_solved());
    }

    #[test]
    fn test_locate_reports_missing_piece() {
        let mut cube = CubeState::solved();
        cube.cp[0] = 1;
        assert!(!cube.is_reachable());
        assert!(matches!(
            cube.locate_corner(Corner::URF),
            Err(CubeError::PieceNotFound(_))
        ));
    }

    #[test]
    fn test_display() {
        let text = CubeState::solved().to_string();
        assert!(text.starts_with("cp=[0 1 2 3 4 5 6 7] co=[0 0 0 0 0 0 0 0]"));
    }
}
