//! Singmaster move notation.
//!
//! This module defines the vocabulary every other part of the crate speaks:
//! - `Face`: the six face letters, with the horizontal neighbour relations the solver needs.
//! - `Axis`: the three whole-cube rotation axes (`x`, `y`, `z`).
//! - `Turn`: the three modifiers (none, `'`, `2`).
//! - `Move`: a face turn or a whole-cube rotation, parsed from and printed as a token.
use crate::error::CubeError;
use std::fmt;
use std::str::FromStr;

/// One of the six faces of the cube, named after its center.
///
/// The discriminants follow the order used by the engine's move tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Up.
    U,
    /// Right.
    R,
    /// Front.
    F,
    /// Down.
    D,
    /// Left.
    L,
    /// Back.
    B,
}

impl Face {
    /// All faces in table order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// The four side faces, clockwise as seen from above starting at the front.
    pub const SIDES: [Face; 4] = [Face::F, Face::R, Face::B, Face::L];

    /// Index of this face into six-element tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts the face to its notation letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use beginner_cube::notation::Face;
    /// assert_eq!(Face::U.to_char(), 'U');
    /// assert_eq!(Face::B.to_char(), 'B');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Parses a notation letter. Lower-case letters are not faces.
    pub fn from_char(c: char) -> Option<Face> {
        match c {
            'U' => Some(Face::U),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// The face on the other side of the cube.
    pub fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::R => Face::L,
            Face::L => Face::R,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// The side face to the right of this one, looking at it from outside with U on top.
    ///
    /// `U` and `D` have no horizontal neighbour and map to themselves.
    pub fn right_of(self) -> Face {
        match self {
            Face::F => Face::R,
            Face::R => Face::B,
            Face::B => Face::L,
            Face::L => Face::F,
            Face::U | Face::D => self,
        }
    }

    /// The side face to the left of this one. Inverse of [`Face::right_of`].
    pub fn left_of(self) -> Face {
        match self {
            Face::F => Face::L,
            Face::L => Face::B,
            Face::B => Face::R,
            Face::R => Face::F,
            Face::U | Face::D => self,
        }
    }

    /// Returns `true` for the four faces around the U/D axis.
    pub fn is_side(self) -> bool {
        !matches!(self, Face::U | Face::D)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Axis of a whole-cube rotation. `x` follows R, `y` follows U, `z` follows F.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn to_char(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }

    pub fn from_char(c: char) -> Option<Axis> {
        match c {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            'z' => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Amount and direction of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// 90 degrees clockwise, written without a suffix.
    Clockwise,
    /// 180 degrees, written with a `2` suffix.
    Half,
    /// 90 degrees counter-clockwise, written with a `'` suffix.
    CounterClockwise,
}

impl Turn {
    /// Number of clockwise quarter turns this modifier amounts to (1, 2 or 3).
    pub fn quarter_turns(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// Signed quarter turns: a prime counts as -1, a double as 2.
    pub fn signed(self) -> i8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Half => 2,
            Turn::CounterClockwise => -1,
        }
    }

    /// Maps a quarter-turn count (any integer) back to a modifier. `None` when it is a multiple of four.
    pub fn from_quarter_turns(quarters: i32) -> Option<Turn> {
        match quarters.rem_euclid(4) {
            1 => Some(Turn::Clockwise),
            2 => Some(Turn::Half),
            3 => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    pub fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Half => Turn::Half,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Half => "2",
            Turn::CounterClockwise => "'",
        }
    }

    fn from_suffix(s: &str) -> Option<Turn> {
        match s {
            "" => Some(Turn::Clockwise),
            "2" => Some(Turn::Half),
            "'" => Some(Turn::CounterClockwise),
            _ => None,
        }
    }
}

/// A single move token.
///
/// Face turns act on the face the caller currently calls `U`, `R`, ... .
/// Rotations are interpreted differently by the two cube models: the
/// permutation engine only re-labels which physical face is called what,
/// while the geometric model physically turns all 27 cubies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Face(Face, Turn),
    Rotate(Axis, Turn),
}

impl Move {
    /// Quarter turn clockwise of `face`.
    pub fn cw(face: Face) -> Move {
        Move::Face(face, Turn::Clockwise)
    }

    /// Quarter turn counter-clockwise of `face`.
    pub fn ccw(face: Face) -> Move {
        Move::Face(face, Turn::CounterClockwise)
    }

    /// Half turn of `face`.
    pub fn half(face: Face) -> Move {
        Move::Face(face, Turn::Half)
    }

    pub fn turn(&self) -> Turn {
        match *self {
            Move::Face(_, turn) | Move::Rotate(_, turn) => turn,
        }
    }

    /// The same face or axis with a different modifier.
    pub fn with_turn(&self, turn: Turn) -> Move {
        match *self {
            Move::Face(face, _) => Move::Face(face, turn),
            Move::Rotate(axis, _) => Move::Rotate(axis, turn),
        }
    }

    /// The move that undoes this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use beginner_cube::notation::Move;
    /// let m: Move = "R'".parse().unwrap();
    /// assert_eq!(m.inverse().to_string(), "R");
    /// ```
    pub fn inverse(&self) -> Move {
        self.with_turn(self.turn().inverse())
    }

    /// Returns `true` if both moves turn the same face, or both rotate about the same axis.
    ///
    /// Such moves commute and their quarter turns add up mod 4.
    pub fn same_layer(&self, other: &Move) -> bool {
        match (self, other) {
            (Move::Face(a, _), Move::Face(b, _)) => a == b,
            (Move::Rotate(a, _), Move::Rotate(b, _)) => a == b,
            _ => false,
        }
    }

    fn letter(&self) -> char {
        match *self {
            Move::Face(face, _) => face.to_char(),
            Move::Rotate(axis, _) => axis.to_char(),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.turn().suffix())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    /// Parses one token.
    ///
    /// A token whose first character is an ASCII letter and whose remainder
    /// is a valid suffix is well-formed; if that letter is not a face or an
    /// axis the token is an `InvalidMove`. Anything else is `InvalidNotation`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let letter = chars
            .next()
            .ok_or_else(|| CubeError::InvalidNotation(token.to_string()))?;
        let turn = Turn::from_suffix(chars.as_str())
            .ok_or_else(|| CubeError::InvalidNotation(token.to_string()))?;

        if let Some(face) = Face::from_char(letter) {
            Ok(Move::Face(face, turn))
        } else if let Some(axis) = Axis::from_char(letter) {
            Ok(Move::Rotate(axis, turn))
        } else if letter.is_ascii_alphabetic() {
            Err(CubeError::InvalidMove(token.to_string()))
        } else {
            Err(CubeError::InvalidNotation(token.to_string()))
        }
    }
}

/// Parses a whitespace-separated move sequence such as `"R U R' U'"`.
///
/// Fails on the first bad token; nothing is returned for the tokens before it.
///
/// # Examples
///
/// ```
/// use beginner_cube::notation::{parse_moves, Face, Move};
/// let moves = parse_moves("R U2 y'").unwrap();
/// assert_eq!(moves.len(), 3);
/// assert_eq!(moves[0], Move::cw(Face::R));
/// assert!(parse_moves("R Q").is_err());
/// ```
pub fn parse_moves(text: &str) -> Result<Vec<Move>, CubeError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Parses a list of individual tokens, as handed over by a UI layer.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Move>, CubeError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}

/// Returns `true` if `token` is a face turn or a whole-cube rotation.
pub fn is_valid_move(token: &str) -> bool {
    token.parse::<Move>().is_ok()
}

/// Formats a move list as space-separated tokens.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_face_moves() {
        assert_eq!("U".parse::<Move>().unwrap(), Move::Face(Face::U, Turn::Clockwise));
        assert_eq!("D'".parse::<Move>().unwrap(), Move::Face(Face::D, Turn::CounterClockwise));
        assert_eq!("B2".parse::<Move>().unwrap(), Move::Face(Face::B, Turn::Half));
    }

    #[test]
    fn test_parse_rotations() {
        assert_eq!("x".parse::<Move>().unwrap(), Move::Rotate(Axis::X, Turn::Clockwise));
        assert_eq!("y'".parse::<Move>().unwrap(), Move::Rotate(Axis::Y, Turn::CounterClockwise));
        assert_eq!("z2".parse::<Move>().unwrap(), Move::Rotate(Axis::Z, Turn::Half));
    }

    #[test]
    fn test_malformed_tokens_are_invalid_notation() {
        for token in ["", "U3", "R''", "F2'", "'", "2", "UU", "U 2", "é"] {
            assert_eq!(
                token.parse::<Move>(),
                Err(CubeError::InvalidNotation(token.to_string())),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_unknown_letters_are_invalid_moves() {
        for token in ["M", "E2", "S'", "r", "X", "u'"] {
            assert_eq!(
                token.parse::<Move>(),
                Err(CubeError::InvalidMove(token.to_string())),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_display_round_trips_every_token() {
        for letter in ["U", "R", "F", "D", "L", "B", "x", "y", "z"] {
            for suffix in ["", "'", "2"] {
                let token = format!("{}{}", letter, suffix);
                let parsed: Move = token.parse().unwrap();
                assert_eq!(parsed.to_string(), token);
            }
        }
    }

    #[test]
    fn test_inverse_and_same_layer() {
        let r = Move::cw(Face::R);
        assert_eq!(r.inverse(), Move::ccw(Face::R));
        assert_eq!(Move::half(Face::R).inverse(), Move::half(Face::R));
        assert!(r.same_layer(&Move::half(Face::R)));
        assert!(!r.same_layer(&Move::cw(Face::L)));
        assert!(!Move::Rotate(Axis::X, Turn::Clockwise).same_layer(&r));
    }

    #[test]
    fn test_turn_arithmetic() {
        assert_eq!(Turn::from_quarter_turns(-1), Some(Turn::CounterClockwise));
        assert_eq!(Turn::from_quarter_turns(5), Some(Turn::Clockwise));
        assert_eq!(Turn::from_quarter_turns(4), None);
        assert_eq!(Turn::Half.signed() + Turn::Half.signed(), 4);
    }

    #[test]
    fn test_neighbours() {
        for face in Face::SIDES {
            assert_eq!(face.right_of().left_of(), face);
            assert_ne!(face.right_of(), face.opposite());
        }
        assert_eq!(Face::F.right_of(), Face::R);
        assert_eq!(Face::B.right_of(), Face::L);
    }

    #[test]
    fn test_parse_and_format_sequences() {
        let moves = parse_moves("  R U\tR' U'  ").unwrap();
        assert_eq!(format_moves(&moves), "R U R' U'");
        assert_eq!(parse_tokens(&["F", "F"]).unwrap(), vec![Move::cw(Face::F); 2]);
        assert_eq!(
            parse_tokens(&["F", "Q"]),
            Err(CubeError::InvalidMove("Q".to_string()))
        );
        assert!(parse_moves("").unwrap().is_empty());
        assert!(is_valid_move("y2"));
        assert!(!is_valid_move("y3"));
    }
}
