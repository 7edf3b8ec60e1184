//! Geometric cubie model.
//!
//! The render-facing view of the cube: 27 cubies on the integer lattice
//! `{-1, 0, 1}^3` (x right, y up, z toward the viewer), each carrying up to
//! three stickers keyed by the direction they face. A presentation layer
//! animates [`TurnGeometry`] and then commits the move with
//! [`GeometricCube::apply_move`].
use crate::engine::{Color, CubeState};
use crate::notation::{Axis, Face, Move};
use std::f64::consts::FRAC_PI_2;
use std::fmt;

/// Integer lattice coordinate `[x, y, z]`.
pub type Position = [i8; 3];

/// Outward unit normal of a face.
pub fn normal(face: Face) -> Position {
    match face {
        Face::R => [1, 0, 0],
        Face::L => [-1, 0, 0],
        Face::U => [0, 1, 0],
        Face::D => [0, -1, 0],
        Face::F => [0, 0, 1],
        Face::B => [0, 0, -1],
    }
}

/// The face whose normal is `v`, if `v` is a unit axis vector.
pub fn face_of_normal(v: Position) -> Option<Face> {
    Face::ALL.into_iter().find(|&f| normal(f) == v)
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
        Axis::Z => 2,
    }
}

/// Quarter rotation about `axis`, counter-clockwise looking down the positive
/// axis when `sign > 0` and clockwise otherwise.
fn rotate_quarter(v: Position, axis: Axis, sign: i8) -> Position {
    let [x, y, z] = v;
    match (axis, sign > 0) {
        (Axis::X, true) => [x, -z, y],
        (Axis::X, false) => [x, z, -y],
        (Axis::Y, true) => [z, y, -x],
        (Axis::Y, false) => [-z, y, x],
        (Axis::Z, true) => [-y, x, z],
        (Axis::Z, false) => [y, -x, z],
    }
}

/// How a move looks in space: what turns, about which axis, by how much.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnGeometry {
    pub axis: Axis,
    /// Coordinate of the turning layer along `axis`; `None` turns the whole cube.
    pub layer: Option<i8>,
    /// Signed quarter turns; positive is counter-clockwise about the positive axis.
    pub quarter_turns: i8,
}

impl TurnGeometry {
    /// Geometry of a single move.
    ///
    /// A clockwise turn of a face is clockwise when looking at that face, so
    /// `R`, `U` and `F` are negative about their axes while `L`, `D` and `B`
    /// are positive. `x`, `y` and `z` turn the whole cube like `R`, `U` and `F`.
    ///
    /// # Examples
    ///
    /// ```
    /// use beginner_cube::geometry::TurnGeometry;
    /// use beginner_cube::notation::{Axis, Move};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let r: Move = "R".parse().unwrap();
    /// let g = TurnGeometry::of(r);
    /// assert_eq!(g.axis, Axis::X);
    /// assert_eq!(g.layer, Some(1));
    /// assert_eq!(g.angle(), -FRAC_PI_2);
    /// ```
    pub fn of(mv: Move) -> TurnGeometry {
        let (axis, sign, layer) = match mv {
            Move::Face(Face::R, _) => (Axis::X, -1, Some(1)),
            Move::Face(Face::L, _) => (Axis::X, 1, Some(-1)),
            Move::Face(Face::U, _) => (Axis::Y, -1, Some(1)),
            Move::Face(Face::D, _) => (Axis::Y, 1, Some(-1)),
            Move::Face(Face::F, _) => (Axis::Z, -1, Some(1)),
            Move::Face(Face::B, _) => (Axis::Z, 1, Some(-1)),
            Move::Rotate(axis, _) => (axis, -1, None),
        };
        TurnGeometry {
            axis,
            layer,
            quarter_turns: sign * mv.turn().signed(),
        }
    }

    /// Rotation angle in radians.
    pub fn angle(&self) -> f64 {
        self.quarter_turns as f64 * FRAC_PI_2
    }

    /// Returns `true` if a cubie at `position` turns with this move.
    pub fn moves_position(&self, position: Position) -> bool {
        self.layer
            .map_or(true, |layer| position[axis_index(self.axis)] == layer)
    }
}

/// One of the 27 small cubes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cubie {
    id: usize,
    position: Position,
    stickers: [Option<Color>; 6],
}

impl Cubie {
    /// Creation index in the solved layout, x-major: `(x+1)*9 + (y+1)*3 + (z+1)`.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Colour of the sticker facing `direction`, if there is one.
    pub fn sticker(&self, direction: Face) -> Option<Color> {
        self.stickers[direction.index()]
    }

    /// All stickers as `(direction, colour)` pairs.
    pub fn stickers(&self) -> impl Iterator<Item = (Face, Color)> + '_ {
        Face::ALL
            .into_iter()
            .filter_map(move |f| self.sticker(f).map(|c| (f, c)))
    }

    fn turn(&mut self, axis: Axis, sign: i8) {
        self.position = rotate_quarter(self.position, axis, sign);
        let mut stickers = [None; 6];
        for face in Face::ALL {
            if let Some(colour) = self.stickers[face.index()] {
                if let Some(to) = face_of_normal(rotate_quarter(normal(face), axis, sign)) {
                    stickers[to.index()] = Some(colour);
                }
            }
        }
        self.stickers = stickers;
    }
}

/// A single visible sticker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Facelet {
    pub position: Position,
    pub direction: Face,
    pub color: Color,
}

fn cubie_id(position: Position) -> usize {
    let [x, y, z] = position;
    ((x + 1) * 9 + (y + 1) * 3 + (z + 1)) as usize
}

fn lattice() -> impl Iterator<Item = Position> {
    (-1..=1).flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| [x, y, z])))
}

/// Faces whose outer layer contains `position`.
fn outer_faces(position: Position) -> Vec<Face> {
    Face::ALL
        .into_iter()
        .filter(|&f| {
            let n = normal(f);
            (0..3).any(|i| n[i] != 0 && position[i] == n[i])
        })
        .collect()
}

/// The 27-cubie model. `cubies[i]` always has id `i`.
///
/// # Examples
///
/// ```
/// use beginner_cube::geometry::GeometricCube;
/// use beginner_cube::notation::parse_moves;
///
/// let mut cube = GeometricCube::solved();
/// cube.apply_moves(&parse_moves("R U R' U'").unwrap());
/// assert!(!cube.is_solved());
/// cube.apply_moves(&parse_moves("U R U' R'").unwrap());
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeometricCube {
    cubies: Vec<Cubie>,
}

impl GeometricCube {
    /// The solved layout: every outward face carries the colour of its center.
    pub fn solved() -> Self {
        let cubies = lattice()
            .map(|position| {
                let mut stickers = [None; 6];
                for face in outer_faces(position) {
                    stickers[face.index()] = Some(Color::of_face(face));
                }
                Cubie {
                    id: cubie_id(position),
                    position,
                    stickers,
                }
            })
            .collect();
        GeometricCube { cubies }
    }

    /// Builds the model a cube in `state` would show, without replaying moves.
    ///
    /// Positions are read in the caller's frame: the center at direction `d`
    /// shows the colour of the physical face currently called `d`. Each
    /// cubie's id is recovered from its colours, which name its home position.
    pub fn project(state: &CubeState) -> Self {
        let frame = state.frame();
        let colour_of = |logical: Face| Color::of_face(frame.physical(logical));
        let mut cubies: Vec<Cubie> = lattice()
            .map(|position| {
                let faces = outer_faces(position);
                let shown: Vec<Face> = match faces.as_slice() {
                    &[a, b] => state.edge_stickers(a, b).map(|s| s.to_vec()).unwrap_or_default(),
                    &[a, b, c] => state
                        .corner_stickers(a, b, c)
                        .map(|s| s.to_vec())
                        .unwrap_or_default(),
                    _ => faces.clone(),
                };
                let mut stickers = [None; 6];
                let mut home = [0i8; 3];
                for (&direction, &logical) in faces.iter().zip(shown.iter()) {
                    let colour = colour_of(logical);
                    stickers[direction.index()] = Some(colour);
                    let n = normal(colour.home_face());
                    for i in 0..3 {
                        home[i] += n[i];
                    }
                }
                Cubie {
                    id: cubie_id(home),
                    position,
                    stickers,
                }
            })
            .collect();
        cubies.sort_by_key(|c| c.id);
        GeometricCube { cubies }
    }

    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// The cubie currently at `position`.
    pub fn cubie_at(&self, position: Position) -> Option<&Cubie> {
        self.cubies.iter().find(|c| c.position == position)
    }

    /// Turns the layer (or the whole cube, for `x`/`y`/`z`) one quarter at a time.
    pub fn apply_move(&mut self, mv: Move) {
        let geometry = TurnGeometry::of(mv);
        let sign = geometry.quarter_turns.signum();
        for _ in 0..geometry.quarter_turns.abs() {
            for cubie in self.cubies.iter_mut() {
                if geometry.moves_position(cubie.position) {
                    cubie.turn(geometry.axis, sign);
                }
            }
        }
    }

    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply_move(mv);
        }
    }

    /// Ids of the cubies `mv` would turn, in id order.
    pub fn affected_cubies(&self, mv: Move) -> Vec<usize> {
        let geometry = TurnGeometry::of(mv);
        self.cubies
            .iter()
            .filter(|c| geometry.moves_position(c.position))
            .map(|c| c.id)
            .collect()
    }

    /// Every visible sticker, sorted by position then direction.
    pub fn facelets(&self) -> Vec<Facelet> {
        let mut facelets: Vec<Facelet> = self
            .cubies
            .iter()
            .flat_map(|c| {
                c.stickers().map(move |(direction, color)| Facelet {
                    position: c.position,
                    direction,
                    color,
                })
            })
            .collect();
        facelets.sort();
        facelets
    }

    /// Colour of the sticker at `position` facing `direction`.
    pub fn sticker(&self, position: Position, direction: Face) -> Option<Color> {
        self.cubie_at(position).and_then(|c| c.sticker(direction))
    }

    /// Returns `true` when each face shows a single colour, in any orientation.
    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let mut colours = self
                .facelets()
                .into_iter()
                .filter(|f| f.direction == face)
                .map(|f| f.color);
            match colours.next() {
                Some(first) => colours.all(|c| c == first),
                None => false,
            }
        })
    }

    /// The 3x3 grid of `face` as seen from outside, with U on top for side
    /// faces, B on top for U, and F on top for D.
    fn face_grid(&self, face: Face) -> [[char; 3]; 3] {
        let mut grid = [['?'; 3]; 3];
        for (r, row) in grid.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let (r, c) = (r as i8, c as i8);
                let position = match face {
                    Face::U => [c - 1, 1, r - 1],
                    Face::D => [c - 1, -1, 1 - r],
                    Face::F => [c - 1, 1 - r, 1],
                    Face::B => [1 - c, 1 - r, -1],
                    Face::R => [1, 1 - r, 1 - c],
                    Face::L => [-1, 1 - r, c - 1],
                };
                if let Some(colour) = self.sticker(position, face) {
                    *cell = colour.to_char();
                }
            }
        }
        grid
    }
}

impl Default for GeometricCube {
    fn default() -> Self {
        GeometricCube::solved()
    }
}

impl fmt::Display for GeometricCube {
    /// Unfolded net: U above, then L F R B in a row, then D below.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |grid: &[[char; 3]; 3], r: usize| grid[r].iter().collect::<String>();
        let up = self.face_grid(Face::U);
        let down = self.face_grid(Face::D);
        let belt = [Face::L, Face::F, Face::R, Face::B].map(|face| self.face_grid(face));
        for r in 0..3 {
            writeln!(f, "    {}", row(&up, r))?;
        }
        for r in 0..3 {
            let line: Vec<String> = belt.iter().map(|g| row(g, r)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        for r in 0..3 {
            writeln!(f, "    {}", row(&down, r))?;
        }
        Ok(())
    }
}
