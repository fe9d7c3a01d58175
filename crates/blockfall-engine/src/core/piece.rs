use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::CellPosition;

/// Spawn position of every new piece's pivot (top row, horizontal center).
pub const PIECE_SPAWN_POSITION: CellPosition = CellPosition::new(0, 4);

/// A falling tetromino: pivot position, shape offsets, identity and color.
///
/// The piece knows its geometry only. It never checks bounds or collisions;
/// the [`Board`](crate::Board) validates every move before applying it.
///
/// # Example
///
/// ```
/// use blockfall_engine::{CellPosition, Piece, PieceColor, PieceKind};
///
/// let mut piece = Piece::new(PieceKind::T, PieceColor::Purple);
/// assert_eq!(piece.pivot(), CellPosition::new(0, 4));
///
/// piece.translate(1, 0);
/// let candidate = piece.rotated_shape_clockwise();
/// piece.set_shape(candidate);
/// assert_eq!(piece.occupied_cells().len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pivot: CellPosition,
    kind: PieceKind,
    shape: Shape,
    color: PieceColor,
}

impl Piece {
    /// Creates a piece of the given kind and color at the spawn position.
    #[must_use]
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self {
            pivot: PIECE_SPAWN_POSITION,
            kind,
            shape: kind.spawn_shape(),
            color,
        }
    }

    /// Creates a piece with a random shape and an independently random color.
    #[must_use]
    pub fn create<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let kind = rng.random();
        let color = rng.random();
        Self::new(kind, color)
    }

    /// Returns the same piece with its pivot moved to `pivot`.
    #[must_use]
    pub fn with_pivot(self, pivot: CellPosition) -> Self {
        Self { pivot, ..self }
    }

    #[must_use]
    pub fn pivot(&self) -> CellPosition {
        self.pivot
    }

    #[must_use]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    /// Absolute cells currently occupied by the piece.
    #[must_use]
    pub fn occupied_cells(&self) -> [CellPosition; 4] {
        self.cells_with_shape(self.shape)
    }

    /// Absolute cells `shape` would occupy at the current pivot.
    #[must_use]
    pub fn cells_with_shape(&self, shape: Shape) -> [CellPosition; 4] {
        shape.0.map(|o| self.pivot.offset(o.d_row, o.d_col))
    }

    /// Shifts the pivot. The caller is responsible for checking legality.
    pub fn translate(&mut self, d_row: i32, d_col: i32) {
        self.pivot = self.pivot.offset(d_row, d_col);
    }

    /// Candidate shape rotated 90° clockwise about the pivot.
    ///
    /// Does not modify the piece.
    #[must_use]
    pub fn rotated_shape_clockwise(&self) -> Shape {
        self.shape.rotated_clockwise()
    }

    /// Commits a shape, typically one returned by [`Self::rotated_shape_clockwise`].
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }
}

/// Offset of one cell relative to a piece's pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellOffset {
    pub d_row: i32,
    pub d_col: i32,
}

impl CellOffset {
    #[must_use]
    pub const fn new(d_row: i32, d_col: i32) -> Self {
        Self { d_row, d_col }
    }
}

/// The four cell offsets that make up a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape([CellOffset; 4]);

impl Shape {
    #[must_use]
    pub const fn new(offsets: [CellOffset; 4]) -> Self {
        Self(offsets)
    }

    #[must_use]
    pub const fn offsets(&self) -> &[CellOffset; 4] {
        &self.0
    }

    /// Each offset `(dr, dc)` becomes `(-dc, dr)`.
    #[must_use]
    pub fn rotated_clockwise(self) -> Self {
        Self(self.0.map(|o| CellOffset::new(-o.d_col, o.d_row)))
    }

    /// Whether both shapes cover the same set of offsets, regardless of order.
    #[must_use]
    pub fn same_cells(&self, other: &Self) -> bool {
        self.0.iter().all(|o| other.0.contains(o))
    }
}

/// Identity of a piece's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// Square.
    O = 0,
    /// Bar.
    I = 1,
    /// T-piece.
    T = 2,
    /// J-piece (left L).
    J = 3,
    /// L-piece (right L).
    L = 4,
    /// S-piece.
    S = 5,
    /// Z-piece.
    Z = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Offsets of this kind at spawn.
    #[must_use]
    pub const fn spawn_shape(self) -> Shape {
        PIECE_SHAPES[self as usize]
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::O => 'O',
            PieceKind::I => 'I',
            PieceKind::T => 'T',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
        }
    }
}

// Every spawn shape contains (0, 0) so the pivot is an occupied cell, and no
// offset points upward so a piece spawned on row 0 is fully inside the board.
const PIECE_SHAPES: [Shape; PieceKind::LEN] = {
    const fn s(offsets: [(i32, i32); 4]) -> Shape {
        let mut cells = [CellOffset::new(0, 0); 4];
        let mut i = 0;
        while i < 4 {
            cells[i] = CellOffset::new(offsets[i].0, offsets[i].1);
            i += 1;
        }
        Shape::new(cells)
    }

    [
        // O-piece
        s([(0, 0), (0, -1), (1, -1), (1, 0)]),
        // I-piece
        s([(0, 0), (0, -2), (0, -1), (0, 1)]),
        // T-piece
        s([(0, 0), (0, -1), (0, 1), (1, 0)]),
        // J-piece
        s([(0, 0), (0, -1), (0, 1), (1, 1)]),
        // L-piece
        s([(0, 0), (0, -1), (0, 1), (1, -1)]),
        // S-piece
        s([(0, 0), (0, 1), (1, -1), (1, 0)]),
        // Z-piece
        s([(0, 0), (0, -1), (1, 0), (1, 1)]),
    ]
};

/// Display color of a piece, chosen independently of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceColor {
    Cyan = 0,
    Blue = 1,
    Green = 2,
    Purple = 3,
    Red = 4,
    Yellow = 5,
    Orange = 6,
}

impl Distribution<PieceColor> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceColor {
        PieceColor::ALL[rng.random_range(0..PieceColor::LEN)]
    }
}

impl PieceColor {
    /// Number of piece colors (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        PieceColor::Cyan,
        PieceColor::Blue,
        PieceColor::Green,
        PieceColor::Purple,
        PieceColor::Red,
        PieceColor::Yellow,
        PieceColor::Orange,
    ];

    /// RGB triple of this color.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            PieceColor::Cyan => (0, 238, 238),
            PieceColor::Blue => (23, 1, 232),
            PieceColor::Green => (0, 238, 33),
            PieceColor::Purple => (153, 0, 239),
            PieceColor::Red => (238, 0, 20),
            PieceColor::Yellow => (237, 238, 42),
            PieceColor::Orange => (255, 215, 0),
        }
    }

    /// Single character used in textual grid layouts.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceColor::Cyan => 'c',
            PieceColor::Blue => 'b',
            PieceColor::Green => 'g',
            PieceColor::Purple => 'p',
            PieceColor::Red => 'r',
            PieceColor::Yellow => 'y',
            PieceColor::Orange => 'o',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'c' => Some(PieceColor::Cyan),
            'b' => Some(PieceColor::Blue),
            'g' => Some(PieceColor::Green),
            'p' => Some(PieceColor::Purple),
            'r' => Some(PieceColor::Red),
            'y' => Some(PieceColor::Yellow),
            'o' => Some(PieceColor::Orange),
            _ => None,
        }
    }
}
