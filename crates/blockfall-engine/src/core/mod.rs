pub use self::{grid::*, piece::*};

pub(crate) mod grid;
pub(crate) mod piece;

/// Number of columns on the board.
pub const GRID_WIDTH: usize = 10;
/// Number of rows on the board.
pub const GRID_HEIGHT: usize = 20;

/// Absolute position of a cell on the board.
///
/// Coordinates are signed so that candidate positions (e.g. a rotation that
/// would poke above the top edge) can be represented and then rejected by a
/// bounds check instead of wrapping.
///
/// - Row 0 is the top row, rows increase downward
/// - Column 0 is the leftmost column, columns increase rightward
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct CellPosition {
    pub row: i32,
    pub col: i32,
}

impl CellPosition {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Builds a position from grid indices.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub(crate) const fn from_index(row: usize, col: usize) -> Self {
        assert!(row < GRID_HEIGHT && col < GRID_WIDTH);
        Self::new(row as i32, col as i32)
    }

    /// Converts to `(row, col)` grid indices, or `None` if outside the board.
    #[must_use]
    pub fn to_index(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < GRID_HEIGHT && col < GRID_WIDTH).then_some((row, col))
    }

    #[must_use]
    pub fn is_in_bounds(self) -> bool {
        self.to_index().is_some()
    }

    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}
