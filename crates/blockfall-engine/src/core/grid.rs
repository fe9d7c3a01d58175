use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;

use crate::GridParseError;

use super::{
    CellPosition, GRID_HEIGHT, GRID_WIDTH,
    piece::{Piece, PieceColor},
};

/// A single cell of the grid.
///
/// Fill state and color are one value, so a filled cell always carries
/// exactly one color and an empty cell carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(PieceColor),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn color(self) -> Option<PieceColor> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(color),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridRow {
    cells: [Cell; GRID_WIDTH],
}

impl GridRow {
    const EMPTY: Self = Self {
        cells: [Cell::Empty; GRID_WIDTH],
    };

    /// Every cell individually filled.
    fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    fn is_occupied(&self) -> bool {
        self.cells.iter().any(|c| !c.is_empty())
    }
}

/// The 10×20 grid of locked cells.
///
/// Row 0 is the top row. The grid holds only locked blocks; the falling
/// piece is owned separately by the [`Board`](crate::Board).
///
/// Grids can be written as text, one line per row, `.` for an empty cell
/// and a [`PieceColor`] character for a filled one. Rows given to
/// [`FromStr`] are aligned to the bottom of the grid:
///
/// ```
/// use blockfall_engine::{Cell, CellPosition, Grid, PieceColor};
///
/// let grid: Grid = "
///     ....r.....
///     rrrrrrrrr.
/// ".parse().unwrap();
///
/// assert_eq!(grid.cell(CellPosition::new(18, 4)), Some(Cell::Filled(PieceColor::Red)));
/// assert!(grid.is_vacant(CellPosition::new(19, 9)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [GridRow; GRID_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const WIDTH: usize = GRID_WIDTH;
    pub const HEIGHT: usize = GRID_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [GridRow::EMPTY; GRID_HEIGHT],
    };

    /// Returns the cell at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn cell(&self, pos: CellPosition) -> Option<Cell> {
        let (row, col) = pos.to_index()?;
        Some(self.rows[row].cells[col])
    }

    /// Whether `pos` is inside the grid and empty.
    #[must_use]
    pub fn is_vacant(&self, pos: CellPosition) -> bool {
        self.cell(pos).is_some_and(Cell::is_empty)
    }

    /// Whether `pos` is inside the grid and filled.
    #[must_use]
    pub fn is_filled(&self, pos: CellPosition) -> bool {
        self.cell(pos).is_some_and(|c| !c.is_empty())
    }

    /// Whether any cell of `row` is filled.
    #[must_use]
    pub fn is_row_occupied(&self, row: usize) -> bool {
        self.rows.get(row).is_some_and(GridRow::is_occupied)
    }

    /// Sets a single cell. Positions outside the grid are ignored.
    pub fn set_cell(&mut self, pos: CellPosition, cell: Cell) {
        if let Some((row, col)) = pos.to_index() {
            self.rows[row].cells[col] = cell;
        }
    }

    /// Writes the piece's color into every cell it occupies.
    pub fn fill_piece(&mut self, piece: &Piece) {
        for pos in piece.occupied_cells() {
            self.set_cell(pos, Cell::Filled(piece.color()));
        }
    }

    /// Indices of every row whose cells are all filled, top to bottom.
    #[must_use]
    pub fn full_rows(&self) -> ArrayVec<usize, GRID_HEIGHT> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(y, row)| row.is_full().then_some(y))
            .collect()
    }

    /// Removes all full rows and backfills empty rows at the top.
    ///
    /// Remaining rows keep their relative order.
    ///
    /// # Returns
    ///
    /// The number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut count = 0;
        for y in (0..GRID_HEIGHT).rev() {
            if self.rows[y].is_full() {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y];
            }
        }
        self.rows[..count].fill(GridRow::EMPTY);
        count
    }

    /// Iterates over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_WIDTH]> {
        self.rows.iter().map(|row| &row.cells)
    }

    /// Iterates over every filled cell with its color, in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (CellPosition, PieceColor)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.cells
                .iter()
                .enumerate()
                .filter_map(move |(x, cell)| Some((CellPosition::from_index(y, x), cell.color()?)))
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row.cells {
                let c = cell.color().map_or('.', PieceColor::as_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() > GRID_HEIGHT {
            return Err(GridParseError::TooManyRows {
                max: GRID_HEIGHT,
                actual: lines.len(),
            });
        }

        let mut grid = Self::EMPTY;
        let top = GRID_HEIGHT - lines.len();
        for (i, line) in lines.iter().enumerate() {
            let row = top + i;
            let width = line.chars().count();
            if width != GRID_WIDTH {
                return Err(GridParseError::RowWidth {
                    row,
                    expected: GRID_WIDTH,
                    actual: width,
                });
            }
            for (col, c) in line.chars().enumerate() {
                let cell = match c {
                    '.' => Cell::Empty,
                    _ => Cell::Filled(PieceColor::from_char(c).ok_or(
                        GridParseError::UnknownCell {
                            row,
                            col,
                            found: c,
                        },
                    )?),
                };
                grid.rows[row].cells[col] = cell;
            }
        }
        Ok(grid)
    }
}
