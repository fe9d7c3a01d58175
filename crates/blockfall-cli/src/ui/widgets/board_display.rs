use std::iter;

use blockfall_engine::{CellPosition, GRID_HEIGHT, GRID_WIDTH, PieceColor, RenderData};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect, Size},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::CellDisplay;

type ColorGrid = [[Option<PieceColor>; GRID_WIDTH]; GRID_HEIGHT];

/// The 10×20 grid with locked cells and the falling piece.
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    frame: &'a RenderData,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(frame: &'a RenderData) -> Self {
        Self { frame, block: None }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    /// Outer size, block included.
    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn size(&self) -> Size {
        let grid = Size::new(
            GRID_WIDTH as u16 * CellDisplay::WIDTH,
            GRID_HEIGHT as u16 * CellDisplay::HEIGHT,
        );
        super::framed_size(self.block.as_ref(), grid)
    }

    fn colors(&self) -> ColorGrid {
        let mut colors: ColorGrid = [[None; GRID_WIDTH]; GRID_HEIGHT];
        let mut paint = |pos: CellPosition, color| {
            if let Some((row, col)) = pos.to_index() {
                colors[row][col] = Some(color);
            }
        };
        for cell in &self.frame.filled {
            paint(cell.position, cell.color);
        }
        if let Some(piece) = &self.frame.piece {
            for pos in piece.cells {
                paint(pos, piece.color);
            }
        }
        colors
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let col_constraints = (0..GRID_WIDTH).map(|_| Constraint::Length(CellDisplay::WIDTH));
        let row_constraints = (0..GRID_HEIGHT).map(|_| Constraint::Length(CellDisplay::HEIGHT));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let screen_cells = area
            .layout::<GRID_HEIGHT>(&vertical)
            .into_iter()
            .map(|row| row.layout::<GRID_WIDTH>(&horizontal));

        for (screen_row, colors) in iter::zip(screen_cells, self.colors()) {
            for (screen_cell, color) in iter::zip(screen_row, colors) {
                CellDisplay::new(color).render(screen_cell, buf);
            }
        }
    }
}
