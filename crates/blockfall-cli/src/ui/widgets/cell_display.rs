use blockfall_engine::PieceColor;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::style;

/// One logical grid cell, drawn two terminal columns wide.
#[derive(Debug)]
pub(crate) struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub(crate) const WIDTH: u16 = 2;
    pub(crate) const HEIGHT: u16 = 1;

    pub(crate) fn new(color: Option<PieceColor>) -> Self {
        match color {
            None => Self {
                style: style::EMPTY_DOT,
                symbol: ".",
            },
            Some(color) => Self {
                style: style::piece(color),
                symbol: "",
            },
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // A Paragraph paints the whole area, not only the symbol's cells
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
