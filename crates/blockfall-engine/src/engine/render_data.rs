use serde::{Deserialize, Serialize};

use crate::{CellPosition, PieceColor};

/// Snapshot of everything a renderer needs to draw one frame.
///
/// Produced by [`Board::render_data`](crate::Board::render_data). Mapping
/// the logical grid onto pixels or terminal cells is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderData {
    /// The falling piece, absent before the first game starts.
    pub piece: Option<PieceCells>,
    /// Every locked cell, in row-major order.
    pub filled: Vec<FilledCell>,
    pub score: usize,
    pub is_over: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PieceCells {
    pub cells: [CellPosition; 4],
    pub color: PieceColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilledCell {
    pub position: CellPosition,
    pub color: PieceColor,
}
