pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece out of bounds or colliding when setting current piece")]
pub struct PieceCollisionError;

#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    #[display("expected at most {max} rows, got {actual}")]
    TooManyRows { max: usize, actual: usize },
    #[display("row {row}: expected {expected} cells, got {actual}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[display("row {row}, column {col}: unknown cell character {found:?}")]
    UnknownCell { row: usize, col: usize, found: char },
}

#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid piece seed: expected 32 hex characters, got {input:?}")]
pub struct PieceSeedParseError {
    input: String,
}

impl PieceSeedParseError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}
