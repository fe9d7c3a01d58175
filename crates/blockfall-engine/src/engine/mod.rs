//! Game rules on top of the core data structures.
//!
//! - [`Board`] - The state machine: grid, falling piece, score, game state
//! - [`BoardStats`] - Score and counters of one game
//! - [`Command`] - Discrete driver input mapped onto board operations
//! - [`PieceGenerator`] - Seeded random piece source
//! - [`RenderData`] - Frame snapshot for renderers
//!
//! # Game Flow
//!
//! 1. Create a [`Board`]; it starts in [`BoardState::Ready`]
//! 2. [`Board::reset`] starts a game with a fresh piece at the spawn point
//! 3. The driver forwards moves and rotations, and calls [`Board::tick`] on a timer
//! 4. A landed piece locks, the next piece spawns, full rows are swept
//! 5. Once a locked block reaches row 0 the board is over until the next reset
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Board, Command};
//!
//! let mut board = Board::new();
//! board.apply(Command::StartOrRestart);
//!
//! while !board.is_over() {
//!     board.apply(Command::MoveLeft);
//!     board.tick();
//! }
//!
//! println!("final score: {}", board.score());
//! ```

pub use self::{board::*, board_stats::*, command::*, piece_generator::*, render_data::*};

mod board;
mod board_stats;
mod command;
mod piece_generator;
mod render_data;
