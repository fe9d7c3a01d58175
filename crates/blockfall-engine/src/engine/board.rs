use tracing::{debug, info, trace};

use crate::{
    Command, PieceCollisionError,
    core::{GRID_HEIGHT, Grid, Piece},
};

use super::{
    BoardStats,
    piece_generator::{PieceGenerator, PieceSeed},
    render_data::{FilledCell, PieceCells, RenderData},
};

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const BOTTOM_ROW: i32 = GRID_HEIGHT as i32 - 1;

/// Lifecycle of a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum BoardState {
    /// Created but never started.
    Ready,
    /// Accepting movement and tick operations. The only state with a falling piece.
    Playing,
    /// Locked blocks reached the top. Terminal until [`Board::reset`].
    GameOver,
}

/// What a single [`Board::tick`] did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The falling piece moved one row down.
    pub moved: bool,
    /// The falling piece landed, was written into the grid and replaced.
    pub locked: bool,
    /// Rows removed by the sweep.
    pub cleared_rows: usize,
    /// The game ended during this tick.
    pub game_over: bool,
}

/// The 10×20 board: locked cells, the falling piece, score and game state.
///
/// Every operation validates legality in full before mutating anything, so
/// an illegal move or rotation is a silent no-op. While playing, the falling
/// piece is always inside the grid and never overlaps a filled cell.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, PieceSeed};
///
/// let seed: PieceSeed = "00000000000000000000000000000001".parse().unwrap();
/// let mut board = Board::with_seed(seed);
/// assert!(board.is_over());
///
/// board.reset();
/// board.move_left();
/// board.rotate_clockwise();
/// let outcome = board.tick();
/// assert!(outcome.moved);
///
/// let frame = board.render_data();
/// assert_eq!(frame.score, 0);
/// assert!(!frame.is_over);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    current_piece: Option<Piece>,
    state: BoardState,
    stats: BoardStats,
    generator: PieceGenerator,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an unstarted board with a random piece seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::new())
    }

    /// Creates an unstarted board whose pieces come from `seed`.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_generator(PieceGenerator::with_seed(seed))
    }

    fn with_generator(generator: PieceGenerator) -> Self {
        Self {
            grid: Grid::EMPTY,
            current_piece: None,
            state: BoardState::Ready,
            stats: BoardStats::new(),
            generator,
        }
    }

    /// Creates a board already playing on a prepared grid.
    ///
    /// The first piece is drawn from `seed`. If it cannot be placed the board
    /// starts in [`BoardState::GameOver`].
    #[must_use]
    pub fn with_grid(grid: Grid, seed: PieceSeed) -> Self {
        let mut board = Self::with_seed(seed);
        board.grid = grid;
        board.state = BoardState::Playing;
        board.spawn_piece();
        if !board.current_piece_fits() {
            board.end_game();
        }
        board
    }

    /// Locked cells. The falling piece is not part of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The falling piece, present only while playing.
    #[must_use]
    pub fn current_piece(&self) -> Option<&Piece> {
        self.current_piece.as_ref()
    }

    /// Where the board is in its lifecycle.
    #[must_use]
    pub fn state(&self) -> BoardState {
        self.state
    }

    /// True unless a game is in progress (before the first start, or after game over).
    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.state.is_playing()
    }

    /// Current score; kept after game over until the next reset.
    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    /// Counters of the current (or last finished) game.
    #[must_use]
    pub fn stats(&self) -> &BoardStats {
        &self.stats
    }

    /// Seed of the piece generator.
    #[must_use]
    pub fn seed(&self) -> PieceSeed {
        self.generator.seed()
    }

    /// Starts a new game: empty grid, zero score, fresh piece.
    ///
    /// The piece generator keeps its position, so successive games on the
    /// same board see different pieces.
    pub fn reset(&mut self) {
        trace!(seed = %self.generator.seed(), "board reset");
        self.grid = Grid::EMPTY;
        self.stats = BoardStats::new();
        self.state = BoardState::Playing;
        self.spawn_piece();
    }

    /// Replaces the falling piece.
    ///
    /// Fails without changing anything if no game is in progress, or if the
    /// piece leaves the grid or overlaps a filled cell.
    pub fn set_current_piece(&mut self, piece: Piece) -> Result<(), PieceCollisionError> {
        if !self.state.is_playing() || !self.fits(&piece) {
            return Err(PieceCollisionError);
        }
        self.current_piece = Some(piece);
        Ok(())
    }

    /// Returns whether the piece moved.
    pub fn move_left(&mut self) -> bool {
        self.try_translate(0, -1)
    }

    /// Returns whether the piece moved.
    pub fn move_right(&mut self) -> bool {
        self.try_translate(0, 1)
    }

    /// Moves the piece one row down if possible. Never locks it.
    ///
    /// Returns whether the piece moved.
    pub fn move_down(&mut self) -> bool {
        self.try_translate(1, 0)
    }

    /// Rotates the piece 90° clockwise about its pivot if the rotated cells
    /// are all inside the grid and empty. There is no wall kick.
    ///
    /// Returns whether the piece rotated.
    pub fn rotate_clockwise(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }
        let Some(piece) = self.current_piece.as_mut() else {
            return false;
        };
        let candidate = piece.rotated_shape_clockwise();
        let legal = piece
            .cells_with_shape(candidate)
            .into_iter()
            .all(|pos| self.grid.is_vacant(pos));
        if legal {
            piece.set_shape(candidate);
        }
        legal
    }

    /// Advances the game by one step.
    ///
    /// In order: try to move down, lock the piece if it has landed (and
    /// spawn the next one), sweep full rows, then check for game over.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if !self.state.is_playing() {
            return outcome;
        }
        self.stats.record_tick();

        outcome.moved = self.move_down();
        if self.has_landed() {
            self.lock_piece();
            outcome.locked = true;
        }

        outcome.cleared_rows = self.sweep();

        if self.grid.is_row_occupied(0) || !self.current_piece_fits() {
            self.end_game();
            outcome.game_over = true;
        }

        outcome
    }

    /// Dispatches a driver command to the matching operation.
    ///
    /// Returns whether the board changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveDown => self.move_down(),
            Command::Rotate => self.rotate_clockwise(),
            Command::StartOrRestart => {
                self.reset();
                true
            }
        }
    }

    /// Snapshot for rendering. Does not modify the board.
    #[must_use]
    pub fn render_data(&self) -> RenderData {
        RenderData {
            piece: self.current_piece.map(|piece| PieceCells {
                cells: piece.occupied_cells(),
                color: piece.color(),
            }),
            filled: self
                .grid
                .filled_cells()
                .map(|(position, color)| FilledCell { position, color })
                .collect(),
            score: self.stats.score(),
            is_over: self.is_over(),
        }
    }

    fn try_translate(&mut self, d_row: i32, d_col: i32) -> bool {
        if !self.state.is_playing() {
            return false;
        }
        let Some(piece) = self.current_piece.as_mut() else {
            return false;
        };
        let legal = piece
            .occupied_cells()
            .into_iter()
            .all(|pos| self.grid.is_vacant(pos.offset(d_row, d_col)));
        if legal {
            piece.translate(d_row, d_col);
        }
        legal
    }

    fn fits(&self, piece: &Piece) -> bool {
        piece
            .occupied_cells()
            .into_iter()
            .all(|pos| self.grid.is_vacant(pos))
    }

    fn current_piece_fits(&self) -> bool {
        self.current_piece.is_some_and(|piece| self.fits(&piece))
    }

    /// A piece has landed when any of its cells sits on the bottom row or on
    /// a filled cell. A cell below the grid counts as "not landed".
    fn has_landed(&self) -> bool {
        let Some(piece) = self.current_piece else {
            return false;
        };
        piece
            .occupied_cells()
            .into_iter()
            .any(|pos| pos.row == BOTTOM_ROW || self.grid.is_filled(pos.offset(1, 0)))
    }

    fn lock_piece(&mut self) {
        let Some(piece) = self.current_piece else {
            return;
        };
        self.grid.fill_piece(&piece);
        self.stats.record_lock();
        debug!(
            kind = ?piece.kind(),
            color = ?piece.color(),
            row = piece.pivot().row,
            col = piece.pivot().col,
            "piece locked"
        );
        self.spawn_piece();
    }

    /// Drops the falling piece and freezes the board. Score and stats stay.
    fn end_game(&mut self) {
        self.state = BoardState::GameOver;
        self.current_piece = None;
        info!(
            score = self.stats.score(),
            pieces = self.stats.completed_pieces(),
            rows = self.stats.cleared_rows(),
            "game over"
        );
    }

    fn spawn_piece(&mut self) {
        self.current_piece = Some(self.generator.next_piece());
    }

    fn sweep(&mut self) -> usize {
        let full_rows = self.grid.full_rows();
        if full_rows.is_empty() {
            return 0;
        }
        let cleared = self.grid.clear_full_rows();
        self.stats.record_sweep(cleared);
        info!(rows = ?full_rows.as_slice(), score = self.stats.score(), "rows cleared");
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, CellPosition, PieceColor, PieceKind};

    const SEED: PieceSeed = PieceSeed::from_bytes([7; 16]);

    fn playing_board(grid: &str, piece: Piece) -> Board {
        let mut board = Board::with_grid(grid.parse().unwrap(), SEED);
        assert!(board.state().is_playing());
        board.set_current_piece(piece).unwrap();
        board
    }

    fn piece_at(kind: PieceKind, row: i32, col: i32) -> Piece {
        Piece::new(kind, PieceColor::Red).with_pivot(CellPosition::new(row, col))
    }

    fn assert_invariant(board: &Board) {
        if board.state().is_playing() {
            let piece = board.current_piece().expect("playing board has a piece");
            for pos in piece.occupied_cells() {
                assert!(board.grid().is_vacant(pos), "piece cell {pos:?} invalid");
            }
        }
    }

    #[test]
    fn test_new_board_is_ready() {
        let mut board = Board::with_seed(SEED);
        assert_eq!(board.state(), BoardState::Ready);
        assert!(board.is_over());
        assert!(board.current_piece().is_none());
        assert!(!board.move_left());
        assert!(!board.rotate_clockwise());
        assert_eq!(board.tick(), TickOutcome::default());

        let frame = board.render_data();
        assert_eq!(frame.piece, None);
        assert!(frame.filled.is_empty());
        assert!(frame.is_over);
    }

    #[test]
    fn test_reset_starts_game() {
        let mut board = Board::with_seed(SEED);
        board.reset();
        assert_eq!(board.state(), BoardState::Playing);
        assert!(!board.is_over());
        assert_eq!(board.score(), 0);
        assert_eq!(board.grid(), &Grid::EMPTY);
        assert_eq!(
            board.current_piece().unwrap().pivot(),
            CellPosition::new(0, 4)
        );
        assert_invariant(&board);
    }

    #[test]
    fn test_move_left_at_wall_is_noop() {
        let mut board = playing_board("", piece_at(PieceKind::I, 5, 2));
        let before = *board.current_piece().unwrap();
        assert!(!board.move_left());
        assert!(!board.move_left());
        assert_eq!(board.current_piece(), Some(&before));
    }

    #[test]
    fn test_move_right_at_wall_is_noop() {
        let mut board = playing_board("", piece_at(PieceKind::I, 5, 8));
        let before = *board.current_piece().unwrap();
        assert!(!board.move_right());
        assert_eq!(board.current_piece(), Some(&before));
        assert!(board.move_left());
        assert_eq!(board.current_piece().unwrap().pivot(), CellPosition::new(5, 7));
    }

    #[test]
    fn test_move_blocked_by_filled_cell() {
        // T at (17, 4) covers (17,3) (17,4) (17,5) (18,4).
        let grid = "
            ..r.......
            ..........
            ..........
        ";
        let mut board = playing_board(grid, piece_at(PieceKind::T, 17, 4));
        assert!(!board.move_left());
        assert!(board.move_right());
        assert_eq!(board.current_piece().unwrap().pivot(), CellPosition::new(17, 5));
        assert_invariant(&board);
    }

    #[test]
    fn test_move_down_at_bottom_never_locks() {
        let mut board = playing_board("", piece_at(PieceKind::O, 18, 4));
        assert!(!board.move_down());
        assert_eq!(board.grid(), &Grid::EMPTY);
        assert_eq!(board.current_piece().unwrap().pivot(), CellPosition::new(18, 4));
        assert_eq!(board.stats().completed_pieces(), 0);
    }

    #[test]
    fn test_rotate_rejected_out_of_bounds() {
        let mut board = playing_board("", piece_at(PieceKind::I, 0, 4));
        let before = *board.current_piece().unwrap();
        assert!(!board.rotate_clockwise());
        assert_eq!(board.current_piece(), Some(&before));
    }

    #[test]
    fn test_rotate_rejected_on_overlap() {
        // Rotating a T at (10, 4) needs (9, 4).
        let mut grid = Grid::EMPTY;
        grid.set_cell(CellPosition::new(9, 4), Cell::Filled(PieceColor::Blue));
        let mut board = Board::with_grid(grid, SEED);
        board.set_current_piece(piece_at(PieceKind::T, 10, 4)).unwrap();

        let before = *board.current_piece().unwrap();
        assert!(!board.rotate_clockwise());
        assert_eq!(board.current_piece().unwrap().shape(), before.shape());
        assert_eq!(board.current_piece().unwrap().pivot(), before.pivot());
    }

    #[test]
    fn test_rotate_commits_shape() {
        let mut board = playing_board("", piece_at(PieceKind::T, 10, 4));
        assert!(board.rotate_clockwise());
        let piece = board.current_piece().unwrap();
        assert_eq!(piece.pivot(), CellPosition::new(10, 4));
        assert_eq!(piece.shape(), PieceKind::T.spawn_shape().rotated_clockwise());
        assert_invariant(&board);
    }

    #[test]
    fn test_tick_locks_piece_at_bottom() {
        let mut board = playing_board("", piece_at(PieceKind::O, 18, 4));
        let outcome = board.tick();
        assert_eq!(
            outcome,
            TickOutcome {
                moved: false,
                locked: true,
                cleared_rows: 0,
                game_over: false,
            }
        );

        for pos in [(18, 3), (18, 4), (19, 3), (19, 4)] {
            let pos = CellPosition::new(pos.0, pos.1);
            assert_eq!(board.grid().cell(pos), Some(Cell::Filled(PieceColor::Red)));
        }
        assert_eq!(board.grid().filled_cells().count(), 4);
        assert_eq!(
            board.current_piece().unwrap().pivot(),
            CellPosition::new(0, 4)
        );
        assert_eq!(board.stats().completed_pieces(), 1);
        assert_invariant(&board);
    }

    #[test]
    fn test_tick_moves_then_locks_in_same_tick() {
        let mut board = playing_board("", piece_at(PieceKind::O, 17, 4));
        let outcome = board.tick();
        assert!(outcome.moved);
        assert!(outcome.locked);
        assert!(board.grid().is_filled(CellPosition::new(19, 4)));
    }

    #[test]
    fn test_tick_lands_on_stack() {
        let grid = "
            ....b.....
            ....b.....
        ";
        // T at (15, 4) covers rows 15-16; below (16, 4) is (17, 4), empty before the move.
        let mut board = playing_board(grid, piece_at(PieceKind::T, 15, 4));
        let outcome = board.tick();
        assert!(outcome.moved);
        assert!(outcome.locked);
        assert!(board.grid().is_filled(CellPosition::new(17, 4)));
        assert!(board.grid().is_filled(CellPosition::new(16, 3)));
    }

    #[test]
    fn test_falling_piece_not_yet_landed() {
        let mut board = playing_board("", piece_at(PieceKind::T, 5, 4));
        let outcome = board.tick();
        assert!(outcome.moved);
        assert!(!outcome.locked);
        assert_eq!(board.current_piece().unwrap().pivot(), CellPosition::new(6, 4));
        assert_eq!(board.grid(), &Grid::EMPTY);
    }

    #[test]
    fn test_sweep_removes_rows_five_and_ten() {
        // Partial rows leave the middle columns open so the falling piece
        // never interacts with them.
        let mut rows = vec!["c........c"; GRID_HEIGHT];
        rows[5] = "gggggggggg";
        rows[10] = "pppppppppp";
        let grid: Grid = rows.join("\n").parse().unwrap();
        let mut board = playing_board(&rows.join("\n"), piece_at(PieceKind::T, 0, 4));

        let outcome = board.tick();
        assert!(outcome.moved);
        assert!(!outcome.locked);
        assert_eq!(outcome.cleared_rows, 2);
        assert!(!outcome.game_over);
        assert_eq!(board.score(), 20);

        let before: Vec<_> = grid.rows().copied().collect();
        let after: Vec<_> = board.grid().rows().copied().collect();
        assert_eq!(after[0], [Cell::Empty; 10]);
        assert_eq!(after[1], [Cell::Empty; 10]);
        let kept: Vec<_> = before
            .iter()
            .enumerate()
            .filter(|(y, _)| *y != 5 && *y != 10)
            .map(|(_, row)| *row)
            .collect();
        assert_eq!(&after[2..], kept.as_slice());
        assert_invariant(&board);
    }

    #[test]
    fn test_lock_completes_row() {
        // I at (19, 6) covers columns 4..=7 of the bottom row.
        let grid = "rrrr....rr";
        let mut board = playing_board(grid, piece_at(PieceKind::I, 19, 6));
        let outcome = board.tick();
        assert!(outcome.locked);
        assert_eq!(outcome.cleared_rows, 1);
        assert_eq!(board.score(), 10);
        assert_eq!(board.grid(), &Grid::EMPTY);
        assert_eq!(board.stats().sweep_counter()[1], 1);
    }

    fn topped_out_board() -> Board {
        // Column 4 filled from row 2 down: an O at spawn lands at once and
        // locks into rows 0 and 1.
        let column = vec!["....r....."; GRID_HEIGHT - 2].join("\n");
        let mut board = playing_board(&column, Piece::new(PieceKind::O, PieceColor::Yellow));
        let outcome = board.tick();
        assert!(outcome.locked);
        assert!(outcome.game_over);
        board
    }

    #[test]
    fn test_game_over_when_row_zero_filled() {
        let board = topped_out_board();
        assert_eq!(board.state(), BoardState::GameOver);
        assert!(board.is_over());
        assert!(board.grid().is_row_occupied(0));
        assert!(board.current_piece().is_none());

        let frame = board.render_data();
        assert!(frame.is_over);
        assert_eq!(frame.piece, None);
        assert_eq!(frame.filled.len(), board.grid().filled_cells().count());
    }

    #[test]
    fn test_game_over_when_spawn_overlaps_below_row_zero() {
        // The first generated piece is replaced below; the second one spawns
        // after the lock and must not be a bar, the only kind with no cell on row 1.
        let seed = (0..=u8::MAX)
            .map(|b| PieceSeed::from_bytes([b; 16]))
            .find(|seed| {
                let mut generator = PieceGenerator::with_seed(*seed);
                generator.next_piece();
                generator.next_piece().kind() != PieceKind::I
            })
            .unwrap();

        // Column 4 filled from row 3 down: a T at (1, 4) locks into
        // (1,3) (1,4) (1,5) (2,4), leaving row 0 empty.
        let column = vec!["....r....."; GRID_HEIGHT - 3].join("\n");
        let mut board = Board::with_grid(column.parse().unwrap(), seed);
        board.set_current_piece(piece_at(PieceKind::T, 1, 4)).unwrap();

        let outcome = board.tick();
        assert!(outcome.locked);
        assert!(outcome.game_over);
        assert!(!board.grid().is_row_occupied(0));
        assert!(board.grid().is_row_occupied(1));
        assert_eq!(board.state(), BoardState::GameOver);
        assert!(board.current_piece().is_none());
    }

    #[test]
    fn test_game_over_freezes_board() {
        let mut board = topped_out_board();
        let grid = board.grid().clone();
        let score = board.score();

        assert!(!board.move_left());
        assert!(!board.move_right());
        assert!(!board.move_down());
        assert!(!board.rotate_clockwise());
        assert_eq!(board.tick(), TickOutcome::default());
        for command in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::MoveDown,
            Command::Rotate,
        ] {
            assert!(!board.apply(command));
        }

        assert_eq!(board.grid(), &grid);
        assert!(board.current_piece().is_none());
        assert_eq!(board.render_data().piece, None);
        assert_eq!(board.score(), score);
        assert!(board.is_over());
    }

    #[test]
    fn test_set_current_piece_requires_running_game() {
        let piece = piece_at(PieceKind::I, 10, 2);

        let mut ready = Board::with_seed(SEED);
        assert!(ready.set_current_piece(piece).is_err());
        assert!(ready.current_piece().is_none());

        let mut over = topped_out_board();
        assert!(over.set_current_piece(piece).is_err());
        assert!(over.current_piece().is_none());
        assert!(over.render_data().piece.is_none());
    }

    #[test]
    fn test_reset_from_game_over() {
        let mut board = topped_out_board();
        assert!(board.apply(Command::StartOrRestart));
        assert_eq!(board.state(), BoardState::Playing);
        assert_eq!(board.score(), 0);
        assert_eq!(board.grid(), &Grid::EMPTY);
        assert_eq!(board.stats(), &BoardStats::new());
        assert_eq!(
            board.current_piece().unwrap().pivot(),
            CellPosition::new(0, 4)
        );
    }

    #[test]
    fn test_with_grid_blocked_spawn_is_game_over() {
        let grid = vec!["rrrr.rrrrr"; GRID_HEIGHT].join("\n");
        let board = Board::with_grid(grid.parse().unwrap(), SEED);
        assert_eq!(board.state(), BoardState::GameOver);
        assert!(board.current_piece().is_none());
        assert_eq!(board.render_data().piece, None);
    }

    #[test]
    fn test_set_current_piece_validates() {
        let mut board = playing_board("rrrrrrrrr.", piece_at(PieceKind::T, 5, 4));
        assert!(board.set_current_piece(piece_at(PieceKind::I, 5, 0)).is_err());
        assert!(board.set_current_piece(piece_at(PieceKind::I, 19, 5)).is_err());
        assert_eq!(board.current_piece().unwrap().pivot(), CellPosition::new(5, 4));
        assert!(board.set_current_piece(piece_at(PieceKind::I, 18, 5)).is_ok());
    }

    #[test]
    fn test_apply_maps_commands() {
        let mut board = playing_board("", piece_at(PieceKind::T, 5, 4));
        assert!(board.apply(Command::MoveLeft));
        assert!(board.apply(Command::MoveDown));
        assert!(board.apply(Command::MoveRight));
        assert!(board.apply(Command::Rotate));
        let piece = board.current_piece().unwrap();
        assert_eq!(piece.pivot(), CellPosition::new(6, 4));
        assert_eq!(piece.shape(), PieceKind::T.spawn_shape().rotated_clockwise());
    }

    #[test]
    fn test_render_data_snapshot() {
        let board = playing_board("...y......", piece_at(PieceKind::O, 5, 4));
        let frame = board.render_data();
        assert_eq!(
            frame.piece,
            Some(PieceCells {
                cells: board.current_piece().unwrap().occupied_cells(),
                color: PieceColor::Red,
            })
        );
        assert_eq!(
            frame.filled,
            vec![FilledCell {
                position: CellPosition::new(19, 3),
                color: PieceColor::Yellow,
            }]
        );
        assert_eq!(frame.score, 0);
        assert!(!frame.is_over);

        let json = serde_json::to_string(&frame).unwrap();
        let back: RenderData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, frame);
    }

    #[test]
    fn test_same_seed_same_game() {
        let script = [
            Command::MoveLeft,
            Command::Rotate,
            Command::MoveRight,
            Command::MoveRight,
            Command::MoveDown,
        ];
        let mut board1 = Board::with_seed(SEED);
        let mut board2 = Board::with_seed(SEED);
        board1.reset();
        board2.reset();
        for i in 0..400 {
            let command = script[i % script.len()];
            board1.apply(command);
            board2.apply(command);
            board1.tick();
            board2.tick();
            assert_invariant(&board1);
        }
        assert_eq!(board1.render_data(), board2.render_data());
        assert_eq!(board1.stats(), board2.stats());
    }
}
