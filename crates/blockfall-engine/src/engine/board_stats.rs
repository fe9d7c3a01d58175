/// Points awarded per row removed by a sweep.
pub const SCORE_PER_ROW: usize = 10;

/// Running statistics of one game.
///
/// - **Score**: `10 × rows` for every sweep, no multi-row bonus
/// - **Completed pieces**: pieces locked into the grid
/// - **Cleared rows**: total rows removed
/// - **Sweep histogram**: how many sweeps removed 1, 2, 3 or 4 rows at once
/// - **Ticks**: automatic advances while playing
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, PieceSeed};
///
/// let grid = "rrrrrrrrrr\nbbbbbbbbbb".parse().unwrap();
/// let mut board = Board::with_grid(grid, PieceSeed::from_bytes([1; 16]));
/// board.tick();
///
/// let stats = board.stats();
/// assert_eq!(stats.score(), 20);
/// assert_eq!(stats.cleared_rows(), 2);
/// assert_eq!(stats.sweep_counter()[2], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStats {
    score: usize,
    completed_pieces: usize,
    cleared_rows: usize,
    sweep_counter: [usize; 5],
    ticks: u64,
}

impl Default for BoardStats {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            cleared_rows: 0,
            sweep_counter: [0; 5],
            ticks: 0,
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn cleared_rows(&self) -> usize {
        self.cleared_rows
    }

    /// Histogram of sweeps by rows removed.
    ///
    /// Index 0 is unused; a zero-row sweep is not recorded.
    #[must_use]
    pub const fn sweep_counter(&self) -> &[usize; 5] {
        &self.sweep_counter
    }

    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(crate) const fn record_tick(&mut self) {
        self.ticks += 1;
    }

    pub(crate) const fn record_lock(&mut self) {
        self.completed_pieces += 1;
    }

    /// Adds `rows` cleared rows; zero leaves every counter unchanged.
    pub(crate) const fn record_sweep(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        self.cleared_rows += rows;
        self.score += SCORE_PER_ROW * rows;
        if rows < self.sweep_counter.len() {
            self.sweep_counter[rows] += 1;
        }
    }
}
