use blockfall_engine::{Board, Command};
use rand::{Rng, SeedableRng as _, rngs::StdRng};
use tracing::info;

use crate::command::GlobalArgs;

/// Commands a simulated player may issue before each tick.
const INPUTS: [Command; 4] = [
    Command::MoveLeft,
    Command::MoveRight,
    Command::MoveDown,
    Command::Rotate,
];

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Maximum number of ticks to run
    #[arg(long, default_value_t = 1000)]
    ticks: u64,
    /// Seed for the random input sequence
    #[arg(long, default_value_t = 0)]
    input_seed: u64,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

pub(crate) fn run(global: &GlobalArgs, arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        ticks,
        input_seed,
        pretty,
    } = arg;

    let mut board = global.new_board();
    let mut rng = StdRng::seed_from_u64(*input_seed);
    let ticks_run = simulate(&mut board, *ticks, &mut rng);

    let stats = board.stats();
    info!(
        seed = %board.seed(),
        ticks = ticks_run,
        score = stats.score(),
        pieces = stats.completed_pieces(),
        is_over = board.is_over(),
        "simulation finished"
    );
    eprintln!(
        "seed {}: {ticks_run} ticks, {} pieces, score {}{}",
        board.seed(),
        stats.completed_pieces(),
        stats.score(),
        if board.is_over() { " (game over)" } else { "" }
    );

    let frame = board.render_data();
    let json = if *pretty {
        serde_json::to_string_pretty(&frame)?
    } else {
        serde_json::to_string(&frame)?
    };
    println!("{json}");
    Ok(())
}

/// Starts a game and runs it until it ends or `max_ticks` ticks have passed,
/// issuing one random command before every tick.
///
/// Returns the number of ticks run.
fn simulate<R>(board: &mut Board, max_ticks: u64, rng: &mut R) -> u64
where
    R: Rng + ?Sized,
{
    board.reset();
    let mut ticks = 0;
    while ticks < max_ticks && !board.is_over() {
        let command = INPUTS[rng.random_range(0..INPUTS.len())];
        board.apply(command);
        board.tick();
        ticks += 1;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use blockfall_engine::PieceSeed;

    use super::*;

    const SEED: PieceSeed = PieceSeed::from_bytes([0x5A; 16]);

    fn run_simulation(input_seed: u64, max_ticks: u64) -> (Board, u64) {
        let mut board = Board::with_seed(SEED);
        let mut rng = StdRng::seed_from_u64(input_seed);
        let ticks = simulate(&mut board, max_ticks, &mut rng);
        (board, ticks)
    }

    #[test]
    fn test_zero_ticks_only_starts_game() {
        let (board, ticks) = run_simulation(0, 0);
        assert_eq!(ticks, 0);
        assert!(!board.is_over());
        assert_eq!(board.stats().ticks(), 0);
    }

    #[test]
    fn test_stops_at_tick_limit_or_game_over() {
        let (board, ticks) = run_simulation(1, 200);
        assert!(ticks <= 200);
        assert_eq!(board.stats().ticks(), ticks);
        if ticks < 200 {
            assert!(board.is_over());
        }
    }

    #[test]
    fn test_same_seeds_same_result() {
        let (board1, ticks1) = run_simulation(42, 500);
        let (board2, ticks2) = run_simulation(42, 500);
        assert_eq!(ticks1, ticks2);
        assert_eq!(board1.render_data(), board2.render_data());
    }

    #[test]
    fn test_output_is_valid_json() {
        let (board, _) = run_simulation(7, 50);
        let json = serde_json::to_value(board.render_data()).unwrap();
        assert_eq!(json["score"], board.score());
        assert_eq!(json["is_over"], board.is_over());
    }
}
