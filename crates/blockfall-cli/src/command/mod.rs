use std::path::PathBuf;

use blockfall_engine::{Board, PieceSeed};
use clap::{Parser, Subcommand};

use crate::logging;

use self::simulate::SimulateArg;

mod play;
mod simulate;

const DEFAULT_TICK_RATE: f64 = 3.0;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CommandArgs {
    #[command(flatten)]
    global: GlobalArgs,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GlobalArgs {
    /// Automatic drops per second
    #[arg(long, global = true, default_value_t = DEFAULT_TICK_RATE, value_parser = parse_tick_rate)]
    tick_rate: f64,
    /// Piece seed as 32 hex characters (random if omitted)
    #[arg(long, global = true)]
    seed: Option<PieceSeed>,
    /// Write logs to this file (level from RUST_LOG, default "info")
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

impl GlobalArgs {
    fn new_board(&self) -> Board {
        self.seed.map_or_else(Board::new, Board::with_seed)
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play in the terminal
    Play,
    /// Play a headless game with random input and print the final frame as JSON
    Simulate(#[clap(flatten)] SimulateArg),
}

fn parse_tick_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(format!("tick rate must be a positive number, got {s}"))
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.global.log_file.as_deref())?;
    match args.mode.unwrap_or(Mode::Play) {
        Mode::Play => play::run(&args.global)?,
        Mode::Simulate(arg) => simulate::run(&args.global, &arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    const SEED: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_play() {
        let args = CommandArgs::try_parse_from(["blockfall"]).unwrap();
        assert!(args.mode.is_none());
        assert!((args.global.tick_rate - DEFAULT_TICK_RATE).abs() < f64::EPSILON);
        assert_eq!(args.global.seed, None);
        assert_eq!(args.global.log_file, None);
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let args = CommandArgs::try_parse_from([
            "blockfall",
            "simulate",
            "--seed",
            SEED,
            "--tick-rate",
            "10",
        ])
        .unwrap();
        assert!(matches!(args.mode, Some(Mode::Simulate(_))));
        assert_eq!(args.global.seed, Some(SEED.parse().unwrap()));
        assert!((args.global.tick_rate - 10.0).abs() < f64::EPSILON);
        assert_eq!(args.global.new_board().seed(), SEED.parse().unwrap());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(CommandArgs::try_parse_from(["blockfall", "--seed", "xyz"]).is_err());
        assert!(CommandArgs::try_parse_from(["blockfall", "--tick-rate", "0"]).is_err());
        assert!(CommandArgs::try_parse_from(["blockfall", "--tick-rate", "-2"]).is_err());
        assert!(CommandArgs::try_parse_from(["blockfall", "--tick-rate", "inf"]).is_err());
    }
}
