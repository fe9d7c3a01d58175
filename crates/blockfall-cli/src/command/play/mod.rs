use tracing::info;

use crate::{command::GlobalArgs, tui::Runtime};

use self::app::PlayApp;

mod app;

pub(crate) fn run(args: &GlobalArgs) -> anyhow::Result<()> {
    let board = args.new_board();
    info!(seed = %board.seed(), tick_rate = args.tick_rate, "starting interactive play");

    let mut app = PlayApp::new(board, args.tick_rate);
    Runtime::new().run(&mut app)?;

    let stats = app.board().stats();
    info!(
        score = stats.score(),
        rows = stats.cleared_rows(),
        pieces = stats.completed_pieces(),
        "quit"
    );
    Ok(())
}
