use blockfall_engine::{Board, BoardState};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use super::{BoardDisplay, StatsDisplay, color, style};

/// Board and stats panel side by side, with a popup over the board before
/// the first game and after game over.
#[derive(Debug)]
pub(crate) struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        Self { board }
    }

    fn popup(&self) -> Option<(Vec<Line<'static>>, Style)> {
        match self.board.state() {
            BoardState::Ready => Some((
                vec![Line::from("PRESS ENTER"), Line::from("TO START")],
                style::READY_POPUP,
            )),
            BoardState::Playing => None,
            BoardState::GameOver => Some((
                vec![
                    Line::from("GAME OVER"),
                    Line::from(format!("SCORE: {}", self.board.score())),
                ],
                style::GAME_OVER_POPUP,
            )),
        }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = match self.board.state() {
            BoardState::Ready => color::YELLOW,
            BoardState::Playing => color::WHITE,
            BoardState::GameOver => color::RED,
        };

        let frame = self.board.render_data();
        let board_display = BoardDisplay::new(&frame).block(
            Block::bordered()
                .border_style(border_color)
                .style(style::DEFAULT),
        );
        let stats_display = StatsDisplay::new(self.board.stats()).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_color)
                .style(style::DEFAULT),
        );

        let board_size = board_display.size();
        let stats_size = stats_display.size();
        let [board_column, stats_column] = Layout::horizontal([
            Constraint::Length(board_size.width),
            Constraint::Length(stats_size.width),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);
        let [board_area] =
            Layout::vertical([Constraint::Length(board_size.height)]).areas(board_column);
        let [stats_area] =
            Layout::vertical([Constraint::Length(stats_size.height)]).areas(stats_column);

        board_display.render(board_area, buf);
        stats_display.render(stats_area, buf);

        if let Some((lines, style)) = self.popup() {
            #[expect(clippy::cast_possible_truncation)]
            let text_height = lines.len() as u16;
            let block = Block::new().style(style);
            let area = board_area.centered(
                Constraint::Length(board_size.width),
                Constraint::Length(text_height + 2),
            );
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            Text::from(lines)
                .style(style)
                .centered()
                .render(inner.centered_vertically(Constraint::Length(text_height)), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{Grid, PieceSeed};

    use super::*;

    const SEED: PieceSeed = PieceSeed::from_bytes([3; 16]);

    fn rendered_text(board: &Board) -> String {
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        BoardView::new(board).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_ready_popup() {
        let board = Board::with_seed(SEED);
        let text = rendered_text(&board);
        assert!(text.contains("PRESS ENTER"));
        assert!(text.contains("STATS"));
    }

    #[test]
    fn test_no_popup_while_playing() {
        let mut board = Board::with_seed(SEED);
        board.reset();
        let text = rendered_text(&board);
        assert!(!text.contains("PRESS ENTER"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn test_game_over_popup_shows_score() {
        let grid = vec!["rrrr.rrrrr"; Grid::HEIGHT].join("\n");
        let board = Board::with_grid(grid.parse().unwrap(), SEED);
        assert!(board.is_over());
        let text = rendered_text(&board);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("SCORE: 0"));
    }
}
