use blockfall_engine::{Board, Command};
use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::{
    tui::{App, Runtime},
    ui::widgets::{BoardView, KeyBinding, KeyBindingDisplay},
};

const FPS: f64 = 60.0;

const PLAYING_KEYS: &[KeyBinding] = &[
    (&["←", "→"], "Move"),
    (&["↓"], "Down"),
    (&["Space", "↑"], "Rotate"),
    (&["q", "Esc"], "Quit"),
];
const IDLE_KEYS: &[KeyBinding] = &[(&["Enter"], "Start"), (&["q", "Esc"], "Quit")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Board(Command),
    Quit,
}

/// Maps a key to an action. Movement keys only apply to a running game and
/// Enter only to a finished (or not yet started) one.
fn key_action(code: KeyCode, is_over: bool) -> Option<Action> {
    let command = match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Enter if is_over => Command::StartOrRestart,
        KeyCode::Left if !is_over => Command::MoveLeft,
        KeyCode::Right if !is_over => Command::MoveRight,
        KeyCode::Down if !is_over => Command::MoveDown,
        KeyCode::Up | KeyCode::Char(' ') if !is_over => Command::Rotate,
        _ => return None,
    };
    Some(Action::Board(command))
}

#[derive(Debug)]
pub(crate) struct PlayApp {
    board: Board,
    tick_rate: f64,
    is_exiting: bool,
}

impl PlayApp {
    pub(crate) fn new(board: Board, tick_rate: f64) -> Self {
        Self {
            board,
            tick_rate,
            is_exiting: false,
        }
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    fn handle_key(&mut self, code: KeyCode) {
        match key_action(code, self.board.is_over()) {
            Some(Action::Board(command)) => _ = self.board.apply(command),
            Some(Action::Quit) => self.is_exiting = true,
            None => {}
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(self.tick_rate));
        runtime.set_frame_rate(FPS);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: &Event) {
        if let Some(key) = event.as_key_press_event() {
            self.handle_key(key.code);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let keys = if self.board.is_over() {
            IDLE_KEYS
        } else {
            PLAYING_KEYS
        };
        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(23), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(BoardView::new(&self.board), main_area);
        frame.render_widget(KeyBindingDisplay::new(keys), help_area);
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.board.tick();
    }
}
