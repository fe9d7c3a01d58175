use serde::{Deserialize, Serialize};

/// Discrete input accepted by a [`Board`](crate::Board).
///
/// Each command maps 1:1 to a board operation. Quitting is a driver concern
/// and has no command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveDown,
    Rotate,
    StartOrRestart,
}

impl Command {
    pub const ALL: [Self; 5] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::Rotate,
        Command::StartOrRestart,
    ];
}
