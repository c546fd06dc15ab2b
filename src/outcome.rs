use crate::color::Color;
use std::fmt;

/// How a finished game ended. Checkmate is the only way this core ends a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    WhiteWin,
    BlackWin,
}

impl GameOutcome {
    /// Outcome when `color` has just delivered checkmate.
    pub fn checkmate_by(color: Color) -> Self {
        match color {
            Color::White => GameOutcome::WhiteWin,
            Color::Black => GameOutcome::BlackWin,
        }
    }

    pub fn winner(&self) -> Color {
        match self {
            GameOutcome::WhiteWin => Color::White,
            GameOutcome::BlackWin => Color::Black,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameOutcome::WhiteWin => "white_win",
            GameOutcome::BlackWin => "black_win",
        };
        write!(f, "{}", s)
    }
}
