//! Error types for the chess core.

use std::fmt;

use crate::color::Color;
use crate::position::Position;

/// Failures that can reach a caller of the chess core.
///
/// Illegal or off-turn selections are not errors: they come back as an
/// empty destination set or an ignored selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Raw coordinates outside the 8x8 board
    OutOfBounds { file: usize, rank: usize },
    /// Algebraic square text could not be parsed
    InvalidSquare { notation: String },
    /// Invalid FEN piece placement
    InvalidFen { reason: String },
    /// Setup position lacks a king for this color
    MissingKing { color: Color },
    /// Move execution was asked to move from an empty square
    EmptySquare { position: Position },
    /// Checkmate was already delivered
    GameOver,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::OutOfBounds { file, rank } => {
                write!(f, "Coordinates ({file}, {rank}) are off the board")
            }
            ChessError::InvalidSquare { notation } => {
                write!(f, "Invalid square '{notation}'")
            }
            ChessError::InvalidFen { reason } => write!(f, "Invalid FEN: {reason}"),
            ChessError::MissingKing { color } => {
                write!(f, "No {color} king found in setup position")
            }
            ChessError::EmptySquare { position } => {
                write!(f, "No piece on {position} to move")
            }
            ChessError::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for ChessError {}
