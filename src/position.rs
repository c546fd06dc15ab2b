use std::fmt;

use crate::error::ChessError;

pub const BOARD_SIZE: usize = 8;

/// A square on the board. `rank` 0 is Black's back rank (the 8th rank) and
/// `rank` 7 is White's back rank (the 1st rank).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub file: usize,
    pub rank: usize,
}

impl Position {
    pub fn new(file: usize, rank: usize) -> Self {
        Position { file, rank }
    }

    /// Validate raw coordinates coming from outside the core.
    pub fn try_new(file: usize, rank: usize) -> Result<Self, ChessError> {
        let pos = Position { file, rank };
        if pos.is_valid() {
            Ok(pos)
        } else {
            Err(ChessError::OutOfBounds { file, rank })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.file < BOARD_SIZE && self.rank < BOARD_SIZE
    }

    /// Step by a file/rank delta, or `None` when that leaves the board.
    pub fn offset(&self, file_delta: i32, rank_delta: i32) -> Option<Position> {
        // Negative results wrap to huge values and fail the bounds check
        let file = (self.file as i32 + file_delta) as usize;
        let rank = (self.rank as i32 + rank_delta) as usize;
        let pos = Position { file, rank };
        pos.is_valid().then_some(pos)
    }

    pub fn file_char(&self) -> char {
        (b'a' + self.file as u8) as char
    }

    /// Rank number as printed on a board: `8 - rank`.
    pub fn display_rank(&self) -> usize {
        BOARD_SIZE - self.rank
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.file_char(), self.display_rank())
    }

    pub fn from_algebraic(s: &str) -> Result<Self, ChessError> {
        let invalid = || ChessError::InvalidSquare {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let file_char = chars.next().ok_or_else(invalid)?;
        if !('a'..='h').contains(&file_char) {
            return Err(invalid());
        }

        let shown_rank = match (chars.next(), chars.next()) {
            (Some(rank_char @ '1'..='8'), None) => (rank_char as u8 - b'0') as usize,
            _ => return Err(invalid()),
        };

        Ok(Position {
            file: (file_char as u8 - b'a') as usize,
            rank: BOARD_SIZE - shown_rank,
        })
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Position { file, rank }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
