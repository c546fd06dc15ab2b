use crate::color::Color;
use crate::error::ChessError;
use crate::pieces::{Piece, PieceType};
use crate::position::{BOARD_SIZE, Position};
use std::fmt;

pub const STANDARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// One board cell: the piece on it plus the en-passant marker.
///
/// `en_passant == Some(c)` means a pawn of color `c` skipped over this square
/// with a double step on the previous ply, so an enemy pawn may capture onto it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Square {
    pub piece: Option<Piece>,
    pub en_passant: Option<Color>,
}

/// What [`Board::make_move`] did, for the move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardChange {
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub en_passant: bool,
    pub double_step: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Square; BOARD_SIZE * BOARD_SIZE],
}

impl Board {
    /// Build a board from the piece-placement field of a FEN string.
    /// The first FEN row is rank index 0 (Black's back rank).
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        let mut board = Board::empty();
        board.load_fen(fen)?;
        Ok(board)
    }

    pub fn standard() -> Self {
        let mut board = Board::empty();
        let back_row = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        for (file, piece_type) in back_row.into_iter().enumerate() {
            for color in [Color::White, Color::Black] {
                board.set_piece(
                    &Position::new(file, color.back_rank()),
                    Some(Piece::new(piece_type, color)),
                );
                board.set_piece(
                    &Position::new(file, color.pawn_start_rank()),
                    Some(Piece::new(PieceType::Pawn, color)),
                );
            }
        }

        board
    }

    pub fn empty() -> Self {
        Board {
            squares: [Square::default(); BOARD_SIZE * BOARD_SIZE],
        }
    }

    fn index(pos: &Position) -> usize {
        pos.rank * BOARD_SIZE + pos.file
    }

    pub fn square(&self, pos: &Position) -> Option<&Square> {
        if pos.is_valid() {
            Some(&self.squares[Self::index(pos)])
        } else {
            None
        }
    }

    pub fn get_piece(&self, pos: &Position) -> Option<Piece> {
        self.square(pos).and_then(|sq| sq.piece)
    }

    pub fn set_piece(&mut self, pos: &Position, piece: Option<Piece>) {
        if pos.is_valid() {
            self.squares[Self::index(pos)].piece = piece;
        }
    }

    pub fn en_passant(&self, pos: &Position) -> Option<Color> {
        self.square(pos).and_then(|sq| sq.en_passant)
    }

    pub fn set_en_passant(&mut self, pos: &Position, marker: Option<Color>) {
        if pos.is_valid() {
            self.squares[Self::index(pos)].en_passant = marker;
        }
    }

    /// Remove every en-passant marker left by pawns of `color`.
    pub fn clear_en_passant(&mut self, color: Color) {
        for square in self.squares.iter_mut() {
            if square.en_passant == Some(color) {
                square.en_passant = None;
            }
        }
    }

    pub fn en_passant_markers(&self) -> Vec<(Position, Color)> {
        Position::all()
            .filter_map(|pos| self.en_passant(&pos).map(|color| (pos, color)))
            .collect()
    }

    pub fn clear(&mut self) {
        self.squares = [Square::default(); BOARD_SIZE * BOARD_SIZE];
    }

    pub fn pieces(&self, color: Color) -> Vec<(Position, Piece)> {
        Position::all()
            .filter_map(|pos| match self.get_piece(&pos) {
                Some(piece) if piece.color == color => Some((pos, piece)),
                _ => None,
            })
            .collect()
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        Position::all().find(|pos| {
            self.get_piece(pos)
                .is_some_and(|piece| piece.is_king() && piece.color == color)
        })
    }

    /// Move the piece on `origin` to `target`, resolving en-passant captures
    /// and the marker lifecycle. Returns `None` if `origin` is empty.
    ///
    /// The move itself is not validated.
    pub fn make_move(&mut self, origin: &Position, target: &Position) -> Option<BoardChange> {
        let moved = self.get_piece(origin)?;
        let mut captured = self.get_piece(target);
        let mut en_passant = false;
        let mut double_step = false;

        if moved.is_pawn()
            && origin.file != target.file
            && self.en_passant(target) == Some(moved.color.opposite())
        {
            // The victim sits beside the origin, on the target's file
            let victim = Position::new(target.file, origin.rank);
            captured = self.get_piece(&victim);
            self.set_piece(&victim, None);
            en_passant = true;
        } else if moved.is_pawn()
            && origin.rank == moved.color.pawn_start_rank()
            && origin.rank.abs_diff(target.rank) == 2
        {
            let skipped = Position::new(origin.file, (origin.rank + target.rank) / 2);
            self.set_en_passant(&skipped, Some(moved.color));
            double_step = true;
        }

        self.set_piece(target, Some(moved));
        self.set_piece(origin, None);

        // Markers live for exactly one reply
        self.clear_en_passant(moved.color.opposite());

        Some(BoardChange {
            moved,
            captured,
            en_passant,
            double_step,
        })
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in 0..BOARD_SIZE {
            let mut empty_count = 0;

            for file in 0..BOARD_SIZE {
                if let Some(piece) = self.get_piece(&Position::new(file, rank)) {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_char());
                } else {
                    empty_count += 1;
                }
            }

            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }

            if rank + 1 < BOARD_SIZE {
                fen.push('/');
            }
        }

        fen
    }

    fn load_fen(&mut self, fen: &str) -> Result<(), ChessError> {
        self.clear();

        let rows: Vec<&str> = fen.split('/').collect();

        if rows.len() != BOARD_SIZE {
            return Err(ChessError::InvalidFen {
                reason: format!("expected {} rows, got {}", BOARD_SIZE, rows.len()),
            });
        }

        for (rank, row) in rows.iter().enumerate() {
            let mut file = 0;

            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else if let Some(piece) = Piece::from_char(c) {
                    if file >= BOARD_SIZE {
                        return Err(ChessError::InvalidFen {
                            reason: format!("row {} runs past the h-file", rank),
                        });
                    }
                    self.set_piece(&Position::new(file, rank), Some(piece));
                    file += 1;
                } else {
                    return Err(ChessError::InvalidFen {
                        reason: format!("unexpected character '{}'", c),
                    });
                }
            }

            if file != BOARD_SIZE {
                return Err(ChessError::InvalidFen {
                    reason: format!("row {} has {} squares", rank, file),
                });
            }
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - rank)?;
            for file in 0..BOARD_SIZE {
                match self.get_piece(&Position::new(file, rank)) {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }

        write!(f, "  ")?;
        for file in 0..BOARD_SIZE {
            write!(f, "{} ", (b'a' + file as u8) as char)?;
        }
        Ok(())
    }
}
