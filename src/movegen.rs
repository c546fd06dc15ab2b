//! Pseudo-legal destination generation per piece type.
//!
//! There are two entry points. [`candidate_squares`] is what a player may
//! select, and filters king destinations that would walk into an attack.
//! [`attack_squares`] is what a piece threatens: no pawn pushes and no king
//! filtering. The attack detector only ever calls the second one, so the
//! king filter cannot recurse into itself.

use arrayvec::ArrayVec;

use crate::attacks::is_attacked;
use crate::board::Board;
use crate::pieces::{Piece, PieceType};
use crate::position::Position;

/// A queen in the middle of an open board reaches 27 squares; nothing reaches more.
pub const MAX_DESTINATIONS: usize = 27;

pub type Destinations = ArrayVec<Position, MAX_DESTINATIONS>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenMode {
    /// Squares the piece may move to, with the king's self-check filter.
    Candidates,
    /// Squares the piece attacks. Used by attack detection.
    AttacksOnly,
}

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
];

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
];

const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(-1, 1), (1, -1), (1, 1), (-1, -1)];

const ROOK_DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, -1),
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
];

/// Destinations for the piece on `origin`, or nothing if the square is empty.
pub fn candidate_squares(board: &Board, origin: &Position) -> Destinations {
    match board.get_piece(origin) {
        Some(piece) => generate_moves(piece, origin, board, GenMode::Candidates),
        None => Destinations::new(),
    }
}

/// Squares attacked by the piece on `origin`, or nothing if the square is empty.
pub fn attack_squares(board: &Board, origin: &Position) -> Destinations {
    match board.get_piece(origin) {
        Some(piece) => generate_moves(piece, origin, board, GenMode::AttacksOnly),
        None => Destinations::new(),
    }
}

/// Destinations for `piece` standing on `origin`. Off-board origins produce nothing.
pub fn generate_moves(
    piece: Piece,
    origin: &Position,
    board: &Board,
    mode: GenMode,
) -> Destinations {
    if !origin.is_valid() {
        return Destinations::new();
    }

    match piece.piece_type {
        PieceType::Pawn => pawn_moves(piece, origin, board, mode),
        PieceType::Knight => step_moves(piece, origin, board, &KNIGHT_OFFSETS),
        PieceType::Bishop => sliding_moves(piece, origin, board, &BISHOP_DIRECTIONS),
        PieceType::Rook => sliding_moves(piece, origin, board, &ROOK_DIRECTIONS),
        PieceType::Queen => sliding_moves(piece, origin, board, &QUEEN_DIRECTIONS),
        PieceType::King => {
            let moves = step_moves(piece, origin, board, &KING_OFFSETS);
            match mode {
                GenMode::AttacksOnly => moves,
                GenMode::Candidates => king_safe_moves(piece, origin, board, moves),
            }
        }
    }
}

fn is_own(board: &Board, pos: &Position, piece: &Piece) -> bool {
    board
        .get_piece(pos)
        .is_some_and(|other| other.color == piece.color)
}

fn pawn_moves(piece: Piece, origin: &Position, board: &Board, mode: GenMode) -> Destinations {
    let mut moves = Destinations::new();
    let forward = piece.color.forward();

    if mode == GenMode::Candidates {
        if let Some(one) = origin.offset(0, forward) {
            if board.get_piece(&one).is_none() {
                moves.push(one);

                if origin.rank == piece.color.pawn_start_rank() {
                    if let Some(two) = origin.offset(0, 2 * forward) {
                        if board.get_piece(&two).is_none() {
                            moves.push(two);
                        }
                    }
                }
            }
        }
    }

    for file_offset in [-1, 1] {
        let Some(diagonal) = origin.offset(file_offset, forward) else {
            continue;
        };

        let enemy_piece = board
            .get_piece(&diagonal)
            .is_some_and(|target| target.color != piece.color);
        let en_passant = board.en_passant(&diagonal) == Some(piece.color.opposite());

        if enemy_piece || en_passant {
            moves.push(diagonal);
        }
    }

    moves
}

fn step_moves(
    piece: Piece,
    origin: &Position,
    board: &Board,
    offsets: &[(i32, i32)],
) -> Destinations {
    offsets
        .iter()
        .filter_map(|&(file_offset, rank_offset)| origin.offset(file_offset, rank_offset))
        .filter(|dst| !is_own(board, dst, &piece))
        .collect()
}

fn sliding_moves(
    piece: Piece,
    origin: &Position,
    board: &Board,
    directions: &[(i32, i32)],
) -> Destinations {
    let mut moves = Destinations::new();

    for &(file_dir, rank_dir) in directions {
        let mut current = *origin;

        while let Some(next) = current.offset(file_dir, rank_dir) {
            match board.get_piece(&next) {
                Some(target) => {
                    if target.color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
                None => moves.push(next),
            }
            current = next;
        }
    }

    moves
}

/// Drop king destinations that the opponent attacks once the king stands there.
/// The check runs on a scratch copy with the origin vacated and the
/// destination occupied, so the caller's board is never touched.
fn king_safe_moves(
    king: Piece,
    origin: &Position,
    board: &Board,
    candidates: Destinations,
) -> Destinations {
    let opponent = king.color.opposite();

    candidates
        .into_iter()
        .filter(|dst| {
            let mut scratch = board.clone();
            scratch.set_piece(origin, None);
            scratch.set_piece(dst, Some(king));
            !is_attacked(dst, opponent, &scratch)
        })
        .collect()
}
