use log::trace;

use crate::attacks::{attackers, is_attacked};
use crate::board::Board;
use crate::color::Color;
use crate::config::RulesConfig;
use crate::movegen::{Destinations, GenMode, candidate_squares, generate_moves};
use crate::pieces::{Piece, PieceType};
use crate::position::Position;
use crate::r#move::CheckType;

/// Status of the `king_color` king standing on `king_square`.
///
/// With default rules checkmate only asks whether the king itself can step
/// to safety. A check that could be blocked or answered by capturing the
/// checker with another piece is still reported as checkmate; set
/// [`RulesConfig::full_mate_search`] to consider every friendly move.
pub fn classify(
    king_color: Color,
    king_square: &Position,
    board: &Board,
    rules: &RulesConfig,
) -> CheckType {
    let opponent = king_color.opposite();

    if !is_attacked(king_square, opponent, board) {
        return CheckType::None;
    }

    trace!(
        "{} king on {} attacked from {:?}",
        king_color,
        king_square,
        attackers(king_square, opponent, board)
    );

    let has_escape = if rules.full_mate_search {
        board.pieces(king_color).into_iter().any(|(origin, _)| {
            candidate_squares(board, &origin)
                .iter()
                .any(|dst| !exposes_king(board, &origin, dst, king_square))
        })
    } else {
        let king = Piece::new(PieceType::King, king_color);
        !generate_moves(king, king_square, board, GenMode::Candidates).is_empty()
    };

    if has_escape {
        CheckType::Check
    } else {
        CheckType::Checkmate
    }
}

/// Destinations a player may pick for the piece on `origin`.
///
/// Kings are always kept out of attacked squares. Other pieces are only
/// filtered for pins when [`RulesConfig::filter_pinned_moves`] is set;
/// `king_square` is the tracked location of the mover's king.
pub fn legal_destinations(
    board: &Board,
    origin: &Position,
    king_square: &Position,
    rules: &RulesConfig,
) -> Destinations {
    let candidates = candidate_squares(board, origin);

    let filter = rules.filter_pinned_moves
        && board.get_piece(origin).is_some_and(|piece| !piece.is_king());
    if !filter {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|dst| !exposes_king(board, origin, dst, king_square))
        .collect()
}

/// Play the move on a scratch board and report whether the mover's king is attacked afterwards.
fn exposes_king(board: &Board, origin: &Position, target: &Position, king_square: &Position) -> bool {
    let mut scratch = board.clone();
    let Some(change) = scratch.make_move(origin, target) else {
        return false;
    };

    let king_now = if change.moved.is_king() {
        *target
    } else {
        *king_square
    };
    is_attacked(&king_now, change.moved.color.opposite(), &scratch)
}
