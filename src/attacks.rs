use crate::board::Board;
use crate::color::Color;
use crate::movegen::{GenMode, generate_moves};
use crate::position::Position;

/// Whether any piece of `by_color` attacks `target`.
///
/// Uses attack generation only, so pawn pushes never count and kings are not
/// filtered for their own safety. A pawn attacks a diagonal square only when
/// something capturable stands there.
pub fn is_attacked(target: &Position, by_color: Color, board: &Board) -> bool {
    board
        .pieces(by_color)
        .into_iter()
        .any(|(pos, piece)| generate_moves(piece, &pos, board, GenMode::AttacksOnly).contains(target))
}

/// Every square of `by_color` that attacks `target`.
pub fn attackers(target: &Position, by_color: Color, board: &Board) -> Vec<Position> {
    board
        .pieces(by_color)
        .into_iter()
        .filter(|(pos, piece)| {
            generate_moves(*piece, pos, board, GenMode::AttacksOnly).contains(target)
        })
        .map(|(pos, _)| pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Piece, PieceType};

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).expect("valid square")
    }

    #[test]
    fn test_empty_board_is_never_attacked() {
        let board = Board::empty();
        for target in Position::all() {
            assert!(!is_attacked(&target, Color::White, &board));
            assert!(!is_attacked(&target, Color::Black, &board));
        }
    }

    #[test]
    fn test_rook_attacks() {
        let mut board = Board::empty();
        board.set_piece(&pos("e5"), Some(Piece::new(PieceType::Rook, Color::White)));

        assert!(is_attacked(&pos("e1"), Color::White, &board));
        assert!(is_attacked(&pos("a5"), Color::White, &board));
        assert!(!is_attacked(&pos("f6"), Color::White, &board));
        assert!(!is_attacked(&pos("e1"), Color::Black, &board));

        // A black blocker on e7 shadows e8 but is itself attacked
        board.set_piece(&pos("e7"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        assert!(is_attacked(&pos("e7"), Color::White, &board));
        assert!(!is_attacked(&pos("e8"), Color::White, &board));
    }

    #[test]
    fn test_pawn_forward_step_is_not_an_attack() {
        let board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3").expect("valid fen");
        assert!(!is_attacked(&pos("e3"), Color::White, &board));
        assert!(!is_attacked(&pos("e4"), Color::White, &board));
    }

    #[test]
    fn test_pawn_attacks_occupied_diagonal() {
        let board = Board::from_fen("4k3/8/8/8/8/3n4/4P3/4K3").expect("valid fen");
        assert!(is_attacked(&pos("d3"), Color::White, &board));
        assert!(!is_attacked(&pos("f3"), Color::White, &board));
    }

    #[test]
    fn test_attackers_lists_every_source() {
        // Knight on d3 and rook on h1 both hit e1
        let board = Board::from_fen("4k3/8/8/8/8/3n4/8/R3K2r").expect("valid fen");
        assert_eq!(
            attackers(&pos("e1"), Color::Black, &board),
            vec![pos("d3"), pos("h1")]
        );
        assert!(attackers(&pos("e1"), Color::White, &board).is_empty());
    }
}
