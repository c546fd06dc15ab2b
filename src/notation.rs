//! Long algebraic rendering of the move log, e.g. `3. Ng1-f3+`.

use crate::r#move::{CastleType, CheckType, MoveFlags, MoveRecord};

/// Render one record as `<ordinal>. <piece><from><x|-><to><suffix>`.
///
/// Castles render as `0-0` / `0-0-0` on their own.
pub fn encode(record: &MoveRecord, ordinal: usize) -> String {
    match record.castle {
        CastleType::KingSide => return "0-0".to_string(),
        CastleType::QueenSide => return "0-0-0".to_string(),
        CastleType::None => {}
    }

    let flags = record.flags();
    let separator = if flags.contains(MoveFlags::CAPTURE) {
        'x'
    } else {
        '-'
    };

    let mut text = format!(
        "{}. {}{}{}{}",
        ordinal,
        record.piece.piece_type.notation_letter(),
        record.origin,
        separator,
        record.target
    );

    if flags.contains(MoveFlags::EN_PASSANT) {
        text.push_str(" e.p.");
    }

    match record.check {
        CheckType::None => {}
        CheckType::Check => text.push('+'),
        CheckType::Checkmate => text.push('#'),
    }

    text
}

/// Render a whole log, numbering plies from 1.
pub fn encode_log(records: &[MoveRecord]) -> Vec<String> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| encode(record, index + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::pieces::{Piece, PieceType};
    use crate::position::Position;

    fn pos(s: &str) -> Position {
        Position::from_algebraic(s).expect("valid square")
    }

    fn record(piece_type: PieceType, from: &str, to: &str) -> MoveRecord {
        MoveRecord::new(pos(from), pos(to), Piece::new(piece_type, Color::White))
    }

    #[test]
    fn test_quiet_moves() {
        assert_eq!(encode(&record(PieceType::Pawn, "e2", "e4"), 1), "1. Pe2-e4");
        assert_eq!(encode(&record(PieceType::Knight, "g1", "f3"), 3), "3. Ng1-f3");
    }

    #[test]
    fn test_display_rank_is_flipped_from_index() {
        let quiet = MoveRecord::new(
            Position::new(0, 0),
            Position::new(7, 7),
            Piece::new(PieceType::Bishop, Color::Black),
        );
        assert_eq!(encode(&quiet, 9), "9. Ba8-h1");
    }

    #[test]
    fn test_suffixes() {
        let capture = MoveRecord {
            captured: Some(Piece::new(PieceType::Pawn, Color::Black)),
            ..record(PieceType::Queen, "d1", "d7")
        };
        assert_eq!(encode(&capture, 5), "5. Qd1xd7");

        let en_passant = MoveRecord {
            captured: Some(Piece::new(PieceType::Pawn, Color::Black)),
            is_en_passant: true,
            ..record(PieceType::Pawn, "e5", "d6")
        };
        assert_eq!(encode(&en_passant, 7), "7. Pe5xd6 e.p.");

        let check = MoveRecord {
            check: CheckType::Check,
            ..record(PieceType::Bishop, "f1", "b5")
        };
        assert_eq!(encode(&check, 4), "4. Bf1-b5+");

        let mate = MoveRecord {
            captured: Some(Piece::new(PieceType::Pawn, Color::Black)),
            check: CheckType::Checkmate,
            ..record(PieceType::Queen, "h5", "f7")
        };
        assert_eq!(encode(&mate, 7), "7. Qh5xf7#");

        let both = MoveRecord {
            check: CheckType::Check,
            ..en_passant
        };
        assert_eq!(encode(&both, 9), "9. Pe5xd6 e.p.+");
    }

    #[test]
    fn test_castles() {
        let king_side = MoveRecord {
            castle: CastleType::KingSide,
            ..record(PieceType::King, "e1", "g1")
        };
        let queen_side = MoveRecord {
            castle: CastleType::QueenSide,
            ..record(PieceType::King, "e1", "c1")
        };
        assert_eq!(encode(&king_side, 10), "0-0");
        assert_eq!(encode(&queen_side, 12), "0-0-0");
    }

    #[test]
    fn test_encode_log_numbers_plies() {
        let log = [
            record(PieceType::Pawn, "e2", "e4"),
            MoveRecord::new(
                pos("e7"),
                pos("e5"),
                Piece::new(PieceType::Pawn, Color::Black),
            ),
        ];
        assert_eq!(encode_log(&log), vec!["1. Pe2-e4", "2. Pe7-e5"]);
        assert!(encode_log(&[]).is_empty());
    }
}
