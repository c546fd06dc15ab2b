use crate::board::Board;
use crate::position::Position;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize Position as algebraic text (`e4`)
impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_algebraic())
    }
}

/// Deserialize Position from algebraic text
impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Position::from_algebraic(&text).map_err(serde::de::Error::custom)
    }
}

/// Serialize Board as a FEN piece placement. En-passant markers are not kept.
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_fen())
    }
}

/// Deserialize Board from a FEN piece placement
impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fen = String::deserialize(deserializer)?;
        Board::from_fen(&fen).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::game::GameState;
    use crate::r#move::{CheckType, MoveRecord};

    #[test]
    fn test_position_serde() {
        let json = serde_json::to_string(&Position::new(4, 6)).unwrap();
        assert_eq!(json, "\"e2\"");

        let pos: Position = serde_json::from_str("\"h8\"").unwrap();
        assert_eq!(pos, Position::new(7, 0));

        assert!(serde_json::from_str::<Position>("\"z9\"").is_err());
    }

    #[test]
    fn test_board_serde() {
        let board = Board::standard();
        let json = serde_json::to_string(&board).unwrap();
        let board2: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, board2);
    }

    #[test]
    fn test_move_record_serde() {
        let mut game = GameState::standard();
        let record = game
            .execute(Position::new(4, 6), Position::new(4, 4))
            .unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"origin\":\"e2\""));
        assert!(json.contains("\"target\":\"e4\""));

        let record2: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, record2);
        assert_eq!(record2.check, CheckType::None);
        assert_eq!(record2.piece.color, Color::White);
    }
}
