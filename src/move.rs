use crate::board::BoardChange;
use crate::pieces::Piece;
use crate::position::Position;
use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        const CAPTURE = 0b00000001;
        const DOUBLE_PUSH = 0b00000010;
        const EN_PASSANT = 0b00000100;
        const CASTLE = 0b00001000;
        const CHECK = 0b00010000;
        const CHECKMATE = 0b00100000;
    }
}

/// Castling slot. No generator produces castles yet, so records always hold `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastleType {
    #[default]
    None,
    KingSide,
    QueenSide,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckType {
    #[default]
    None,
    Check,
    Checkmate,
}

/// One executed move, as appended to the game log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub origin: Position,
    pub target: Position,
    /// The moving piece as it was before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub castle: CastleType,
    pub check: CheckType,
}

impl MoveRecord {
    pub fn new(origin: Position, target: Position, piece: Piece) -> Self {
        MoveRecord {
            origin,
            target,
            piece,
            captured: None,
            is_en_passant: false,
            castle: CastleType::None,
            check: CheckType::None,
        }
    }

    pub(crate) fn from_change(origin: Position, target: Position, change: &BoardChange) -> Self {
        MoveRecord {
            captured: change.captured,
            is_en_passant: change.en_passant,
            ..MoveRecord::new(origin, target, change.moved)
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_double_push(&self) -> bool {
        self.piece.is_pawn() && self.origin.rank.abs_diff(self.target.rank) == 2
    }

    pub fn flags(&self) -> MoveFlags {
        let mut flags = MoveFlags::empty();

        if self.is_capture() {
            flags |= MoveFlags::CAPTURE;
        }
        if self.is_double_push() {
            flags |= MoveFlags::DOUBLE_PUSH;
        }
        if self.is_en_passant {
            flags |= MoveFlags::EN_PASSANT;
        }
        if self.castle != CastleType::None {
            flags |= MoveFlags::CASTLE;
        }
        match self.check {
            CheckType::None => {}
            CheckType::Check => flags |= MoveFlags::CHECK,
            CheckType::Checkmate => flags |= MoveFlags::CHECKMATE,
        }

        flags
    }

    /// Origin and target squares, e.g. `e2e4`.
    pub fn to_lan(&self) -> String {
        format!("{}{}", self.origin.to_algebraic(), self.target.to_algebraic())
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lan())
    }
}
