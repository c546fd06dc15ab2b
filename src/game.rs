use log::{debug, trace};

use crate::board::Board;
use crate::check::{classify, legal_destinations};
use crate::color::Color;
use crate::config::RulesConfig;
use crate::error::ChessError;
use crate::movegen::Destinations;
use crate::outcome::GameOutcome;
use crate::position::Position;
use crate::r#move::{CheckType, MoveRecord};

/// Where each king stands. Updated by the executor on every king move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KingLocations {
    white: Position,
    black: Position,
}

impl KingLocations {
    /// Scan the board once. Only used at setup.
    pub fn locate(board: &Board) -> Result<Self, ChessError> {
        let white = board.find_king(Color::White).ok_or(ChessError::MissingKing {
            color: Color::White,
        })?;
        let black = board.find_king(Color::Black).ok_or(ChessError::MissingKing {
            color: Color::Black,
        })?;
        Ok(KingLocations { white, black })
    }

    pub fn get(&self, color: Color) -> Position {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn set(&mut self, color: Color, pos: Position) {
        match color {
            Color::White => self.white = pos,
            Color::Black => self.black = pos,
        }
    }
}

/// Result of feeding one selected square into [`GameState::select_square`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A piece was picked up; these are the squares to highlight.
    Selected {
        origin: Position,
        destinations: Destinations,
    },
    /// A highlighted square was picked and the move was played.
    Moved(MoveRecord),
    /// A pending selection was dropped.
    Cancelled,
    /// Nothing to select: empty square, off-turn piece, no destinations or game over.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingSelection {
    origin: Position,
    destinations: Destinations,
}

#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    turn: Color,
    moves: Vec<MoveRecord>,
    kings: KingLocations,
    config: RulesConfig,

    selection: Option<PendingSelection>,
    outcome: Option<GameOutcome>,
}

impl GameState {
    pub fn standard() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        let board = Board::standard();
        let kings = KingLocations {
            white: Position::new(4, Color::White.back_rank()),
            black: Position::new(4, Color::Black.back_rank()),
        };
        GameState {
            board,
            turn: Color::White,
            moves: Vec::new(),
            kings,
            config,
            selection: None,
            outcome: None,
        }
    }

    /// Start from a FEN piece placement with `turn` to move.
    pub fn from_fen(fen: &str, turn: Color, config: RulesConfig) -> Result<Self, ChessError> {
        let board = Board::from_fen(fen)?;
        Self::from_board(board, turn, config)
    }

    pub fn from_board(board: Board, turn: Color, config: RulesConfig) -> Result<Self, ChessError> {
        let kings = KingLocations::locate(&board)?;
        Ok(GameState {
            board,
            turn,
            moves: Vec::new(),
            kings,
            config,
            selection: None,
            outcome: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Every executed move, oldest first.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Tracked square of the `color` king. After a king has been captured
    /// the loser's entry is stale and carries no meaning.
    pub fn king_location(&self, color: Color) -> Position {
        self.kings.get(color)
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn selected(&self) -> Option<Position> {
        self.selection.as_ref().map(|pending| pending.origin)
    }

    /// Squares to highlight for the pending selection.
    pub fn highlights(&self) -> &[Position] {
        self.selection
            .as_ref()
            .map(|pending| pending.destinations.as_slice())
            .unwrap_or(&[])
    }

    /// Destinations for the piece on `origin`. Empty when the square is empty,
    /// holds a piece of the side not to move, or the game is over.
    pub fn legal_destinations(&self, origin: &Position) -> Destinations {
        if self.is_over() {
            return Destinations::new();
        }

        match self.board.get_piece(origin) {
            Some(piece) if piece.color == self.turn => legal_destinations(
                &self.board,
                origin,
                &self.kings.get(self.turn),
                &self.config,
            ),
            _ => Destinations::new(),
        }
    }

    /// Every (origin, target) pair the side to move may play.
    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        let mut moves = Vec::new();

        for (origin, _piece) in self.board.pieces(self.turn) {
            for target in self.legal_destinations(&origin) {
                moves.push((origin, target));
            }
        }

        moves
    }

    /// [`GameState::select_square`] for raw coordinates.
    pub fn select(&mut self, file: usize, rank: usize) -> Result<Selection, ChessError> {
        let pos = Position::try_new(file, rank)?;
        self.select_square(pos)
    }

    /// Drive the pick-a-piece, pick-a-destination flow.
    ///
    /// With nothing pending, picking a movable piece of the side to move
    /// selects it. With a selection pending, picking a highlighted square plays
    /// the move, picking another own piece switches to it, and anything else
    /// drops the selection.
    pub fn select_square(&mut self, pos: Position) -> Result<Selection, ChessError> {
        if !pos.is_valid() {
            return Err(ChessError::OutOfBounds {
                file: pos.file,
                rank: pos.rank,
            });
        }

        if self.is_over() {
            self.selection = None;
            return Ok(Selection::Ignored);
        }

        let selection = match self.selection.take() {
            None => self.begin_selection(pos),
            Some(pending) if pending.destinations.contains(&pos) => {
                Selection::Moved(self.execute(pending.origin, pos)?)
            }
            Some(_) => {
                let own_piece = self
                    .board
                    .get_piece(&pos)
                    .is_some_and(|piece| piece.color == self.turn);

                if own_piece {
                    match self.begin_selection(pos) {
                        Selection::Ignored => Selection::Cancelled,
                        selected => selected,
                    }
                } else {
                    Selection::Cancelled
                }
            }
        };

        trace!("select {}: {:?}", pos, selection);
        Ok(selection)
    }

    fn begin_selection(&mut self, origin: Position) -> Selection {
        let destinations = self.legal_destinations(&origin);
        if destinations.is_empty() {
            return Selection::Ignored;
        }

        self.selection = Some(PendingSelection {
            origin,
            destinations: destinations.clone(),
        });

        Selection::Selected {
            origin,
            destinations,
        }
    }

    /// Play `origin` -> `target` and append the resulting record.
    ///
    /// `target` must come from [`GameState::legal_destinations`] for `origin`;
    /// that is the caller's job and is only checked in debug builds.
    pub fn execute(&mut self, origin: Position, target: Position) -> Result<MoveRecord, ChessError> {
        if self.is_over() {
            return Err(ChessError::GameOver);
        }
        if self.board.get_piece(&origin).is_none() {
            return Err(ChessError::EmptySquare { position: origin });
        }

        debug_assert!(
            self.legal_destinations(&origin).contains(&target),
            "{} -> {} is not a legal destination",
            origin,
            target
        );

        let change = self
            .board
            .make_move(&origin, &target)
            .ok_or(ChessError::EmptySquare { position: origin })?;
        let mover = change.moved.color;
        let opponent = mover.opposite();
        let mut record = MoveRecord::from_change(origin, target, &change);

        self.selection = None;

        if change.moved.is_king() {
            self.kings.set(mover, target);
        }

        if change.captured.is_some_and(|piece| piece.is_king()) {
            // Reachable when pinned pieces are not filtered or from a hand-built position
            self.outcome = Some(GameOutcome::checkmate_by(mover));
        } else {
            if !change.moved.is_king() || self.config.classify_king_moves {
                record.check = classify(
                    opponent,
                    &self.kings.get(opponent),
                    &self.board,
                    &self.config,
                );
            }

            if record.check == CheckType::Checkmate {
                self.outcome = Some(GameOutcome::checkmate_by(mover));
            }
        }

        self.turn = self.turn.opposite();
        self.moves.push(record);

        debug!("{} played {} ({:?})", mover, record, record.check);
        if let Some(outcome) = self.outcome {
            debug!("game over: {}", outcome);
        }

        Ok(record)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, is_over: {}, outcome: {:?})\n{}",
            self.turn,
            self.is_over(),
            self.outcome,
            self.board
        )
    }
}
