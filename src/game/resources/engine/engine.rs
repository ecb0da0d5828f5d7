//! Chess engine resource - shakmaty-backed game model
//!
//! This module provides the `ChessEngine` resource that wraps shakmaty's
//! `Chess` position, making it the single source of truth for all chess logic
//! the controller consults.
//!
//! # Architecture
//!
//! The engine is authoritative for:
//! - Move validation
//! - Legal move generation
//! - Checkmate / stalemate detection
//! - FEN import and export
//!
//! The session controller is used for:
//! - User interaction (click, drag, hover handling, selection)
//! - Talking to the remote opponent
//! - Pushing positions and indicators to the board view
//!
//! # History
//!
//! shakmaty positions carry no move history, so the engine keeps its own list
//! of [`MoveRecord`]s. Loading a FEN that is exactly one legal move ahead of
//! the current position appends that move; anything else restarts history.
//! The opponent-move highlight is recovered from that one-entry diff.
//!
//! # Coordinate System
//!
//! - **Controller coordinates**: [`Square`] with 0-indexed file and rank
//! - **Engine coordinates**: `shakmaty::Square`, index = rank * 8 + file
//! - Conversion helpers: `square_to_engine()` and `square_from_engine()`

use crate::game::error::{GameError, GameResult};
use crate::game::model::GameModel;
use crate::game::types::{ChessMove, MoveRecord, Piece, PieceColor, PieceType, Square};
use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role};
use tracing::debug;

/// Chess engine resource - Single source of truth for chess game state
///
/// # Usage
///
/// ```rust,ignore
/// let mut engine = ChessEngine::default();
/// let e2 = "e2".parse()?;
/// let e4 = "e4".parse()?;
/// assert!(engine.try_move(ChessMove::new(e2, e4)).is_some());
/// assert_eq!(engine.turn(), PieceColor::Black);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChessEngine {
    /// The underlying shakmaty position
    position: Chess,
    /// Moves played since the last unrelated load
    history: Vec<MoveRecord>,
}

impl ChessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine positioned at `fen` with empty history
    pub fn from_fen(fen: &str) -> GameResult<Self> {
        Ok(Self {
            position: Self::parse_position(fen)?,
            history: Vec::new(),
        })
    }

    /// Convert a controller square to the engine's square type
    #[inline]
    pub fn square_to_engine(square: Square) -> shakmaty::Square {
        shakmaty::Square::from_coords(
            shakmaty::File::new(u32::from(square.file.index())),
            shakmaty::Rank::new(u32::from(square.rank.index())),
        )
    }

    /// Convert an engine square back to a controller square
    ///
    /// Engine squares are always on the board, so `None` never happens in
    /// practice; it only keeps the conversion free of panics.
    #[inline]
    pub fn square_from_engine(square: shakmaty::Square) -> Option<Square> {
        let index = u32::from(square);
        Square::new(u8::try_from(index % 8).ok()?, u8::try_from(index / 8).ok()?)
    }

    #[inline]
    pub fn color_from_engine(color: Color) -> PieceColor {
        match color {
            Color::White => PieceColor::White,
            Color::Black => PieceColor::Black,
        }
    }

    #[inline]
    pub fn role_from_engine(role: Role) -> PieceType {
        match role {
            Role::Pawn => PieceType::Pawn,
            Role::Knight => PieceType::Knight,
            Role::Bishop => PieceType::Bishop,
            Role::Rook => PieceType::Rook,
            Role::Queen => PieceType::Queen,
            Role::King => PieceType::King,
        }
    }

    fn parse_position(fen: &str) -> GameResult<Chess> {
        let parsed: Fen = fen.trim().parse().map_err(|e: shakmaty::fen::ParseFenError| {
            GameError::InvalidFen {
                fen: fen.to_string(),
                message: e.to_string(),
            }
        })?;

        parsed
            .into_position(CastlingMode::Standard)
            .map_err(|e| GameError::IllegalPosition {
                fen: fen.to_string(),
                message: e.to_string(),
            })
    }

    fn render_fen(position: &Chess) -> String {
        Fen::from_position(position, EnPassantMode::Legal).to_string()
    }

    /// Placement, side to move, castling rights and en passant square.
    /// Move counters are left out so a service that counts differently still
    /// matches.
    fn position_key(position: &Chess) -> String {
        Self::render_fen(position)
            .split_whitespace()
            .take(4)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Controller-facing description of a legal engine move.
    ///
    /// Castling is described king-to-destination (`e1g1`), the way users drag it.
    fn describe(position: &Chess, m: &Move) -> Option<MoveRecord> {
        let UciMove::Normal {
            from,
            to,
            promotion,
        } = m.to_uci(CastlingMode::Standard)
        else {
            return None;
        };

        Some(MoveRecord {
            from: Self::square_from_engine(from)?,
            to: Self::square_from_engine(to)?,
            piece: Piece {
                color: Self::color_from_engine(position.turn()),
                piece_type: Self::role_from_engine(m.role()),
            },
            captured: m.capture().map(Self::role_from_engine),
            promotion: promotion.map(Self::role_from_engine),
            san: San::from_move(position, m.clone()).to_string(),
        })
    }

    fn matches(candidate: &Move, wanted: ChessMove) -> bool {
        let UciMove::Normal {
            from,
            to,
            promotion,
        } = candidate.to_uci(CastlingMode::Standard)
        else {
            return false;
        };

        if Self::square_from_engine(from) != Some(wanted.from)
            || Self::square_from_engine(to) != Some(wanted.to)
        {
            return false;
        }

        match promotion {
            Some(role) => wanted.promotion == Some(Self::role_from_engine(role)),
            None => true,
        }
    }

    /// Find the single legal move that turns the current position into `next`
    fn find_successor(&self, next: &Chess) -> Option<MoveRecord> {
        let target = Self::position_key(next);

        self.position.legal_moves().into_iter().find_map(|m| {
            let mut after = self.position.clone();
            after.play_unchecked(m.clone());
            if Self::position_key(&after) == target {
                Self::describe(&self.position, &m)
            } else {
                None
            }
        })
    }
}

impl GameModel for ChessEngine {
    fn load(&mut self, fen: &str) -> GameResult<()> {
        let next = Self::parse_position(fen)?;

        match self.find_successor(&next) {
            Some(record) => {
                debug!(
                    "[ENGINE] Loaded position continues history with {} ({}->{})",
                    record.san, record.from, record.to
                );
                self.history.push(record);
            }
            None => {
                debug!("[ENGINE] Loaded unrelated position, history restarted");
                self.history.clear();
            }
        }

        self.position = next;
        Ok(())
    }

    fn try_move(&mut self, mv: ChessMove) -> Option<MoveRecord> {
        let chosen = self
            .position
            .legal_moves()
            .into_iter()
            .find(|m| Self::matches(m, mv))?;

        let record = Self::describe(&self.position, &chosen)?;
        self.position.play_unchecked(chosen);
        self.history.push(record.clone());
        Some(record)
    }

    fn moves_from(&self, square: Square) -> Vec<MoveRecord> {
        let origin = Self::square_to_engine(square);

        self.position
            .legal_moves()
            .into_iter()
            .filter(|m| m.from() == Some(origin))
            .filter_map(|m| Self::describe(&self.position, &m))
            .collect()
    }

    fn turn(&self) -> PieceColor {
        Self::color_from_engine(self.position.turn())
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position
            .board()
            .piece_at(Self::square_to_engine(square))
            .map(|piece| Piece {
                color: Self::color_from_engine(piece.color),
                piece_type: Self::role_from_engine(piece.role),
            })
    }

    fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    fn fen(&self) -> String {
        Self::render_fen(&self.position)
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }
}
