//! The game model seam
//!
//! The controller owns no chess rules. Everything it needs to know about the
//! position (legality, turn, occupancy, history) goes through [`GameModel`].
//! [`crate::game::resources::ChessEngine`] is the shipped implementation.

use crate::game::error::GameResult;
use crate::game::types::{ChessMove, MoveRecord, Piece, PieceColor, Square};

/// Authoritative game state consumed by the session controller
pub trait GameModel {
    /// Replace the current position with `fen`.
    ///
    /// Implementations must keep [`GameModel::history`] consistent: when the
    /// new position is reachable from the current one by a single legal move,
    /// that move is appended; otherwise history restarts from the loaded
    /// position. On error the previous state is untouched.
    fn load(&mut self, fen: &str) -> GameResult<()>;

    /// Apply `mv` if legal, returning its record. `None` leaves state untouched.
    fn try_move(&mut self, mv: ChessMove) -> Option<MoveRecord>;

    /// Legal moves originating at `square` for the side to move, in engine order
    fn moves_from(&self, square: Square) -> Vec<MoveRecord>;

    fn turn(&self) -> PieceColor;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Moves played since the last unrelated load, oldest first
    fn history(&self) -> &[MoveRecord];

    /// Canonical FEN of the current position
    fn fen(&self) -> String;

    /// Checkmate, stalemate or insufficient material
    fn is_game_over(&self) -> bool;
}
