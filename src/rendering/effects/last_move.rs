//! Last opponent move highlighting
//!
//! Highlights the from/to squares of the most recent remote move when
//! `highlight_last_move` is enabled. The move itself is never re-derived from
//! the rules; it is read off the game history after the service's position
//! has been loaded.

use crate::core::DisplaySettings;
use crate::game::types::{ChessMove, MoveRecord, Square};

/// The most recently applied remote move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BotMoveHighlight {
    pub from: Square,
    pub to: Square,
}

impl BotMoveHighlight {
    /// Recover the opponent's move by diffing history length around a load.
    ///
    /// Only a history that grew by exactly one entry identifies a move; any
    /// other shape (restart, no change) yields `None`.
    pub fn from_history_diff(before: usize, history: &[MoveRecord]) -> Option<Self> {
        if history.len() != before + 1 {
            return None;
        }
        history.last().map(|record| Self {
            from: record.from,
            to: record.to,
        })
    }
}

impl From<ChessMove> for BotMoveHighlight {
    fn from(mv: ChessMove) -> Self {
        Self {
            from: mv.from,
            to: mv.to,
        }
    }
}

/// Highlight to draw, honoring the display setting
pub fn last_move_overlay(
    highlight: Option<BotMoveHighlight>,
    settings: &DisplaySettings,
) -> Option<BotMoveHighlight> {
    highlight.filter(|_| settings.highlight_last_move)
}
