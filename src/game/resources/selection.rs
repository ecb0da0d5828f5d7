//! Selection resource for tracking the selected square and its legal targets
//!
//! Holds two independent pieces of UI state:
//! - the **held selection** (set by click or drag start), and
//! - a **hover preview** (set by pointer hover), which is purely cosmetic and
//!   never promotes itself into a held selection.
//!
//! Targets are always recomputed from the game model through
//! [`legal_targets`]; nothing here caches them across position changes.

use crate::game::model::GameModel;
use crate::game::types::{MoveRecord, Square};

/// A destination square reachable from the selected origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub to: Square,
    pub is_capture: bool,
}

/// Transient targets shown while the pointer rests on a movable piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverPreview {
    pub origin: Square,
    pub targets: Vec<Target>,
}

/// Resource to store the currently selected square
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    selected_square: Option<Square>,
    possible_moves: Vec<Target>,
    hover: Option<HoverPreview>,
}

impl Selection {
    /// Replace any held selection with `square`; never merges with the old targets
    pub fn select(&mut self, square: Square, targets: Vec<Target>) {
        self.selected_square = Some(square);
        self.possible_moves = targets;
    }

    /// Drop the held selection, keeping any hover preview
    pub fn deselect(&mut self) {
        self.selected_square = None;
        self.possible_moves.clear();
    }

    /// Drop the held selection and the hover preview
    pub fn clear(&mut self) {
        self.deselect();
        self.hover = None;
    }

    pub fn is_selected(&self) -> bool {
        self.selected_square.is_some()
    }

    pub fn selected_square(&self) -> Option<Square> {
        self.selected_square
    }

    pub fn possible_moves(&self) -> &[Target] {
        &self.possible_moves
    }

    pub fn is_target(&self, square: Square) -> bool {
        self.possible_moves.iter().any(|t| t.to == square)
    }

    pub fn hover(&self) -> Option<&HoverPreview> {
        self.hover.as_ref()
    }

    pub fn set_hover(&mut self, preview: HoverPreview) {
        self.hover = Some(preview);
    }

    /// Clear the hover preview if it originates at `square`.
    ///
    /// Returns `true` when something was cleared.
    pub fn clear_hover_from(&mut self, square: Square) -> bool {
        if self.hover.as_ref().map(|h| h.origin) == Some(square) {
            self.hover = None;
            true
        } else {
            false
        }
    }
}

/// Collapse verbose candidate moves into distinct destination squares.
///
/// Keeps engine order; promotions produce one target per square.
pub fn targets_from_moves(moves: &[MoveRecord]) -> Vec<Target> {
    let mut targets: Vec<Target> = Vec::with_capacity(moves.len());
    for record in moves {
        match targets.iter_mut().find(|t| t.to == record.to) {
            Some(existing) => existing.is_capture |= record.is_capture(),
            None => targets.push(Target {
                to: record.to,
                is_capture: record.is_capture(),
            }),
        }
    }
    targets
}

/// Fresh legal targets for `square` in the model's current position
pub fn legal_targets<G: GameModel>(game: &G, square: Square) -> Vec<Target> {
    targets_from_moves(&game.moves_from(square))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Piece, PieceColor, PieceType};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn record(from: &str, to: &str, captured: Option<PieceType>, promotion: Option<PieceType>) -> MoveRecord {
        MoveRecord {
            from: sq(from),
            to: sq(to),
            piece: Piece {
                color: PieceColor::White,
                piece_type: PieceType::Pawn,
            },
            captured,
            promotion,
            san: String::new(),
        }
    }

    #[test]
    fn test_select_replaces_previous_targets() {
        let mut selection = Selection::default();
        selection.select(
            sq("e2"),
            vec![Target {
                to: sq("e4"),
                is_capture: false,
            }],
        );
        selection.select(
            sq("g1"),
            vec![Target {
                to: sq("f3"),
                is_capture: false,
            }],
        );

        assert_eq!(selection.selected_square(), Some(sq("g1")));
        assert!(!selection.is_target(sq("e4")));
        assert!(selection.is_target(sq("f3")));
    }

    #[test]
    fn test_deselect_keeps_hover() {
        let mut selection = Selection::default();
        selection.select(sq("e2"), Vec::new());
        selection.set_hover(HoverPreview {
            origin: sq("d2"),
            targets: Vec::new(),
        });

        selection.deselect();
        assert!(!selection.is_selected());
        assert!(selection.hover().is_some());

        selection.clear();
        assert!(selection.hover().is_none());
    }

    #[test]
    fn test_clear_hover_only_from_origin() {
        let mut selection = Selection::default();
        selection.set_hover(HoverPreview {
            origin: sq("d2"),
            targets: Vec::new(),
        });

        assert!(!selection.clear_hover_from(sq("e2")));
        assert!(selection.hover().is_some());
        assert!(selection.clear_hover_from(sq("d2")));
        assert!(selection.hover().is_none());
    }

    #[test]
    fn test_targets_deduplicate_promotions() {
        let moves = vec![
            record("b7", "a8", Some(PieceType::Rook), Some(PieceType::Queen)),
            record("b7", "a8", Some(PieceType::Rook), Some(PieceType::Rook)),
            record("b7", "b8", None, Some(PieceType::Queen)),
            record("b7", "b8", None, Some(PieceType::Knight)),
        ];

        let targets = targets_from_moves(&moves);
        assert_eq!(
            targets,
            vec![
                Target {
                    to: sq("a8"),
                    is_capture: true
                },
                Target {
                    to: sq("b8"),
                    is_capture: false
                },
            ]
        );
    }
}
