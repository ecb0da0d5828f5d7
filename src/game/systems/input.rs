//! Gesture handling
//!
//! The host's board widget forwards pointer gestures here. Every gesture is
//! checked against the model's current turn; nothing is cached between
//! gestures except the [`crate::game::resources::Selection`] itself.
//!
//! | Gesture                 | Idle                 | Selected                               |
//! |-------------------------|----------------------|----------------------------------------|
//! | drag start on own piece | select               | re-select                              |
//! | drop                    | try move             | try move                               |
//! | click own piece         | select               | re-select, or deselect if same square  |
//! | click target            | -                    | try move, deselect if refused          |
//! | click anything else     | no-op                | deselect                               |
//! | hover own piece         | preview              | preview                                |

use crate::game::model::GameModel;
use crate::game::resources::{legal_targets, HoverPreview};
use crate::game::session::Session;
use crate::game::types::{ChessMove, MoveRecord, Square};
use crate::rendering::BoardView;
use tracing::debug;

/// What the board widget should do with a dragged piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureReply {
    /// Keep the piece where it was dropped (or let the drag begin)
    Accept,
    /// Return the piece to its origin square (or refuse the drag)
    Snapback,
}

impl<G: GameModel, V: BoardView> Session<G, V> {
    /// Pointer pressed on a piece. Only pieces of the side to move can be dragged.
    pub fn on_drag_start(&mut self, square: Square) -> GestureReply {
        if !self.is_movable(square) {
            debug!("[INPUT] Drag refused on {}", square);
            return GestureReply::Snapback;
        }

        self.select_square(square);
        GestureReply::Accept
    }

    /// Piece dropped on `to`. An illegal drop leaves the selection untouched.
    pub fn on_drop(&mut self, from: Square, to: Square) -> GestureReply {
        if from == to {
            return GestureReply::Snapback;
        }

        match self.attempt_move(from, to) {
            Some(_) => GestureReply::Accept,
            None => {
                debug!("[INPUT] Illegal drop {} -> {}, snapping back", from, to);
                GestureReply::Snapback
            }
        }
    }

    pub fn on_square_click(&mut self, square: Square) {
        let selected = self.selection.selected_square();

        if selected == Some(square) {
            self.deselect();
            return;
        }

        if self.is_movable(square) {
            self.select_square(square);
            return;
        }

        let Some(from) = selected else {
            return;
        };

        if !self.selection.is_target(square) {
            self.deselect();
            return;
        }

        if self.attempt_move(from, square).is_none() {
            debug!("[INPUT] Move {} -> {} refused, deselecting", from, square);
            self.deselect();
        }
    }

    /// Show the targets of a movable piece under the pointer without selecting it
    pub fn on_mouseover_square(&mut self, square: Square) {
        if !self.is_movable(square) {
            return;
        }

        let targets = legal_targets(&self.game, square);
        self.selection.set_hover(HoverPreview {
            origin: square,
            targets,
        });
        self.refresh_indicators();
    }

    pub fn on_mouseout_square(&mut self, square: Square) {
        if self.selection.clear_hover_from(square) {
            self.refresh_indicators();
        }
    }

    /// Square holds a piece of the side to move in a game still in progress
    fn is_movable(&self, square: Square) -> bool {
        if self.game.is_game_over() {
            return false;
        }
        self.game
            .piece_at(square)
            .is_some_and(|piece| piece.color == self.game.turn())
    }

    fn select_square(&mut self, square: Square) {
        let targets = legal_targets(&self.game, square);
        debug!("[INPUT] Selected {} with {} targets", square, targets.len());
        self.selection.select(square, targets);
        self.refresh_indicators();
    }

    fn deselect(&mut self) {
        if self.selection.is_selected() {
            debug!("[INPUT] Selection cleared");
            self.selection.deselect();
            self.refresh_indicators();
        }
    }

    /// Try `from -> to` through the model and commit it if accepted
    fn attempt_move(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let mv = ChessMove::with_auto_queen(from, to, self.game.piece_at(from));
        let record = self.game.try_move(mv)?;
        self.commit_human_move(&record);
        Some(record)
    }
}
