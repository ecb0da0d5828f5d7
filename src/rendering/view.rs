//! The board view seam
//!
//! The controller never draws. It pushes three things to whatever widget the
//! host embeds: the position to show, the indicator overlays, and whether the
//! opponent is thinking. Gestures travel the other way through the
//! `Session::on_*` handlers.

use crate::core::DisplaySettings;
use crate::game::resources::{Selection, Target};
use crate::game::types::Square;
use crate::rendering::effects::{hover_hints, last_move_overlay, move_hints, BotMoveHighlight};

/// Everything the view overlays on top of the pieces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Indicators {
    pub selected: Option<Square>,
    pub move_hints: Vec<Target>,
    pub hover_origin: Option<Square>,
    pub hover_hints: Vec<Target>,
    pub last_move: Option<BotMoveHighlight>,
}

impl Indicators {
    pub fn build(
        selection: &Selection,
        bot_move: Option<BotMoveHighlight>,
        settings: &DisplaySettings,
    ) -> Self {
        let hover_hints = hover_hints(selection, settings);
        Self {
            selected: selection.selected_square(),
            move_hints: move_hints(selection, settings),
            hover_origin: if hover_hints.is_empty() {
                None
            } else {
                selection.hover().map(|h| h.origin)
            },
            hover_hints,
            last_move: last_move_overlay(bot_move, settings),
        }
    }

    /// No selection, hint or highlight is drawn
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
            && self.move_hints.is_empty()
            && self.hover_hints.is_empty()
            && self.last_move.is_none()
    }
}

/// Board-rendering collaborator driven by the session
pub trait BoardView {
    /// Force a redraw of `fen`
    fn set_position(&mut self, fen: &str);

    /// Replace all overlays with `indicators`
    fn set_indicators(&mut self, indicators: &Indicators);

    /// Show or hide the "thinking" indicator
    fn set_thinking(&mut self, thinking: bool);
}

/// View that discards everything, for headless sessions
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl BoardView for NullView {
    fn set_position(&mut self, _fen: &str) {}

    fn set_indicators(&mut self, _indicators: &Indicators) {}

    fn set_thinking(&mut self, _thinking: bool) {}
}
