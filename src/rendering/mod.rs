//! Rendering module - what the controller tells the board widget to show
//!
//! Drawing itself belongs to the host's widget behind [`BoardView`]; this
//! module only decides *what* is shown:
//! - [`effects::move_hints`] - legal target overlays
//! - [`effects::last_move`] - opponent move highlight
//! - [`view::Indicators`] - the combined overlay snapshot

pub mod effects;
pub mod view;

pub use effects::BotMoveHighlight;
pub use view::{BoardView, Indicators, NullView};
