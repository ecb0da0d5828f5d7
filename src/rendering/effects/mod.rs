//! Visual effects computed from session state
//!
//! - Move hints for selected and hovered pieces
//! - Last opponent move highlighting

pub mod last_move;
pub mod move_hints;

pub use last_move::*;
pub use move_hints::*;
