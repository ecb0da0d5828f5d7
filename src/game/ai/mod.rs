//! Remote opponent
//!
//! The opponent is whatever answers the move service. This module holds its
//! strength presets and the request/reply half of the session:
//!
//! 1. Human move committed, selection cleared, position redrawn
//! 2. Pending guard and game-over check
//! 3. `{fen, depth}` sent on a spawned task, thinking indicator on
//! 4. Reply matched by ticket, loaded into the model, highlight recovered
//!
//! Failures keep the human's move on the board and only log.

pub mod resource;
pub mod systems;

pub use resource::{AIDifficulty, MIN_DEPTH};
