//! Chess game module - interaction controller for a remote opponent
//!
//! Separates the rules (behind [`GameModel`]) from the interaction state the
//! controller owns. The rules engine is authoritative for legality; the remote
//! service is authoritative for the opponent's moves.
//!
//! # Module Organization
//!
//! - `types` - Squares, pieces, moves and history records
//! - `model` - The [`GameModel`] trait the controller consumes
//! - `resources` - shakmaty engine, selection state, request tickets
//! - `session` - [`Session`]: construction, reset, reply delivery
//! - `systems` - Gesture handlers (drag, drop, click, hover)
//! - `ai` - Opponent request/reply and difficulty presets
//!
//! # Control Flow
//!
//! 1. Gesture → selection, validated against the model
//! 2. Accepted move → model updated, view redrawn
//! 3. Request sent on a spawned task, thinking indicator on
//! 4. Reply delivered → model loaded, view redrawn, selection reset

pub mod ai;
pub mod error;
pub mod model;
pub mod resources;
pub mod session;
pub mod systems;
pub mod types;

pub use ai::AIDifficulty;
pub use error::{GameError, GameResult};
pub use model::GameModel;
pub use resources::ChessEngine;
pub use session::{ReplyOutcome, Session};
pub use systems::GestureReply;
