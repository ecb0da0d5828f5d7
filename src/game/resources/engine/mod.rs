//! Chess engine resource
//!
//! Wraps the rules engine behind the [`crate::game::GameModel`] seam.

pub mod engine;

pub use engine::*;
