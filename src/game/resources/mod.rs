//! Session resources - the controller's owned state
//!
//! # Resource Categories
//!
//! ## Rules
//! - [`ChessEngine`] - shakmaty-backed [`crate::game::GameModel`]
//!
//! ## Player Interaction
//! - [`Selection`] - Selected square, its legal targets and the hover preview
//!
//! ## Remote Opponent
//! - [`RequestState`] - Ticketed in-flight request tracking
//!
//! Exactly one of each lives inside a [`crate::game::Session`]; nothing here
//! is global.

pub mod engine;
pub mod pending;
pub mod selection;

pub use engine::*;
pub use pending::*;
pub use selection::*;
