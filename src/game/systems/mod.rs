//! Gesture systems
//!
//! - [`input`] - drag, drop, click and hover handlers on [`crate::game::Session`]
//!
//! Handlers mutate the selection, push indicators to the view, and hand
//! accepted moves to the opponent round trip in [`crate::game::ai`].

pub mod input;

pub use input::GestureReply;
