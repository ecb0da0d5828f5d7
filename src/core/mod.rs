//! Core module - configuration, errors and logging setup
//!
//! - [`ClientConfig`] - Service location, default depth, display preferences
//! - [`DisplaySettings`] - Move hint / last move overlay toggles
//! - [`CoreError`] - Config loading failures
//! - [`logging::init_logging`] - Optional fmt subscriber for hosts

pub mod error;
pub mod logging;
pub mod resources;

pub use error::{CoreError, CoreResult};
pub use resources::*;
