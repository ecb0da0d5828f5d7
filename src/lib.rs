//! Chess move interaction controller for play against a remote move service.
//!
//! A [`Session`] turns board gestures into validated moves, sends the
//! resulting position to the service, and applies the opponent's reply.
//!
//! ```rust,ignore
//! let config = ClientConfig::load("client.json")?;
//! let mut session = Session::with_http(ChessEngine::new(), my_board, &config)?;
//! session.start_new_game();
//!
//! // host event loop
//! session.on_square_click("e2".parse()?);
//! session.on_square_click("e4".parse()?);
//! for outcome in session.poll_replies() {
//!     tracing::debug!("{:?}", outcome);
//! }
//! ```

pub mod core;
pub mod game;
pub mod networking;
pub mod rendering;

pub use crate::core::{ClientConfig, DisplaySettings};
pub use game::{
    AIDifficulty, ChessEngine, GameModel, GestureReply, ReplyOutcome, Session,
};
pub use networking::{HttpMoveService, MoveService};
pub use rendering::{BoardView, Indicators};
