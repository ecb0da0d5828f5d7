//! Error types for game module
//!
//! Provides custom error types for the game model: position loading and
//! coordinate parsing. Illegal moves are not errors; the model reports them
//! as `None` and the controller recovers silently.

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Text could not be parsed as FEN
    #[error("Invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },

    /// FEN parsed but describes a position the rules engine refuses
    #[error("Illegal position '{fen}': {message}")]
    IllegalPosition { fen: String, message: String },

    /// Text is not an algebraic square
    #[error("Invalid square: {text}")]
    InvalidSquare { text: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
