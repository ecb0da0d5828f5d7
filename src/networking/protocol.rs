//! Wire contract with the move service
//!
//! ```text
//! GET  {base}/api/new_game                  -> {"fen": "..."}
//! POST {base}/api/move  {"fen": "...", "depth": 3}
//!                                           -> {"fen": "...", "move": "g8f6"}
//! ```
//!
//! `move` is optional and informational; the position in `fen` is the only
//! thing the session trusts.

use crate::game::types::ChessMove;
use crate::networking::error::{ServiceError, ServiceResult};
use serde::{Deserialize, Serialize};
use shakmaty::fen::Fen;
use tracing::debug;

/// Body of a move-computation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub fen: String,
    pub depth: u32,
}

/// Body of both endpoints' success replies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionReply {
    pub fen: String,

    /// Opponent move in UCI, when the service reports it
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub uci: Option<String>,
}

impl PositionReply {
    pub fn new(fen: impl Into<String>) -> Self {
        Self {
            fen: fen.into(),
            uci: None,
        }
    }

    /// Check the reply against the contract.
    ///
    /// `fen` must parse as FEN. An unparseable `move` is dropped rather than
    /// failing the whole reply.
    pub fn validate(mut self) -> ServiceResult<Self> {
        if self.fen.trim().is_empty() {
            return Err(ServiceError::MalformedReply {
                reason: "empty fen".to_string(),
            });
        }

        self.fen
            .trim()
            .parse::<Fen>()
            .map_err(|e| ServiceError::MalformedReply {
                reason: format!("fen '{}': {}", self.fen, e),
            })?;

        if let Some(uci) = &self.uci {
            if ChessMove::from_uci(uci).is_none() {
                debug!("[NETWORK] Ignoring unparseable move field '{}'", uci);
                self.uci = None;
            }
        }

        Ok(self)
    }

    /// The reported opponent move, if present and well-formed
    pub fn reported_move(&self) -> Option<ChessMove> {
        self.uci.as_deref().and_then(ChessMove::from_uci)
    }

    /// Decode a success body and validate it
    pub fn from_slice(body: &[u8]) -> ServiceResult<Self> {
        let reply: PositionReply =
            serde_json::from_slice(body).map_err(|e| ServiceError::MalformedReply {
                reason: e.to_string(),
            })?;
        reply.validate()
    }
}
