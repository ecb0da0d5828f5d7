//! Opponent move round trip
//!
//! After a human move is committed the session asks the service for a reply
//! to the new position. The service's FEN is authoritative: it is loaded into
//! the model wholesale, and the opponent's move is recovered afterwards by
//! diffing the model's history, falling back to the reply's `move` field.

use super::resource::{AIDifficulty, MIN_DEPTH};
use crate::game::model::GameModel;
use crate::game::resources::RequestTicket;
use crate::game::session::{ReplyOutcome, ServiceCall, Session};
use crate::game::types::MoveRecord;
use crate::networking::{FailureKind, MoveRequest, PositionReply, ServiceResult};
use crate::rendering::{BoardView, BotMoveHighlight};
use tracing::{debug, info, warn};

impl<G: GameModel, V: BoardView> Session<G, V> {
    /// Search depth for subsequent requests; values below 1 are raised to 1
    pub fn set_depth(&mut self, depth: u32) {
        let depth = depth.max(MIN_DEPTH);
        if depth != self.depth {
            info!("[OPPONENT] Search depth {} -> {}", self.depth, depth);
        }
        self.depth = depth;
    }

    pub fn set_difficulty(&mut self, difficulty: AIDifficulty) {
        info!("[OPPONENT] Difficulty: {}", difficulty.description());
        self.set_depth(difficulty.depth());
    }

    /// Preset matching the current depth, if any
    pub fn difficulty(&self) -> Option<AIDifficulty> {
        AIDifficulty::from_depth(self.depth)
    }

    /// Finish a human move the model already accepted: clear the selection,
    /// show the new position, then ask for the opponent's reply.
    pub(crate) fn commit_human_move(&mut self, record: &MoveRecord) -> Option<RequestTicket> {
        info!(
            "[INPUT] Human played {} ({} -> {})",
            record.san, record.from, record.to
        );
        self.selection.clear();
        self.redraw();
        self.make_ai_move()
    }

    /// Ask the service to move in the current position.
    ///
    /// Returns `None` without sending anything while another opponent request
    /// is in flight or when the game is over.
    pub fn make_ai_move(&mut self) -> Option<RequestTicket> {
        if let Some(in_flight) = self.requests.opponent_ticket() {
            debug!(
                "[OPPONENT] Request {} still pending, not sending another",
                in_flight
            );
            return None;
        }

        if self.game.is_game_over() {
            info!("[OPPONENT] Game over, no opponent move requested");
            return None;
        }

        let ticket = self.requests.begin_opponent()?;
        let request = MoveRequest {
            fen: self.game.fen(),
            depth: self.depth,
        };

        info!(
            "[OPPONENT] Requesting move {} | depth {} | fen {}",
            ticket, request.depth, request.fen
        );
        self.set_thinking(true);
        self.dispatch(ticket, ServiceCall::Move(request));
        Some(ticket)
    }

    /// Apply the reply for the in-flight opponent request (ticket already checked)
    pub(crate) fn apply_opponent_reply(
        &mut self,
        result: ServiceResult<PositionReply>,
    ) -> ReplyOutcome {
        self.set_thinking(false);

        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!("[OPPONENT] Move request failed, keeping local position: {}", e);
                self.redraw();
                return ReplyOutcome::OpponentFailed(e.kind());
            }
        };

        let before = self.game.history().len();
        if let Err(e) = self.game.load(&reply.fen) {
            warn!("[OPPONENT] Reply position rejected, keeping local position: {}", e);
            self.redraw();
            return ReplyOutcome::OpponentFailed(FailureKind::RejectedPosition);
        }

        let highlight = BotMoveHighlight::from_history_diff(before, self.game.history())
            .or_else(|| reply.reported_move().map(BotMoveHighlight::from));

        match highlight {
            Some(h) => info!("[OPPONENT] Opponent played {} -> {}", h.from, h.to),
            None => debug!("[OPPONENT] Could not recover opponent move from reply"),
        }

        self.bot_move = highlight;
        self.selection.clear();
        self.view.set_position(&reply.fen);
        self.refresh_indicators();

        ReplyOutcome::OpponentMoved(highlight)
    }
}
