//! Session controller
//!
//! [`Session`] owns everything one game against the remote service needs:
//! the game model, the board view, the selection, request bookkeeping and the
//! opponent highlight. Gesture handlers live in
//! [`crate::game::systems::input`], the opponent round trip in
//! [`crate::game::ai`]; this file holds construction, reset and reply
//! delivery.
//!
//! Network calls run on spawned tokio tasks that only hold a clone of the
//! service handle. Their results come back over a channel tagged with a
//! [`RequestTicket`] and are applied on the host's thread by
//! [`Session::poll_replies`] or [`Session::next_reply`]. Tasks are spawned on
//! the runtime handle captured at construction, so gesture handlers may be
//! called from threads that are not inside that runtime.

use crate::core::{ClientConfig, DisplaySettings};
use crate::game::ai::MIN_DEPTH;
use crate::game::model::GameModel;
use crate::game::resources::{RequestState, RequestTicket, Selection};
use crate::networking::{
    FailureKind, HttpMoveService, MoveRequest, MoveService, PositionReply, ServiceResult,
};
use crate::rendering::{BoardView, BotMoveHighlight, Indicators};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// What a spawned request asks the service for
#[derive(Debug, Clone)]
pub(crate) enum ServiceCall {
    NewGame,
    Move(MoveRequest),
}

/// A finished request, posted back to the session
#[derive(Debug)]
pub(crate) enum Delivery {
    NewGame {
        ticket: RequestTicket,
        result: ServiceResult<PositionReply>,
    },
    Opponent {
        ticket: RequestTicket,
        result: ServiceResult<PositionReply>,
    },
}

/// Effect of applying one reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// Starting position loaded and drawn
    NewGameLoaded,
    /// Session initiation failed; previous board kept
    NewGameFailed(FailureKind),
    /// Opponent position applied, with the recovered move if any
    OpponentMoved(Option<BotMoveHighlight>),
    /// Opponent request failed; the human's move stands
    OpponentFailed(FailureKind),
    /// Reply for a superseded request; nothing changed
    Stale,
}

/// One game against the remote move service
pub struct Session<G: GameModel, V: BoardView> {
    pub(crate) game: G,
    pub(crate) view: V,
    pub(crate) service: Arc<dyn MoveService>,
    pub(crate) selection: Selection,
    pub(crate) requests: RequestState,
    pub(crate) bot_move: Option<BotMoveHighlight>,
    pub(crate) depth: u32,
    pub(crate) display: DisplaySettings,
    pub(crate) thinking: bool,
    runtime: Handle,
    replies_tx: UnboundedSender<Delivery>,
    replies_rx: UnboundedReceiver<Delivery>,
}

impl<G: GameModel, V: BoardView> Session<G, V> {
    /// Wire a session on the current tokio runtime and draw the model's
    /// position.
    ///
    /// Fails with [`ServiceError::NoRuntime`](crate::networking::ServiceError::NoRuntime)
    /// when called outside a runtime; hosts that own a runtime elsewhere use
    /// [`Session::with_runtime`].
    pub fn new(
        game: G,
        view: V,
        service: Arc<dyn MoveService>,
        config: &ClientConfig,
    ) -> ServiceResult<Self> {
        let runtime = Handle::try_current()?;
        Ok(Self::with_runtime(game, view, service, config, runtime))
    }

    /// Wire a session whose requests run on `runtime`
    pub fn with_runtime(
        game: G,
        view: V,
        service: Arc<dyn MoveService>,
        config: &ClientConfig,
        runtime: Handle,
    ) -> Self {
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        let mut session = Self {
            game,
            view,
            service,
            selection: Selection::default(),
            requests: RequestState::default(),
            bot_move: None,
            depth: config.default_depth.max(MIN_DEPTH),
            display: config.display,
            thinking: false,
            runtime,
            replies_tx,
            replies_rx,
        };
        session.view.set_thinking(false);
        session.redraw();
        session
    }

    /// Session talking to the HTTP service described by `config`
    pub fn with_http(game: G, view: V, config: &ClientConfig) -> ServiceResult<Self> {
        let service = HttpMoveService::new(config)?;
        Self::new(game, view, Arc::new(service), config)
    }

    /// Reset local state and ask the service for a fresh starting position.
    ///
    /// Any outstanding opponent reply becomes stale. The new position is
    /// applied when its reply is delivered.
    pub fn start_new_game(&mut self) -> RequestTicket {
        self.selection.clear();
        self.bot_move = None;
        if let Some(abandoned) = self.requests.abandon_opponent() {
            debug!("[SESSION] Abandoning opponent request {}", abandoned);
        }
        self.set_thinking(false);
        self.refresh_indicators();

        let ticket = self.requests.begin_new_game();
        info!("[SESSION] Requesting new game {}", ticket);
        self.dispatch(ticket, ServiceCall::NewGame);
        ticket
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn bot_move(&self) -> Option<BotMoveHighlight> {
        self.bot_move
    }

    /// An opponent request is in flight
    pub fn is_pending(&self) -> bool {
        self.requests.is_pending()
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn display(&self) -> DisplaySettings {
        self.display
    }

    /// Change overlay preferences and redraw indicators
    pub fn set_display(&mut self, display: DisplaySettings) {
        self.display = display;
        self.refresh_indicators();
    }

    pub fn model(&self) -> &G {
        &self.game
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Apply every reply that has already arrived, without waiting
    pub fn poll_replies(&mut self) -> Vec<ReplyOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(delivery) = self.replies_rx.try_recv() {
            outcomes.push(self.apply_delivery(delivery));
        }
        outcomes
    }

    /// Wait for the next live reply and apply it.
    ///
    /// Stale replies that arrive first are applied (dropped) and skipped.
    /// Returns `None` when no request is in flight.
    pub async fn next_reply(&mut self) -> Option<ReplyOutcome> {
        while self.requests.any_in_flight() {
            let delivery = self.replies_rx.recv().await?;
            match self.apply_delivery(delivery) {
                ReplyOutcome::Stale => continue,
                outcome => return Some(outcome),
            }
        }
        None
    }

    /// Push the current selection and highlight to the view
    pub(crate) fn refresh_indicators(&mut self) {
        let indicators = Indicators::build(&self.selection, self.bot_move, &self.display);
        self.view.set_indicators(&indicators);
    }

    /// Draw the model's position and indicators
    pub(crate) fn redraw(&mut self) {
        let fen = self.game.fen();
        self.view.set_position(&fen);
        self.refresh_indicators();
    }

    pub(crate) fn set_thinking(&mut self, thinking: bool) {
        if self.thinking != thinking {
            self.thinking = thinking;
            self.view.set_thinking(thinking);
        }
    }

    pub(crate) fn dispatch(&self, ticket: RequestTicket, call: ServiceCall) {
        let service = Arc::clone(&self.service);
        let tx = self.replies_tx.clone();

        self.runtime.spawn(async move {
            let delivery = match call {
                ServiceCall::NewGame => Delivery::NewGame {
                    ticket,
                    result: service.new_game().await,
                },
                ServiceCall::Move(request) => Delivery::Opponent {
                    ticket,
                    result: service.request_move(&request).await,
                },
            };

            if tx.send(delivery).is_err() {
                debug!("[NETWORK] Session gone before reply {} arrived", ticket);
            }
        });
    }

    fn apply_delivery(&mut self, delivery: Delivery) -> ReplyOutcome {
        match delivery {
            Delivery::NewGame { ticket, result } => {
                if !self.requests.finish_new_game(ticket) {
                    debug!("[SESSION] Dropping stale new game reply {}", ticket);
                    return ReplyOutcome::Stale;
                }
                self.apply_new_game_reply(result)
            }
            Delivery::Opponent { ticket, result } => {
                if !self.requests.finish_opponent(ticket) {
                    debug!("[OPPONENT] Dropping stale opponent reply {}", ticket);
                    return ReplyOutcome::Stale;
                }
                self.apply_opponent_reply(result)
            }
        }
    }

    fn apply_new_game_reply(&mut self, result: ServiceResult<PositionReply>) -> ReplyOutcome {
        let reply = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!("[SESSION] New game request failed, keeping board: {}", e);
                return ReplyOutcome::NewGameFailed(e.kind());
            }
        };

        if let Err(e) = self.game.load(&reply.fen) {
            warn!("[SESSION] New game position rejected, keeping board: {}", e);
            return ReplyOutcome::NewGameFailed(FailureKind::RejectedPosition);
        }

        // Moves made on the old board while the reset was in flight no longer apply
        if let Some(abandoned) = self.requests.abandon_opponent() {
            debug!("[SESSION] Abandoning opponent request {}", abandoned);
        }
        self.selection.clear();
        self.bot_move = None;
        self.set_thinking(false);
        self.view.set_position(&reply.fen);
        self.refresh_indicators();

        info!("[SESSION] New game loaded: {}", reply.fen);
        ReplyOutcome::NewGameLoaded
    }
}
