//! Shared test fixtures: a recording board view and a scripted move service

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use xfchess_remote::core::ClientConfig;
use xfchess_remote::game::{ChessEngine, ReplyOutcome, Session};
use xfchess_remote::networking::{
    MoveRequest, MoveService, PositionReply, ServiceError, ServiceResult,
};
use xfchess_remote::rendering::{BoardView, Indicators};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
pub const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
pub const AFTER_E4_E5: &str = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
pub const AFTER_E4_NF6: &str = "rnbqkb1r/pppppppp/5n2/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 1 2";

// ============================================================================
// Board view
// ============================================================================

/// Board view that remembers everything it was told
#[derive(Debug, Default)]
pub struct RecordingView {
    pub positions: Vec<String>,
    pub indicators: Vec<Indicators>,
    pub thinking: bool,
    pub thinking_changes: usize,
}

impl RecordingView {
    pub fn position(&self) -> Option<&str> {
        self.positions.last().map(String::as_str)
    }

    pub fn current_indicators(&self) -> Indicators {
        self.indicators.last().cloned().unwrap_or_default()
    }
}

impl BoardView for RecordingView {
    fn set_position(&mut self, fen: &str) {
        self.positions.push(fen.to_string());
    }

    fn set_indicators(&mut self, indicators: &Indicators) {
        self.indicators.push(indicators.clone());
    }

    fn set_thinking(&mut self, thinking: bool) {
        self.thinking = thinking;
        self.thinking_changes += 1;
    }
}

// ============================================================================
// Move service
// ============================================================================

type Reply = ServiceResult<PositionReply>;

enum Script {
    Ready(Reply),
    Held(oneshot::Receiver<Reply>),
}

/// Move service answering from queues filled by the test.
///
/// An empty queue answers with a 500 status.
#[derive(Default)]
pub struct ScriptedService {
    new_games: Mutex<VecDeque<Script>>,
    moves: Mutex<VecDeque<Script>>,
    move_requests: Mutex<Vec<MoveRequest>>,
    new_game_calls: AtomicUsize,
}

impl ScriptedService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_new_game(&self, reply: Reply) {
        self.new_games.lock().unwrap().push_back(Script::Ready(reply));
    }

    pub fn push_move(&self, reply: Reply) {
        self.moves.lock().unwrap().push_back(Script::Ready(reply));
    }

    /// Next move request waits until the returned sender fires
    pub fn hold_move(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.moves.lock().unwrap().push_back(Script::Held(rx));
        tx
    }

    /// Next new game request waits until the returned sender fires
    pub fn hold_new_game(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.new_games.lock().unwrap().push_back(Script::Held(rx));
        tx
    }

    pub fn move_requests(&self) -> Vec<MoveRequest> {
        self.move_requests.lock().unwrap().clone()
    }

    pub fn new_game_calls(&self) -> usize {
        self.new_game_calls.load(Ordering::SeqCst)
    }

    async fn answer(script: Option<Script>) -> Reply {
        match script {
            Some(Script::Ready(reply)) => reply,
            Some(Script::Held(rx)) => rx.await.unwrap_or_else(|_| Err(status(599, "dropped"))),
            None => Err(status(500, "no scripted reply")),
        }
    }
}

#[async_trait]
impl MoveService for ScriptedService {
    async fn new_game(&self) -> ServiceResult<PositionReply> {
        self.new_game_calls.fetch_add(1, Ordering::SeqCst);
        let script = self.new_games.lock().unwrap().pop_front();
        Self::answer(script).await
    }

    async fn request_move(&self, request: &MoveRequest) -> ServiceResult<PositionReply> {
        self.move_requests.lock().unwrap().push(request.clone());
        let script = self.moves.lock().unwrap().pop_front();
        Self::answer(script).await
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn status(code: u16, body: &str) -> ServiceError {
    ServiceError::Status {
        status: code,
        body: body.to_string(),
    }
}

pub fn reply(fen: &str) -> Reply {
    Ok(PositionReply::new(fen))
}

pub fn reply_with_move(fen: &str, uci: &str) -> Reply {
    Ok(PositionReply {
        fen: fen.to_string(),
        uci: Some(uci.to_string()),
    })
}

pub fn session_with(
    service: &Arc<ScriptedService>,
    engine: ChessEngine,
) -> Session<ChessEngine, RecordingView> {
    let service: Arc<dyn MoveService> = service.clone();
    Session::new(engine, RecordingView::default(), service, &ClientConfig::default()).unwrap()
}

pub fn sq(s: &str) -> xfchess_remote::game::types::Square {
    s.parse().unwrap()
}

/// Yield to spawned request tasks until `count` replies have been applied
pub async fn drain<G, V>(session: &mut Session<G, V>, count: usize) -> Vec<ReplyOutcome>
where
    G: xfchess_remote::game::GameModel,
    V: BoardView,
{
    let mut outcomes = Vec::new();
    for _ in 0..1000 {
        outcomes.extend(session.poll_replies());
        if outcomes.len() >= count {
            break;
        }
        tokio::task::yield_now().await;
    }
    outcomes
}
