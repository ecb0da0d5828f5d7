//! Networking Tests
//!
//! Runs [`HttpMoveService`] against an in-process axum server speaking the
//! move service's JSON contract, then drives a whole session over HTTP.

mod common;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use common::*;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use xfchess_remote::core::ClientConfig;
use xfchess_remote::game::{ChessEngine, GameModel, ReplyOutcome, Session};
use xfchess_remote::networking::{
    FailureKind, HttpMoveService, MoveRequest, MoveService, ServiceError,
};
use xfchess_remote::rendering::BotMoveHighlight;

type Recorded = Arc<Mutex<Vec<MoveRequest>>>;

// ============================================================================
// Fake move service
// ============================================================================

async fn new_game_handler() -> impl IntoResponse {
    Json(json!({ "fen": START_FEN }))
}

/// Answers 1.e4 with 1...e5; any other position gets a 422
async fn move_handler(
    State(recorded): State<Recorded>,
    Json(request): Json<MoveRequest>,
) -> impl IntoResponse {
    let is_after_e4 = request.fen == AFTER_E4;
    recorded.lock().unwrap().push(request);

    if is_after_e4 {
        (
            StatusCode::OK,
            Json(json!({ "fen": AFTER_E4_E5, "move": "e7e5" })),
        )
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "unexpected position" })),
        )
    }
}

fn chess_routes(recorded: Recorded) -> Router {
    Router::new()
        .route("/api/new_game", get(new_game_handler))
        .route("/api/move", post(move_handler))
        .with_state(recorded)
}

async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

async fn fake_service() -> (String, Recorded) {
    let recorded = Recorded::default();
    let base = spawn_server(chess_routes(recorded.clone())).await;
    (base, recorded)
}

/// A loopback address nothing is listening on
fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

fn config_for(base: &str) -> ClientConfig {
    ClientConfig::default().with_base_url(base.parse().unwrap())
}

fn http_service(base: &str) -> HttpMoveService {
    HttpMoveService::new(&config_for(base)).unwrap()
}

// ============================================================================
// Client
// ============================================================================

#[tokio::test]
async fn test_new_game_returns_start_position() {
    let (base, _) = fake_service().await;
    let reply = http_service(&base).new_game().await.unwrap();
    assert_eq!(reply.fen, START_FEN);
    assert!(reply.uci.is_none());
}

#[tokio::test]
async fn test_move_request_posts_fen_and_depth() {
    let (base, recorded) = fake_service().await;
    let service = http_service(&base);

    let reply = service
        .request_move(&MoveRequest {
            fen: AFTER_E4.to_string(),
            depth: 4,
        })
        .await
        .unwrap();

    assert_eq!(reply.fen, AFTER_E4_E5);
    assert_eq!(reply.reported_move().map(|m| m.to_uci()), Some("e7e5".to_string()));

    let seen = recorded.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].fen, AFTER_E4);
    assert_eq!(seen[0].depth, 4);
}

#[tokio::test]
async fn test_error_status_carries_body() {
    let app = Router::new().route(
        "/api/move",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "engine exploded") }),
    );
    let base = spawn_server(app).await;

    let err = http_service(&base)
        .request_move(&MoveRequest {
            fen: AFTER_E4.to_string(),
            depth: 3,
        })
        .await
        .unwrap_err();

    match err {
        ServiceError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "engine exploded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_route_is_status_error() {
    let (base, _) = fake_service().await;
    let config = ClientConfig {
        move_path: "api/no_such_route".to_string(),
        ..config_for(&base)
    };
    let service = HttpMoveService::new(&config).unwrap();

    let err = service
        .request_move(&MoveRequest {
            fen: START_FEN.to_string(),
            depth: 3,
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FailureKind::Status);
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let app = Router::new().route("/api/new_game", get(|| async { "<html>hello</html>" }));
    let base = spawn_server(app).await;

    let err = http_service(&base).new_game().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::MalformedReply);
}

#[tokio::test]
async fn test_unparseable_fen_is_malformed() {
    let app = Router::new().route(
        "/api/new_game",
        get(|| async { Json(json!({ "fen": "definitely not a position" })) }),
    );
    let base = spawn_server(app).await;

    let err = http_service(&base).new_game().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::MalformedReply);
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let err = http_service(&dead_base_url()).new_game().await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Transport);
}

#[tokio::test]
async fn test_base_url_prefix_is_respected() {
    let recorded = Recorded::default();
    let app = Router::new().nest("/engine", chess_routes(recorded));
    let base = spawn_server(app).await;

    let reply = http_service(&format!("{base}engine/"))
        .new_game()
        .await
        .unwrap();
    assert_eq!(reply.fen, START_FEN);
}

// ============================================================================
// Session over HTTP
// ============================================================================

#[tokio::test]
async fn test_full_game_round_trip_over_http() {
    let (base, recorded) = fake_service().await;
    let config = config_for(&base);
    let mut session =
        Session::with_http(ChessEngine::new(), RecordingView::default(), &config).unwrap();

    session.start_new_game();
    assert_eq!(session.next_reply().await, Some(ReplyOutcome::NewGameLoaded));
    assert_eq!(session.view().position(), Some(START_FEN));

    session.on_drag_start(sq("e2"));
    session.on_drop(sq("e2"), sq("e4"));
    assert_eq!(session.view().position(), Some(AFTER_E4));

    let expected = BotMoveHighlight {
        from: sq("e7"),
        to: sq("e5"),
    };
    assert_eq!(
        session.next_reply().await,
        Some(ReplyOutcome::OpponentMoved(Some(expected)))
    );
    assert_eq!(session.view().position(), Some(AFTER_E4_E5));
    assert_eq!(session.model().history().len(), 2);
    assert!(!session.view().thinking);

    let seen = recorded.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].depth, 3);
}

#[tokio::test]
async fn test_transport_failure_keeps_human_move() {
    let config = config_for(&dead_base_url());
    let mut session =
        Session::with_http(ChessEngine::new(), RecordingView::default(), &config).unwrap();

    session.on_drag_start(sq("e2"));
    session.on_drop(sq("e2"), sq("e4"));
    assert!(session.view().thinking);

    assert_eq!(
        session.next_reply().await,
        Some(ReplyOutcome::OpponentFailed(FailureKind::Transport))
    );
    assert_eq!(session.view().position(), Some(AFTER_E4));
    assert_eq!(session.model().fen(), AFTER_E4);
    assert!(!session.view().thinking);
    assert!(!session.is_pending());
}

#[tokio::test]
async fn test_new_game_failure_keeps_board_over_http() {
    let config = config_for(&dead_base_url());
    let engine = ChessEngine::from_fen(AFTER_E4).unwrap();
    let mut session = Session::with_http(engine, RecordingView::default(), &config).unwrap();

    session.start_new_game();
    assert_eq!(
        session.next_reply().await,
        Some(ReplyOutcome::NewGameFailed(FailureKind::Transport))
    );
    assert_eq!(session.model().fen(), AFTER_E4);
    assert_eq!(session.view().position(), Some(AFTER_E4));
}
