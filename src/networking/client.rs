//! Move service client
//!
//! [`MoveService`] is the seam the session talks through. [`HttpMoveService`]
//! is the reqwest implementation against the JSON endpoints described in
//! [`crate::networking::protocol`]; tests substitute scripted services.

use crate::core::ClientConfig;
use crate::networking::error::{ServiceError, ServiceResult};
use crate::networking::protocol::{MoveRequest, PositionReply};
use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

/// Remote authority for game setup and opponent moves
#[async_trait]
pub trait MoveService: Send + Sync {
    /// Start a fresh game and return its initial position
    async fn new_game(&self) -> ServiceResult<PositionReply>;

    /// Ask the opponent to reply to `request.fen`
    async fn request_move(&self, request: &MoveRequest) -> ServiceResult<PositionReply>;
}

/// HTTP/JSON move service client
#[derive(Debug, Clone)]
pub struct HttpMoveService {
    client: reqwest::Client,
    new_game_url: Url,
    move_url: Url,
}

impl HttpMoveService {
    pub fn new(config: &ClientConfig) -> ServiceResult<Self> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse a caller-built client (timeouts, proxies, TLS settings)
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> ServiceResult<Self> {
        let base = &config.base_url;
        let new_game_url = base.join(&config.new_game_path)?;
        let move_url = base.join(&config.move_path)?;

        debug!(
            "[NETWORK] Move service endpoints: new_game={} move={}",
            new_game_url, move_url
        );

        Ok(Self {
            client,
            new_game_url,
            move_url,
        })
    }

    pub fn new_game_url(&self) -> &Url {
        &self.new_game_url
    }

    pub fn move_url(&self) -> &Url {
        &self.move_url
    }

    async fn decode(response: reqwest::Response) -> ServiceResult<PositionReply> {
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!("[NETWORK] Move service returned {}: {}", status, body);
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        PositionReply::from_slice(&body)
    }
}

#[async_trait]
impl MoveService for HttpMoveService {
    async fn new_game(&self) -> ServiceResult<PositionReply> {
        debug!("[NETWORK] GET {}", self.new_game_url);
        let response = self.client.get(self.new_game_url.clone()).send().await?;
        Self::decode(response).await
    }

    async fn request_move(&self, request: &MoveRequest) -> ServiceResult<PositionReply> {
        debug!(
            "[NETWORK] POST {} depth={} fen={}",
            self.move_url, request.depth, request.fen
        );
        let response = self
            .client
            .post(self.move_url.clone())
            .json(request)
            .send()
            .await?;
        Self::decode(response).await
    }
}
