//! Client configuration resources
//!
//! [`ClientConfig`] is plain data: where the move service lives, the default
//! search depth, and display preferences. The crate never reads or writes it
//! on its own; hosts build it with [`Default`], from a JSON string, or from a
//! JSON file path they choose.

use crate::core::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";
pub const DEFAULT_NEW_GAME_PATH: &str = "api/new_game";
pub const DEFAULT_MOVE_PATH: &str = "api/move";
/// Same default the move service applies when no depth is sent
pub const DEFAULT_DEPTH: u32 = 3;

/// Overlay preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Whether to show move hints
    pub show_hints: bool,

    /// Whether to highlight the opponent's last move
    pub highlight_last_move: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_hints: true,
            highlight_last_move: true,
        }
    }
}

/// Connection and session defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service root; endpoint paths are joined onto it, so keep the trailing slash
    pub base_url: Url,

    /// Session-initiation endpoint, relative to `base_url`
    pub new_game_path: String,

    /// Move-computation endpoint, relative to `base_url`
    pub move_path: String,

    /// Search depth sent until the user picks another
    pub default_depth: u32,

    pub display: DisplaySettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("hardcoded base URL is valid"),
            new_game_path: DEFAULT_NEW_GAME_PATH.to_string(),
            move_path: DEFAULT_MOVE_PATH.to_string(),
            default_depth: DEFAULT_DEPTH,
            display: DisplaySettings::default(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json_str(text: &str) -> CoreResult<Self> {
        let config: ClientConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file from a host-chosen path
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info!("[SETTINGS] Loaded client config from {:?}", path);
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        let base = &self.base_url;
        if base.cannot_be_a_base() {
            return Err(CoreError::InvalidConfig {
                message: format!("base_url '{}' cannot be a base", self.base_url),
            });
        }

        for path in [&self.new_game_path, &self.move_path] {
            base.join(path).map_err(|e| CoreError::InvalidConfig {
                message: format!("endpoint '{}': {}", path, e),
            })?;
        }

        Ok(())
    }
}
