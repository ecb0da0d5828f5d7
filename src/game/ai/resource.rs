//! Opponent strength settings
//!
//! The remote service searches to a fixed depth sent with each request.
//! [`AIDifficulty`] names the presets the UI offers; any other depth can be
//! set directly with `Session::set_depth`.
//!
//! | Difficulty | Depth |
//! |------------|-------|
//! | Easy       | 1     |
//! | Medium     | 3     |
//! | Hard       | 5     |

use serde::{Deserialize, Serialize};

/// Shallowest search the service is asked for
pub const MIN_DEPTH: u32 = 1;

/// Opponent difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AIDifficulty {
    /// One ply; takes free material, misses everything else
    Easy,

    /// Service default
    #[default]
    Medium,

    /// Noticeably slower replies on the reference service
    Hard,
}

impl AIDifficulty {
    /// Search depth sent to the move service
    pub fn depth(self) -> u32 {
        match self {
            AIDifficulty::Easy => 1,
            AIDifficulty::Medium => 3,
            AIDifficulty::Hard => 5,
        }
    }

    /// Preset matching `depth` exactly, if any
    pub fn from_depth(depth: u32) -> Option<Self> {
        [AIDifficulty::Easy, AIDifficulty::Medium, AIDifficulty::Hard]
            .into_iter()
            .find(|d| d.depth() == depth)
    }

    pub fn description(self) -> &'static str {
        match self {
            AIDifficulty::Easy => "Easy (depth 1)",
            AIDifficulty::Medium => "Medium (depth 3)",
            AIDifficulty::Hard => "Hard (depth 5)",
        }
    }
}
