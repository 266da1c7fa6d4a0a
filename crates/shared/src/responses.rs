//! Response bodies returned by the engine's HTTP API.
//!
//! Field names follow the client's existing JSON contract (`maxHP`, `nameJP`,
//! `attemptsToday`), hence the explicit renames.

use serde::{Deserialize, Serialize};

// Re-export shared vocabulary types from the domain
pub use yokai_domain::{BattleAction, BattleResult, PlayerClass, Turn};

// =============================================================================
// Views
// =============================================================================

/// A player's character as shown to its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub user_id: String,
    pub name: String,
    pub class: PlayerClass,
    pub level: u32,
    pub xp: u32,
    /// XP still needed for the next level; absent at max level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp_to_next_level: Option<u32>,
    #[serde(rename = "maxHP")]
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub weapon: String,
    pub armor: String,
    pub attempts_today: u8,
}

/// Today's boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossView {
    /// Catalog key such as `kappa`, or `ai_generated`
    #[serde(rename = "type")]
    pub kind: String,
    pub day: String,
    pub name: String,
    #[serde(rename = "nameJP")]
    pub name_jp: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backstory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "currentHP")]
    pub current_hp: u32,
    #[serde(rename = "maxHP")]
    pub max_hp: u32,
    pub defense: u32,
    pub attack_pattern: Vec<u32>,
    pub total_participants: u32,
    /// RFC 3339 timestamp
    pub defeated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryView {
    pub user_id: String,
    pub username: String,
    pub damage: u64,
    pub rank: u32,
}

// =============================================================================
// Endpoint bodies
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterResponse {
    pub player: PlayerView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResponse {
    pub result: BattleResult,
    pub player: PlayerView,
    pub boss: BossView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    pub player: Option<PlayerView>,
    pub boss: BossView,
    pub username: String,
    pub remaining_attempts: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub day: String,
    pub leaderboard: Vec<LeaderboardEntryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// =============================================================================
// Errors
// =============================================================================

/// Error classification code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // === Client Errors (4xx) ===
    /// No identity on the request
    Unauthorized,
    /// Malformed actions, unknown class, bad name
    BadRequest,
    /// No character for this identity
    NotFound,
    /// A character already exists for this identity
    Conflict,
    /// All of today's battles are used
    AttemptsExhausted,

    // === Server Errors (5xx) ===
    InternalError,

    /// Unknown variant for forward compatibility
    #[serde(other)]
    Unknown,
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: ErrorCode,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}
