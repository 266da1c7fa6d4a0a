//! Request bodies and query strings accepted by the engine.
//!
//! Fields that carry domain vocabulary (`class`, `actions`) stay as strings
//! here. The engine parses them so that an unknown value is reported as an
//! invalid-input error in the same order as its other precondition checks.

use serde::{Deserialize, Serialize};

/// `POST /api/character`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub class: String,
}

/// `POST /api/battle`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitBattleRequest {
    pub actions: Vec<String>,
}

/// `GET /api/leaderboard?limit=N`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub limit: Option<u32>,
}
