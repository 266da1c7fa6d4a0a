//! The three moves a player can queue for a battle turn.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Number of actions every battle submission must contain.
pub const ACTIONS_PER_BATTLE: usize = 3;

/// A queued battle move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleAction {
    /// Full-strength strike, no mitigation
    Attack,
    /// Weak counter-strike, doubled defense against the incoming hit
    Defend,
    /// Class-specific technique
    Special,
}

impl BattleAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defend => "defend",
            Self::Special => "special",
        }
    }

    /// Multiplier applied to the player's attack for this action.
    ///
    /// `Special` is resolved through the class table instead.
    pub fn attack_multiplier(&self) -> f64 {
        match self {
            Self::Attack => 1.0,
            Self::Defend => 0.3,
            Self::Special => 1.0,
        }
    }

    /// Multiplier applied to the player's defense against this turn's boss attack.
    pub fn defense_multiplier(&self) -> f64 {
        match self {
            Self::Defend => 2.0,
            Self::Attack | Self::Special => 1.0,
        }
    }

    /// Parse a full submission, requiring exactly [`ACTIONS_PER_BATTLE`] entries.
    pub fn parse_sequence<S: AsRef<str>>(
        raw: &[S],
    ) -> Result<[BattleAction; ACTIONS_PER_BATTLE], DomainError> {
        if raw.len() != ACTIONS_PER_BATTLE {
            return Err(DomainError::validation(format!(
                "Must provide exactly {} actions, got {}",
                ACTIONS_PER_BATTLE,
                raw.len()
            )));
        }
        let mut actions = [BattleAction::Attack; ACTIONS_PER_BATTLE];
        for (slot, value) in actions.iter_mut().zip(raw) {
            *slot = value.as_ref().parse()?;
        }
        Ok(actions)
    }
}

impl fmt::Display for BattleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BattleAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "attack" => Ok(Self::Attack),
            "defend" => Ok(Self::Defend),
            "special" => Ok(Self::Special),
            other => Err(DomainError::parse(format!("Unknown battle action: {}", other))),
        }
    }
}
