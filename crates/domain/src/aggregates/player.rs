//! Player aggregate - one character per identity
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: level and stats can only change through `gain_experience`
//! - **Newtypes**: `UserId`, `CharacterName`
//! - **Valid by construction**: deserialization re-checks the level curve

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::game_day::GameDay;
use crate::game_systems::progression::{level_for, stats_for_level};
use crate::ids::{BattleId, UserId};
use crate::value_objects::{CharacterName, PlayerClass, Stats};

/// Battles a player may submit per UTC day.
pub const ATTEMPTS_PER_DAY: u8 = 3;

/// XP granted to every participant when the daily boss falls.
pub const VICTORY_BONUS_XP: u32 = 500;

/// Damage credited to the player but not yet confirmed on the boss and leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingContribution {
    pub battle_id: BattleId,
    pub day: GameDay,
    pub damage: u32,
}

/// Level before and after an experience change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelChange {
    pub previous: u32,
    pub current: u32,
}

impl LevelChange {
    pub fn leveled_up(&self) -> bool {
        self.current > self.previous
    }
}

/// A player's character.
///
/// # Invariants
///
/// - `level == level_for(experience)`
/// - `stats == stats_for_level(class, level)`
/// - attempts used on `attempts_day` never exceed [`ATTEMPTS_PER_DAY`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord", into = "PlayerRecord")]
pub struct Player {
    user_id: UserId,
    name: CharacterName,
    class: PlayerClass,
    level: u32,
    experience: u32,
    stats: Stats,
    weapon: String,
    armor: String,
    attempts_day: Option<GameDay>,
    attempts_used: u8,
    pending_contribution: Option<PendingContribution>,
    created_at: DateTime<Utc>,
}

impl Player {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a level 1 character with the class's base stats and starting gear.
    pub fn new(
        user_id: UserId,
        name: CharacterName,
        class: PlayerClass,
        now: DateTime<Utc>,
    ) -> Self {
        let profile = class.profile();
        let level = level_for(0);
        Self {
            user_id,
            name,
            class,
            level,
            experience: 0,
            stats: stats_for_level(class, level),
            weapon: profile.starting_weapon.to_string(),
            armor: profile.starting_armor.to_string(),
            attempts_day: None,
            attempts_used: 0,
            pending_contribution: None,
            created_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn class(&self) -> PlayerClass {
        self.class
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn experience(&self) -> u32 {
        self.experience
    }

    #[inline]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    #[inline]
    pub fn attack(&self) -> u32 {
        self.stats.attack
    }

    #[inline]
    pub fn defense(&self) -> u32 {
        self.stats.defense
    }

    pub fn weapon(&self) -> &str {
        &self.weapon
    }

    pub fn armor(&self) -> &str {
        &self.armor
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Daily attempts
    // =========================================================================

    /// Attempts used on `day`; counters from earlier days read as zero.
    pub fn attempts_used_on(&self, day: GameDay) -> u8 {
        match self.attempts_day {
            Some(recorded) if recorded == day => self.attempts_used,
            _ => 0,
        }
    }

    pub fn remaining_attempts(&self, day: GameDay) -> u8 {
        ATTEMPTS_PER_DAY.saturating_sub(self.attempts_used_on(day))
    }

    /// Spend one attempt on `day`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AttemptsExhausted` without mutating anything when
    /// the budget for `day` is spent.
    pub fn consume_attempt(&mut self, day: GameDay) -> Result<u8, DomainError> {
        let used = self.attempts_used_on(day);
        if used >= ATTEMPTS_PER_DAY {
            return Err(DomainError::attempts_exhausted(used, ATTEMPTS_PER_DAY));
        }
        self.attempts_day = Some(day);
        self.attempts_used = used + 1;
        Ok(self.attempts_used)
    }

    // =========================================================================
    // Progression
    // =========================================================================

    /// Add experience, recomputing level and stats when a threshold is crossed.
    pub fn gain_experience(&mut self, amount: u32) -> LevelChange {
        let previous = self.level;
        self.experience = self.experience.saturating_add(amount);
        let current = level_for(self.experience);
        if current != previous {
            self.level = current;
            self.stats = stats_for_level(self.class, current);
        }
        LevelChange { previous, current }
    }

    pub fn award_victory_bonus(&mut self) -> LevelChange {
        self.gain_experience(VICTORY_BONUS_XP)
    }

    // =========================================================================
    // Pending contribution
    // =========================================================================

    pub fn pending_contribution(&self) -> Option<&PendingContribution> {
        self.pending_contribution.as_ref()
    }

    pub fn set_pending_contribution(&mut self, contribution: PendingContribution) {
        self.pending_contribution = Some(contribution);
    }

    /// Clear the marker if it still refers to `battle_id`.
    pub fn clear_pending_contribution(&mut self, battle_id: BattleId) -> bool {
        match self.pending_contribution {
            Some(pending) if pending.battle_id == battle_id => {
                self.pending_contribution = None;
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Serde representation
// =============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerRecord {
    user_id: UserId,
    name: CharacterName,
    class: PlayerClass,
    level: u32,
    experience: u32,
    max_hp: u32,
    attack: u32,
    defense: u32,
    weapon: String,
    armor: String,
    #[serde(default)]
    attempts_day: Option<GameDay>,
    #[serde(default)]
    attempts_used: u8,
    #[serde(default)]
    pending_contribution: Option<PendingContribution>,
    created_at: DateTime<Utc>,
}

impl From<Player> for PlayerRecord {
    fn from(player: Player) -> Self {
        Self {
            user_id: player.user_id,
            name: player.name,
            class: player.class,
            level: player.level,
            experience: player.experience,
            max_hp: player.stats.max_hp,
            attack: player.stats.attack,
            defense: player.stats.defense,
            weapon: player.weapon,
            armor: player.armor,
            attempts_day: player.attempts_day,
            attempts_used: player.attempts_used,
            pending_contribution: player.pending_contribution,
            created_at: player.created_at,
        }
    }
}

impl TryFrom<PlayerRecord> for Player {
    type Error = DomainError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        let expected_level = level_for(record.experience);
        if record.level != expected_level {
            return Err(DomainError::constraint(format!(
                "Level {} does not match {} experience (expected {})",
                record.level, record.experience, expected_level
            )));
        }
        let stats = Stats::new(record.max_hp, record.attack, record.defense);
        if stats != stats_for_level(record.class, record.level) {
            return Err(DomainError::constraint(format!(
                "Stats do not match a level {} {}",
                record.level, record.class
            )));
        }
        if record.attempts_used > ATTEMPTS_PER_DAY {
            return Err(DomainError::constraint(format!(
                "Attempts used {} exceeds {}",
                record.attempts_used, ATTEMPTS_PER_DAY
            )));
        }
        Ok(Self {
            user_id: record.user_id,
            name: record.name,
            class: record.class,
            level: record.level,
            experience: record.experience,
            stats,
            weapon: record.weapon,
            armor: record.armor,
            attempts_day: record.attempts_day,
            attempts_used: record.attempts_used,
            pending_contribution: record.pending_contribution,
            created_at: record.created_at,
        })
    }
}
