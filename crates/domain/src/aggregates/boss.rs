//! Boss aggregate - the shared daily enemy
//!
//! One record per [`GameDay`]. Content is fixed at creation; only HP, the
//! defeat timestamp, the participant count and the applied-battle set change.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::BossContent;
use crate::error::DomainError;
use crate::game_day::GameDay;
use crate::ids::BattleId;

/// Effect of one damage application on the boss state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossTransition {
    /// HP dropped (or stayed) above zero.
    StillAlive,
    /// This application took HP to zero for the first time.
    Defeated,
    /// The boss was already at zero before this application.
    AlreadyDefeated,
}

impl BossTransition {
    pub fn is_defeat(&self) -> bool {
        matches!(self, Self::Defeated)
    }
}

/// Today's boss.
///
/// # Invariants
///
/// - `current_hp <= max_hp` and never increases
/// - `defeated_at` is set exactly once, when `current_hp` first reaches zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BossRecord", into = "BossRecord")]
pub struct Boss {
    day: GameDay,
    content: BossContent,
    current_hp: u32,
    participant_count: u32,
    defeated_at: Option<DateTime<Utc>>,
    applied_battles: BTreeSet<BattleId>,
    created_at: DateTime<Utc>,
}

impl Boss {
    /// A fresh boss at full HP.
    pub fn new(day: GameDay, content: BossContent, now: DateTime<Utc>) -> Self {
        Self {
            day,
            current_hp: content.max_hp(),
            content,
            participant_count: 0,
            defeated_at: None,
            applied_battles: BTreeSet::new(),
            created_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn day(&self) -> GameDay {
        self.day
    }

    pub fn content(&self) -> &BossContent {
        &self.content
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> u32 {
        self.content.max_hp()
    }

    pub fn defense(&self) -> u32 {
        self.content.defense()
    }

    pub fn attack_pattern(&self) -> &[u32] {
        self.content.attack_pattern()
    }

    pub fn participant_count(&self) -> u32 {
        self.participant_count
    }

    pub fn defeated_at(&self) -> Option<DateTime<Utc>> {
        self.defeated_at
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated_at.is_some()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn has_applied(&self, battle_id: BattleId) -> bool {
        self.applied_battles.contains(&battle_id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Subtract `amount` from HP, clamping at zero.
    pub fn apply_damage(&mut self, amount: u32, now: DateTime<Utc>) -> BossTransition {
        if self.is_defeated() {
            return BossTransition::AlreadyDefeated;
        }
        self.current_hp = self.current_hp.saturating_sub(amount);
        if self.current_hp == 0 {
            self.defeated_at = Some(now);
            BossTransition::Defeated
        } else {
            BossTransition::StillAlive
        }
    }

    /// Apply a battle's damage once; replaying the same battle id is a no-op.
    ///
    /// Returns `None` when the battle was already applied.
    pub fn apply_battle(
        &mut self,
        battle_id: BattleId,
        amount: u32,
        now: DateTime<Utc>,
    ) -> Option<BossTransition> {
        if !self.applied_battles.insert(battle_id) {
            return None;
        }
        Some(self.apply_damage(amount, now))
    }

    pub fn set_participant_count(&mut self, count: u32) {
        self.participant_count = count;
    }
}

// =============================================================================
// Serde representation
// =============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BossRecord {
    day: GameDay,
    content: BossContent,
    current_hp: u32,
    #[serde(default)]
    participant_count: u32,
    #[serde(default)]
    defeated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    applied_battles: BTreeSet<BattleId>,
    created_at: DateTime<Utc>,
}

impl From<Boss> for BossRecord {
    fn from(boss: Boss) -> Self {
        Self {
            day: boss.day,
            content: boss.content,
            current_hp: boss.current_hp,
            participant_count: boss.participant_count,
            defeated_at: boss.defeated_at,
            applied_battles: boss.applied_battles,
            created_at: boss.created_at,
        }
    }
}

impl TryFrom<BossRecord> for Boss {
    type Error = DomainError;

    fn try_from(record: BossRecord) -> Result<Self, Self::Error> {
        if record.current_hp > record.content.max_hp() {
            return Err(DomainError::constraint(format!(
                "Boss HP {} exceeds max {}",
                record.current_hp,
                record.content.max_hp()
            )));
        }
        if (record.current_hp == 0) != record.defeated_at.is_some() {
            return Err(DomainError::constraint(
                "Boss defeat timestamp must be set exactly when HP is zero",
            ));
        }
        Ok(Self {
            day: record.day,
            content: record.content,
            current_hp: record.current_hp,
            participant_count: record.participant_count,
            defeated_at: record.defeated_at,
            applied_battles: record.applied_battles,
            created_at: record.created_at,
        })
    }
}
