//! Repository port traits for the player, boss and leaderboard stores.

use async_trait::async_trait;
use yokai_domain::{BattleId, Boss, GameDay, Player, UserId};

use super::error::RepoError;
use super::types::LeaderboardEntry;

// =============================================================================
// Player Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<Option<Player>, RepoError>;

    /// Insert a new player.
    ///
    /// Fails with `RepoError::ConstraintViolation` if one already exists for the id.
    async fn create(&self, player: &Player) -> Result<(), RepoError>;

    /// Overwrite an existing player.
    async fn save(&self, player: &Player) -> Result<(), RepoError>;

    async fn delete(&self, user_id: &UserId) -> Result<(), RepoError>;
}

// =============================================================================
// Boss Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BossRepo: Send + Sync {
    async fn get(&self, day: GameDay) -> Result<Option<Boss>, RepoError>;
    async fn save(&self, boss: &Boss) -> Result<(), RepoError>;
    async fn delete(&self, day: GameDay) -> Result<(), RepoError>;
}

// =============================================================================
// Leaderboard Storage
// =============================================================================

/// Per-day ranked damage accumulator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaderboardRepo: Send + Sync {
    /// Atomically add `amount` to the user's score for `day`.
    ///
    /// A `battle_id` already recorded for the day is ignored and reported as
    /// `Ok(false)`. Zero damage records the battle but creates no entry.
    async fn add_damage(
        &self,
        day: GameDay,
        user_id: &UserId,
        name: &str,
        battle_id: BattleId,
        amount: u32,
    ) -> Result<bool, RepoError>;

    /// Highest scores first; ties go to whoever reached the score earliest.
    async fn top(&self, day: GameDay, limit: usize) -> Result<Vec<LeaderboardEntry>, RepoError>;

    /// Every user with a nonzero score, in no particular order.
    async fn participants(&self, day: GameDay) -> Result<Vec<UserId>, RepoError>;

    async fn participant_count(&self, day: GameDay) -> Result<u32, RepoError>;

    async fn clear(&self, day: GameDay) -> Result<(), RepoError>;
}
