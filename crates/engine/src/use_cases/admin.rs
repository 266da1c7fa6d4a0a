//! Test-only reset of one identity's data and today's shared state.

use std::sync::Arc;

use yokai_domain::UserId;

use crate::infrastructure::locks::KeyedLocks;
use crate::infrastructure::ports::PlayerRepo;
use crate::use_cases::boss::{BossError, BossLifecycle};

pub struct ResetPlayerData {
    player_repo: Arc<dyn PlayerRepo>,
    bosses: Arc<BossLifecycle>,
    player_locks: Arc<KeyedLocks<UserId>>,
}

impl ResetPlayerData {
    pub fn new(
        player_repo: Arc<dyn PlayerRepo>,
        bosses: Arc<BossLifecycle>,
        player_locks: Arc<KeyedLocks<UserId>>,
    ) -> Self {
        Self {
            player_repo,
            bosses,
            player_locks,
        }
    }

    /// Delete the player, today's boss and today's leaderboard.
    pub async fn execute(&self, user_id: &UserId) -> Result<(), BossError> {
        let day = self.bosses.today();
        let _player_guard = self.player_locks.lock(user_id).await;
        let day_guard = self.bosses.lock_day(day).await;

        self.player_repo.delete(user_id).await?;
        self.bosses.reset_day(&day_guard).await?;

        tracing::warn!(user_id = %user_id, day = %day, "Player data reset");
        Ok(())
    }
}
