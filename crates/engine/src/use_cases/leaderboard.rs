//! Daily leaderboard query.

use std::sync::Arc;

use yokai_domain::GameDay;

use crate::infrastructure::ports::{ClockPort, LeaderboardEntry, LeaderboardRepo, RepoError};

pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 10;
pub const MAX_LEADERBOARD_LIMIT: u32 = 100;

/// Clamp a requested row count into `1..=MAX_LEADERBOARD_LIMIT`.
pub fn clamp_limit(limit: Option<u32>) -> usize {
    limit
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
        .clamp(1, MAX_LEADERBOARD_LIMIT) as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyLeaderboard {
    pub day: GameDay,
    pub entries: Vec<LeaderboardEntry>,
}

pub struct GetLeaderboard {
    leaderboard_repo: Arc<dyn LeaderboardRepo>,
    clock: Arc<dyn ClockPort>,
}

impl GetLeaderboard {
    pub fn new(leaderboard_repo: Arc<dyn LeaderboardRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            leaderboard_repo,
            clock,
        }
    }

    /// Top damage dealers for today.
    pub async fn execute(&self, limit: Option<u32>) -> Result<DailyLeaderboard, RepoError> {
        let day = GameDay::from_datetime(self.clock.now());
        let entries = self.leaderboard_repo.top(day, clamp_limit(limit)).await?;
        Ok(DailyLeaderboard { day, entries })
    }
}
