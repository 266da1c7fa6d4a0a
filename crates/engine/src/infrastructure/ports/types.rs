//! Record types returned by ports.

use yokai_domain::UserId;

/// One ranked row of a day's leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    /// Display name recorded with the contribution
    pub name: String,
    pub damage: u64,
    /// 1-based
    pub rank: u32,
}
