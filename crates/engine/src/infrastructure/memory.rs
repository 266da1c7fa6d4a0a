//! In-memory stores backed by `DashMap`.
//!
//! The default backend. State lives for the life of the process.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use yokai_domain::{BattleId, Boss, GameDay, Player, UserId};

use crate::infrastructure::ports::{
    BossRepo, LeaderboardEntry, LeaderboardRepo, PlayerRepo, RepoError,
};

// =============================================================================
// Players
// =============================================================================

#[derive(Default)]
pub struct MemoryPlayerRepo {
    players: DashMap<UserId, Player>,
}

impl MemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepo for MemoryPlayerRepo {
    async fn get(&self, user_id: &UserId) -> Result<Option<Player>, RepoError> {
        Ok(self.players.get(user_id).map(|p| p.value().clone()))
    }

    async fn create(&self, player: &Player) -> Result<(), RepoError> {
        match self.players.entry(player.user_id().clone()) {
            Entry::Occupied(_) => Err(RepoError::constraint(format!(
                "Player already exists: {}",
                player.user_id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(player.clone());
                Ok(())
            }
        }
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        self.players.insert(player.user_id().clone(), player.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), RepoError> {
        self.players.remove(user_id);
        Ok(())
    }
}

// =============================================================================
// Bosses
// =============================================================================

#[derive(Default)]
pub struct MemoryBossRepo {
    bosses: DashMap<GameDay, Boss>,
}

impl MemoryBossRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BossRepo for MemoryBossRepo {
    async fn get(&self, day: GameDay) -> Result<Option<Boss>, RepoError> {
        Ok(self.bosses.get(&day).map(|b| b.value().clone()))
    }

    async fn save(&self, boss: &Boss) -> Result<(), RepoError> {
        self.bosses.insert(boss.day(), boss.clone());
        Ok(())
    }

    async fn delete(&self, day: GameDay) -> Result<(), RepoError> {
        self.bosses.remove(&day);
        Ok(())
    }
}

// =============================================================================
// Leaderboard
// =============================================================================

#[derive(Debug, Clone)]
struct Score {
    name: String,
    damage: u64,
    /// Global update counter; lower means the score was reached earlier
    updated: u64,
}

#[derive(Debug, Default)]
struct DayBoard {
    scores: HashMap<UserId, Score>,
    battles: HashSet<BattleId>,
}

#[derive(Default)]
pub struct MemoryLeaderboardRepo {
    days: DashMap<GameDay, DayBoard>,
    sequence: AtomicU64,
}

impl MemoryLeaderboardRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeaderboardRepo for MemoryLeaderboardRepo {
    async fn add_damage(
        &self,
        day: GameDay,
        user_id: &UserId,
        name: &str,
        battle_id: BattleId,
        amount: u32,
    ) -> Result<bool, RepoError> {
        // The entry guard holds the shard lock for the whole update
        let mut board = self.days.entry(day).or_default();
        if !board.battles.insert(battle_id) {
            return Ok(false);
        }
        if amount == 0 {
            return Ok(true);
        }

        let updated = self.sequence.fetch_add(1, Ordering::SeqCst);
        let score = board
            .scores
            .entry(user_id.clone())
            .or_insert_with(|| Score {
                name: name.to_string(),
                damage: 0,
                updated,
            });
        score.damage += u64::from(amount);
        score.name = name.to_string();
        score.updated = updated;
        Ok(true)
    }

    async fn top(&self, day: GameDay, limit: usize) -> Result<Vec<LeaderboardEntry>, RepoError> {
        let Some(board) = self.days.get(&day) else {
            return Ok(Vec::new());
        };

        let mut scores: Vec<(&UserId, &Score)> = board
            .scores
            .iter()
            .filter(|(_, score)| score.damage > 0)
            .collect();
        scores.sort_by(|(_, a), (_, b)| {
            b.damage.cmp(&a.damage).then(a.updated.cmp(&b.updated))
        });

        Ok(scores
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, (user_id, score))| LeaderboardEntry {
                user_id: user_id.clone(),
                name: score.name.clone(),
                damage: score.damage,
                rank: i as u32 + 1,
            })
            .collect())
    }

    async fn participants(&self, day: GameDay) -> Result<Vec<UserId>, RepoError> {
        Ok(self
            .days
            .get(&day)
            .map(|board| {
                board
                    .scores
                    .iter()
                    .filter(|(_, score)| score.damage > 0)
                    .map(|(user_id, _)| user_id.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn participant_count(&self, day: GameDay) -> Result<u32, RepoError> {
        Ok(self
            .days
            .get(&day)
            .map(|board| board.scores.values().filter(|s| s.damage > 0).count() as u32)
            .unwrap_or(0))
    }

    async fn clear(&self, day: GameDay) -> Result<(), RepoError> {
        self.days.remove(&day);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use yokai_domain::{BossContent, CharacterName, PlayerClass, YokaiKind};

    fn day() -> GameDay {
        GameDay::from_ymd(2025, 1, 5).unwrap()
    }

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn player(id: &str) -> Player {
        Player::new(
            user(id),
            CharacterName::new("Tomoe").unwrap(),
            PlayerClass::Onmyoji,
            Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn create_rejects_duplicates() {
        let repo = MemoryPlayerRepo::new();
        repo.create(&player("t2_a")).await.unwrap();
        let err = repo.create(&player("t2_a")).await.unwrap_err();
        assert!(err.is_constraint_violation());
        assert!(repo.get(&user("t2_a")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn boss_roundtrip_and_delete() {
        let repo = MemoryBossRepo::new();
        let boss = Boss::new(day(), BossContent::catalog(YokaiKind::Kappa), Utc::now());
        repo.save(&boss).await.unwrap();
        assert_eq!(repo.get(day()).await.unwrap(), Some(boss));
        repo.delete(day()).await.unwrap();
        assert_eq!(repo.get(day()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn add_damage_accumulates_and_dedupes_battles() {
        let repo = MemoryLeaderboardRepo::new();
        let battle = BattleId::new();

        assert!(repo.add_damage(day(), &user("t2_a"), "Aki", battle, 15).await.unwrap());
        assert!(!repo.add_damage(day(), &user("t2_a"), "Aki", battle, 15).await.unwrap());
        assert!(repo
            .add_damage(day(), &user("t2_a"), "Aki", BattleId::new(), 5)
            .await
            .unwrap());

        let top = repo.top(day(), 10).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].damage, 20);
        assert_eq!(top[0].rank, 1);
    }

    #[tokio::test]
    async fn zero_damage_is_not_a_participant() {
        let repo = MemoryLeaderboardRepo::new();
        repo.add_damage(day(), &user("t2_a"), "Aki", BattleId::new(), 0)
            .await
            .unwrap();
        assert_eq!(repo.participant_count(day()).await.unwrap(), 0);
        assert!(repo.participants(day()).await.unwrap().is_empty());
        assert!(repo.top(day(), 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ties_rank_earliest_first() {
        let repo = MemoryLeaderboardRepo::new();
        repo.add_damage(day(), &user("t2_b"), "Ben", BattleId::new(), 30)
            .await
            .unwrap();
        repo.add_damage(day(), &user("t2_a"), "Aki", BattleId::new(), 30)
            .await
            .unwrap();
        repo.add_damage(day(), &user("t2_c"), "Cho", BattleId::new(), 45)
            .await
            .unwrap();

        let top = repo.top(day(), 10).await.unwrap();
        let order: Vec<_> = top.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(order, vec!["Cho", "Ben", "Aki"]);
        assert_eq!(repo.top(day(), 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn days_are_independent() {
        let repo = MemoryLeaderboardRepo::new();
        let next = day().next().unwrap();
        repo.add_damage(day(), &user("t2_a"), "Aki", BattleId::new(), 10)
            .await
            .unwrap();
        assert_eq!(repo.participant_count(next).await.unwrap(), 0);
        repo.clear(day()).await.unwrap();
        assert_eq!(repo.participant_count(day()).await.unwrap(), 0);
    }
}
