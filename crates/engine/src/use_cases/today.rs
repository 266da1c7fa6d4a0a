//! Today's state for one player: their character (if any) and the boss.

use std::sync::Arc;

use yokai_domain::{Boss, GameDay, Player, UserId, ATTEMPTS_PER_DAY};

use crate::infrastructure::ports::PlayerRepo;
use crate::use_cases::boss::{BossError, BossLifecycle};

#[derive(Debug, Clone)]
pub struct TodaySnapshot {
    pub day: GameDay,
    pub player: Option<Player>,
    pub boss: Boss,
    pub remaining_attempts: u8,
}

pub struct GetToday {
    player_repo: Arc<dyn PlayerRepo>,
    bosses: Arc<BossLifecycle>,
}

impl GetToday {
    pub fn new(player_repo: Arc<dyn PlayerRepo>, bosses: Arc<BossLifecycle>) -> Self {
        Self {
            player_repo,
            bosses,
        }
    }

    /// A player without a character still sees the boss and a full budget.
    pub async fn execute(&self, user_id: &UserId) -> Result<TodaySnapshot, BossError> {
        let day = self.bosses.today();
        let player = self.player_repo.get(user_id).await?;
        let boss = self.bosses.get_or_create(day).await?;
        let remaining_attempts = player
            .as_ref()
            .map(|p| p.remaining_attempts(day))
            .unwrap_or(ATTEMPTS_PER_DAY);

        Ok(TodaySnapshot {
            day,
            player,
            boss,
            remaining_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::memory::{MemoryBossRepo, MemoryLeaderboardRepo, MemoryPlayerRepo};
    use crate::use_cases::boss::BossContentSource;
    use chrono::{TimeZone, Utc};
    use yokai_domain::{CharacterName, PlayerClass};

    fn setup() -> (GetToday, Arc<MemoryPlayerRepo>) {
        let players = Arc::new(MemoryPlayerRepo::new());
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 1, 8, 6, 0, 0).unwrap()));
        let bosses = Arc::new(BossLifecycle::new(
            Arc::new(MemoryBossRepo::new()),
            Arc::new(MemoryLeaderboardRepo::new()),
            BossContentSource::Rotation,
            clock,
        ));
        (GetToday::new(players.clone(), bosses), players)
    }

    #[tokio::test]
    async fn newcomer_sees_boss_and_full_attempts() {
        let (today, _) = setup();
        let snapshot = today.execute(&UserId::new("t2_new").unwrap()).await.unwrap();

        assert!(snapshot.player.is_none());
        assert_eq!(snapshot.remaining_attempts, 3);
        // Wednesday
        assert_eq!(snapshot.boss.content().name(), "Tengu");
        assert_eq!(snapshot.day, GameDay::from_ymd(2025, 1, 8).unwrap());
    }

    #[tokio::test]
    async fn reports_the_players_remaining_attempts() {
        let (today, players) = setup();
        let user_id = UserId::new("t2_abe").unwrap();
        let day = GameDay::from_ymd(2025, 1, 8).unwrap();
        let mut player = Player::new(
            user_id.clone(),
            CharacterName::new("Abe").unwrap(),
            PlayerClass::Onmyoji,
            Utc::now(),
        );
        player.consume_attempt(day).unwrap();
        players.save(&player).await.unwrap();

        let snapshot = today.execute(&user_id).await.unwrap();
        assert_eq!(snapshot.remaining_attempts, 2);
        assert_eq!(snapshot.player, Some(player));
    }
}
