//! Daily boss lifecycle.
//!
//! One boss per [`GameDay`], created lazily on first access. All damage goes
//! through [`BossLifecycle::apply_damage`], which needs a [`DayGuard`] so the
//! read-modify-write can only happen while the day is locked.

use std::sync::Arc;

use yokai_domain::{BattleId, Boss, BossContent, BossTransition, GameDay, YokaiKind};

use crate::infrastructure::locks::{KeyGuard, KeyedLocks};
use crate::infrastructure::ports::{
    BossRepo, ClockPort, ContentError, LeaderboardRepo, RepoError, YokaiContentPort,
};

#[derive(Debug, thiserror::Error)]
pub enum BossError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Boss content error: {0}")]
    Content(#[from] ContentError),
}

/// Where a new day's boss content comes from.
#[derive(Clone)]
pub enum BossContentSource {
    /// Fixed weekday rotation over the catalog.
    Rotation,
    /// External generator. Wrap it in `FallbackYokaiContent` so creation never fails.
    Generated(Arc<dyn YokaiContentPort>),
}

impl BossContentSource {
    pub async fn select(&self, day: GameDay) -> Result<BossContent, BossError> {
        match self {
            Self::Rotation => Ok(BossContent::catalog(YokaiKind::for_day(day))),
            Self::Generated(port) => {
                let yokai = port.generate(None).await?;
                Ok(BossContent::Generated(yokai))
            }
        }
    }
}

/// Proof that the caller holds the lock for `day`.
pub struct DayGuard {
    day: GameDay,
    _guard: KeyGuard<GameDay>,
}

impl DayGuard {
    pub fn day(&self) -> GameDay {
        self.day
    }
}

/// Result of applying one battle's damage.
#[derive(Debug, Clone)]
pub struct DamageOutcome {
    pub boss: Boss,
    /// `None` when the battle had already been applied.
    pub transition: Option<BossTransition>,
}

impl DamageOutcome {
    /// Whether this application took the boss from alive to defeated.
    pub fn defeated_boss(&self) -> bool {
        self.transition.is_some_and(|t| t.is_defeat())
    }
}

pub struct BossLifecycle {
    boss_repo: Arc<dyn BossRepo>,
    leaderboard_repo: Arc<dyn LeaderboardRepo>,
    content: BossContentSource,
    clock: Arc<dyn ClockPort>,
    day_locks: KeyedLocks<GameDay>,
}

impl BossLifecycle {
    pub fn new(
        boss_repo: Arc<dyn BossRepo>,
        leaderboard_repo: Arc<dyn LeaderboardRepo>,
        content: BossContentSource,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            boss_repo,
            leaderboard_repo,
            content,
            clock,
            day_locks: KeyedLocks::new(),
        }
    }

    /// The current UTC game day.
    pub fn today(&self) -> GameDay {
        GameDay::from_datetime(self.clock.now())
    }

    pub async fn lock_day(&self, day: GameDay) -> DayGuard {
        DayGuard {
            day,
            _guard: self.day_locks.lock(&day).await,
        }
    }

    pub async fn get_or_create_today(&self) -> Result<Boss, BossError> {
        self.get_or_create(self.today()).await
    }

    /// Fetch the boss for `day`, creating it on first access.
    pub async fn get_or_create(&self, day: GameDay) -> Result<Boss, BossError> {
        if let Some(boss) = self.boss_repo.get(day).await? {
            return Ok(boss);
        }
        let guard = self.lock_day(day).await;
        self.get_or_create_locked(&guard).await
    }

    /// Same as [`get_or_create`](Self::get_or_create) for a caller already holding the day.
    pub async fn get_or_create_locked(&self, guard: &DayGuard) -> Result<Boss, BossError> {
        let day = guard.day();
        if let Some(boss) = self.boss_repo.get(day).await? {
            return Ok(boss);
        }

        let content = self.content.select(day).await?;
        let boss = Boss::new(day, content, self.clock.now());
        self.boss_repo.save(&boss).await?;

        tracing::info!(
            day = %day,
            boss = %boss.content().name(),
            max_hp = boss.max_hp(),
            "Daily boss created"
        );
        Ok(boss)
    }

    /// Apply a battle's damage to the day's boss and persist it.
    ///
    /// Re-reads the record under the guard, so concurrent battles never lose
    /// each other's damage. The participant count is refreshed from the
    /// leaderboard, which the caller must already have updated.
    pub async fn apply_damage(
        &self,
        guard: &DayGuard,
        battle_id: BattleId,
        amount: u32,
    ) -> Result<DamageOutcome, BossError> {
        let day = guard.day();
        let mut boss = self.get_or_create_locked(guard).await?;

        let transition = boss.apply_battle(battle_id, amount, self.clock.now());
        let participants = self.leaderboard_repo.participant_count(day).await?;
        boss.set_participant_count(participants);
        self.boss_repo.save(&boss).await?;

        match transition {
            Some(BossTransition::Defeated) => tracing::info!(
                day = %day,
                boss = %boss.content().name(),
                battle_id = %battle_id,
                participants,
                "Boss defeated"
            ),
            None => tracing::debug!(
                day = %day,
                battle_id = %battle_id,
                "Battle already applied to boss"
            ),
            _ => {}
        }

        Ok(DamageOutcome { boss, transition })
    }

    /// Forget the day's boss and leaderboard.
    pub async fn reset_day(&self, guard: &DayGuard) -> Result<(), BossError> {
        let day = guard.day();
        self.boss_repo.delete(day).await?;
        self.leaderboard_repo.clear(day).await?;
        tracing::info!(day = %day, "Boss day reset");
        Ok(())
    }
}
