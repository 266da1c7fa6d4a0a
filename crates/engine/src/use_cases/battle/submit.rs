//! Submit battle use case.
//!
//! Resolves three queued actions against today's boss and applies the result
//! to the player, the leaderboard and the boss.
//!
//! # Ordering
//!
//! 1. Under the player lock: settle any pending contribution, check the
//!    preconditions, resolve, then persist the player with a new pending
//!    contribution.
//! 2. Under the day lock (nested inside the player lock): record the damage on
//!    the leaderboard, then on the boss.
//! 3. Clear the pending contribution and persist the player again.
//! 4. With no locks held: award the victory bonus if step 2 defeated the boss.
//!
//! If step 2 fails the marker stays on the player and the next submission
//! replays it. The leaderboard and boss both ignore battle ids they have
//! already applied, so the replay lands exactly once.

use std::sync::Arc;

use yokai_domain::{
    resolve_battle, BattleAction, BattleId, BattleResult, Boss, GameDay, PendingContribution,
    Player, UserId, ATTEMPTS_PER_DAY,
};

use crate::infrastructure::locks::KeyedLocks;
use crate::infrastructure::ports::{LeaderboardRepo, PlayerRepo, RandomPort, RepoError};
use crate::use_cases::boss::{BossLifecycle, DamageOutcome};

use super::error::BattleError;

/// Everything the caller needs to render a finished battle.
#[derive(Debug, Clone)]
pub struct BattleOutcome {
    pub result: BattleResult,
    /// Re-read after any victory bonus
    pub player: Player,
    pub boss: Boss,
}

pub struct SubmitBattle {
    player_repo: Arc<dyn PlayerRepo>,
    leaderboard_repo: Arc<dyn LeaderboardRepo>,
    bosses: Arc<BossLifecycle>,
    player_locks: Arc<KeyedLocks<UserId>>,
    random: Arc<dyn RandomPort>,
}

impl SubmitBattle {
    pub fn new(
        player_repo: Arc<dyn PlayerRepo>,
        leaderboard_repo: Arc<dyn LeaderboardRepo>,
        bosses: Arc<BossLifecycle>,
        player_locks: Arc<KeyedLocks<UserId>>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            player_repo,
            leaderboard_repo,
            bosses,
            player_locks,
            random,
        }
    }

    /// Run one battle for `user_id`.
    ///
    /// `display_name` is what the leaderboard shows for this player.
    ///
    /// # Errors
    /// Checked in this order, each without mutating anything:
    /// * `BattleError::PlayerNotFound`
    /// * `BattleError::AttemptsExhausted`
    /// * `BattleError::InvalidInput` - not exactly three known actions
    pub async fn execute(
        &self,
        user_id: &UserId,
        display_name: &str,
        actions: &[String],
    ) -> Result<BattleOutcome, BattleError> {
        let day = self.bosses.today();
        let mut defeated_days = Vec::new();

        let locked = self
            .execute_locked(user_id, display_name, actions, day, &mut defeated_days)
            .await;

        // A settled pending contribution may have defeated a boss even when the
        // rest of the submission failed, so the bonus runs either way.
        let mut fan_out = Ok(());
        for defeated in defeated_days {
            if let Err(e) = self.award_victory_bonus(defeated).await {
                if fan_out.is_ok() {
                    fan_out = Err(e);
                }
            }
        }

        let (result, boss) = locked?;
        fan_out?;

        let player = self
            .player_repo
            .get(user_id)
            .await?
            .ok_or(BattleError::PlayerNotFound)?;

        Ok(BattleOutcome {
            result,
            player,
            boss,
        })
    }

    async fn execute_locked(
        &self,
        user_id: &UserId,
        display_name: &str,
        actions: &[String],
        day: GameDay,
        defeated_days: &mut Vec<GameDay>,
    ) -> Result<(BattleResult, Boss), BattleError> {
        let _player_guard = self.player_locks.lock(user_id).await;

        let mut player = self
            .player_repo
            .get(user_id)
            .await?
            .ok_or(BattleError::PlayerNotFound)?;

        self.settle_pending(&mut player, display_name, defeated_days)
            .await?;

        if player.remaining_attempts(day) == 0 {
            return Err(BattleError::AttemptsExhausted {
                used: player.attempts_used_on(day),
                max: ATTEMPTS_PER_DAY,
            });
        }

        let actions = BattleAction::parse_sequence(actions).map_err(BattleError::InvalidInput)?;
        let boss = self.bosses.get_or_create(day).await?;

        let mut rng = || self.random.gen_unit();
        let result = resolve_battle(&player, boss.content(), &actions, &mut rng);

        player.consume_attempt(day)?;
        player.gain_experience(result.experience_gained);
        let contribution = PendingContribution {
            battle_id: BattleId::from_uuid(self.random.gen_uuid()),
            day,
            damage: result.total_damage,
        };
        player.set_pending_contribution(contribution);
        self.player_repo.save(&player).await?;

        let outcome = self
            .apply_contribution(user_id, display_name, contribution)
            .await?;
        if outcome.defeated_boss() {
            defeated_days.push(day);
        }

        player.clear_pending_contribution(contribution.battle_id);
        self.player_repo.save(&player).await?;

        tracing::info!(
            user_id = %user_id,
            day = %day,
            battle_id = %contribution.battle_id,
            damage = result.total_damage,
            experience = result.experience_gained,
            failed = result.failed,
            boss_hp = outcome.boss.current_hp(),
            "Battle resolved"
        );

        Ok((result, outcome.boss))
    }

    /// Replay a contribution left behind by an earlier failed submission.
    async fn settle_pending(
        &self,
        player: &mut Player,
        display_name: &str,
        defeated_days: &mut Vec<GameDay>,
    ) -> Result<(), BattleError> {
        let Some(pending) = player.pending_contribution().copied() else {
            return Ok(());
        };

        tracing::warn!(
            user_id = %player.user_id(),
            battle_id = %pending.battle_id,
            day = %pending.day,
            damage = pending.damage,
            "Settling pending contribution"
        );

        let outcome = self
            .apply_contribution(player.user_id(), display_name, pending)
            .await?;
        if outcome.defeated_boss() {
            defeated_days.push(pending.day);
        }

        player.clear_pending_contribution(pending.battle_id);
        self.player_repo.save(player).await?;
        Ok(())
    }

    /// Record damage on the leaderboard, then the boss, under the day lock.
    async fn apply_contribution(
        &self,
        user_id: &UserId,
        display_name: &str,
        contribution: PendingContribution,
    ) -> Result<DamageOutcome, BattleError> {
        let guard = self.bosses.lock_day(contribution.day).await;
        self.leaderboard_repo
            .add_damage(
                contribution.day,
                user_id,
                display_name,
                contribution.battle_id,
                contribution.damage,
            )
            .await?;
        let outcome = self
            .bosses
            .apply_damage(&guard, contribution.battle_id, contribution.damage)
            .await?;
        Ok(outcome)
    }

    /// Give every participant of `day` the victory bonus.
    ///
    /// Must run with no player lock held. Every participant is attempted even
    /// if some fail; the first failure is returned.
    async fn award_victory_bonus(&self, day: GameDay) -> Result<(), BattleError> {
        let participants = self.leaderboard_repo.participants(day).await?;
        tracing::info!(
            day = %day,
            participants = participants.len(),
            "Awarding victory bonus"
        );

        let mut failed = 0;
        let mut first_error = None;
        for user_id in participants {
            match self.award_one(&user_id).await {
                Ok(true) => {}
                Ok(false) => {
                    tracing::warn!(user_id = %user_id, day = %day, "Participant has no character, skipping bonus");
                }
                Err(e) => {
                    tracing::error!(user_id = %user_id, day = %day, error = %e, "Failed to award victory bonus");
                    failed += 1;
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(source) => Err(BattleError::FanOut { failed, source }),
            None => Ok(()),
        }
    }

    async fn award_one(&self, user_id: &UserId) -> Result<bool, RepoError> {
        let _guard = self.player_locks.lock(user_id).await;
        let Some(mut player) = self.player_repo.get(user_id).await? else {
            return Ok(false);
        };

        let change = player.award_victory_bonus();
        self.player_repo.save(&player).await?;

        if change.leveled_up() {
            tracing::debug!(
                user_id = %user_id,
                from = change.previous,
                to = change.current,
                "Victory bonus level up"
            );
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SequenceRandom;
    use crate::infrastructure::memory::{MemoryBossRepo, MemoryLeaderboardRepo, MemoryPlayerRepo};
    use crate::infrastructure::ports::{BossRepo, ClockPort};
    use crate::use_cases::boss::BossContentSource;
    use crate::use_cases::character::CreateCharacter;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    // =========================================================================
    // Test doubles
    // =========================================================================

    struct SteppingClock(Mutex<DateTime<Utc>>);

    impl SteppingClock {
        fn at(now: DateTime<Utc>) -> Self {
            Self(Mutex::new(now))
        }

        fn advance(&self, by: Duration) {
            let mut now = self.0.lock().unwrap();
            *now += by;
        }
    }

    impl ClockPort for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    /// Boss store whose next save fails once armed.
    #[derive(Default)]
    struct FlakyBossRepo {
        inner: MemoryBossRepo,
        fail_next_save: AtomicBool,
    }

    #[async_trait]
    impl BossRepo for FlakyBossRepo {
        async fn get(&self, day: GameDay) -> Result<Option<Boss>, RepoError> {
            self.inner.get(day).await
        }

        async fn save(&self, boss: &Boss) -> Result<(), RepoError> {
            if self.fail_next_save.swap(false, Ordering::SeqCst) {
                return Err(RepoError::database("save_boss", "database is locked"));
            }
            self.inner.save(boss).await
        }

        async fn delete(&self, day: GameDay) -> Result<(), RepoError> {
            self.inner.delete(day).await
        }
    }

    /// Player store that refuses to save one user.
    struct BrokenSavesFor {
        inner: MemoryPlayerRepo,
        broken: UserId,
    }

    #[async_trait]
    impl PlayerRepo for BrokenSavesFor {
        async fn get(&self, user_id: &UserId) -> Result<Option<Player>, RepoError> {
            self.inner.get(user_id).await
        }

        async fn create(&self, player: &Player) -> Result<(), RepoError> {
            self.inner.create(player).await
        }

        async fn save(&self, player: &Player) -> Result<(), RepoError> {
            if player.user_id() == &self.broken {
                return Err(RepoError::database("save_player", "disk full"));
            }
            self.inner.save(player).await
        }

        async fn delete(&self, user_id: &UserId) -> Result<(), RepoError> {
            self.inner.delete(user_id).await
        }
    }

    // =========================================================================
    // Harness
    // =========================================================================

    struct Harness {
        players: Arc<dyn PlayerRepo>,
        boss_repo: Arc<dyn BossRepo>,
        leaderboard: Arc<MemoryLeaderboardRepo>,
        bosses: Arc<BossLifecycle>,
        clock: Arc<SteppingClock>,
        create: CreateCharacter,
        submit: SubmitBattle,
    }

    impl Harness {
        fn with(
            now: DateTime<Utc>,
            players: Arc<dyn PlayerRepo>,
            boss_repo: Arc<dyn BossRepo>,
        ) -> Self {
            let clock = Arc::new(SteppingClock::at(now));
            let leaderboard = Arc::new(MemoryLeaderboardRepo::new());
            let locks = Arc::new(KeyedLocks::new());
            let bosses = Arc::new(BossLifecycle::new(
                boss_repo.clone(),
                leaderboard.clone(),
                BossContentSource::Rotation,
                clock.clone(),
            ));
            Self {
                create: CreateCharacter::new(players.clone(), locks.clone(), clock.clone()),
                submit: SubmitBattle::new(
                    players.clone(),
                    leaderboard.clone(),
                    bosses.clone(),
                    locks,
                    Arc::new(SequenceRandom::unlucky()),
                ),
                players,
                boss_repo,
                leaderboard,
                bosses,
                clock,
            }
        }

        /// Sunday: Kappa, 20 HP.
        fn kappa_day() -> Self {
            Self::with(
                sunday(),
                Arc::new(MemoryPlayerRepo::new()),
                Arc::new(MemoryBossRepo::new()),
            )
        }

        /// Monday: Oni, 200000 HP.
        fn oni_day() -> Self {
            Self::with(
                monday(),
                Arc::new(MemoryPlayerRepo::new()),
                Arc::new(MemoryBossRepo::new()),
            )
        }

        fn day(&self) -> GameDay {
            self.bosses.today()
        }

        async fn character(&self, id: &str, class: &str) -> UserId {
            let user_id = UserId::new(id).unwrap();
            self.create.execute(&user_id, id, class).await.unwrap();
            user_id
        }

        async fn battle(&self, user_id: &UserId, actions: &[&str]) -> Result<BattleOutcome, BattleError> {
            let actions: Vec<String> = actions.iter().map(|a| a.to_string()).collect();
            self.submit.execute(user_id, user_id.as_str(), &actions).await
        }

        async fn player(&self, user_id: &UserId) -> Player {
            self.players.get(user_id).await.unwrap().unwrap()
        }

        async fn boss(&self) -> Option<Boss> {
            self.boss_repo.get(self.day()).await.unwrap()
        }
    }

    fn sunday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap()
    }

    fn monday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 6, 10, 0, 0).unwrap()
    }

    const ATTACKS: &[&str] = &["attack", "attack", "attack"];
    const OPENER: &[&str] = &["special", "attack", "attack"];

    // =========================================================================
    // Scenarios
    // =========================================================================

    #[tokio::test]
    async fn samurai_attacks_wound_kappa() {
        let h = Harness::kappa_day();
        let musashi = h.character("t2_musashi", "samurai").await;

        let outcome = h.battle(&musashi, ATTACKS).await.unwrap();

        assert_eq!(outcome.result.total_damage, 15);
        assert_eq!(outcome.result.experience_gained, 45);
        assert!(!outcome.result.failed);
        assert_eq!(outcome.boss.current_hp(), 5);
        assert!(!outcome.boss.is_defeated());
        assert_eq!(outcome.boss.participant_count(), 1);
        assert_eq!(outcome.player.experience(), 45);
        assert_eq!(outcome.player.remaining_attempts(h.day()), 2);
        assert!(outcome.player.pending_contribution().is_none());

        let top = h.leaderboard.top(h.day(), 10).await.unwrap();
        assert_eq!(top[0].damage, 15);
        assert_eq!(h.boss().await.unwrap(), outcome.boss);
    }

    #[tokio::test]
    async fn killing_blow_awards_every_participant_once() {
        let h = Harness::kappa_day();
        let first = h.character("t2_first", "samurai").await;
        let killer = h.character("t2_killer", "samurai").await;

        h.battle(&first, ATTACKS).await.unwrap();
        let outcome = h.battle(&killer, OPENER).await.unwrap();

        assert_eq!(outcome.result.total_damage, 44);
        assert_eq!(outcome.boss.current_hp(), 0);
        assert!(outcome.boss.defeated_at().is_some());
        // Battle xp plus the bonus, already visible in the returned player
        assert_eq!(outcome.player.experience(), 545);
        assert_eq!(outcome.player.level(), 3);
        assert_eq!(h.player(&first).await.experience(), 545);

        // Fighting a defeated boss still counts, but never re-awards
        let late = h.character("t2_late", "samurai").await;
        let after = h.battle(&late, ATTACKS).await.unwrap();
        assert_eq!(after.boss.current_hp(), 0);
        assert_eq!(after.boss.defeated_at(), outcome.boss.defeated_at());
        assert_eq!(after.player.experience(), 45);
        assert_eq!(h.player(&first).await.experience(), 545);
        assert_eq!(h.player(&killer).await.experience(), 545);
        assert_eq!(h.leaderboard.participant_count(h.day()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn fourth_attempt_changes_nothing() {
        let h = Harness::oni_day();
        let abe = h.character("t2_abe", "onmyoji").await;
        for _ in 0..3 {
            h.battle(&abe, ATTACKS).await.unwrap();
        }
        let player_before = h.player(&abe).await;
        let boss_before = h.boss().await;
        let board_before = h.leaderboard.top(h.day(), 10).await.unwrap();

        let result = h.battle(&abe, ATTACKS).await;

        assert!(matches!(
            result,
            Err(BattleError::AttemptsExhausted { used: 3, max: 3 })
        ));
        assert_eq!(h.player(&abe).await, player_before);
        assert_eq!(h.boss().await, boss_before);
        assert_eq!(h.leaderboard.top(h.day(), 10).await.unwrap(), board_before);
    }

    #[tokio::test]
    async fn attempts_reset_on_the_next_utc_day() {
        let h = Harness::oni_day();
        let abe = h.character("t2_abe", "onmyoji").await;
        for _ in 0..3 {
            h.battle(&abe, ATTACKS).await.unwrap();
        }
        assert!(h.battle(&abe, ATTACKS).await.is_err());

        h.clock.advance(Duration::days(1));
        let outcome = h.battle(&abe, ATTACKS).await.unwrap();
        assert_eq!(outcome.player.remaining_attempts(h.day()), 2);
        // Tuesday brings a new boss
        assert_eq!(outcome.boss.content().name(), "Kitsune");
    }

    #[tokio::test]
    async fn invalid_actions_are_rejected_before_any_mutation() {
        let h = Harness::oni_day();
        let abe = h.character("t2_abe", "onmyoji").await;
        let before = h.player(&abe).await;

        let unknown = h.battle(&abe, &["attack", "dance", "attack"]).await;
        assert!(matches!(unknown, Err(BattleError::InvalidInput(_))));
        let short = h.battle(&abe, &["attack", "attack"]).await;
        assert!(matches!(short, Err(BattleError::InvalidInput(_))));

        assert_eq!(h.player(&abe).await, before);
        assert!(h.boss().await.is_none());
    }

    #[tokio::test]
    async fn battle_without_character_is_not_found() {
        let h = Harness::kappa_day();
        let ghost = UserId::new("t2_ghost").unwrap();
        let result = h.battle(&ghost, ATTACKS).await;
        assert!(matches!(result, Err(BattleError::PlayerNotFound)));
        assert!(h.boss().await.is_none());
    }

    #[tokio::test]
    async fn missing_character_is_reported_before_invalid_actions() {
        let h = Harness::kappa_day();
        let ghost = UserId::new("t2_ghost").unwrap();

        let result = h.battle(&ghost, &["attack", "dance"]).await;

        assert!(matches!(result, Err(BattleError::PlayerNotFound)));
        assert!(h.boss().await.is_none());
    }

    #[tokio::test]
    async fn exhausted_attempts_are_reported_before_invalid_actions() {
        let h = Harness::oni_day();
        let abe = h.character("t2_abe", "onmyoji").await;
        for _ in 0..3 {
            h.battle(&abe, ATTACKS).await.unwrap();
        }
        let before = h.player(&abe).await;

        let result = h.battle(&abe, &["attack", "dance"]).await;

        assert!(matches!(
            result,
            Err(BattleError::AttemptsExhausted { used: 3, max: 3 })
        ));
        assert_eq!(h.player(&abe).await, before);
    }

    #[tokio::test]
    async fn pending_contribution_is_settled_exactly_once() {
        let boss_repo = Arc::new(FlakyBossRepo::default());
        let h = Harness::with(monday(), Arc::new(MemoryPlayerRepo::new()), boss_repo.clone());
        let abe = h.character("t2_abe", "onmyoji").await;
        h.bosses.get_or_create_today().await.unwrap();

        boss_repo.fail_next_save.store(true, Ordering::SeqCst);
        let failed = h.battle(&abe, ATTACKS).await;
        assert!(matches!(failed, Err(BattleError::Boss(_))));

        // Player and leaderboard are ahead of the boss, and the marker says so
        let stranded = h.player(&abe).await;
        let pending = *stranded.pending_contribution().unwrap();
        assert_eq!(pending.damage, 9);
        assert_eq!(stranded.experience(), 75);
        assert_eq!(h.boss().await.unwrap().current_hp(), 200_000);

        let outcome = h.battle(&abe, ATTACKS).await.unwrap();

        assert_eq!(outcome.boss.current_hp(), 200_000 - 18);
        assert!(outcome.boss.has_applied(pending.battle_id));
        assert!(outcome.player.pending_contribution().is_none());
        assert_eq!(outcome.player.remaining_attempts(h.day()), 1);
        let top = h.leaderboard.top(h.day(), 10).await.unwrap();
        assert_eq!(top[0].damage, 18);
    }

    #[tokio::test]
    async fn participant_without_character_is_skipped() {
        let h = Harness::kappa_day();
        let ghost = UserId::new("t2_reset").unwrap();
        h.leaderboard
            .add_damage(h.day(), &ghost, "reset", BattleId::new(), 5)
            .await
            .unwrap();
        let killer = h.character("t2_killer", "samurai").await;

        let outcome = h.battle(&killer, OPENER).await.unwrap();
        assert!(outcome.boss.is_defeated());
        assert_eq!(outcome.player.experience(), 545);
        assert!(h.players.get(&ghost).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn fan_out_failure_is_surfaced_after_trying_everyone() {
        let broken = UserId::new("t2_broken").unwrap();
        let players = Arc::new(BrokenSavesFor {
            inner: MemoryPlayerRepo::new(),
            broken: broken.clone(),
        });
        let h = Harness::with(sunday(), players.clone(), Arc::new(MemoryBossRepo::new()));

        players
            .inner
            .create(&Player::new(
                broken.clone(),
                yokai_domain::CharacterName::new("Broken").unwrap(),
                yokai_domain::PlayerClass::Samurai,
                sunday(),
            ))
            .await
            .unwrap();
        h.leaderboard
            .add_damage(h.day(), &broken, "Broken", BattleId::new(), 3)
            .await
            .unwrap();
        let killer = h.character("t2_killer", "samurai").await;

        let result = h.battle(&killer, OPENER).await;

        assert!(matches!(result, Err(BattleError::FanOut { failed: 1, .. })));
        assert_eq!(h.player(&killer).await.experience(), 545);
        assert_eq!(h.player(&broken).await.experience(), 0);
    }

    // =========================================================================
    // Concurrency
    // =========================================================================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_battles_lose_no_damage() {
        let h = Arc::new(Harness::oni_day());
        let mut users = Vec::new();
        for i in 0..6 {
            users.push(h.character(&format!("t2_abe{i}"), "onmyoji").await);
        }

        let mut handles = Vec::new();
        for user in users.clone() {
            let h = h.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..3 {
                    h.battle(&user, ATTACKS).await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // 225 xp after three battles keeps everyone at level 1: 9 per battle
        let boss = h.boss().await.unwrap();
        assert_eq!(boss.current_hp(), 200_000 - 6 * 27);
        assert_eq!(boss.participant_count(), 6);
        let top = h.leaderboard.top(h.day(), 10).await.unwrap();
        assert_eq!(top.len(), 6);
        assert!(top.iter().all(|entry| entry.damage == 27));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn simultaneous_killing_blows_award_bonus_once() {
        let h = Arc::new(Harness::kappa_day());
        let mut users = Vec::new();
        for i in 0..8 {
            users.push(h.character(&format!("t2_samurai{i}"), "samurai").await);
        }

        let mut handles = Vec::new();
        for user in users.clone() {
            let h = h.clone();
            handles.push(tokio::spawn(async move { h.battle(&user, ATTACKS).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let boss = h.boss().await.unwrap();
        assert_eq!(boss.current_hp(), 0);
        assert_eq!(boss.participant_count(), 8);

        let mut rewarded = 0;
        for user in &users {
            let xp = h.player(user).await.experience();
            assert!(xp == 45 || xp == 545, "{user} has {xp} xp");
            if xp == 545 {
                rewarded += 1;
            }
        }
        // At least both players whose damage crossed zero were on the board
        assert!(rewarded >= 2);
    }
}
