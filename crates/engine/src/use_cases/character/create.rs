//! Create character use case.
//!
//! One character per identity, starting at level 1 with the class's base
//! stats and default equipment.

use std::sync::Arc;

use yokai_domain::{CharacterName, Player, PlayerClass, UserId};

use crate::infrastructure::locks::KeyedLocks;
use crate::infrastructure::ports::{ClockPort, PlayerRepo};

use super::error::CharacterError;

pub struct CreateCharacter {
    player_repo: Arc<dyn PlayerRepo>,
    player_locks: Arc<KeyedLocks<UserId>>,
    clock: Arc<dyn ClockPort>,
}

impl CreateCharacter {
    pub fn new(
        player_repo: Arc<dyn PlayerRepo>,
        player_locks: Arc<KeyedLocks<UserId>>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            player_repo,
            player_locks,
            clock,
        }
    }

    /// Create the character for `user_id`.
    ///
    /// # Errors
    /// * `CharacterError::Validation` - blank or over-long name, unknown class
    /// * `CharacterError::AlreadyExists` - the identity already has a character
    pub async fn execute(
        &self,
        user_id: &UserId,
        name: &str,
        class: &str,
    ) -> Result<Player, CharacterError> {
        let name = CharacterName::new(name)?;
        let class: PlayerClass = class.parse()?;

        let _guard = self.player_locks.lock(user_id).await;
        if self.player_repo.get(user_id).await?.is_some() {
            return Err(CharacterError::AlreadyExists);
        }

        let player = Player::new(user_id.clone(), name, class, self.clock.now());
        self.player_repo.create(&player).await.map_err(|e| {
            if e.is_constraint_violation() {
                CharacterError::AlreadyExists
            } else {
                CharacterError::Repo(e)
            }
        })?;

        tracing::info!(
            user_id = %user_id,
            class = %class,
            name = %player.name(),
            "Character created"
        );
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::memory::MemoryPlayerRepo;
    use crate::infrastructure::ports::{MockPlayerRepo, RepoError};
    use chrono::{TimeZone, Utc};
    use yokai_domain::stats_for_level;

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 1, 5, 9, 0, 0).unwrap()))
    }

    fn user() -> UserId {
        UserId::new("t2_tomoe").unwrap()
    }

    fn use_case(repo: Arc<dyn PlayerRepo>) -> CreateCharacter {
        CreateCharacter::new(repo, Arc::new(KeyedLocks::new()), clock())
    }

    #[tokio::test]
    async fn created_character_roundtrips_with_base_stats() {
        let repo = Arc::new(MemoryPlayerRepo::new());
        let use_case = use_case(repo.clone());

        let player = use_case.execute(&user(), "Tomoe", "ninja").await.unwrap();
        assert_eq!(player.level(), 1);
        assert_eq!(player.experience(), 0);
        assert_eq!(player.weapon(), "tanto_basic");
        assert_eq!(player.armor(), "shinobi_basic");

        let stored = repo.get(&user()).await.unwrap().unwrap();
        assert_eq!(stored.stats(), stats_for_level(PlayerClass::Ninja, 1));
        assert_eq!(stored, player);
    }

    #[tokio::test]
    async fn second_character_for_same_identity_is_rejected() {
        let repo = Arc::new(MemoryPlayerRepo::new());
        let use_case = use_case(repo.clone());
        use_case.execute(&user(), "Tomoe", "samurai").await.unwrap();

        let result = use_case.execute(&user(), "Other", "onmyoji").await;
        assert!(matches!(result, Err(CharacterError::AlreadyExists)));
        let stored = repo.get(&user()).await.unwrap().unwrap();
        assert_eq!(stored.class(), PlayerClass::Samurai);
    }

    #[tokio::test]
    async fn invalid_input_touches_nothing() {
        // No expectations: any repository call would panic
        let use_case = use_case(Arc::new(MockPlayerRepo::new()));

        let bad_class = use_case.execute(&user(), "Tomoe", "monk").await;
        assert!(matches!(bad_class, Err(CharacterError::Validation(_))));

        let blank = use_case.execute(&user(), "   ", "samurai").await;
        assert!(matches!(blank, Err(CharacterError::Validation(_))));

        let long = use_case.execute(&user(), &"x".repeat(51), "samurai").await;
        assert!(matches!(long, Err(CharacterError::Validation(_))));
    }

    #[tokio::test]
    async fn racing_create_maps_constraint_to_already_exists() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_get().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_| Err(RepoError::constraint("Player already exists")));

        let result = use_case(Arc::new(repo)).execute(&user(), "Tomoe", "samurai").await;
        assert!(matches!(result, Err(CharacterError::AlreadyExists)));
    }

    #[tokio::test]
    async fn storage_failure_is_a_repo_error() {
        let mut repo = MockPlayerRepo::new();
        repo.expect_get()
            .returning(|_| Err(RepoError::database("get_player", "disk I/O error")));

        let result = use_case(Arc::new(repo)).execute(&user(), "Tomoe", "samurai").await;
        assert!(matches!(result, Err(CharacterError::Repo(_))));
    }
}
