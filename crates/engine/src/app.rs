//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    config::{ContentSourceKind, EngineConfig, StorageBackend},
    fallback_content::FallbackYokaiContent,
    locks::KeyedLocks,
    memory::{MemoryBossRepo, MemoryLeaderboardRepo, MemoryPlayerRepo},
    openai::OpenAiYokaiClient,
    ports::{BossRepo, ClockPort, LeaderboardRepo, PlayerRepo, RandomPort, RepoError},
    sqlite::SqliteStore,
};
use crate::use_cases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Storage ports, injected directly as `Arc<dyn PortTrait>`.
#[derive(Clone)]
pub struct Repositories {
    pub player: Arc<dyn PlayerRepo>,
    pub boss: Arc<dyn BossRepo>,
    pub leaderboard: Arc<dyn LeaderboardRepo>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            player: Arc::new(MemoryPlayerRepo::new()),
            boss: Arc::new(MemoryBossRepo::new()),
            leaderboard: Arc::new(MemoryLeaderboardRepo::new()),
        }
    }

    /// One SQLite file backs all three stores.
    pub async fn sqlite(db_path: &str) -> Result<Self, RepoError> {
        let store = Arc::new(SqliteStore::new(db_path).await?);
        Ok(Self {
            player: store.clone(),
            boss: store.clone(),
            leaderboard: store,
        })
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub create_character: use_cases::CreateCharacter,
    pub submit_battle: use_cases::SubmitBattle,
    pub get_today: use_cases::GetToday,
    pub get_leaderboard: use_cases::GetLeaderboard,
    pub reset_player_data: use_cases::ResetPlayerData,
    pub bosses: Arc<use_cases::BossLifecycle>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        repos: Repositories,
        content: use_cases::BossContentSource,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        // Shared by every use case that writes a player record
        let player_locks = Arc::new(KeyedLocks::new());

        let bosses = Arc::new(use_cases::BossLifecycle::new(
            repos.boss.clone(),
            repos.leaderboard.clone(),
            content,
            clock.clone(),
        ));

        let use_cases = UseCases {
            create_character: use_cases::CreateCharacter::new(
                repos.player.clone(),
                player_locks.clone(),
                clock.clone(),
            ),
            submit_battle: use_cases::SubmitBattle::new(
                repos.player.clone(),
                repos.leaderboard.clone(),
                bosses.clone(),
                player_locks.clone(),
                random,
            ),
            get_today: use_cases::GetToday::new(repos.player.clone(), bosses.clone()),
            get_leaderboard: use_cases::GetLeaderboard::new(repos.leaderboard.clone(), clock),
            reset_player_data: use_cases::ResetPlayerData::new(
                repos.player.clone(),
                bosses.clone(),
                player_locks,
            ),
            bosses,
        };

        Self {
            repositories: repos,
            use_cases,
        }
    }

    /// Wire the production adapters selected by `config`.
    pub async fn from_config(config: &EngineConfig) -> Result<Self, RepoError> {
        let repos = match config.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Repositories::in_memory()
            }
            StorageBackend::Sqlite => {
                tracing::info!(path = %config.database_path, "Using SQLite storage");
                Repositories::sqlite(&config.database_path).await?
            }
        };

        Ok(Self::new(
            repos,
            content_source(config),
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        ))
    }
}

fn content_source(config: &EngineConfig) -> use_cases::BossContentSource {
    match (config.content_source, config.openai.api_key.as_deref()) {
        (ContentSourceKind::Rotation, _) => use_cases::BossContentSource::Rotation,
        (ContentSourceKind::Generated, Some(api_key)) => {
            tracing::info!(
                base_url = %config.openai.base_url,
                model = %config.openai.model,
                "Using generated boss content"
            );
            let client = Arc::new(OpenAiYokaiClient::new(
                api_key,
                &config.openai.base_url,
                &config.openai.model,
            ));
            use_cases::BossContentSource::Generated(Arc::new(FallbackYokaiContent::new(client)))
        }
        (ContentSourceKind::Generated, None) => {
            tracing::warn!(
                "BOSS_CONTENT_SOURCE=generated but OPENAI_API_KEY is not set, using rotation"
            );
            use_cases::BossContentSource::Rotation
        }
    }
}
