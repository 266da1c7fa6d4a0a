//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across ports and the domain to fulfill user stories.

pub mod admin;
pub mod battle;
pub mod boss;
pub mod character;
pub mod leaderboard;
pub mod today;

// Re-export main types
pub use admin::ResetPlayerData;
pub use battle::{BattleError, BattleOutcome, SubmitBattle};
pub use boss::{BossContentSource, BossError, BossLifecycle};
pub use character::{CharacterError, CreateCharacter};
pub use leaderboard::{DailyLeaderboard, GetLeaderboard};
pub use today::{GetToday, TodaySnapshot};
