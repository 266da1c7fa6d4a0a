//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Storage (could swap in-memory -> SQLite -> Redis)
//! - Generated boss content (could swap OpenAI -> another provider)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{BossRepo, LeaderboardRepo, PlayerRepo};

pub use types::LeaderboardEntry;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::YokaiContentPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockBossRepo, MockLeaderboardRepo, MockPlayerRepo};

#[cfg(test)]
pub use external::MockYokaiContentPort;

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{ContentError, RepoError};
