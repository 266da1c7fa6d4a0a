//! Battle operation errors.

use crate::infrastructure::ports::RepoError;
use crate::use_cases::boss::BossError;
use yokai_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    #[error("Character not found")]
    PlayerNotFound,
    #[error("No attempts remaining today: {used}/{max} used")]
    AttemptsExhausted { used: u8, max: u8 },
    #[error("Invalid battle input: {0}")]
    InvalidInput(DomainError),
    #[error("Boss error: {0}")]
    Boss(#[from] BossError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("Victory bonus failed for {failed} participant(s): {source}")]
    FanOut {
        failed: usize,
        #[source]
        source: RepoError,
    },
}

impl From<DomainError> for BattleError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::AttemptsExhausted { used, max } => Self::AttemptsExhausted { used, max },
            other => Self::InvalidInput(other),
        }
    }
}
