//! Character operation errors.

use crate::infrastructure::ports::RepoError;
use yokai_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    #[error("Character already exists")]
    AlreadyExists,
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
