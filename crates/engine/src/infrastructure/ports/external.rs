//! External service ports.

use async_trait::async_trait;
use yokai_domain::GeneratedYokai;

use super::error::ContentError;

/// Source of generated boss content.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait YokaiContentPort: Send + Sync {
    /// Produce one yokai, optionally steered by a free-form prompt.
    async fn generate(&self, prompt: Option<String>) -> Result<GeneratedYokai, ContentError>;
}
