//! Error types for port operations.

/// Storage failures. Absence is `Ok(None)`, never an error.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// A stored record failed to (de)serialize or re-validate.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Insert-only write found an existing record.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl RepoError {
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn serialization(message: impl ToString) -> Self {
        Self::Serialization(message.to_string())
    }

    pub fn constraint(message: impl ToString) -> Self {
        Self::ConstraintViolation(message.to_string())
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

/// Errors from the external boss content service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentError {
    #[error("Content service not configured")]
    Unavailable,
    #[error("Content request rate limited")]
    RateLimited,
    #[error("Content request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid content response: {0}")]
    InvalidResponse(String),
}
