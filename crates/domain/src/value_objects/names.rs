//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a character name
const MAX_NAME_LENGTH: usize = 50;

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (non-empty, <=50 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 50 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_name_valid() {
        let name = CharacterName::new("Musashi").unwrap();
        assert_eq!(name.as_str(), "Musashi");
    }

    #[test]
    fn test_character_name_trimmed() {
        let name = CharacterName::new("  Hanzo  ").unwrap();
        assert_eq!(name.as_str(), "Hanzo");
    }

    #[test]
    fn test_character_name_empty_fails() {
        assert!(CharacterName::new("").is_err());
        assert!(CharacterName::new("   ").is_err());
    }

    #[test]
    fn test_character_name_too_long_fails() {
        let long_name = "a".repeat(51);
        assert!(CharacterName::new(long_name).is_err());
    }

    #[test]
    fn test_character_name_counts_characters_not_bytes() {
        // 20 kanji is 60 bytes of UTF-8 but well under the limit
        let name = "安倍晴明".repeat(5);
        assert!(CharacterName::new(name).is_ok());
    }

    #[test]
    fn test_character_name_serde_validates() {
        let json = serde_json::to_string(&CharacterName::new("Seimei").unwrap()).unwrap();
        assert_eq!(json, "\"Seimei\"");
        let bad: Result<CharacterName, _> = serde_json::from_str("\"  \"");
        assert!(bad.is_err());
    }
}
