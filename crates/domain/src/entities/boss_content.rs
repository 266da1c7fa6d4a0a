//! Boss content: either a catalog yokai or an externally generated one.
//!
//! Both variants expose the same stat surface so combat never has to branch on
//! where the content came from.

use serde::{Deserialize, Serialize};

use super::yokai::YokaiKind;
use crate::error::DomainError;

/// XP reward used for generated content, which carries none of its own.
pub const GENERATED_XP_REWARD: u32 = 200;

/// Loot table used for generated content.
pub const GENERATED_LOOT: &[&str] = &["Mysterious Shard", "Ancient Scroll", "Spirit Essence"];

const MAX_GENERATED_HP: u32 = 1_000_000;
const MAX_GENERATED_DEFENSE: u32 = 100;
const MAX_PATTERN_LENGTH: usize = 10;
const MAX_PATTERN_VALUE: u32 = 500;

/// Content payload produced by the external yokai generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedYokai {
    pub name: String,
    #[serde(rename = "nameJP")]
    pub name_jp: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub backstory: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub hp: u32,
    pub defense: u32,
    pub attack_pattern: Vec<u32>,
}

impl GeneratedYokai {
    /// Content substituted whenever the generator is unavailable or misbehaves.
    pub fn fallback() -> Self {
        Self {
            name: "Mysterious Shadow".to_string(),
            name_jp: "謎の影".to_string(),
            description: "A mysterious shadow creature that emerged from the void".to_string(),
            backstory: "When AI spirits fail to manifest, this shadow appears in their place"
                .to_string(),
            image_url: Some("/oni.jpg".to_string()),
            hp: 150_000,
            defense: 20,
            attack_pattern: vec![18, 22, 20, 24, 21],
        }
    }

    /// Check that the payload can back a boss.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("Generated yokai has no name"));
        }
        if self.hp == 0 || self.hp > MAX_GENERATED_HP {
            return Err(DomainError::validation(format!(
                "Generated yokai hp must be between 1 and {}, got {}",
                MAX_GENERATED_HP, self.hp
            )));
        }
        if self.defense > MAX_GENERATED_DEFENSE {
            return Err(DomainError::validation(format!(
                "Generated yokai defense cannot exceed {}",
                MAX_GENERATED_DEFENSE
            )));
        }
        if self.attack_pattern.is_empty() || self.attack_pattern.len() > MAX_PATTERN_LENGTH {
            return Err(DomainError::validation(format!(
                "Generated yokai attack pattern must have 1 to {} entries",
                MAX_PATTERN_LENGTH
            )));
        }
        if self.attack_pattern.iter().any(|&a| a > MAX_PATTERN_VALUE) {
            return Err(DomainError::validation(format!(
                "Generated yokai attacks cannot exceed {}",
                MAX_PATTERN_VALUE
            )));
        }
        Ok(())
    }
}

/// Where a boss's content came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum BossContent {
    Catalog { kind: YokaiKind },
    Generated(GeneratedYokai),
}

impl BossContent {
    pub fn catalog(kind: YokaiKind) -> Self {
        Self::Catalog { kind }
    }

    /// Stable content identifier: the catalog key, or `ai_generated`.
    pub fn content_id(&self) -> &str {
        match self {
            Self::Catalog { kind } => kind.as_str(),
            Self::Generated(_) => "ai_generated",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Catalog { kind } => kind.profile().name,
            Self::Generated(y) => &y.name,
        }
    }

    pub fn name_jp(&self) -> &str {
        match self {
            Self::Catalog { kind } => kind.profile().name_jp,
            Self::Generated(y) => &y.name_jp,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Catalog { kind } => kind.profile().description,
            Self::Generated(y) => &y.description,
        }
    }

    pub fn backstory(&self) -> Option<&str> {
        match self {
            Self::Catalog { .. } => None,
            Self::Generated(y) => Some(y.backstory.as_str()).filter(|s| !s.is_empty()),
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match self {
            Self::Catalog { kind } => Some(kind.profile().image_url),
            Self::Generated(y) => y.image_url.as_deref(),
        }
    }

    pub fn max_hp(&self) -> u32 {
        match self {
            Self::Catalog { kind } => kind.profile().hp,
            Self::Generated(y) => y.hp,
        }
    }

    pub fn defense(&self) -> u32 {
        match self {
            Self::Catalog { kind } => kind.profile().defense,
            Self::Generated(y) => y.defense,
        }
    }

    pub fn attack_pattern(&self) -> &[u32] {
        match self {
            Self::Catalog { kind } => kind.profile().attack_pattern,
            Self::Generated(y) => &y.attack_pattern,
        }
    }

    pub fn xp_reward(&self) -> u32 {
        match self {
            Self::Catalog { kind } => kind.profile().xp_reward,
            Self::Generated(_) => GENERATED_XP_REWARD,
        }
    }

    pub fn loot_table(&self) -> &'static [&'static str] {
        match self {
            Self::Catalog { kind } => kind.profile().drop_table,
            Self::Generated(_) => GENERATED_LOOT,
        }
    }
}
