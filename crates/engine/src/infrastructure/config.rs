//! Engine configuration loaded from the environment.

use std::fmt;
use std::str::FromStr;

use super::openai::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_PATH: &str = "yokai.db";

/// Which adapter backs the player, boss and leaderboard stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Memory,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(format!("unknown storage backend '{}'", other)),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Where daily boss content comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentSourceKind {
    /// Day-of-week catalog rotation
    #[default]
    Rotation,
    /// External generator, with fallback content on failure
    Generated,
}

impl FromStr for ContentSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rotation" => Ok(Self::Rotation),
            "generated" => Ok(Self::Generated),
            other => Err(format!("unknown boss content source '{}'", other)),
        }
    }
}

impl fmt::Display for ContentSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotation => write!(f, "rotation"),
            Self::Generated => write!(f, "generated"),
        }
    }
}

/// Settings for the OpenAI-compatible content service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub storage: StorageBackend,
    pub database_path: String,
    pub content_source: ContentSourceKind,
    pub openai: OpenAiConfig,
    pub enable_admin_routes: bool,
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl EngineConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    ///
    /// Blank values count as unset. Values that fail to parse fall back to
    /// their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let server_port = get("SERVER_PORT")
            .or_else(|| get("PORT"))
            .map(|raw| parse_or_default("SERVER_PORT", &raw, DEFAULT_SERVER_PORT))
            .unwrap_or(DEFAULT_SERVER_PORT);

        Self {
            server_host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            storage: get("STORAGE_BACKEND")
                .map(|raw| parse_or_default("STORAGE_BACKEND", &raw, StorageBackend::default()))
                .unwrap_or_default(),
            database_path: get("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            content_source: get("BOSS_CONTENT_SOURCE")
                .map(|raw| {
                    parse_or_default("BOSS_CONTENT_SOURCE", &raw, ContentSourceKind::default())
                })
                .unwrap_or_default(),
            openai: OpenAiConfig {
                api_key: get("OPENAI_API_KEY"),
                base_url: get("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            },
            enable_admin_routes: get("ENABLE_ADMIN_ROUTES")
                .map(|raw| parse_flag("ENABLE_ADMIN_ROUTES", &raw))
                .unwrap_or(false),
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        }
    }
}

fn parse_or_default<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + fmt::Debug,
    T::Err: fmt::Display,
{
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = raw, error = %e, default = ?default, "Invalid config value, using default");
            default
        }
    }
}

fn parse_flag(key: &str, raw: &str) -> bool {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(key, value = raw, "Invalid boolean config value, using false");
            false
        }
    }
}
