//! Yokai Slayers domain: pure game rules and aggregates.
//!
//! Nothing in this crate performs I/O. Time is passed in as `DateTime<Utc>`
//! and randomness through [`CombatRng`].

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod game_day;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

pub use aggregates::{
    Boss, BossTransition, LevelChange, PendingContribution, Player, ATTEMPTS_PER_DAY,
    VICTORY_BONUS_XP,
};
pub use entities::{
    BossContent, GeneratedYokai, YokaiKind, YokaiProfile, GENERATED_LOOT, GENERATED_XP_REWARD,
};
pub use error::DomainError;
pub use game_day::GameDay;
pub use game_systems::{
    experience_to_next_level, level_for, resolve_battle, resolve_turn, stats_for_level,
    BattleResult, CombatRng, Turn, BONUS_TURN_LABEL, MAX_LEVEL,
};
pub use ids::{BattleId, UserId};
pub use value_objects::{
    BattleAction, CharacterName, ClassProfile, PlayerClass, SpecialEffect, SpecialMove, Stats,
    ACTIONS_PER_BATTLE,
};
