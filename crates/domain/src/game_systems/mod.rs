//! Game rules: the combat resolver and the progression curve.

pub mod combat;
pub mod progression;

pub use combat::{resolve_battle, resolve_turn, BattleResult, CombatRng, Turn, BONUS_TURN_LABEL};
pub use progression::{
    experience_to_next_level, level_for, stats_for_level, LEVEL_THRESHOLDS, MAX_LEVEL,
};
