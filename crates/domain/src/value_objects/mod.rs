//! Value objects - immutable, validated-by-construction domain vocabulary.

mod battle_action;
mod names;
mod player_class;
mod stats;

pub use battle_action::{BattleAction, ACTIONS_PER_BATTLE};
pub use names::CharacterName;
pub use player_class::{ClassProfile, PlayerClass, SpecialEffect, SpecialMove};
pub use stats::Stats;
