//! Experience curve and per-level stat growth.

use crate::value_objects::{PlayerClass, Stats};

/// Cumulative experience thresholds. The level is the highest index whose
/// threshold has been reached, floored at 1, so indices 0 and 1 are both level 1.
pub const LEVEL_THRESHOLDS: [u32; 11] = [0, 100, 250, 450, 700, 1000, 1350, 1750, 2200, 2700, 3250];

/// Highest reachable level (the last threshold index).
pub const MAX_LEVEL: u32 = LEVEL_THRESHOLDS.len() as u32 - 1;

/// Per-level stat growth, shared by all classes.
pub const HP_PER_LEVEL: u32 = 5;
pub const ATTACK_PER_LEVEL: u32 = 2;
pub const DEFENSE_PER_LEVEL: u32 = 2;

/// Level reached with `experience` total XP (always at least 1).
pub fn level_for(experience: u32) -> u32 {
    let reached = LEVEL_THRESHOLDS
        .iter()
        .rposition(|&threshold| experience >= threshold)
        .unwrap_or(0);
    (reached as u32).max(1)
}

/// Stats for `class` at `level`; level 1 yields the class base stats.
pub fn stats_for_level(class: PlayerClass, level: u32) -> Stats {
    let base = class.profile().base;
    let gained = level.clamp(1, MAX_LEVEL) - 1;
    Stats::new(
        base.max_hp + gained * HP_PER_LEVEL,
        base.attack + gained * ATTACK_PER_LEVEL,
        base.defense + gained * DEFENSE_PER_LEVEL,
    )
}

/// Experience still needed for the next level, or `None` at max level.
pub fn experience_to_next_level(experience: u32) -> Option<u32> {
    let level = level_for(experience);
    LEVEL_THRESHOLDS
        .get(level as usize + 1)
        .map(|&next| next.saturating_sub(experience))
}
