//! Combat resolution for a three-action battle against the daily boss.
//!
//! Everything here is pure. The only randomized effects (the ninja bonus turn
//! and the loot roll) draw from a caller-supplied [`CombatRng`], so fixing the
//! source makes a battle fully repeatable.

use serde::{Deserialize, Serialize};

use crate::aggregates::Player;
use crate::entities::BossContent;
use crate::game_systems::progression::level_for;
use crate::value_objects::{BattleAction, SpecialEffect, ACTIONS_PER_BATTLE};

/// Percent of dealt damage credited when the player falls mid-battle.
pub const DEFEAT_DAMAGE_PERCENT: u64 = 50;

/// Percent of the boss XP reward granted for a completed battle.
pub const BATTLE_XP_PERCENT: u32 = 30;

/// Chance of a loot drop on a completed battle.
pub const LOOT_DROP_CHANCE: f64 = 0.1;

pub const BONUS_TURN_LABEL: &str = "Bonus Turn!";

/// Source of randomness for combat.
pub trait CombatRng {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

impl<F> CombatRng for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// One resolved exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub index: usize,
    pub action: BattleAction,
    pub damage_to_boss: u32,
    pub damage_to_player: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<String>,
}

/// Outcome of a whole battle, folded into the player by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub turns: Vec<Turn>,
    pub total_damage: u32,
    pub experience_gained: u32,
    pub leveled_up: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_level: Option<u32>,
    pub item_dropped: Option<String>,
    pub failed: bool,
    pub final_hp: u32,
}

fn level_bonus(player: &Player) -> f64 {
    1.0 + f64::from(player.level()) / 20.0
}

fn damage_to_boss(player: &Player, multiplier: f64, boss_defense: f64) -> u32 {
    let raw = f64::from(player.attack()) * multiplier - boss_defense;
    (raw.max(0.0) * level_bonus(player)).floor() as u32
}

fn damage_to_player(
    player: &Player,
    boss: &BossContent,
    action: BattleAction,
    turn_index: usize,
    vulnerability: f64,
) -> u32 {
    let pattern = boss.attack_pattern();
    let boss_attack = if pattern.is_empty() {
        0
    } else {
        pattern[turn_index % pattern.len()]
    };
    let incoming = f64::from(boss_attack) * vulnerability
        - f64::from(player.defense()) * action.defense_multiplier();
    incoming.max(0.0).floor() as u32
}

/// Resolve a single turn.
///
/// `vulnerability` scales the boss attack for this turn; pass 1.0 unless the
/// previous turn was a vulnerability-inducing special.
pub fn resolve_turn(
    player: &Player,
    boss: &BossContent,
    action: BattleAction,
    turn_index: usize,
    vulnerability: f64,
) -> Turn {
    let boss_defense = f64::from(boss.defense());
    let (damage, special) = match action {
        BattleAction::Special => {
            let special = player.class().special();
            let defense = match special.effect {
                SpecialEffect::IgnoreDefense { fraction } => boss_defense * (1.0 - fraction),
                _ => boss_defense,
            };
            (
                damage_to_boss(player, special.multiplier, defense),
                Some(special.name.to_string()),
            )
        }
        _ => (
            damage_to_boss(player, action.attack_multiplier(), boss_defense),
            None,
        ),
    };

    Turn {
        index: turn_index,
        action,
        damage_to_boss: damage,
        damage_to_player: damage_to_player(player, boss, action, turn_index, vulnerability),
        special,
    }
}

/// Resolve a full battle of exactly [`ACTIONS_PER_BATTLE`] actions.
///
/// Inputs are never mutated; the returned result says what the caller should
/// apply to the player, the boss and the leaderboard.
pub fn resolve_battle(
    player: &Player,
    boss: &BossContent,
    actions: &[BattleAction; ACTIONS_PER_BATTLE],
    rng: &mut impl CombatRng,
) -> BattleResult {
    let special = player.class().special();
    let mut turns = Vec::with_capacity(ACTIONS_PER_BATTLE + 1);
    let mut dealt: u64 = 0;
    let mut hp = i64::from(player.max_hp());
    let mut vulnerability = 1.0;

    for (index, &action) in actions.iter().enumerate() {
        let turn = resolve_turn(player, boss, action, index, vulnerability);
        dealt += u64::from(turn.damage_to_boss);
        hp -= i64::from(turn.damage_to_player);
        turns.push(turn);

        if hp <= 0 {
            return BattleResult {
                turns,
                total_damage: clamp_damage(dealt * DEFEAT_DAMAGE_PERCENT / 100),
                experience_gained: 0,
                leveled_up: false,
                new_level: None,
                item_dropped: None,
                failed: true,
                final_hp: 0,
            };
        }

        vulnerability = match (action, special.effect) {
            (BattleAction::Special, SpecialEffect::VulnerableNextTurn { multiplier }) => multiplier,
            _ => 1.0,
        };

        if let (BattleAction::Special, SpecialEffect::BonusTurn { chance }) =
            (action, special.effect)
        {
            if rng.next_unit() < chance {
                let damage = damage_to_boss(
                    player,
                    BattleAction::Attack.attack_multiplier(),
                    f64::from(boss.defense()),
                );
                dealt += u64::from(damage);
                turns.push(Turn {
                    index,
                    action: BattleAction::Attack,
                    damage_to_boss: damage,
                    damage_to_player: 0,
                    special: Some(BONUS_TURN_LABEL.to_string()),
                });
            }
        }
    }

    let experience_gained = boss.xp_reward().saturating_mul(BATTLE_XP_PERCENT) / 100;
    let new_level = level_for(player.experience().saturating_add(experience_gained));
    let leveled_up = new_level > player.level();

    let loot = boss.loot_table();
    let item_dropped = if !loot.is_empty() && rng.next_unit() < LOOT_DROP_CHANCE {
        Some(loot[rng.next_index(loot.len())].to_string())
    } else {
        None
    };

    BattleResult {
        turns,
        total_damage: clamp_damage(dealt),
        experience_gained,
        leveled_up,
        new_level: leveled_up.then_some(new_level),
        item_dropped,
        failed: false,
        final_hp: hp.max(0) as u32,
    }
}

fn clamp_damage(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{GeneratedYokai, YokaiKind, GENERATED_LOOT};
    use crate::ids::UserId;
    use crate::value_objects::{CharacterName, PlayerClass};
    use chrono::{TimeZone, Utc};
    use BattleAction::{Attack, Defend, Special};

    fn player(class: PlayerClass) -> Player {
        Player::new(
            UserId::new("t2_tester").unwrap(),
            CharacterName::new("Tester").unwrap(),
            class,
            Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap(),
        )
    }

    /// Plays back scripted draws, then repeats the last one.
    fn scripted(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut i = 0;
        move || {
            let v = values[i.min(values.len() - 1)];
            i += 1;
            v
        }
    }

    fn never() -> impl FnMut() -> f64 {
        || 0.99
    }

    fn kappa() -> BossContent {
        BossContent::catalog(YokaiKind::Kappa)
    }

    #[test]
    fn samurai_attacks_kappa_three_times() {
        let samurai = player(PlayerClass::Samurai);
        let result = resolve_battle(&samurai, &kappa(), &[Attack, Attack, Attack], &mut never());

        assert!(!result.failed);
        assert_eq!(result.turns.len(), 3);
        assert!(result.turns.iter().all(|t| t.damage_to_boss == 5));
        assert_eq!(result.total_damage, 15);
        assert_eq!(result.experience_gained, 45);
        assert!(!result.leveled_up);
        assert_eq!(result.new_level, None);
        assert_eq!(result.item_dropped, None);
    }

    #[test]
    fn iaijutsu_ignores_half_of_kappa_defense() {
        let samurai = player(PlayerClass::Samurai);
        let turn = resolve_turn(&samurai, &kappa(), Special, 0, 1.0);
        assert_eq!(turn.damage_to_boss, 34);
        assert_eq!(turn.special.as_deref(), Some("Iaijutsu"));

        let result = resolve_battle(&samurai, &kappa(), &[Special, Attack, Attack], &mut never());
        assert_eq!(result.total_damage, 44);
    }

    #[test]
    fn boss_attack_cycles_through_pattern() {
        let samurai = player(PlayerClass::Samurai);
        // kappa pattern [15, 15, 20, 15, 18] against defense 18
        assert_eq!(resolve_turn(&samurai, &kappa(), Attack, 2, 1.0).damage_to_player, 2);
        assert_eq!(resolve_turn(&samurai, &kappa(), Attack, 7, 1.0).damage_to_player, 2);
        assert_eq!(resolve_turn(&samurai, &kappa(), Attack, 4, 1.0).damage_to_player, 0);
    }

    #[test]
    fn defend_doubles_defense_and_weakens_counter() {
        let onmyoji = player(PlayerClass::Onmyoji);
        let orochi = BossContent::catalog(YokaiKind::Orochi);
        let attack = resolve_turn(&onmyoji, &orochi, Attack, 2, 1.0);
        let defend = resolve_turn(&onmyoji, &orochi, Defend, 2, 1.0);

        // 40 incoming; defense 10 vs 20
        assert_eq!(attack.damage_to_player, 30);
        assert_eq!(defend.damage_to_player, 20);
        // 28 * 0.3 never beats defense 35
        assert_eq!(defend.damage_to_boss, 0);
    }

    #[test]
    fn katon_makes_next_turn_vulnerable() {
        let onmyoji = player(PlayerClass::Onmyoji);
        let oni = BossContent::catalog(YokaiKind::Oni);
        let result = resolve_battle(&onmyoji, &oni, &[Special, Attack, Attack], &mut never());

        // oni pattern [25, 30, 25, ..] against defense 10
        assert_eq!(result.turns[0].damage_to_player, 15);
        assert_eq!(result.turns[1].damage_to_player, 35); // 30 * 1.5 - 10
        assert_eq!(result.turns[2].damage_to_player, 15); // multiplier resets
        assert_eq!(result.final_hp, 80 - 65);
    }

    #[test]
    fn kage_bunshin_can_insert_bonus_turn() {
        let ninja = player(PlayerClass::Ninja);
        let oni = BossContent::catalog(YokaiKind::Oni);
        // first draw triggers the bonus turn, second skips loot
        let mut rng = scripted(&[0.1, 0.99]);
        let result = resolve_battle(&ninja, &oni, &[Special, Attack, Attack], &mut rng);

        assert_eq!(result.turns.len(), 4);
        let bonus = &result.turns[1];
        assert_eq!(bonus.index, 0);
        assert_eq!(bonus.action, Attack);
        assert_eq!(bonus.damage_to_player, 0);
        assert_eq!(bonus.special.as_deref(), Some(BONUS_TURN_LABEL));
        assert_eq!(result.turns[2].index, 1);

        let summed: u32 = result.turns.iter().map(|t| t.damage_to_boss).sum();
        assert_eq!(result.total_damage, summed);
    }

    #[test]
    fn kage_bunshin_without_lucky_draw_has_three_turns() {
        let ninja = player(PlayerClass::Ninja);
        let oni = BossContent::catalog(YokaiKind::Oni);
        let result = resolve_battle(&ninja, &oni, &[Special, Special, Special], &mut never());
        assert_eq!(result.turns.len(), 3);
    }

    #[test]
    fn falling_mid_battle_halves_damage_and_stops() {
        let onmyoji = player(PlayerClass::Onmyoji);
        let brutal = BossContent::Generated(GeneratedYokai {
            attack_pattern: vec![60, 100],
            defense: 0,
            ..GeneratedYokai::fallback()
        });
        let result = resolve_battle(&onmyoji, &brutal, &[Attack, Attack, Attack], &mut never());

        // 50 taken, then 90 more
        assert!(result.failed);
        assert_eq!(result.turns.len(), 2);
        let dealt: u32 = result.turns.iter().map(|t| t.damage_to_boss).sum();
        assert_eq!(result.total_damage, dealt / 2);
        assert_eq!(result.experience_gained, 0);
        assert_eq!(result.final_hp, 0);
        assert_eq!(result.item_dropped, None);
    }

    #[test]
    fn loot_roll_picks_from_table() {
        let samurai = player(PlayerClass::Samurai);
        let generated = BossContent::Generated(GeneratedYokai::fallback());
        let mut rng = scripted(&[0.05, 0.7]);
        let result = resolve_battle(&samurai, &generated, &[Defend, Defend, Defend], &mut rng);

        assert_eq!(result.item_dropped.as_deref(), Some(GENERATED_LOOT[2]));
        assert_eq!(result.experience_gained, 60);
    }

    #[test]
    fn fixed_randomness_is_repeatable() {
        let ninja = player(PlayerClass::Ninja);
        let tengu = BossContent::catalog(YokaiKind::Tengu);
        let draws = [0.2, 0.05, 0.4];
        let first = resolve_battle(&ninja, &tengu, &[Special, Defend, Special], &mut scripted(&draws));
        let second = resolve_battle(&ninja, &tengu, &[Special, Defend, Special], &mut scripted(&draws));
        assert_eq!(first, second);
    }

    #[test]
    fn level_up_is_reported_against_gained_experience() {
        let mut samurai = player(PlayerClass::Samurai);
        samurai.gain_experience(210);
        let result = resolve_battle(&samurai, &kappa(), &[Attack, Attack, Attack], &mut never());
        assert!(result.leveled_up);
        assert_eq!(result.new_level, Some(2));
    }

    #[test]
    fn passing_the_first_threshold_is_still_level_one() {
        let mut samurai = player(PlayerClass::Samurai);
        samurai.gain_experience(90);
        let result = resolve_battle(&samurai, &kappa(), &[Attack, Attack, Attack], &mut never());
        // 90 + 45 = 135 xp
        assert!(!result.leveled_up);
        assert_eq!(result.new_level, None);
    }

    #[test]
    fn next_index_stays_in_bounds() {
        let mut rng = || 0.999_999_999;
        assert_eq!(rng.next_index(3), 2);
        let mut rng = || 0.0;
        assert_eq!(rng.next_index(3), 0);
    }
}
