//! Playable classes and their fixed stat/special tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::stats::Stats;
use crate::error::DomainError;

/// One of the three playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerClass {
    Samurai,
    Ninja,
    Onmyoji,
}

/// The secondary effect carried by a class special.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialEffect {
    /// Treat this fraction of the boss defense as absent.
    IgnoreDefense { fraction: f64 },
    /// Chance of one extra `attack` turn right after the special.
    BonusTurn { chance: f64 },
    /// The boss attack on the following turn is scaled by this factor.
    VulnerableNextTurn { multiplier: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialMove {
    pub name: &'static str,
    pub name_jp: &'static str,
    pub multiplier: f64,
    pub effect: SpecialEffect,
}

/// Static data for a class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProfile {
    pub name: &'static str,
    pub name_jp: &'static str,
    /// Stats at level 1
    pub base: Stats,
    pub special: SpecialMove,
    pub starting_weapon: &'static str,
    pub starting_armor: &'static str,
}

const SAMURAI: ClassProfile = ClassProfile {
    name: "Samurai",
    name_jp: "侍",
    base: Stats::new(120, 20, 18),
    special: SpecialMove {
        name: "Iaijutsu",
        name_jp: "居合術",
        multiplier: 2.0,
        effect: SpecialEffect::IgnoreDefense { fraction: 0.5 },
    },
    starting_weapon: "katana_basic",
    starting_armor: "do_maru_basic",
};

const NINJA: ClassProfile = ClassProfile {
    name: "Ninja",
    name_jp: "忍者",
    base: Stats::new(90, 25, 12),
    special: SpecialMove {
        name: "Kage Bunshin",
        name_jp: "影分身",
        multiplier: 2.5,
        effect: SpecialEffect::BonusTurn { chance: 0.3 },
    },
    starting_weapon: "tanto_basic",
    starting_armor: "shinobi_basic",
};

const ONMYOJI: ClassProfile = ClassProfile {
    name: "Onmyoji",
    name_jp: "陰陽師",
    base: Stats::new(80, 28, 10),
    special: SpecialMove {
        name: "Katon",
        name_jp: "火遁",
        multiplier: 3.0,
        effect: SpecialEffect::VulnerableNextTurn { multiplier: 1.5 },
    },
    starting_weapon: "ofuda_basic",
    starting_armor: "robes_basic",
};

impl PlayerClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Samurai => "samurai",
            Self::Ninja => "ninja",
            Self::Onmyoji => "onmyoji",
        }
    }

    pub fn profile(&self) -> &'static ClassProfile {
        match self {
            Self::Samurai => &SAMURAI,
            Self::Ninja => &NINJA,
            Self::Onmyoji => &ONMYOJI,
        }
    }

    pub fn special(&self) -> &'static SpecialMove {
        &self.profile().special
    }

    pub fn all() -> [PlayerClass; 3] {
        [Self::Samurai, Self::Ninja, Self::Onmyoji]
    }
}

impl fmt::Display for PlayerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlayerClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "samurai" => Ok(Self::Samurai),
            "ninja" => Ok(Self::Ninja),
            "onmyoji" => Ok(Self::Onmyoji),
            other => Err(DomainError::parse(format!("Unknown class: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_str() {
        assert_eq!("samurai".parse::<PlayerClass>(), Ok(PlayerClass::Samurai));
        assert_eq!("Ninja".parse::<PlayerClass>(), Ok(PlayerClass::Ninja));
        assert_eq!("ONMYOJI".parse::<PlayerClass>(), Ok(PlayerClass::Onmyoji));
        assert!("paladin".parse::<PlayerClass>().is_err());
    }

    #[test]
    fn test_every_class_has_exactly_one_distinct_effect() {
        let effects: Vec<_> = PlayerClass::all()
            .iter()
            .map(|c| std::mem::discriminant(&c.special().effect))
            .collect();
        assert_ne!(effects[0], effects[1]);
        assert_ne!(effects[1], effects[2]);
        assert_ne!(effects[0], effects[2]);
    }

    #[test]
    fn test_samurai_profile() {
        let profile = PlayerClass::Samurai.profile();
        assert_eq!(profile.base, Stats::new(120, 20, 18));
        assert_eq!(profile.special.multiplier, 2.0);
        assert_eq!(profile.starting_weapon, "katana_basic");
    }
}
