//! The fixed yokai catalog and the weekly boss rotation.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::game_day::GameDay;

/// A yokai from the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YokaiKind {
    Kappa,
    Oni,
    Kitsune,
    Tengu,
    Jorogumo,
    Orochi,
    Gashadokuro,
}

/// Static content for a catalog yokai.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YokaiProfile {
    pub name: &'static str,
    pub name_jp: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub hp: u32,
    pub defense: u32,
    pub attack_pattern: &'static [u32],
    pub drop_table: &'static [&'static str],
    pub xp_reward: u32,
}

const KAPPA: YokaiProfile = YokaiProfile {
    name: "Kappa",
    name_jp: "河童",
    description: "A mischievous water demon from the river",
    image_url: "/kappa.jpg",
    hp: 20,
    defense: 15,
    attack_pattern: &[15, 15, 20, 15, 18],
    drop_table: &["katana_water", "tanto_water"],
    xp_reward: 150,
};

const ONI: YokaiProfile = YokaiProfile {
    name: "Oni",
    name_jp: "鬼",
    description: "A fearsome demon warrior with an iron club",
    image_url: "/oni.jpg",
    hp: 200_000,
    defense: 25,
    attack_pattern: &[25, 30, 25, 35, 30],
    drop_table: &["armor_oni", "katana_oni"],
    xp_reward: 250,
};

const KITSUNE: YokaiProfile = YokaiProfile {
    name: "Kitsune",
    name_jp: "九尾狐",
    description: "Nine-tailed fox spirit wreathed in foxfire",
    image_url: "/kitsune.jpg",
    hp: 250_000,
    defense: 20,
    attack_pattern: &[20, 22, 28, 20, 25],
    drop_table: &["ofuda_fox", "armor_fox"],
    xp_reward: 300,
};

const TENGU: YokaiProfile = YokaiProfile {
    name: "Tengu",
    name_jp: "天狗",
    description: "Mountain crow demon, master of wind and blade",
    image_url: "/tengu.jpg",
    hp: 300_000,
    defense: 30,
    attack_pattern: &[22, 28, 25, 30, 35],
    drop_table: &["feather_charm", "katana_tengu"],
    xp_reward: 350,
};

const JOROGUMO: YokaiProfile = YokaiProfile {
    name: "Jorogumo",
    name_jp: "絡新婦",
    description: "Spider woman who weaves deadly webs",
    image_url: "/jorogumo.jpg",
    hp: 275_000,
    defense: 22,
    attack_pattern: &[18, 20, 25, 30, 22],
    drop_table: &["armor_silk", "tanto_poison"],
    xp_reward: 325,
};

const OROCHI: YokaiProfile = YokaiProfile {
    name: "Yamata no Orochi",
    name_jp: "八岐大蛇",
    description: "Legendary eight-headed dragon serpent",
    image_url: "/orochi.jpg",
    hp: 500_000,
    defense: 35,
    attack_pattern: &[30, 35, 40, 35, 45],
    drop_table: &["kusanagi", "legendary_armor"],
    xp_reward: 500,
};

const GASHADOKURO: YokaiProfile = YokaiProfile {
    name: "Gashadokuro",
    name_jp: "がしゃどくろ",
    description: "Colossal skeleton of endless hunger",
    image_url: "/gashadokuro.jpg",
    hp: 750_000,
    defense: 40,
    attack_pattern: &[35, 40, 50, 40, 55],
    drop_table: &["cursed_blade", "bone_armor"],
    xp_reward: 750,
};

impl YokaiKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kappa => "kappa",
            Self::Oni => "oni",
            Self::Kitsune => "kitsune",
            Self::Tengu => "tengu",
            Self::Jorogumo => "jorogumo",
            Self::Orochi => "orochi",
            Self::Gashadokuro => "gashadokuro",
        }
    }

    pub fn profile(&self) -> &'static YokaiProfile {
        match self {
            Self::Kappa => &KAPPA,
            Self::Oni => &ONI,
            Self::Kitsune => &KITSUNE,
            Self::Tengu => &TENGU,
            Self::Jorogumo => &JOROGUMO,
            Self::Orochi => &OROCHI,
            Self::Gashadokuro => &GASHADOKURO,
        }
    }

    /// The boss scheduled for a day by the weekly rotation.
    ///
    /// Gashadokuro is catalog-only and never rotates in.
    pub fn for_day(day: GameDay) -> Self {
        match day.weekday() {
            Weekday::Sun => Self::Kappa,
            Weekday::Mon => Self::Oni,
            Weekday::Tue => Self::Kitsune,
            Weekday::Wed => Self::Tengu,
            Weekday::Thu => Self::Jorogumo,
            Weekday::Fri | Weekday::Sat => Self::Orochi,
        }
    }
}

impl fmt::Display for YokaiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for YokaiKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kappa" => Ok(Self::Kappa),
            "oni" => Ok(Self::Oni),
            "kitsune" => Ok(Self::Kitsune),
            "tengu" => Ok(Self::Tengu),
            "jorogumo" => Ok(Self::Jorogumo),
            "orochi" => Ok(Self::Orochi),
            "gashadokuro" => Ok(Self::Gashadokuro),
            other => Err(DomainError::parse(format!("Unknown yokai: {}", other))),
        }
    }
}
