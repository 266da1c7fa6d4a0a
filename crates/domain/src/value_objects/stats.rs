use serde::{Deserialize, Serialize};

/// Combat stats of a player at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl Stats {
    pub const fn new(max_hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            max_hp,
            attack,
            defense,
        }
    }
}
