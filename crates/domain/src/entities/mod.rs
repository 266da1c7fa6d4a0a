//! Domain entities - boss content and the yokai catalog

mod boss_content;
mod yokai;

pub use boss_content::{BossContent, GeneratedYokai, GENERATED_LOOT, GENERATED_XP_REWARD};
pub use yokai::{YokaiKind, YokaiProfile};
