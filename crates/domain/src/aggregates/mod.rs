//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Has a unique key (`UserId` for players, `GameDay` for bosses)
//! - Exposes behavior through methods, not public fields
//! - Returns outcome values from mutations (`LevelChange`, `BossTransition`)
//!
//! # Rustic DDD Principles
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Private fields + accessors, newtypes valid by construction |
//! | Aggregate root guards | Mutators that keep derived fields in step |
//! | Repository rehydration | `#[serde(try_from)]` re-validates stored records |
//! | Domain Events | Return enums from mutations |

pub mod boss;
pub mod player;

pub use boss::{Boss, BossTransition};
pub use player::{
    LevelChange, PendingContribution, Player, ATTEMPTS_PER_DAY, VICTORY_BONUS_XP,
};
