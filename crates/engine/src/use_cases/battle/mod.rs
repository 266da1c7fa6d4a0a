//! Battle use cases.

mod error;
mod submit;

pub use error::BattleError;
pub use submit::{BattleOutcome, SubmitBattle};
