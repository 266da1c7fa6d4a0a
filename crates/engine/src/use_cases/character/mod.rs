//! Character use cases.

mod create;
mod error;

pub use create::CreateCharacter;
pub use error::CharacterError;
