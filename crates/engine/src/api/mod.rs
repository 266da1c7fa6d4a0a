//! API layer - HTTP entry points.

pub mod http;
pub mod identity;

pub use identity::Identity;
