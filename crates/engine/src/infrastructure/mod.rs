//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod config;
pub mod fallback_content;
pub mod locks;
pub mod memory;
pub mod openai;
pub mod ports;
pub mod sqlite;
