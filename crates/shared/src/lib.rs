//! Yokai Slayers Shared - HTTP wire contract
//!
//! This crate contains the types exchanged between the engine and its clients:
//! - Request bodies and query strings
//! - Response bodies, including the `{error, code}` error body
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - serde plus domain vocabulary types
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain aggregates** - conversions from `Player`/`Boss` live in the engine

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod requests;
pub mod responses;

pub use requests::{CreateCharacterRequest, LeaderboardQuery, SubmitBattleRequest};
pub use responses::{
    BattleResponse, BossView, CharacterResponse, ErrorBody, ErrorCode, HealthResponse,
    LeaderboardEntryView, LeaderboardResponse, PlayerView, ResetResponse, TodayResponse,
};
