//! Yokai Slayers Engine library.
//!
//! This crate contains all server-side code for the daily boss battle.
//!
//! ## Structure
//!
//! - `use_cases/` - Battle orchestration, boss lifecycle, leaderboard, characters
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
