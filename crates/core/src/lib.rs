//! Core types and operations for the achievement tracker
//!
//! This crate contains:
//! - The game / achievement data model
//! - Repositories for registering games, adding and unlocking achievements
//! - Read-only statistics and ranking
//! - Normalization of loosely-shaped saved data
//! - JSON file persistence

pub mod achievements;
pub mod error;
pub mod library;
pub mod models;
pub mod normalize;
pub mod stats;
pub mod storage;

pub use achievements::*;
pub use error::*;
pub use library::*;
pub use models::*;
pub use normalize::normalize_games;
pub use stats::*;
pub use storage::GameStore;
