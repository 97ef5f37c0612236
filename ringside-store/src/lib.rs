//! RINGSIDE Store - sqlite-backed boxer registry
//!
//! This crate provides the persistence side of RINGSIDE:
//! - CRUD over boxer records (create, delete, fetch by id or name)
//! - Weight-class derivation from weight
//! - The leaderboard (boxers with at least one fight)
//! - Win/loss counter mutation, exposed to the ring through the
//!   core `FightRecorder` contract

mod store;
mod weight_class;

// Re-exports for convenient access
pub use store::{BoxerStore, LeaderboardEntry, LeaderboardSort, StoreError};
pub use weight_class::{weight_class, WeightClass};
