//! RINGSIDE Core - Boxer domain and bout engine
//!
//! This crate provides the core logic for RINGSIDE:
//! - Boxer value type and shape validation
//! - Fighting-skill heuristic and logistic gap normalization
//! - The `Ring` bout engine (two-boxer pool with bout resolution)
//! - `RandomSource` / `FightRecorder` capability traits
//! - In-process random sources (entropy-backed and seeded)

pub mod boxer;
pub mod error;
pub mod random;
pub mod ring;
pub mod skill;

// Re-exports for convenient access
pub use boxer::{Boxer, FightOutcome, MAX_AGE, MIN_AGE, MIN_WEIGHT};
pub use error::{RandomError, RecordError, RingError};
pub use random::{EntropySource, RandomSource, SeededSource};
pub use ring::{FightRecorder, Ring, RING_CAPACITY};
pub use skill::{fighting_skill, win_probability};
