//! Random draw sources
//!
//! The bout engine consumes randomness through the `RandomSource`
//! capability so deterministic sources can stand in during tests.

use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::RandomError;

/// One uniformly-distributed fractional draw per call, in [0, 1).
#[async_trait]
pub trait RandomSource: Send {
    async fn draw(&mut self) -> Result<f64, RandomError>;
}

/// Entropy-backed source for live bouts
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropySource;

#[async_trait]
impl RandomSource for EntropySource {
    async fn draw(&mut self) -> Result<f64, RandomError> {
        Ok(rand::thread_rng().gen::<f64>())
    }
}

/// Seeded source for reproducible bouts
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

#[async_trait]
impl RandomSource for SeededSource {
    async fn draw(&mut self) -> Result<f64, RandomError> {
        Ok(self.rng.gen::<f64>())
    }
}
