//! The ring: two-boxer pool and bout resolution

use async_trait::async_trait;
use tracing::info;

use crate::boxer::{Boxer, FightOutcome};
use crate::error::{RecordError, RingError};
use crate::random::RandomSource;
use crate::skill::{fighting_skill, win_probability};

/// Maximum number of boxers in the ring at once
pub const RING_CAPACITY: usize = 2;

/// Persists bout outcomes by boxer id.
#[async_trait]
pub trait FightRecorder: Send + Sync {
    async fn record_outcome(
        &self,
        boxer_id: i64,
        outcome: FightOutcome,
    ) -> Result<(), RecordError>;
}

/// The bout engine.
///
/// Holds up to two boxers, resolves a single probabilistic bout
/// between them, records the outcome for each, and resets. The pool
/// moves EMPTY -> ONE -> TWO via `enter_ring`; `fight` is valid only
/// at TWO and drives back to EMPTY on full success; `clear_ring` is
/// valid anywhere.
pub struct Ring<R, S> {
    fighters: Vec<Boxer>,
    random: R,
    recorder: S,
}

impl<R: RandomSource, S: FightRecorder> Ring<R, S> {
    pub fn new(random: R, recorder: S) -> Self {
        Self {
            fighters: Vec::with_capacity(RING_CAPACITY),
            random,
            recorder,
        }
    }

    /// Number of boxers currently in the ring
    pub fn count(&self) -> usize {
        self.fighters.len()
    }

    /// Add a boxer to the ring.
    ///
    /// The shape check runs before the capacity check; a rejected
    /// insertion leaves the pool untouched.
    pub fn enter_ring(&mut self, boxer: Boxer) -> Result<(), RingError> {
        boxer.validate()?;

        if self.fighters.len() >= RING_CAPACITY {
            return Err(RingError::RingFull);
        }

        info!(name = %boxer.name, weight = boxer.weight, "boxer enters the ring");
        self.fighters.push(boxer);
        Ok(())
    }

    /// Boxers currently in the ring, in entry order.
    pub fn fighters(&self) -> Result<&[Boxer], RingError> {
        if self.fighters.is_empty() {
            return Err(RingError::RingEmpty);
        }
        Ok(&self.fighters)
    }

    /// Remove all boxers from the ring. A no-op on an empty ring.
    pub fn clear_ring(&mut self) {
        self.fighters.clear();
    }

    /// Resolve a bout between the two boxers in the ring.
    ///
    /// Skills are compared through a logistic normalization of their
    /// gap; the draw decides the winner. The winner's outcome is
    /// recorded first, then the loser's. If either recording fails the
    /// error propagates and the ring keeps its boxers; only a fully
    /// recorded bout empties the ring.
    pub async fn fight(&mut self) -> Result<String, RingError> {
        if self.fighters.len() < RING_CAPACITY {
            return Err(RingError::FightNotReady);
        }

        let skill_1 = fighting_skill(&self.fighters[0]);
        let skill_2 = fighting_skill(&self.fighters[1]);
        let probability = win_probability(skill_1, skill_2);

        let roll = self.random.draw().await?;

        // roll < p favors the boxer who entered first
        let (winner, loser) = if roll < probability { (0, 1) } else { (1, 0) };
        let winner_id = self.fighters[winner].id;
        let loser_id = self.fighters[loser].id;
        let winner_name = self.fighters[winner].name.clone();

        info!(
            winner = %winner_name,
            probability,
            roll,
            "bout resolved"
        );

        self.recorder
            .record_outcome(winner_id, FightOutcome::Win)
            .await?;
        self.recorder
            .record_outcome(loser_id, FightOutcome::Loss)
            .await?;

        self.fighters.clear();
        Ok(winner_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RandomError;
    use std::sync::{Arc, Mutex};

    /// Source that always answers with the same fraction
    struct FixedDraw(f64);

    #[async_trait]
    impl RandomSource for FixedDraw {
        async fn draw(&mut self) -> Result<f64, RandomError> {
            Ok(self.0)
        }
    }

    /// Recorder that remembers every call, in order
    #[derive(Clone, Default)]
    struct RecordingLog {
        calls: Arc<Mutex<Vec<(i64, FightOutcome)>>>,
    }

    impl RecordingLog {
        fn calls(&self) -> Vec<(i64, FightOutcome)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl FightRecorder for RecordingLog {
        async fn record_outcome(
            &self,
            boxer_id: i64,
            outcome: FightOutcome,
        ) -> Result<(), RecordError> {
            self.calls.lock().unwrap().push((boxer_id, outcome));
            Ok(())
        }
    }

    /// Recorder that fails every call
    struct FailingRecorder;

    #[async_trait]
    impl FightRecorder for FailingRecorder {
        async fn record_outcome(
            &self,
            boxer_id: i64,
            _outcome: FightOutcome,
        ) -> Result<(), RecordError> {
            Err(RecordError::NotFound(boxer_id))
        }
    }

    fn boxer(id: i64, name: &str) -> Boxer {
        Boxer {
            id,
            name: name.to_string(),
            weight: 150,
            height: 178,
            reach: 72.0,
            age: 28,
        }
    }

    // Two 10-character names with identical attributes: equal skill,
    // so the bout probability is exactly 0.5.
    fn even_pair() -> (Boxer, Boxer) {
        (boxer(1, "Jack Demps"), boxer(2, "Gene Tunne"))
    }

    #[test]
    fn test_enter_ring_preserves_order() {
        let mut ring = Ring::new(FixedDraw(0.5), RecordingLog::default());
        let (first, second) = even_pair();
        ring.enter_ring(first.clone()).unwrap();
        ring.enter_ring(second.clone()).unwrap();

        let fighters = ring.fighters().unwrap();
        assert_eq!(fighters[0], first);
        assert_eq!(fighters[1], second);
    }

    #[test]
    fn test_enter_ring_rejects_invalid_shape() {
        let mut ring = Ring::new(FixedDraw(0.5), RecordingLog::default());
        let mut bad = boxer(1, "Featherless");
        bad.weight = 90;
        assert!(matches!(
            ring.enter_ring(bad),
            Err(RingError::InvalidBoxer(_))
        ));
        assert_eq!(ring.count(), 0);
    }

    #[test]
    fn test_third_boxer_rejected_without_mutation() {
        let mut ring = Ring::new(FixedDraw(0.5), RecordingLog::default());
        let (first, second) = even_pair();
        ring.enter_ring(first).unwrap();
        ring.enter_ring(second).unwrap();

        assert!(matches!(
            ring.enter_ring(boxer(3, "Third Wheel")),
            Err(RingError::RingFull)
        ));
        assert_eq!(ring.count(), 2);
    }

    #[test]
    fn test_fighters_on_empty_ring_errors() {
        let ring = Ring::new(FixedDraw(0.5), RecordingLog::default());
        assert!(matches!(ring.fighters(), Err(RingError::RingEmpty)));
    }

    #[test]
    fn test_clear_ring_is_noop_when_empty() {
        let mut ring = Ring::new(FixedDraw(0.5), RecordingLog::default());
        ring.clear_ring();
        assert_eq!(ring.count(), 0);
    }

    #[test]
    fn test_clear_ring_empties_full_pool() {
        let mut ring = Ring::new(FixedDraw(0.5), RecordingLog::default());
        let (first, second) = even_pair();
        ring.enter_ring(first).unwrap();
        ring.enter_ring(second).unwrap();
        ring.clear_ring();
        assert_eq!(ring.count(), 0);
    }

    #[tokio::test]
    async fn test_fight_requires_two_boxers() {
        let mut ring = Ring::new(FixedDraw(0.5), RecordingLog::default());
        assert!(matches!(ring.fight().await, Err(RingError::FightNotReady)));

        let (first, _) = even_pair();
        ring.enter_ring(first).unwrap();
        assert!(matches!(ring.fight().await, Err(RingError::FightNotReady)));
    }

    #[tokio::test]
    async fn test_low_roll_favors_first_boxer() {
        let log = RecordingLog::default();
        let mut ring = Ring::new(FixedDraw(0.4), log.clone());
        let (first, second) = even_pair();
        let first_name = first.name.clone();
        ring.enter_ring(first).unwrap();
        ring.enter_ring(second).unwrap();

        let winner = ring.fight().await.unwrap();
        assert_eq!(winner, first_name);
        assert_eq!(
            log.calls(),
            vec![(1, FightOutcome::Win), (2, FightOutcome::Loss)]
        );
    }

    #[tokio::test]
    async fn test_high_roll_favors_second_boxer() {
        let log = RecordingLog::default();
        let mut ring = Ring::new(FixedDraw(0.6), log.clone());
        let (first, second) = even_pair();
        let second_name = second.name.clone();
        ring.enter_ring(first).unwrap();
        ring.enter_ring(second).unwrap();

        let winner = ring.fight().await.unwrap();
        assert_eq!(winner, second_name);
        assert_eq!(
            log.calls(),
            vec![(2, FightOutcome::Win), (1, FightOutcome::Loss)]
        );
    }

    #[tokio::test]
    async fn test_boundary_roll_counts_against_first_boxer() {
        // r == p is not r < p: the second boxer wins
        let mut ring = Ring::new(FixedDraw(0.5), RecordingLog::default());
        let (first, second) = even_pair();
        let second_name = second.name.clone();
        ring.enter_ring(first).unwrap();
        ring.enter_ring(second).unwrap();

        assert_eq!(ring.fight().await.unwrap(), second_name);
    }

    #[tokio::test]
    async fn test_fight_resets_pool_and_second_fight_fails() {
        let mut ring = Ring::new(FixedDraw(0.4), RecordingLog::default());
        let (first, second) = even_pair();
        ring.enter_ring(first).unwrap();
        ring.enter_ring(second).unwrap();

        ring.fight().await.unwrap();
        assert_eq!(ring.count(), 0);
        assert!(matches!(ring.fight().await, Err(RingError::FightNotReady)));
    }

    #[tokio::test]
    async fn test_recording_failure_keeps_pool() {
        let mut ring = Ring::new(FixedDraw(0.4), FailingRecorder);
        let (first, second) = even_pair();
        ring.enter_ring(first).unwrap();
        ring.enter_ring(second).unwrap();

        let err = ring.fight().await.unwrap_err();
        assert!(matches!(err, RingError::Record(RecordError::NotFound(1))));
        assert_eq!(ring.count(), 2);
    }

    #[tokio::test]
    async fn test_random_failure_propagates_and_keeps_pool() {
        struct DeadSource;

        #[async_trait]
        impl RandomSource for DeadSource {
            async fn draw(&mut self) -> Result<f64, RandomError> {
                Err(RandomError::Timeout)
            }
        }

        let mut ring = Ring::new(DeadSource, RecordingLog::default());
        let (first, second) = even_pair();
        ring.enter_ring(first).unwrap();
        ring.enter_ring(second).unwrap();

        let err = ring.fight().await.unwrap_err();
        assert!(matches!(err, RingError::Random(RandomError::Timeout)));
        assert_eq!(ring.count(), 2);
    }

    #[tokio::test]
    async fn test_stronger_boxer_wins_even_on_highish_roll() {
        // Ali's longer name and heavier weight produce a skill gap
        // large enough that p saturates near 1.0.
        let log = RecordingLog::default();
        let mut ring = Ring::new(FixedDraw(0.95), log.clone());

        let strong = Boxer {
            id: 1,
            name: "Muhammad Ali".to_string(),
            weight: 210,
            height: 191,
            reach: 78.0,
            age: 30,
        };
        let weak = boxer(2, "Kid Lightweight");

        ring.enter_ring(strong.clone()).unwrap();
        ring.enter_ring(weak).unwrap();

        assert_eq!(ring.fight().await.unwrap(), strong.name);
    }
}
