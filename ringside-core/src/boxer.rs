//! Boxer domain type

use serde::{Deserialize, Serialize};

use crate::error::RingError;

/// Minimum sanctioned weight (featherweight floor)
pub const MIN_WEIGHT: i64 = 125;

/// Sanctioned age bounds, inclusive
pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 40;

/// A boxer as the engine sees one: identity plus comparison attributes.
///
/// The engine never mutates a `Boxer`. Win/loss counters live in the
/// persistence store and are updated by id after a bout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Boxer {
    pub id: i64,
    pub name: String,
    pub weight: i64,
    pub height: i64,
    pub reach: f64,
    pub age: i64,
}

impl Boxer {
    /// First violated shape constraint, if any.
    pub fn shape_violation(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("name must be a non-empty string".to_string());
        }
        if self.weight < MIN_WEIGHT {
            return Some(format!(
                "weight {} is below the minimum of {}",
                self.weight, MIN_WEIGHT
            ));
        }
        if self.height <= 0 {
            return Some(format!("height {} must be greater than 0", self.height));
        }
        if !(self.reach > 0.0) {
            return Some(format!("reach {} must be greater than 0", self.reach));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Some(format!(
                "age {} must be between {} and {}",
                self.age, MIN_AGE, MAX_AGE
            ));
        }
        None
    }

    /// Check that this value satisfies the boxer shape.
    pub fn validate(&self) -> Result<(), RingError> {
        match self.shape_violation() {
            Some(violation) => Err(RingError::InvalidBoxer(violation)),
            None => Ok(()),
        }
    }
}

/// Outcome of a bout for one boxer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FightOutcome {
    Win,
    Loss,
}
