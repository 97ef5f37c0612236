//! Weight-class derivation

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::store::StoreError;

/// Sanctioned weight classes, lightest to heaviest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightClass {
    Featherweight,
    Lightweight,
    Middleweight,
    Heavyweight,
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WeightClass::Featherweight => "FEATHERWEIGHT",
            WeightClass::Lightweight => "LIGHTWEIGHT",
            WeightClass::Middleweight => "MIDDLEWEIGHT",
            WeightClass::Heavyweight => "HEAVYWEIGHT",
        };
        f.write_str(label)
    }
}

/// Class for a given weight. Weights under 125 have no class.
pub fn weight_class(weight: i64) -> Result<WeightClass, StoreError> {
    if weight >= 203 {
        Ok(WeightClass::Heavyweight)
    } else if weight >= 166 {
        Ok(WeightClass::Middleweight)
    } else if weight >= 133 {
        Ok(WeightClass::Lightweight)
    } else if weight >= 125 {
        Ok(WeightClass::Featherweight)
    } else {
        Err(StoreError::InvalidBoxer(format!(
            "weight {} is below the minimum of 125",
            weight
        )))
    }
}
