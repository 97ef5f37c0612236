//! Fighting-skill heuristic and gap normalization

use crate::boxer::Boxer;

/// Fighting-skill score for one boxer.
///
/// `weight * name_length + reach / 10 + age_modifier`, where the
/// modifier is -1 under age 25, -2 over age 35, and 0 otherwise.
/// Deliberately arbitrary; kept exactly as-is for compatibility with
/// records produced by earlier versions.
pub fn fighting_skill(boxer: &Boxer) -> f64 {
    let age_modifier = if boxer.age < 25 {
        -1.0
    } else if boxer.age > 35 {
        -2.0
    } else {
        0.0
    };

    (boxer.weight * boxer.name.chars().count() as i64) as f64 + boxer.reach / 10.0 + age_modifier
}

/// Probability that the draw favors the first boxer.
///
/// Logistic normalization of the absolute skill gap: exactly 0.5 when
/// the skills are equal, approaching 1.0 as the gap grows.
pub fn win_probability(skill_1: f64, skill_2: f64) -> f64 {
    let delta = (skill_1 - skill_2).abs();
    1.0 / (1.0 + (-delta).exp())
}
