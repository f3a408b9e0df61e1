//! Ruck contest resolution.
//!
//! Hitouts are the one stat that depends on both teams' assignments, so
//! they resolve through an explicit two-argument resolver after box scores
//! are generated, rather than inside the per-player generator. The two
//! opposing rucks' computations are independent draws; they are not
//! required to sum to a fixed total.

use super::performance::round_half_up;
use super::tables::{rating_bucket, RUCK_HITOUTS};
use rand::Rng;

const CONTESTED_MIN: f64 = 6.0;
const CONTESTED_MAX: f64 = 52.0;
const UNCONTESTED_FLOOR: f64 = 25.0;

/// Contested hitouts with the noise term already drawn. Kept separate from
/// the RNG so the arithmetic is directly testable.
pub fn contested(base: f64, rating_diff: f64, noise: f64) -> u32 {
    round_half_up(base + rating_diff * 0.25 + noise).clamp(CONTESTED_MIN, CONTESTED_MAX) as u32
}

/// Uncontested hitouts: the lone ruck dominates. Floor of 25, no upper
/// clamp.
pub fn uncontested(base: f64, bonus: f64) -> u32 {
    round_half_up(base * 1.3 + bonus).max(UNCONTESTED_FLOOR) as u32
}

/// Resolve one ruck-assigned player against the opposing ruck, if any.
/// Exactly one hitout computation occurs per ruck-assigned player per match.
pub fn resolve(effective: i32, opponent_effective: Option<i32>, rng: &mut impl Rng) -> u32 {
    let base = RUCK_HITOUTS[rating_bucket(effective)];
    match opponent_effective {
        Some(opponent) => {
            let diff = (effective - opponent) as f64;
            contested(base, diff, rng.gen_range(-3.0..3.0))
        }
        None => uncontested(base, rng.gen_range(0.0..7.0)),
    }
}
