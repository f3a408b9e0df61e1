//! Rating/position model: static tables mapping (position, rating bucket)
//! to expected base output.
//!
//! The tables are data, not control flow. Tuning a position means editing
//! its `PositionProfile`; the generator never branches on position beyond
//! the table lookup.

use crate::models::Position;

/// Number of rating buckets: 60..=99 in bands of five.
pub const BUCKETS: usize = 8;

/// Bucket index for an effective rating. Effective ratings can sit slightly
/// outside 60..=99 after the position-fit penalty; the index is clamped
/// rather than the rating.
pub fn rating_bucket(effective: i32) -> usize {
    (effective - 60).div_euclid(5).clamp(0, BUCKETS as i32 - 1) as usize
}

/// Intra-bucket adjustment: higher ratings inside a five-point band earn
/// slightly more than the band base.
pub fn intra_bucket(base: f64, effective: i32) -> f64 {
    base * (1.0 + effective.rem_euclid(5) as f64 * 0.015)
}

/// Goal-scoring shape for a position. Forward-line positions use a bucketed
/// expectation with wide multiplicative variance; everyone else scores off a
/// flat per-match chance and almost never kicks more than two.
#[derive(Debug, Clone, Copy)]
pub enum GoalModel {
    Scoring {
        base: [f64; BUCKETS],
        /// Multiplicative variance range drawn per match.
        variance: (f64, f64),
        /// Hard per-match ceiling.
        ceiling: u32,
    },
    Rare {
        /// Chance of scoring at all.
        chance: f64,
        /// Given a score, chance the player finishes with two.
        two_chance: f64,
    },
}

/// Base output tables for one position, 8 buckets low to high rating.
/// Categories a position does not produce are all-zero rows.
#[derive(Debug, Clone, Copy)]
pub struct PositionProfile {
    pub disposals: [f64; BUCKETS],
    pub marks: [f64; BUCKETS],
    pub tackles: [f64; BUCKETS],
    pub intercepts: [f64; BUCKETS],
    pub goals: GoalModel,
}

const NONE: [f64; BUCKETS] = [0.0; BUCKETS];

/// Disposal-focused midfielders: moderate tackles and marks, rare goals.
const MID: PositionProfile = PositionProfile {
    disposals: [6.0, 8.0, 10.5, 13.0, 15.5, 18.0, 20.5, 23.0],
    marks: [2.0, 2.4, 2.8, 3.2, 3.6, 4.0, 4.5, 5.0],
    tackles: [3.0, 3.4, 3.8, 4.2, 4.6, 5.0, 5.5, 6.0],
    intercepts: NONE,
    goals: GoalModel::Rare { chance: 0.15, two_chance: 0.25 },
};

/// Rebounding defenders: disposals plus marks and intercepts.
const DEF: PositionProfile = PositionProfile {
    disposals: [5.0, 7.0, 9.0, 11.0, 13.5, 16.0, 18.5, 21.0],
    marks: [3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 7.0],
    tackles: [2.0, 2.3, 2.6, 3.0, 3.3, 3.6, 4.0, 4.5],
    intercepts: [2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 6.0],
    goals: GoalModel::Rare { chance: 0.05, two_chance: 0.10 },
};

/// Key defenders skew toward marks and intercepts over raw disposals.
const KDEF: PositionProfile = PositionProfile {
    disposals: [4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0],
    marks: [4.0, 4.5, 5.0, 5.5, 6.5, 7.0, 8.0, 9.0],
    tackles: [1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.5],
    intercepts: [3.0, 3.5, 4.0, 4.5, 5.5, 6.0, 7.0, 8.0],
    goals: GoalModel::Rare { chance: 0.02, two_chance: 0.0 },
};

/// General forwards: moderate goals with a healthy disposal count.
const FWD: PositionProfile = PositionProfile {
    disposals: [8.0, 9.5, 11.0, 12.5, 14.0, 15.5, 17.0, 18.5],
    marks: [3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 7.0],
    tackles: [2.0, 2.3, 2.6, 2.9, 3.2, 3.5, 3.8, 4.2],
    intercepts: NONE,
    goals: GoalModel::Scoring {
        base: [0.7, 0.9, 1.1, 1.4, 1.7, 2.0, 2.3, 2.6],
        variance: (0.4, 1.7),
        ceiling: 5,
    },
};

/// Key forwards: fewer disposals, the most marks up forward, and the
/// highest goal ceiling in the model.
const KFWD: PositionProfile = PositionProfile {
    disposals: [5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0],
    marks: [4.0, 4.5, 5.0, 5.5, 6.5, 7.5, 8.5, 9.5],
    tackles: [1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.5],
    intercepts: NONE,
    goals: GoalModel::Scoring {
        base: [1.4, 1.7, 2.0, 2.4, 2.8, 3.2, 3.7, 4.2],
        variance: (0.3, 1.9),
        ceiling: 9,
    },
};

/// Rucks produce disposals, marks, and tackles from the table; hitouts come
/// from the ruck contest resolver, never from here.
const RUC: PositionProfile = PositionProfile {
    disposals: [7.0, 8.0, 9.5, 11.0, 12.5, 14.0, 15.5, 17.0],
    marks: [2.0, 2.4, 2.8, 3.2, 3.6, 4.0, 4.4, 5.0],
    tackles: [2.0, 2.4, 2.8, 3.2, 3.6, 4.0, 4.4, 5.0],
    intercepts: NONE,
    goals: GoalModel::Rare { chance: 0.12, two_chance: 0.15 },
};

/// Base hitouts by bucket, shared by contested and uncontested ruck work.
pub const RUCK_HITOUTS: [f64; BUCKETS] = [22.0, 25.0, 28.0, 31.0, 34.0, 37.0, 40.0, 43.0];

pub fn profile(position: Position) -> &'static PositionProfile {
    match position {
        Position::Kdef => &KDEF,
        Position::Def => &DEF,
        Position::Mid => &MID,
        Position::Ruc => &RUC,
        Position::Fwd => &FWD,
        Position::Kfwd => &KFWD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        assert_eq!(rating_bucket(60), 0);
        assert_eq!(rating_bucket(64), 0);
        assert_eq!(rating_bucket(65), 1);
        assert_eq!(rating_bucket(90), 6);
        assert_eq!(rating_bucket(95), 7);
        assert_eq!(rating_bucket(99), 7);
    }

    #[test]
    fn bucket_clamps_out_of_range_effective_ratings() {
        // 60 - 8 cross-line penalty can land below the scale
        assert_eq!(rating_bucket(52), 0);
        assert_eq!(rating_bucket(104), 7);
    }

    #[test]
    fn intra_bucket_scales_within_the_band() {
        assert_eq!(intra_bucket(20.5, 90), 20.5); // 90 mod 5 == 0
        assert!((intra_bucket(10.0, 63) - 10.45).abs() < 1e-9);
        // rem_euclid keeps sub-60 effective ratings well defined
        assert!((intra_bucket(10.0, 57) - 10.3).abs() < 1e-9);
    }

    #[test]
    fn every_profile_has_monotonic_disposals() {
        for position in Position::ALL {
            let table = profile(position).disposals;
            for pair in table.windows(2) {
                assert!(pair[1] >= pair[0], "{position} disposals not monotonic");
            }
        }
    }
}
