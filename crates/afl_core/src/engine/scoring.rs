//! Team score aggregation: reduces a team's box scores into a final score.

use super::performance::round_half_up;
use crate::models::PlayerMatchStat;
use rand::Rng;

/// Raw scoreboard points from a team's box scores: goals are worth six,
/// behinds one.
pub fn raw_points(stats: &[&PlayerMatchStat]) -> u32 {
    stats.iter().map(|s| s.goals * 6 + s.behinds).sum()
}

/// Strength modifier for a team overall rating (60..=99; 75 is neutral-ish
/// at 0.85).
pub fn strength_modifier(team_overall: u8) -> f64 {
    0.85 + (team_overall as f64 - 75.0) / 150.0
}

/// One match-variance draw per team per match.
pub fn draw_variance(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.8..1.2)
}

/// Final team score, floored at zero.
pub fn final_score(raw: u32, team_overall: u8, match_variance: f64) -> u32 {
    round_half_up(raw as f64 * strength_modifier(team_overall) * match_variance).max(0.0) as u32
}
