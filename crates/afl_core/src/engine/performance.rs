//! Player performance generation.
//!
//! For one filled slot, produces the full box score from the player's
//! effective rating, the per-position tables, and a per-player performance
//! multiplier. Ruck hitouts are resolved separately by `ruck::resolve` and
//! patched in by the simulator.

use super::tables::{self, GoalModel};
use crate::models::{MatchId, Player, PlayerMatchStat, Position, TeamId};
use rand::Rng;

/// Round half up. Counting stats clamp at zero afterwards.
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn to_count(x: f64) -> u32 {
    round_half_up(x).max(0.0) as u32
}

/// Effective rating after the position-fit adjustment: -3 when the assigned
/// position shares a line with the player's primary, -8 across lines.
/// Intentionally not re-clamped to 60..=99.
pub fn effective_rating(player: &Player, assigned: Position) -> i32 {
    let overall = player.overall as i32;
    if assigned == player.position {
        overall
    } else if assigned.line() == player.position.line() {
        overall - 3
    } else {
        overall - 8
    }
}

/// Per-player performance multiplier: day-level form times independent
/// player noise.
pub fn draw_multiplier(rng: &mut impl Rng) -> f64 {
    let form_factor = rng.gen_range(0.5..1.5);
    let player_variance = rng.gen_range(0.7..1.3);
    form_factor * player_variance
}

/// One bucketed category resolved for an effective rating and multiplier.
pub fn category_count(table: &[f64; tables::BUCKETS], effective: i32, multiplier: f64) -> u32 {
    let base = table[tables::rating_bucket(effective)];
    to_count(tables::intra_bucket(base, effective) * multiplier)
}

fn draw_goals(model: &GoalModel, effective: i32, multiplier: f64, rng: &mut impl Rng) -> u32 {
    match *model {
        GoalModel::Scoring { base, variance, ceiling } => {
            let expect = tables::intra_bucket(base[tables::rating_bucket(effective)], effective);
            let spread = rng.gen_range(variance.0..variance.1);
            to_count(expect * multiplier * spread).min(ceiling)
        }
        GoalModel::Rare { chance, two_chance } => {
            if rng.gen::<f64>() >= chance {
                0
            } else if two_chance > 0.0 && rng.gen::<f64>() < two_chance {
                2
            } else {
                1
            }
        }
    }
}

/// Behinds track goals loosely plus independent noise; never negative.
fn draw_behinds(goals: u32, rng: &mut impl Rng) -> u32 {
    to_count(goals as f64 * rng.gen_range(0.2..0.8) + rng.gen_range(0.0..1.8))
}

/// Generate the box score for one player at an assigned position.
/// Interchange slots resolve to the player's primary position before this
/// is called, so no penalty applies to them.
pub fn generate(
    match_id: MatchId,
    team_id: TeamId,
    player: &Player,
    assigned: Position,
    rng: &mut impl Rng,
) -> PlayerMatchStat {
    let effective = effective_rating(player, assigned);
    let multiplier = draw_multiplier(rng);
    let profile = tables::profile(assigned);

    let disposals = category_count(&profile.disposals, effective, multiplier);
    let marks = category_count(&profile.marks, effective, multiplier);
    let tackles = category_count(&profile.tackles, effective, multiplier);
    let intercepts = category_count(&profile.intercepts, effective, multiplier);
    let goals = draw_goals(&profile.goals, effective, multiplier, rng);
    let behinds = draw_behinds(goals, rng);

    tracing::trace!(
        player = %player.name,
        position = %assigned,
        effective,
        multiplier,
        "generated box score"
    );

    let mut stat = PlayerMatchStat {
        match_id,
        player_id: player.id,
        team_id,
        position: assigned,
        disposals,
        goals,
        behinds,
        tackles,
        marks,
        intercepts,
        hitouts: 0,
        fantasy_score: 0,
        impact_score: 0.0,
    };
    stat.recompute_derived();
    stat
}
