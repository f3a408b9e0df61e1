use super::{MatchId, PlayerId, Position, TeamId};
use serde::{Deserialize, Serialize};

/// Per (match, player) box score plus the two derived scalars.
///
/// Created once per simulation run and superseded, never accumulated, on
/// regeneration. The derived scalars are pure functions of the counting
/// stats; `recompute_derived` reproduces stored values exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerMatchStat {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    /// Position actually played this match (after interchange resolution).
    pub position: Position,
    pub disposals: u32,
    pub goals: u32,
    pub behinds: u32,
    pub tackles: u32,
    pub marks: u32,
    pub intercepts: u32,
    pub hitouts: u32,
    pub fantasy_score: u32,
    pub impact_score: f64,
}

impl PlayerMatchStat {
    /// Fantasy weighting: disposals 2, goals 6, behinds 1, tackles 3,
    /// marks 3, intercepts 4, hitouts 1. Tackles are worth 3 because behinds
    /// are modeled; the weighting is uniform across all positions.
    pub fn fantasy_from_counts(&self) -> u32 {
        self.disposals * 2
            + self.goals * 6
            + self.behinds
            + self.tackles * 3
            + self.marks * 3
            + self.intercepts * 4
            + self.hitouts
    }

    /// Impact metric used to rank players for award votes, with flat bonuses
    /// for exceptional output. Rounded to 2 decimal places.
    pub fn impact_from_counts(&self) -> f64 {
        let mut impact = self.goals as f64 * 8.0
            + self.disposals as f64 * 0.8
            + self.tackles as f64 * 1.5
            + self.marks as f64 * 1.2
            + self.hitouts as f64 * 0.15
            + self.intercepts as f64 * 1.8;
        if self.disposals >= 30 {
            impact += 5.0;
        }
        if self.goals >= 4 {
            impact += 6.0;
        }
        if self.hitouts >= 45 {
            impact += 4.0;
        }
        if self.intercepts >= 6 {
            impact += 3.0;
        }
        (impact * 100.0).round() / 100.0
    }

    /// Refresh both derived scalars from the counting stats.
    pub fn recompute_derived(&mut self) {
        self.fantasy_score = self.fantasy_from_counts();
        self.impact_score = self.impact_from_counts();
    }
}
